use crate::{EngineError, Pos2};

/// The Moore neighborhood, excluding the cell itself
pub const MOORE_OFFSETS: [Pos2; 8] = [
    Pos2::new(0, -1),
    Pos2::new(-1, -1),
    Pos2::new(1, -1),
    Pos2::new(-1, 0),
    Pos2::new(1, 0),
    Pos2::new(0, 1),
    Pos2::new(-1, 1),
    Pos2::new(1, 1),
];

/// Offset of a cell to itself
///
/// Only used when marking candidates, never when counting neighbors.
pub const SELF_OFFSET: Pos2 = Pos2::zero();

/// Wraparound arithmetic for a `width` x `height` torus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToroidalGrid {
    width: i32,
    height: i32,
}

impl ToroidalGrid {
    pub fn new(width: i32, height: i32) -> Result<Self, EngineError> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Maps any coordinate onto its representative in `[0, width) x [0, height)`
    ///
    /// Uses the euclidean remainder, so `-1` wraps to `width - 1` rather than
    /// staying negative.
    #[inline]
    pub fn wrap(&self, pos: Pos2) -> Pos2 {
        Pos2 {
            x: pos.x.rem_euclid(self.width),
            y: pos.y.rem_euclid(self.height),
        }
    }

    /// Wraps `pos + offset` without the sum ever overflowing
    #[inline]
    pub fn translate(&self, pos: Pos2, offset: Pos2) -> Pos2 {
        let x = (i64::from(pos.x) + i64::from(offset.x)).rem_euclid(i64::from(self.width));
        let y = (i64::from(pos.y) + i64::from(offset.y)).rem_euclid(i64::from(self.height));
        // both remainders are below an i32 dimension
        Pos2 {
            x: x as i32,
            y: y as i32,
        }
    }

    /// Whether `pos` is already a canonical in-bounds coordinate
    #[inline]
    pub fn contains(&self, pos: Pos2) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// The 8 wrapped neighbors of `pos`
    ///
    /// On grids narrower than 3 cells some of these coincide; every offset is
    /// still yielded.
    #[inline]
    pub fn neighbors(&self, pos: Pos2) -> impl Iterator<Item = Pos2> + '_ {
        MOORE_OFFSETS
            .iter()
            .map(move |&offset| self.translate(pos, offset))
    }

    /// `pos` itself followed by its 8 wrapped neighbors
    #[inline]
    pub fn neighborhood(&self, pos: Pos2) -> impl Iterator<Item = Pos2> + '_ {
        std::iter::once(self.translate(pos, SELF_OFFSET)).chain(self.neighbors(pos))
    }

    /// Every canonical coordinate in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Pos2> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Pos2 { x, y }))
    }
}
