use super::{coord_set::CoordinateSet, torus::ToroidalGrid};
use crate::Pos2;

/// Counts how many of the 8 toroidal neighbors of `pos` are in `live`
///
/// The result is always within `0..=8`.
#[inline]
pub fn count_live_neighbors(grid: &ToroidalGrid, pos: Pos2, live: &CoordinateSet) -> u8 {
    grid.neighbors(pos).filter(|&n| live.contains(n)).count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[(i32, i32)]) -> CoordinateSet {
        cells.iter().copied().map(Pos2::from).collect()
    }

    #[test]
    fn ignores_self() {
        let grid = ToroidalGrid::new(10, 10).unwrap();
        let live = set(&[(5, 5)]);

        assert_eq!(count_live_neighbors(&grid, Pos2::new(5, 5), &live), 0);
        assert_eq!(count_live_neighbors(&grid, Pos2::new(4, 4), &live), 1);
    }

    #[test]
    fn counts_full_ring() {
        let grid = ToroidalGrid::new(10, 10).unwrap();
        let live = set(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (1, 1),
            (2, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ]);

        assert_eq!(count_live_neighbors(&grid, Pos2::new(1, 1), &live), 8);
    }

    #[test]
    fn counts_across_the_seam() {
        let grid = ToroidalGrid::new(6, 6).unwrap();
        let live = set(&[(5, 5), (5, 0), (0, 5)]);

        assert_eq!(count_live_neighbors(&grid, Pos2::new(0, 0), &live), 3);
    }
}
