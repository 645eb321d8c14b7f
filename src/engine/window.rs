use super::LifeEngine;
use crate::Pos2;

/// A read-only rectangular view `[top_left, bottom_right)` over the live cells
pub struct GameEngineWindow<'a> {
    tl: Pos2,
    br: Pos2,
    engine: &'a LifeEngine,
}
impl<'a> GameEngineWindow<'a> {
    pub fn new(engine: &'a LifeEngine, top_left: Pos2, bottom_right: Pos2) -> Self {
        Self {
            tl: top_left,
            br: bottom_right,
            engine,
        }
    }

    /// Live cells inside the window, in no particular order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Pos2> + '_ {
        let rx = self.tl.x..self.br.x;
        let ry = self.tl.y..self.br.y;
        self.engine
            .live_cells()
            .filter(move |pos| rx.contains(&pos.x) && ry.contains(&pos.y))
    }
}

impl std::fmt::Display for GameEngineWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cells: Vec<Pos2> = self.iter().collect();
        cells.sort_unstable();

        let mut last = self.tl - Pos2 { x: 1, y: 0 };
        for alive in cells {
            // determine the number of lines to print
            let lines = alive.y - last.y;
            // determine the number of padding spaces to print
            let padding = match lines {
                0 => alive.x - last.x - 1,
                _ => alive.x - self.tl.x,
            };
            write!(
                f,
                "{0:\n<1$}{0: <2$}█",
                "", lines as usize, padding as usize
            )?;
            last = alive;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_to_rectangle() {
        let engine = LifeEngine::from_alive(
            10,
            10,
            [Pos2::new(1, 1), Pos2::new(4, 4), Pos2::new(8, 2)],
        )
        .unwrap();

        let window = engine.window(Pos2::zero(), Pos2::new(5, 5));
        let mut inside: Vec<_> = window.iter().collect();
        inside.sort();

        assert_eq!(inside, vec![Pos2::new(1, 1), Pos2::new(4, 4)]);
    }

    #[test]
    fn draws_rows() {
        let engine = LifeEngine::from_alive(
            5,
            5,
            [Pos2::new(1, 0), Pos2::new(1, 1), Pos2::new(1, 2)],
        )
        .unwrap();

        let text = engine.window(Pos2::zero(), Pos2::new(5, 5)).to_string();

        assert_eq!(text, " █\n █\n █");
    }
}
