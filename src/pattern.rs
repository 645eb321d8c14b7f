//! Loading run-length encoded patterns into a running engine.

use crate::{
    LifeEngine, PatternError, Pos2,
    enc::{PositionEncoder, RunLengthEncoded},
};
use std::path::Path;
use tracing::info;

/// Outcome of a successful pattern load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternLoad {
    /// Cells described as alive by the pattern
    pub cells: usize,
    /// Cells that were dead before the load and are now alive
    pub births: usize,
}

/// Births every live cell of an encoded pattern at `origin`
///
/// Cells falling outside the grid wrap around it like any other edit.
pub fn apply_pattern(engine: &mut LifeEngine, text: &str, origin: Pos2) -> PatternLoad {
    let cells = RunLengthEncoded::default().decode(text);
    let grid = *engine.grid();
    let mut births = 0;
    for &cell in &cells {
        if engine.birth(grid.translate(origin, cell)) {
            births += 1;
        }
    }
    PatternLoad {
        cells: cells.len(),
        births,
    }
}

/// Reads the pattern file at `path` and births its cells at `origin`
///
/// When the file can't be read the engine is left untouched and the error is
/// returned for the caller to report; it never ends the simulation.
pub fn load_pattern<P: AsRef<Path>>(
    engine: &mut LifeEngine,
    path: P,
    origin: Pos2,
) -> Result<PatternLoad, PatternError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| PatternError::Io {
        path: path.to_owned(),
        source,
    })?;

    let load = apply_pattern(engine, &text, origin);
    info!(
        path = %path.display(),
        x = origin.x,
        y = origin.y,
        cells = load.cells,
        births = load.births,
        "pattern loaded"
    );
    Ok(load)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "x = 2, y = 2\n2o$2o!";

    #[test]
    fn applies_at_origin() {
        let mut engine = LifeEngine::new(10, 10).unwrap();
        let load = apply_pattern(&mut engine, BLOCK, Pos2::new(4, 6));

        assert_eq!(load, PatternLoad { cells: 4, births: 4 });
        assert_eq!(
            engine.take(),
            vec![
                Pos2::new(4, 6),
                Pos2::new(5, 6),
                Pos2::new(4, 7),
                Pos2::new(5, 7)
            ]
        );
    }

    #[test]
    fn wraps_past_the_edge() {
        let mut engine = LifeEngine::new(5, 5).unwrap();
        apply_pattern(&mut engine, BLOCK, Pos2::new(4, 4));

        for pos in [(4, 4), (0, 4), (4, 0), (0, 0)] {
            assert!(engine.is_alive(pos.into()));
        }
    }

    #[test]
    fn far_rows_wrap_instead_of_overflowing() {
        let mut engine = LifeEngine::new(10, 10).unwrap();
        let load = apply_pattern(&mut engine, "x = 1, y = 1\n2147483647$o!", Pos2::new(0, 5));

        // 5 + i32::MAX lands on row 2 of a 10 row torus
        assert_eq!(load.births, 1);
        assert_eq!(engine.take(), vec![Pos2::new(0, 2)]);
    }

    #[test]
    fn overflowing_runs_keep_earlier_cells() {
        let mut engine = LifeEngine::new(10, 10).unwrap();
        let load = apply_pattern(
            &mut engine,
            "x = 1, y = 1\n2o2000000000b2000000000bo!",
            Pos2::new(i32::MAX, i32::MIN),
        );

        assert_eq!(load.cells, 2);
        assert_eq!(engine.take(), vec![Pos2::new(7, 2), Pos2::new(8, 2)]);
    }

    #[test]
    fn counts_only_new_births() {
        let mut engine = LifeEngine::new(10, 10).unwrap();
        engine.birth(Pos2::new(1, 1));

        let load = apply_pattern(&mut engine, BLOCK, Pos2::new(0, 0));

        assert_eq!(load.births, 3);
        assert_eq!(engine.alive_count(), 4);
    }

    #[test]
    fn missing_file_leaves_engine_untouched() {
        let mut engine = LifeEngine::new(10, 10).unwrap();
        engine.birth(Pos2::new(2, 2));

        let result = load_pattern(&mut engine, "does/not/exist.rle", Pos2::zero());

        assert!(matches!(result, Err(PatternError::Io { .. })));
        assert_eq!(engine.take(), vec![Pos2::new(2, 2)]);
    }
}
