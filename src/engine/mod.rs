mod coord_set;
mod neighbors;
mod oracle;
mod rule;
mod torus;
mod window;

pub use self::coord_set::{CoordinateSet, Iter};
pub use self::neighbors::count_live_neighbors;
pub use self::oracle::full_scan_step;
pub use self::rule::{Fate, decide_fate};
pub use self::torus::{MOORE_OFFSETS, SELF_OFFSET, ToroidalGrid};
pub use self::window::GameEngineWindow;
use crate::{EngineError, Pos2};
use tracing::debug;

/// What a single call to [`LifeEngine::step`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Number of candidate cells whose fate was decided
    pub evaluated: usize,
    pub births: usize,
    pub deaths: usize,
}

/// Game of Life on a fixed-size torus
///
/// Only cells in the candidate set are evaluated by [`step`]. The candidate
/// set always covers every cell whose neighbor count may have changed since it
/// was last evaluated: the neighborhoods of the cells that changed in the
/// previous generation, plus the neighborhoods of cells edited through
/// [`birth`] and [`kill`] since then.
///
/// [`step`]: LifeEngine::step
/// [`birth`]: LifeEngine::birth
/// [`kill`]: LifeEngine::kill
#[derive(Debug, Clone)]
pub struct LifeEngine {
    grid: ToroidalGrid,
    alive: CoordinateSet,
    candidates: CoordinateSet,
    /// The first step after construction or reset evaluates the whole
    /// neighborhood of every live cell
    first_step_pending: bool,
    generation: u64,
}

impl LifeEngine {
    pub fn new(width: i32, height: i32) -> Result<Self, EngineError> {
        Ok(Self {
            grid: ToroidalGrid::new(width, height)?,
            alive: CoordinateSet::new(),
            candidates: CoordinateSet::new(),
            first_step_pending: true,
            generation: 0,
        })
    }

    /// Creates an engine with the given cells alive, wrapping them onto the grid
    pub fn from_alive<I>(width: i32, height: i32, alive: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = Pos2>,
    {
        let mut engine = Self::new(width, height)?;
        for pos in alive {
            engine.birth(pos);
        }
        Ok(engine)
    }

    /// Makes the cell at `pos` alive, returning whether it was dead before
    pub fn birth(&mut self, pos: Pos2) -> bool {
        let pos = self.grid.wrap(pos);
        let changed = self.alive.insert(pos);
        if changed {
            self.mark_neighborhood(pos);
        }
        changed
    }

    /// Makes the cell at `pos` dead, returning whether it was alive before
    pub fn kill(&mut self, pos: Pos2) -> bool {
        let pos = self.grid.wrap(pos);
        let changed = self.alive.remove(pos);
        if changed {
            self.mark_neighborhood(pos);
        }
        changed
    }

    #[inline]
    pub fn is_alive(&self, pos: Pos2) -> bool {
        self.alive.contains(self.grid.wrap(pos))
    }

    /// Advances the simulation by exactly one generation
    pub fn step(&mut self) -> StepSummary {
        if self.first_step_pending {
            for pos in self.alive.iter() {
                self.candidates.extend(self.grid.neighborhood(pos));
            }
            self.first_step_pending = false;
        }

        // every fate is decided against the current generation before any
        // change is applied
        let mut births = Vec::new();
        let mut deaths = Vec::new();
        for pos in self.candidates.iter() {
            let alive = self.alive.contains(pos);
            let neighbors = count_live_neighbors(&self.grid, pos, &self.alive);
            match decide_fate(alive, neighbors) {
                Fate::Death => deaths.push(pos),
                Fate::Birth => births.push(pos),
                Fate::Stay => {}
            }
        }
        let evaluated = self.candidates.len();

        // the next candidates are exactly the neighborhoods of what changed
        self.candidates.clear();
        for &pos in &deaths {
            self.kill(pos);
        }
        for &pos in &births {
            self.birth(pos);
        }
        self.generation += 1;

        let summary = StepSummary {
            evaluated,
            births: births.len(),
            deaths: deaths.len(),
        };
        debug!(
            generation = self.generation,
            evaluated = summary.evaluated,
            births = summary.births,
            deaths = summary.deaths,
            candidates = self.candidates.len(),
            "stepped"
        );
        summary
    }

    /// Kills every cell and rearms the first-step evaluation; dimensions are kept
    pub fn reset(&mut self) {
        // drop the old tables so their storage is released, not just emptied
        self.alive = CoordinateSet::new();
        self.candidates = CoordinateSet::new();
        self.first_step_pending = true;
        self.generation = 0;
        debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            "engine reset"
        );
    }

    pub fn window(&self, top_left: Pos2, bottom_right: Pos2) -> GameEngineWindow<'_> {
        GameEngineWindow::new(self, top_left, bottom_right)
    }

    /// The live cells of the current generation, in no particular order
    ///
    /// The sequence is finite and can be restarted by calling this again.
    #[inline]
    pub fn live_cells(&self) -> Iter<'_> {
        self.alive.iter()
    }

    #[inline]
    pub fn alive(&self) -> &CoordinateSet {
        &self.alive
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    /// Number of cells currently marked for evaluation by the next [`step`](LifeEngine::step)
    #[inline]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn grid(&self) -> &ToroidalGrid {
        &self.grid
    }

    /// Consumes the engine, returning the live cells in row-major order
    pub fn take(self) -> Vec<Pos2> {
        self.alive.to_sorted_vec()
    }

    fn mark_neighborhood(&mut self, pos: Pos2) {
        self.candidates.extend(self.grid.neighborhood(pos));
    }
}
