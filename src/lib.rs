//! Conway's Game of Life on a toroidal grid.
//!
//! The [`LifeEngine`] keeps the live cells in a sparse set and re-evaluates
//! only the cells next to something that changed in the previous generation.

pub mod enc;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod pos;

pub use enc::{PositionEncoder, RunLengthEncoded};
pub use engine::{CoordinateSet, GameEngineWindow, LifeEngine, StepSummary, ToroidalGrid};
pub use error::{EngineError, PatternError};
pub use pattern::{PatternLoad, apply_pattern, load_pattern};
pub use pos::Pos2;
