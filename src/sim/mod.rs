//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One implicit step per frame, timestamps supplied by the caller
//! - Injected randomness only
//! - Stable iteration order (catalog insertion order)
//! - No rendering or platform dependencies

pub mod grab;
pub mod physics;
pub mod random;
pub mod schedule;
pub mod state;
pub mod tick;

pub use grab::{ClawState, GrabController, GrabOutcome, GrabPhase, GrabZone, find_candidate};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use schedule::{Scheduler, Task};
pub use state::{CaughtCollection, ClawMachine, GameEvent, PlayArea, PrizeObject};
pub use tick::{apply_input, tick};
