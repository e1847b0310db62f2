//! Claw Machine - a browser claw machine mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (prize physics, grab state machine, deferred tasks)
//! - `platform`: Browser/native platform abstraction (clock, DOM view)
//! - `catalog`: Prize definitions supplied by the page
//! - `input`: Discrete player inputs and key mapping
//! - `tuning`: Data-driven game balance

pub mod catalog;
pub mod input;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use catalog::{PrizeCatalog, PrizeDef};
pub use input::Input;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Padding (px) between the prize area element edge and the playable bounds, per axis
    pub const AREA_PADDING: f32 = 40.0;

    /// Claw travel limits, in percent of play area width
    pub const CLAW_MIN: f32 = 10.0;
    pub const CLAW_MAX: f32 = 90.0;
    /// Claw starts centered
    pub const CLAW_START: f32 = 50.0;

    /// Spawned prizes never start above this y (px)
    pub const SPAWN_TOP: f32 = 100.0;
    /// Room kept free below the spawn band
    pub const SPAWN_BOTTOM_MARGIN: f32 = 40.0;

    /// Upward velocity given to a prize when the claw yanks it
    pub const CATCH_LIFT_VELOCITY: f32 = -15.0;
    /// Full width of the random sideways kick on catch (kick is in ±half of this)
    pub const CATCH_KICK_SPREAD: f32 = 5.0;
}
