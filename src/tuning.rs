//! Game balance and timing knobs
//!
//! Defaults match the shipped machine. A page may override any subset by
//! embedding `<script id="claw-tuning" type="application/json">` before the
//! wasm module boots; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

/// Tunable physics and grab parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    /// Downward acceleration, px/frame²
    pub gravity: f32,
    /// Horizontal velocity kept after touching the floor
    pub floor_friction: f32,
    /// Centers closer than this get pushed apart (px)
    pub min_distance: f32,
    /// Push applied to each object of an overlapping pair, per frame (px)
    pub push_step: f32,
    /// Prize bounding box width (px)
    pub prize_width: f32,
    /// Prize bounding box height (px)
    pub prize_height: f32,

    // === Claw ===
    /// Claw movement per left/right input, in percent of area width
    pub claw_step: f32,
    /// Grab zone width (px), centered on the claw
    pub grab_width: f32,
    /// Top of the grab zone (px from area top)
    pub grab_top: f32,
    /// Grab zone height (px)
    pub grab_height: f32,
    /// Chance that a prize inside the grab zone is actually caught
    pub catch_probability: f32,

    // === Timing (ms) ===
    /// Claw descent before the hit-test
    pub descend_ms: f64,
    /// Cool-down after the hit-test before input is accepted again
    pub reset_ms: f64,
    /// Delay between a catch and the prize vanishing into the caught list
    pub reveal_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.2,
            floor_friction: 0.9,
            min_distance: 60.0,
            push_step: 2.0,
            prize_width: 80.0,
            prize_height: 70.0,

            claw_step: 8.0,
            grab_width: 60.0,
            grab_top: 150.0,
            grab_height: 80.0,
            catch_probability: 0.75,

            descend_ms: 1000.0,
            reset_ms: 2000.0,
            reveal_ms: 1500.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Full grab sequence length from trigger to input re-enable
    pub fn grab_cycle_ms(&self) -> f64 {
        self.descend_ms + self.reset_ms
    }

    /// DOM id of the inline JSON override
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "claw-tuning";

    /// Load tuning from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let Some(json) = crate::platform::inline_json(Self::ELEMENT_ID) else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning override");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring malformed tuning override: {}", e);
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
