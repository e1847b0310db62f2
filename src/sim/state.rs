//! Machine state and core simulation types
//!
//! Everything the simulation reads or writes between frames lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grab::GrabController;
use super::random::RandomSource;
use super::schedule::Scheduler;
use crate::Tuning;
use crate::catalog::{PrizeCatalog, PrizeDef};
use crate::consts::*;

/// Playable bounds inside the prize area, in pixels
///
/// Re-measured by the host every frame so the sim follows window resizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bounds for a prize area element of the given client size
    pub fn from_element_size(width: f32, height: f32) -> Self {
        Self {
            width: (width - AREA_PADDING).max(0.0),
            height: (height - AREA_PADDING).max(0.0),
        }
    }

    /// Convert a claw position (percent of width) to a pixel x
    #[inline]
    pub fn percent_to_x(&self, percent: f32) -> f32 {
        percent / 100.0 * self.width
    }
}

/// A prize sitting in the machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizeObject {
    pub def: PrizeDef,
    /// Top-left corner (px)
    pub pos: Vec2,
    /// Velocity (px/frame)
    pub vel: Vec2,
    /// Bounding box (px), fixed at spawn
    pub size: Vec2,
    /// Set once by a successful grab; never cleared
    pub caught: bool,
    /// Caught and tucked away into the caught list
    pub hidden: bool,
}

impl PrizeObject {
    pub fn new(def: PrizeDef, pos: Vec2, size: Vec2) -> Self {
        Self {
            def,
            pos,
            vel: Vec2::ZERO,
            size,
            caught: false,
            hidden: false,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Whether physics and the grab hit-test still consider this prize
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.caught
    }

    /// Mark caught and give it the upward yank
    pub(crate) fn mark_caught(&mut self, kick_x: f32) {
        self.caught = true;
        self.vel = Vec2::new(kick_x, CATCH_LIFT_VELOCITY);
    }
}

/// Prizes won this session, in the order they were caught
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaughtCollection {
    entries: Vec<PrizeDef>,
}

impl CaughtCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, def: PrizeDef) {
        self.entries.push(def);
    }

    pub fn entries(&self) -> &[PrizeDef] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrizeDef> {
        self.entries.iter()
    }
}

/// One-shot notifications for the view layer
///
/// Purely cosmetic: nothing here is ever fed back into the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Claw moved (flash the claw)
    ClawMoved { position: f32 },
    /// Claw started its descent (grab pulse, disable the grab button)
    GrabStarted { position: f32 },
    /// Hit-test caught a prize (success text, particle burst)
    Caught { prize: usize },
    /// Hit-test came up empty
    Missed,
    /// A caught prize should disappear from the machine
    PrizeHidden { prize: usize },
    /// The caught list should be re-rendered
    CaughtListChanged,
    /// Grab sequence finished; input is accepted again
    InputReenabled,
}

/// Complete machine state
#[derive(Debug, Clone)]
pub struct ClawMachine<R: RandomSource> {
    pub tuning: Tuning,
    /// Bounds as of the most recent frame
    pub area: PlayArea,
    /// Prizes in catalog (insertion) order
    pub prizes: Vec<PrizeObject>,
    pub grab: GrabController,
    pub caught: CaughtCollection,
    pub scheduler: Scheduler,
    /// Frames simulated so far
    pub frame: u64,
    /// Timestamp of the most recent frame (ms)
    pub now_ms: f64,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: R,
}

impl<R: RandomSource> ClawMachine<R> {
    /// Build a machine and drop one prize per catalog entry at a random spot
    pub fn new(catalog: &PrizeCatalog, tuning: Tuning, area: PlayArea, mut rng: R) -> Self {
        let size = Vec2::new(tuning.prize_width, tuning.prize_height);
        let spawn_band = area.height - SPAWN_TOP - SPAWN_BOTTOM_MARGIN;

        let prizes = catalog
            .iter()
            .map(|def| {
                let x = rng.next_unit() * (area.width - size.x);
                let y = rng.next_unit() * spawn_band + SPAWN_TOP;
                PrizeObject::new(def.clone(), Vec2::new(x, y), size)
            })
            .collect::<Vec<_>>();

        log::info!("Machine stocked with {} prizes", prizes.len());

        Self::with_prizes(prizes, tuning, area, rng)
    }

    /// Build a machine around pre-placed prizes
    pub fn with_prizes(prizes: Vec<PrizeObject>, tuning: Tuning, area: PlayArea, rng: R) -> Self {
        Self {
            tuning,
            area,
            prizes,
            grab: GrabController::new(),
            caught: CaughtCollection::new(),
            scheduler: Scheduler::new(),
            frame: 0,
            now_ms: 0.0,
            events: Vec::new(),
            rng,
        }
    }

    /// Take all view events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Prizes still loose in the machine
    pub fn active_prizes(&self) -> impl Iterator<Item = (usize, &PrizeObject)> {
        self.prizes.iter().enumerate().filter(|(_, p)| p.is_active())
    }
}
