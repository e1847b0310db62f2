//! Claw and grab state machine
//!
//! A grab runs `Idle -> Descending -> Resolving -> Resetting -> Idle`. The
//! timed legs are driven by deferred tasks (see `schedule`); this module only
//! owns the claw, the phase, and the single hit-test done while resolving.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::state::{CaughtCollection, PlayArea, PrizeObject};
use crate::Tuning;
use crate::consts::*;

/// Where the claw is in a grab sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GrabPhase {
    /// Waiting for input
    #[default]
    Idle,
    /// Claw on its way down
    Descending,
    /// Hit-test in progress (never observed between frames)
    Resolving,
    /// Claw on its way back up; input still locked
    Resetting,
}

/// Claw carriage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClawState {
    /// Horizontal position, percent of play area width, in `[CLAW_MIN, CLAW_MAX]`
    pub position: f32,
    /// True for the whole grab sequence
    pub grabbing: bool,
}

impl Default for ClawState {
    fn default() -> Self {
        Self {
            position: CLAW_START,
            grabbing: false,
        }
    }
}

/// Result of one hit-test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrabOutcome {
    /// Prize at this index was caught
    Caught { prize: usize },
    /// Nothing caught. `candidate` is the prize that was in the zone but slipped, if any
    Missed { candidate: Option<usize> },
}

/// Axis-aligned rectangle the claw can close on (px, inclusive edges)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrabZone {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl GrabZone {
    /// Zone under a claw at `position` percent across `area`
    pub fn for_claw(position: f32, area: PlayArea, tuning: &Tuning) -> Self {
        let center_x = area.percent_to_x(position);
        let half = tuning.grab_width / 2.0;
        Self {
            left: center_x - half,
            right: center_x + half,
            top: tuning.grab_top,
            bottom: tuning.grab_top + tuning.grab_height,
        }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

/// First active prize (in insertion order) whose center lies in `zone`
pub fn find_candidate(prizes: &[PrizeObject], zone: &GrabZone) -> Option<usize> {
    prizes
        .iter()
        .position(|p| p.is_active() && zone.contains(p.center()))
}

/// Owns the claw and the grab phase
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrabController {
    claw: ClawState,
    phase: GrabPhase,
}

impl GrabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claw(&self) -> ClawState {
        self.claw
    }

    pub fn phase(&self) -> GrabPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == GrabPhase::Idle
    }

    /// Shift the claw by `delta` percent. Ignored mid-grab; returns whether anything was accepted
    pub fn shift(&mut self, delta: f32) -> bool {
        if self.claw.grabbing {
            return false;
        }
        self.claw.position = (self.claw.position + delta).clamp(CLAW_MIN, CLAW_MAX);
        true
    }

    pub fn move_left(&mut self, tuning: &Tuning) -> bool {
        self.shift(-tuning.claw_step)
    }

    pub fn move_right(&mut self, tuning: &Tuning) -> bool {
        self.shift(tuning.claw_step)
    }

    /// Start the descent. Returns false (and changes nothing) if a grab is already running
    pub fn begin(&mut self) -> bool {
        if self.claw.grabbing {
            return false;
        }
        self.claw.grabbing = true;
        self.set_phase(GrabPhase::Descending);
        true
    }

    /// Hit-test at the bottom of the descent, then start resetting
    ///
    /// Exactly one Bernoulli draw is taken when a candidate exists; none
    /// otherwise. A catch flips the prize to caught, gives it the upward yank
    /// and appends its definition to `caught`.
    pub fn resolve(
        &mut self,
        prizes: &mut [PrizeObject],
        caught: &mut CaughtCollection,
        area: PlayArea,
        tuning: &Tuning,
        rng: &mut impl RandomSource,
    ) -> GrabOutcome {
        debug_assert_eq!(self.phase, GrabPhase::Descending);
        self.set_phase(GrabPhase::Resolving);

        let zone = GrabZone::for_claw(self.claw.position, area, tuning);
        let outcome = match find_candidate(prizes, &zone) {
            Some(idx) if rng.next_unit() < tuning.catch_probability => {
                let kick_x = (rng.next_unit() - 0.5) * CATCH_KICK_SPREAD;
                let prize = &mut prizes[idx];
                prize.mark_caught(kick_x);
                caught.push(prize.def.clone());
                GrabOutcome::Caught { prize: idx }
            }
            candidate => GrabOutcome::Missed { candidate },
        };

        self.set_phase(GrabPhase::Resetting);
        outcome
    }

    /// Cool-down finished: unlock input
    pub fn finish(&mut self) {
        debug_assert_eq!(self.phase, GrabPhase::Resetting);
        self.claw.grabbing = false;
        self.set_phase(GrabPhase::Idle);
    }

    fn set_phase(&mut self, next: GrabPhase) {
        log::debug!("Grab phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}
