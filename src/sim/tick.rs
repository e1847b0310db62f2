//! Per-frame simulation tick and input handling
//!
//! A frame runs any deferred tasks that have come due, in due order, and then
//! one physics step. Running tasks first means the grab hit-test always sees
//! the positions written by the last completed physics step.

use super::grab::GrabOutcome;
use super::physics;
use super::random::RandomSource;
use super::schedule::Task;
use super::state::{ClawMachine, GameEvent, PlayArea};
use crate::Input;

/// Apply one player input at `now_ms`
///
/// Returns false when the input was dropped because a grab is running.
pub fn apply_input<R: RandomSource>(machine: &mut ClawMachine<R>, input: Input, now_ms: f64) -> bool {
    match input {
        Input::MoveLeft => {
            let accepted = machine.grab.move_left(&machine.tuning);
            if accepted {
                emit_claw_moved(machine);
            }
            accepted
        }
        Input::MoveRight => {
            let accepted = machine.grab.move_right(&machine.tuning);
            if accepted {
                emit_claw_moved(machine);
            }
            accepted
        }
        Input::Grab => start_grab(machine, now_ms),
    }
}

/// Advance the machine to the frame at `now_ms`, with bounds measured for this frame
pub fn tick<R: RandomSource>(machine: &mut ClawMachine<R>, area: PlayArea, now_ms: f64) {
    machine.area = area;
    machine.now_ms = now_ms;

    while let Some((due_ms, task)) = machine.scheduler.pop_due(now_ms) {
        run_task(machine, task, due_ms);
    }

    physics::step(&mut machine.prizes, machine.area, &machine.tuning);
    machine.frame += 1;
}

fn emit_claw_moved<R: RandomSource>(machine: &mut ClawMachine<R>) {
    let position = machine.grab.claw().position;
    machine.events.push(GameEvent::ClawMoved { position });
}

fn start_grab<R: RandomSource>(machine: &mut ClawMachine<R>, now_ms: f64) -> bool {
    if !machine.grab.begin() {
        return false;
    }

    let position = machine.grab.claw().position;
    log::debug!("Grab started at {:.0}%", position);
    machine
        .scheduler
        .schedule(now_ms + machine.tuning.descend_ms, Task::ResolveGrab);
    machine.events.push(GameEvent::GrabStarted { position });
    true
}

fn run_task<R: RandomSource>(machine: &mut ClawMachine<R>, task: Task, due_ms: f64) {
    match task {
        Task::ResolveGrab => {
            let outcome = machine.grab.resolve(
                &mut machine.prizes,
                &mut machine.caught,
                machine.area,
                &machine.tuning,
                &mut machine.rng,
            );

            match outcome {
                GrabOutcome::Caught { prize } => {
                    log::info!(
                        "Caught {} ({} in collection)",
                        machine.prizes[prize].def.label,
                        machine.caught.len()
                    );
                    machine
                        .scheduler
                        .schedule(due_ms + machine.tuning.reveal_ms, Task::RevealCatch { prize });
                    machine.events.push(GameEvent::Caught { prize });
                }
                GrabOutcome::Missed { candidate } => {
                    log::info!("Missed (prize in zone: {})", candidate.is_some());
                    machine.events.push(GameEvent::Missed);
                }
            }

            machine
                .scheduler
                .schedule(due_ms + machine.tuning.reset_ms, Task::ReenableInput);
        }
        Task::ReenableInput => {
            machine.grab.finish();
            machine.events.push(GameEvent::InputReenabled);
        }
        Task::RevealCatch { prize } => {
            if let Some(p) = machine.prizes.get_mut(prize) {
                p.hidden = true;
            }
            machine.events.push(GameEvent::PrizeHidden { prize });
            machine.events.push(GameEvent::CaughtListChanged);
        }
    }
}
