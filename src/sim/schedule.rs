//! One-shot deferred tasks
//!
//! The browser version of these delays would be `setTimeout`. Here they are
//! plain data checked at the top of every frame, which keeps the simulation
//! deterministic: a task fires on the first frame whose timestamp reaches its
//! due time, and nothing is ever cancelled.

use serde::{Deserialize, Serialize};

/// Work the machine defers to a later frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// Claw reached the bottom: run the hit-test
    ResolveGrab,
    /// Cool-down over: accept input again
    ReenableInput,
    /// Hide a caught prize and refresh the caught list
    RevealCatch { prize: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Scheduled {
    due_ms: f64,
    seq: u64,
    task: Task,
}

/// Pending tasks ordered by due time, then by scheduling order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run at `due_ms`
    pub fn schedule(&mut self, due_ms: f64, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { due_ms, seq, task });
    }

    /// Remove and return the earliest task due at or before `now_ms`
    ///
    /// Returns the task together with its scheduled due time so follow-up
    /// delays can be measured from when the task was meant to run.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(f64, Task)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .partial_cmp(&b.due_ms)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.seq.cmp(&b.seq))
            })
            .map(|(i, _)| i)?;

        let Scheduled { due_ms, task, .. } = self.pending.remove(idx);
        Some((due_ms, task))
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Earliest pending due time, if any
    pub fn next_due(&self) -> Option<f64> {
        self.pending
            .iter()
            .map(|s| s.due_ms)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_due_early() {
        let mut sched = Scheduler::new();
        sched.schedule(1000.0, Task::ResolveGrab);
        assert_eq!(sched.pop_due(999.9), None);
        assert_eq!(sched.pop_due(1000.0), Some((1000.0, Task::ResolveGrab)));
        assert!(sched.is_empty());
    }

    #[test]
    fn test_due_order_then_fifo() {
        let mut sched = Scheduler::new();
        sched.schedule(300.0, Task::ReenableInput);
        sched.schedule(100.0, Task::RevealCatch { prize: 1 });
        sched.schedule(100.0, Task::RevealCatch { prize: 2 });
        assert_eq!(sched.next_due(), Some(100.0));

        let order: Vec<Task> = std::iter::from_fn(|| sched.pop_due(1_000.0).map(|(_, t)| t)).collect();
        assert_eq!(
            order,
            vec![
                Task::RevealCatch { prize: 1 },
                Task::RevealCatch { prize: 2 },
                Task::ReenableInput,
            ]
        );
    }

    #[test]
    fn test_pop_reports_scheduled_time_not_now() {
        let mut sched = Scheduler::new();
        sched.schedule(1000.0, Task::ResolveGrab);
        assert_eq!(sched.pop_due(1016.7), Some((1000.0, Task::ResolveGrab)));
    }
}
