//! Widget timers
//!
//! One-shot and debounced timers on a logical clock. Time is the `Duration`
//! elapsed since the owning event loop started; the loop passes it in on
//! every call, so nothing here sleeps or spawns.

use std::time::Duration;

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// First layout pass after the widget is attached to its container
    InitialLayout,
    /// Debounced layout pass after container size changes
    Relayout,
    /// Layout pass following a data update
    PostUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    id: TimerId,
    kind: TimerKind,
    due: Duration,
}

/// Pending timers of a single widget
#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer that fires once `delay` after `now`
    pub fn schedule_once(&mut self, kind: TimerKind, now: Duration, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            kind,
            due: now + delay,
        });
        id
    }

    /// Replace any pending timer of the same kind, restarting the delay
    pub fn debounce(&mut self, kind: TimerKind, now: Duration, delay: Duration) -> TimerId {
        self.pending.retain(|timer| timer.kind != kind);
        self.schedule_once(kind, now, delay)
    }

    /// Cancel one timer. Returns whether it was still pending
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        self.pending.len() != before
    }

    /// Drop every pending timer
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Remove and return the timers due at `now`, earliest first
    pub fn take_due(&mut self, now: Duration) -> Vec<TimerKind> {
        let mut due: Vec<PendingTimer> = Vec::new();
        self.pending.retain(|timer| {
            if timer.due <= now {
                due.push(*timer);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|timer| (timer.due, timer.id));
        due.into_iter().map(|timer| timer.kind).collect()
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|timer| timer.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
