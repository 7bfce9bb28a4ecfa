// File: crates/chart-core/src/scheduler.rs
// Summary: Cancelable deferred tasks on an externally driven clock, and the resize debouncer built on them.
// Notes:
// - Nothing here sleeps or spawns. The host event loop passes `now` in and
//   runs whatever `poll` hands back, so tests drive time explicitly.

use std::time::{Duration, Instant};

/// Default quiet period before a resize triggers a re-layout.
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

struct Pending<T> {
    handle: TaskHandle,
    due: Instant,
    task: T,
}

/// Deferred tasks keyed by handle.
pub struct TimerQueue<T> {
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self { next_id: 0, pending: Vec::new() }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` once `delay` has elapsed after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending { handle, due: now + delay, task });
        handle
    }

    /// Drop a task before it fires. Returns false if it already fired or was canceled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    /// Remove and return every task due at `now`, earliest first.
    pub fn poll(&mut self, now: Instant) -> Vec<T> {
        let (mut due, rest): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;
        due.sort_by_key(|p| (p.due, p.handle.0));
        due.into_iter().map(|p| p.task).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    pub fn len(&self) -> usize { self.pending.len() }
    pub fn is_empty(&self) -> bool { self.pending.is_empty() }
}

/// Collapses a burst of triggers into one firing, `delay` after the last trigger.
pub struct Debouncer {
    delay: Duration,
    queue: TimerQueue<()>,
    armed: Option<TaskHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, queue: TimerQueue::new(), armed: None }
    }

    pub fn delay(&self) -> Duration { self.delay }

    /// Cancel any pending firing and re-arm from `now`.
    pub fn trigger(&mut self, now: Instant) {
        if let Some(handle) = self.armed.take() {
            self.queue.cancel(handle);
        }
        self.armed = Some(self.queue.schedule(now, self.delay, ()));
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "debounce re-armed");
    }

    /// True exactly once per burst, when the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let fired = !self.queue.poll(now).is_empty();
        if fired {
            self.armed = None;
            tracing::debug!("debounce fired");
        }
        fired
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.armed.take() {
            self.queue.cancel(handle);
        }
    }

    pub fn is_pending(&self) -> bool { self.armed.is_some() }
    pub fn deadline(&self) -> Option<Instant> { self.queue.next_deadline() }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE)
    }
}
