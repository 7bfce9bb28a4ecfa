// File: crates/chart-core/tests/debounce.rs
// Purpose: Cancelable timers and resize debouncing on an explicit clock.

use std::time::{Duration, Instant};

use usage_chart_core::{Debouncer, TimerQueue};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn timer_fires_once_when_due() {
    let t0 = Instant::now();
    let mut q = TimerQueue::new();
    let h = q.schedule(t0, ms(100), "redraw");
    assert!(q.is_scheduled(h));
    assert!(q.poll(t0 + ms(99)).is_empty());
    assert_eq!(q.poll(t0 + ms(100)), vec!["redraw"]);
    assert!(q.poll(t0 + ms(500)).is_empty());
    assert!(!q.cancel(h), "already fired");
}

#[test]
fn canceled_timer_never_fires() {
    let t0 = Instant::now();
    let mut q = TimerQueue::new();
    let a = q.schedule(t0, ms(10), 1);
    let _b = q.schedule(t0, ms(20), 2);
    assert!(q.cancel(a));
    assert_eq!(q.len(), 1);
    assert_eq!(q.next_deadline(), Some(t0 + ms(20)));
    assert_eq!(q.poll(t0 + ms(30)), vec![2]);
    assert!(q.is_empty());
}

#[test]
fn due_tasks_come_back_in_deadline_order() {
    let t0 = Instant::now();
    let mut q = TimerQueue::new();
    q.schedule(t0, ms(30), 'c');
    q.schedule(t0, ms(10), 'a');
    q.schedule(t0, ms(20), 'b');
    assert_eq!(q.poll(t0 + ms(30)), vec!['a', 'b', 'c']);
}

#[test]
fn burst_of_resizes_collapses_to_one_redraw() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(ms(100));
    let mut fired_at = Vec::new();

    // Five triggers 50ms apart; the clock is polled every 10ms throughout.
    let triggers = [0u64, 50, 100, 150, 200];
    for tick in (0..=600).step_by(10) {
        let now = t0 + ms(tick);
        if triggers.contains(&tick) {
            d.trigger(now);
        }
        if d.poll(now) {
            fired_at.push(tick);
        }
    }
    assert_eq!(fired_at, vec![300]);
}

#[test]
fn quiet_period_restarts_on_every_trigger() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(ms(100));
    d.trigger(t0);
    assert_eq!(d.deadline(), Some(t0 + ms(100)));
    d.trigger(t0 + ms(60));
    assert_eq!(d.deadline(), Some(t0 + ms(160)));
    assert!(!d.poll(t0 + ms(120)));
    assert!(d.is_pending());
    assert!(d.poll(t0 + ms(160)));
    assert!(!d.is_pending());
}

#[test]
fn cancel_disarms() {
    let t0 = Instant::now();
    let mut d = Debouncer::default();
    assert_eq!(d.delay(), ms(100));
    d.trigger(t0);
    d.cancel();
    assert!(!d.poll(t0 + ms(1_000)));
    assert_eq!(d.deadline(), None);
}
