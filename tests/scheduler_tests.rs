// Host-side tests for the deferred task queue.

use std::time::Duration;
use trash_sort_core::TimerQueue;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn nothing_is_due_early() {
    let mut q = TimerQueue::new();
    q.schedule(ms(0), ms(100), "a");
    assert!(q.pop_due(ms(99)).is_none());
    assert_eq!(q.len(), 1);
    assert_eq!(q.next_due(), Some(ms(100)));
    assert_eq!(q.pop_due(ms(100)), Some((ms(100), "a")));
    assert!(q.is_empty());
}

#[test]
fn tasks_come_out_by_due_time() {
    let mut q = TimerQueue::new();
    q.schedule(ms(0), ms(300), 3);
    q.schedule(ms(0), ms(100), 1);
    q.schedule(ms(50), ms(150), 2);
    let mut order = Vec::new();
    while let Some((_, t)) = q.pop_due(ms(1000)) {
        order.push(t);
    }
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn equal_due_times_are_fifo() {
    let mut q = TimerQueue::new();
    for i in 0..5 {
        q.schedule(ms(10), ms(40), i);
    }
    let order: Vec<i32> = std::iter::from_fn(|| q.pop_due(ms(50)).map(|(_, t)| t)).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn pop_reports_original_due_time() {
    let mut q = TimerQueue::new();
    q.schedule(ms(0), ms(50), ());
    let (due, _) = q.pop_due(ms(500)).unwrap();
    assert_eq!(due, ms(50));
}
