use super::*;

fn at(ms: i64) -> Timestamp {
    Timestamp::from_millis(ms)
}

#[test]
fn new_queue_is_empty() {
    let queue: DeferredQueue<&str> = DeferredQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.next_due(), None);
}

#[test]
fn nothing_is_due_before_its_time() {
    let mut queue = DeferredQueue::new();
    queue.schedule(at(500), "reply");
    assert!(queue.take_due(at(499)).is_empty());
    assert_eq!(queue.len(), 1);
}

#[test]
fn task_is_due_exactly_at_its_time() {
    let mut queue = DeferredQueue::new();
    let handle = queue.schedule(at(500), "reply");
    let due = queue.take_due(at(500));
    assert_eq!(due, vec![(handle, "reply")]);
    assert!(queue.is_empty());
}

#[test]
fn equal_due_times_fire_in_schedule_order() {
    let mut queue = DeferredQueue::new();
    queue.schedule(at(500), "a");
    queue.schedule(at(500), "b");
    queue.schedule(at(500), "c");

    let order: Vec<&str> = queue.take_due(at(600)).into_iter().map(|(_, t)| t).collect();
    assert_eq!(order, ["a", "b", "c"]);
}

#[test]
fn earlier_due_fires_first_regardless_of_schedule_order() {
    let mut queue = DeferredQueue::new();
    queue.schedule(at(900), "late");
    queue.schedule(at(100), "early");

    assert_eq!(queue.next_due(), Some(at(100)));
    let order: Vec<&str> = queue.take_due(at(1_000)).into_iter().map(|(_, t)| t).collect();
    assert_eq!(order, ["early", "late"]);
}

#[test]
fn take_due_leaves_later_tasks() {
    let mut queue = DeferredQueue::new();
    queue.schedule(at(100), 1);
    let later = queue.schedule(at(200), 2);

    assert_eq!(queue.take_due(at(150)).len(), 1);
    assert_eq!(queue.next_due(), Some(later.due()));
}

#[test]
fn cancelled_task_never_fires() {
    let mut queue = DeferredQueue::new();
    let handle = queue.schedule(at(100), "gone");
    assert!(queue.cancel(handle));
    assert!(!queue.cancel(handle));
    assert!(queue.take_due(at(1_000)).is_empty());
    assert_eq!(queue.take(handle), None);
}

#[test]
fn take_removes_only_that_task() {
    let mut queue = DeferredQueue::new();
    let first = queue.schedule(at(100), "first");
    queue.schedule(at(100), "second");

    assert_eq!(queue.take(first), Some("first"));
    assert_eq!(queue.take(first), None);
    assert_eq!(queue.len(), 1);
}

#[test]
fn cancel_all_reports_count() {
    let mut queue = DeferredQueue::new();
    queue.schedule(at(1), ());
    queue.schedule(at(2), ());
    assert_eq!(queue.cancel_all(), 2);
    assert!(queue.is_empty());
    assert_eq!(queue.cancel_all(), 0);
}
