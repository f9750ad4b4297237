use super::*;

fn settled(h: &HistoryManager<u32>, now: Instant) -> Instant {
    now + h.settle + Duration::from_millis(1)
}

#[test]
fn test_history_undo_redo_inverse() {
    let mut h = HistoryManager::new(0u32, 50);
    let t0 = Instant::now();
    h.record_at(&1, t0);
    h.record_at(&2, t0);
    assert_eq!(h.undo_at(t0), Some(1));
    assert_eq!(h.redo_at(settled(&h, t0)), Some(2));
    assert!(!h.can_redo());
}

#[test]
fn test_history_max_steps() {
    let mut h = HistoryManager::new(0u32, 50);
    let t0 = Instant::now();
    for i in 1..=60 {
        h.record_at(&i, t0);
    }
    assert_eq!(h.len(), 50);
    assert_eq!(h.pointer(), 49);

    let mut undos = 0;
    let mut now = t0;
    while h.can_undo() {
        h.undo_at(now);
        now = settled(&h, now);
        undos += 1;
    }
    assert_eq!(undos, 49);
    assert_eq!(*h.current(), 11);
}

#[test]
fn test_history_51_records_evicts_one() {
    let mut h = HistoryManager::new(0u32, 50);
    let t0 = Instant::now();
    for i in 1..=50 {
        h.record_at(&i, t0);
    }
    assert_eq!(h.len(), 50);
    assert_eq!(h.pointer(), 49);
    assert_eq!(*h.current(), 50);
}

#[test]
fn test_history_record_truncates_future() {
    let mut h = HistoryManager::new(0u32, 50);
    let t0 = Instant::now();
    h.record_at(&1, t0);
    h.record_at(&2, t0);
    h.undo_at(t0);
    h.record_at(&3, settled(&h, t0));
    assert_eq!(h.len(), 3);
    assert_eq!(*h.current(), 3);
    assert!(!h.can_redo());
}

#[test]
fn test_history_suppressed_while_replaying() {
    let mut h = HistoryManager::new(0u32, 50);
    let t0 = Instant::now();
    h.record_at(&1, t0);
    h.undo_at(t0);
    assert!(!h.record_at(&9, t0 + Duration::from_millis(50)));
    assert_eq!(h.len(), 2);
    assert!(h.record_at(&9, settled(&h, t0)));
}

#[test]
fn test_history_end_replay() {
    let mut h = HistoryManager::new(0u32, 50);
    let t0 = Instant::now();
    h.record_at(&1, t0);
    h.undo_at(t0);
    h.end_replay();
    assert!(h.record_at(&5, t0));
}

#[test]
fn test_history_bounds_noop() {
    let mut h = HistoryManager::new(7u32, 50);
    assert_eq!(h.undo(), None);
    assert_eq!(h.redo(), None);
    assert_eq!(h.pointer(), 0);
}
