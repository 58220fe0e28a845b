use super::*;

// =============================================================
// ScheduledTask
// =============================================================

#[test]
fn schedule_starts_uncancelled() {
    let task = schedule(2000, || {});
    assert!(!task.is_cancelled());
}

#[test]
fn cancel_marks_the_task() {
    let task = schedule(2000, || {});
    task.cancel();
    assert!(task.is_cancelled());
}

#[test]
fn cancel_is_idempotent() {
    let task = schedule(2000, || {});
    task.cancel();
    task.cancel();
    assert!(task.is_cancelled());
}

#[test]
fn clones_share_the_cancelled_flag() {
    let task = schedule(2000, || {});
    let alias = task.clone();
    alias.cancel();
    assert!(task.is_cancelled());
}

#[test]
fn pending_handle_starts_uncancelled() {
    let task = ScheduledTask::pending();
    assert!(!task.is_cancelled());
}

#[test]
fn cancel_before_arming_sticks() {
    // Teardown can run while the work that arms the timer is still in
    // flight; the early cancel must survive the later arm.
    let task = ScheduledTask::pending();
    let teardown = task.clone();
    teardown.cancel();
    task.arm(0, || {});
    assert!(task.is_cancelled());
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_stub_never_runs_the_callback() {
    use std::rc::Rc;
    use std::cell::Cell;

    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let _task = schedule(0, move || flag.set(true));
    assert!(!fired.get());
}
