use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[derive(Default)]
struct Ledger {
    next: u32,
    outstanding: Vec<u32>,
    cancelled: Vec<u32>,
    refuse: bool,
}

#[derive(Clone, Default)]
struct MockScheduler(Rc<RefCell<Ledger>>);

impl FrameScheduler for MockScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        let mut ledger = self.0.borrow_mut();
        if ledger.refuse {
            return None;
        }
        ledger.next += 1;
        let id = ledger.next;
        ledger.outstanding.push(id);
        Some(id)
    }

    fn cancel_frame(&mut self, handle: u32) {
        let mut ledger = self.0.borrow_mut();
        ledger.outstanding.retain(|h| *h != handle);
        ledger.cancelled.push(handle);
    }
}

fn fire(ledger: &Rc<RefCell<Ledger>>, frames: &mut FrameLoop<MockScheduler>) {
    ledger.borrow_mut().outstanding.clear();
    frames.frame_fired();
}

#[test]
fn schedule_requests_one_frame_at_a_time() {
    let scheduler = MockScheduler::default();
    let mut frames = FrameLoop::new(scheduler.clone());
    assert!(frames.schedule());
    assert!(frames.schedule());
    assert_eq!(scheduler.0.borrow().next, 1);
    assert!(frames.is_scheduled());
}

#[test]
fn fired_frame_allows_rescheduling() {
    let scheduler = MockScheduler::default();
    let mut frames = FrameLoop::new(scheduler.clone());
    frames.schedule();
    fire(&scheduler.0, &mut frames);
    assert!(!frames.is_scheduled());
    frames.schedule();
    assert_eq!(scheduler.0.borrow().next, 2);
}

#[test]
fn cancel_is_idempotent() {
    let scheduler = MockScheduler::default();
    let mut frames = FrameLoop::new(scheduler.clone());
    frames.schedule();
    frames.cancel();
    frames.cancel();
    frames.cancel();
    let ledger = scheduler.0.borrow();
    assert_eq!(ledger.cancelled, vec![1]);
    assert!(ledger.outstanding.is_empty());
    assert!(!frames.is_scheduled());
}

#[test]
fn cancel_after_fire_does_not_cancel_spent_handle() {
    let scheduler = MockScheduler::default();
    let mut frames = FrameLoop::new(scheduler.clone());
    frames.schedule();
    fire(&scheduler.0, &mut frames);
    frames.cancel();
    assert!(scheduler.0.borrow().cancelled.is_empty());
}

#[test]
fn drop_releases_pending_frame() {
    let scheduler = MockScheduler::default();
    {
        let mut frames = FrameLoop::new(scheduler.clone());
        frames.schedule();
    }
    let ledger = scheduler.0.borrow();
    assert_eq!(ledger.cancelled, vec![1]);
    assert!(ledger.outstanding.is_empty());
}

#[test]
fn refused_request_leaves_loop_idle() {
    let scheduler = MockScheduler::default();
    scheduler.0.borrow_mut().refuse = true;
    let mut frames = FrameLoop::new(scheduler.clone());
    assert!(!frames.schedule());
    assert!(!frames.is_scheduled());
    frames.cancel();
    assert!(scheduler.0.borrow().cancelled.is_empty());
}
