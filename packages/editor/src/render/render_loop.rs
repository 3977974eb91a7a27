//! RenderLoop - self-rescheduling frame task
//!
//! Each tick runs the frame task and requests the next frame, forever.
//! The loop has no natural end: `RenderLoopHandle::stop` is the only way out,
//! and the tick already queued observes it and neither runs nor reschedules.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::scheduler::FrameScheduler;

struct LoopState {
    running: Rc<Cell<bool>>,
    scheduler: Rc<dyn FrameScheduler>,
    task: RefCell<Box<dyn FnMut(f64)>>,
}

/// Cancellation handle for a running loop.
#[derive(Clone)]
pub struct RenderLoopHandle {
    running: Rc<Cell<bool>>,
}

impl RenderLoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

pub struct RenderLoop;

impl RenderLoop {
    /// Submit `task` to run once per frame until the returned handle is stopped.
    pub fn start<F>(scheduler: Rc<dyn FrameScheduler>, task: F) -> RenderLoopHandle
    where
        F: FnMut(f64) + 'static,
    {
        let running = Rc::new(Cell::new(true));
        let state = Rc::new(LoopState {
            running: Rc::clone(&running),
            scheduler,
            task: RefCell::new(Box::new(task)),
        });
        schedule(state);
        RenderLoopHandle { running }
    }
}

fn schedule(state: Rc<LoopState>) {
    let next = Rc::clone(&state);
    let requested = state
        .scheduler
        .request_frame(Box::new(move |timestamp| tick(next, timestamp)));
    if let Err(err) = requested {
        console_log!("render loop stopped: {}", err);
        state.running.set(false);
    }
}

fn tick(state: Rc<LoopState>, timestamp: f64) {
    if !state.running.get() {
        return;
    }
    {
        let mut task = state.task.borrow_mut();
        (&mut **task)(timestamp);
    }
    schedule(state);
}
