use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Called with the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("no global window available")]
    NoWindow,
    #[error("requestAnimationFrame failed: {0}")]
    Request(String),
}

/// Host hook that runs a callback on the next display frame.
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<(), SchedulerError>;
}

/// `window.requestAnimationFrame`
#[derive(Default)]
pub struct AnimationFrameScheduler;

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<(), SchedulerError> {
        let window = web_sys::window().ok_or(SchedulerError::NoWindow)?;
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        window
            .request_animation_frame(closure.unchecked_ref())
            .map_err(|e| SchedulerError::Request(format!("{:?}", e)))?;
        Ok(())
    }
}

/// Frames run only when the host calls `run_pending`.
/// Used by headless hosts and tests; each run advances the clock one 60Hz frame.
pub struct ManualScheduler {
    queue: RefCell<VecDeque<FrameCallback>>,
    now_ms: Cell<f64>,
}

const FRAME_MS: f64 = 1000.0 / 60.0;

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            queue: RefCell::new(VecDeque::new()),
            now_ms: Cell::new(0.0),
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run the callbacks queued so far. Frames requested while running wait
    /// for the next call, like a real display frame.
    pub fn run_pending(&self) -> usize {
        let batch: Vec<FrameCallback> = self.queue.borrow_mut().drain(..).collect();
        let timestamp = self.now_ms.get() + FRAME_MS;
        self.now_ms.set(timestamp);

        let count = batch.len();
        for callback in batch {
            callback(timestamp);
        }
        count
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<(), SchedulerError> {
        self.queue.borrow_mut().push_back(callback);
        Ok(())
    }
}
