use std::cell::RefCell;
use std::rc::Rc;

use crate::render::{DrawSurface, FrameScheduler, RenderLoop, RenderLoopHandle};

use super::{EditorSession, PerfTimer};

pub(super) fn prepare_surface<S: DrawSurface + ?Sized>(session: &EditorSession, surface: &mut S) {
    session.renderer.prepare_surface(&session.grid, surface);
}

pub(super) fn invalidate(session: &mut EditorSession) {
    session.grid.invalidate_all();
}

pub(super) fn flush<S: DrawSurface + ?Sized>(session: &mut EditorSession, surface: &mut S) -> usize {
    let timer = PerfTimer::start();
    let painted = session.renderer.flush(&mut session.grid, surface);
    session.stats.record(painted, timer.elapsed_ms());
    painted
}

/// Flush `session` onto `surface` once per frame until the handle is stopped.
///
/// A frame that finds the session or surface already borrowed is skipped;
/// its dirty cells stay pending for the next one.
pub fn start_render_loop<S>(
    session: Rc<RefCell<EditorSession>>,
    surface: Rc<RefCell<S>>,
    scheduler: Rc<dyn FrameScheduler>,
) -> RenderLoopHandle
where
    S: DrawSurface + 'static,
{
    console_log!("render loop started");
    RenderLoop::start(scheduler, move |_timestamp| {
        let (Ok(mut session), Ok(mut surface)) = (session.try_borrow_mut(), surface.try_borrow_mut()) else {
            return;
        };
        session.flush(&mut *surface);
    })
}

/// A session bound to its current draw surface and the loop that flushes it.
///
/// Re-attaching while the loop runs moves the loop onto the new surface; the
/// old surface receives no further frames.
pub struct SurfaceBinding<S: DrawSurface + 'static> {
    session: Rc<RefCell<EditorSession>>,
    surface: Option<Rc<RefCell<S>>>,
    render_loop: Option<(RenderLoopHandle, Rc<dyn FrameScheduler>)>,
}

impl<S: DrawSurface + 'static> SurfaceBinding<S> {
    pub fn new(session: Rc<RefCell<EditorSession>>) -> Self {
        Self { session, surface: None, render_loop: None }
    }

    pub fn surface(&self) -> Option<Rc<RefCell<S>>> {
        self.surface.clone()
    }

    /// Size `surface` for the grid and make it the render target.
    /// Every cell is drawn onto it on the next flush.
    pub fn attach(&mut self, mut surface: S) {
        {
            let mut session = self.session.borrow_mut();
            session.prepare_surface(&mut surface);
            session.invalidate();
        }
        let surface = Rc::new(RefCell::new(surface));
        self.surface = Some(Rc::clone(&surface));

        if let Some((handle, scheduler)) = self.render_loop.take() {
            if handle.is_running() {
                handle.stop();
                let handle = start_render_loop(Rc::clone(&self.session), surface, Rc::clone(&scheduler));
                self.render_loop = Some((handle, scheduler));
            }
        }
    }

    /// Start flushing once per frame. False when no surface is attached;
    /// a loop that is already running is left alone.
    pub fn start(&mut self, scheduler: Rc<dyn FrameScheduler>) -> bool {
        if self.is_running() {
            return true;
        }
        let Some(surface) = self.surface.clone() else {
            return false;
        };
        let handle = start_render_loop(Rc::clone(&self.session), surface, Rc::clone(&scheduler));
        self.render_loop = Some((handle, scheduler));
        true
    }

    /// True when a loop was running.
    pub fn stop(&mut self) -> bool {
        match self.render_loop.take() {
            Some((handle, _)) => {
                let was_running = handle.is_running();
                handle.stop();
                was_running
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.render_loop.as_ref().is_some_and(|(handle, _)| handle.is_running())
    }

    /// Flush now, outside the loop. 0 when no surface is attached.
    pub fn flush(&self) -> usize {
        match &self.surface {
            Some(surface) => self.session.borrow_mut().flush(&mut *surface.borrow_mut()),
            None => 0,
        }
    }
}
