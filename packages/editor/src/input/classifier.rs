//! InputClassifier - click vs drag disambiguation
//!
//! Idle --down--> Pressed --move (after delay)--> Dragging
//!   ^               |                               |
//!   +------up-------+---------------up--------------+
//!
//! A move inside the delay window keeps the gesture Pressed, so sub-pixel
//! jitter during a quick tap never turns it into a one-cell drag.
//!
//! The classifier only decides *what* to paint; it returns a `PaintRequest`
//! and the session applies it to the grid with the current palette color.

use crate::spatial::grid::{BoundsPolicy, Geometry, PaintMode};

pub const DEFAULT_DRAG_DELAY_MS: f64 = 50.0;

/// Pointer position in canvas pixel offsets, stamped with the host clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub time_ms: f64,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64, time_ms: f64) -> Self {
        Self { x, y, time_ms }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Pressed { pressed_at: f64 },
    Dragging { pressed_at: f64 },
}

/// A cell the session should write with the current color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintRequest {
    pub index: usize,
    pub mode: PaintMode,
}

pub struct InputClassifier {
    geometry: Geometry,
    state: GestureState,
    drag_delay_ms: f64,
    release_policy: BoundsPolicy,
}

impl InputClassifier {
    pub fn new(geometry: Geometry, drag_delay_ms: f64, strict_release_bounds: bool) -> Self {
        Self {
            geometry,
            state: GestureState::Idle,
            drag_delay_ms,
            release_policy: release_policy(strict_release_bounds),
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn drag_delay_ms(&self) -> f64 {
        self.drag_delay_ms
    }

    pub fn set_drag_delay_ms(&mut self, delay_ms: f64) {
        self.drag_delay_ms = delay_ms;
    }

    pub fn set_strict_release_bounds(&mut self, strict: bool) {
        self.release_policy = release_policy(strict);
    }

    /// Any press starts a gesture, including one on the border pixel past the
    /// grid; only painting is bounds-checked.
    pub fn on_pointer_down(&mut self, event: PointerEvent) {
        self.state = GestureState::Pressed { pressed_at: event.time_ms };
    }

    pub fn on_pointer_move(&mut self, event: PointerEvent) -> Option<PaintRequest> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Pressed { pressed_at } => {
                if event.time_ms - pressed_at > self.drag_delay_ms {
                    self.state = GestureState::Dragging { pressed_at };
                    self.paint_at(event, BoundsPolicy::HalfOpen, PaintMode::Drag)
                } else {
                    None
                }
            }
            GestureState::Dragging { .. } => {
                self.paint_at(event, BoundsPolicy::HalfOpen, PaintMode::Drag)
            }
        }
    }

    pub fn on_pointer_up(&mut self, event: PointerEvent) -> Option<PaintRequest> {
        let request = match self.state {
            GestureState::Idle => None,
            GestureState::Pressed { .. } => {
                self.paint_at(event, BoundsPolicy::HalfOpen, PaintMode::Click)
            }
            GestureState::Dragging { .. } => {
                self.paint_at(event, self.release_policy, PaintMode::Drag)
            }
        };
        self.state = GestureState::Idle;
        request
    }

    /// Standalone click (press and release with no tracked gesture).
    pub fn on_click(&self, event: PointerEvent) -> Option<PaintRequest> {
        self.paint_at(event, BoundsPolicy::HalfOpen, PaintMode::Click)
    }

    /// Abandon the gesture without painting (pointer left or was captured).
    pub fn on_pointer_cancel(&mut self) {
        self.state = GestureState::Idle;
    }

    fn paint_at(&self, event: PointerEvent, policy: BoundsPolicy, mode: PaintMode) -> Option<PaintRequest> {
        if !self.geometry.contains(event.x, event.y, policy) {
            return None;
        }
        let (row, column) = self.geometry.cell_at_pixel(event.x, event.y)?;
        Some(PaintRequest { index: self.geometry.coordinate_to_index(row, column), mode })
    }
}

fn release_policy(strict: bool) -> BoundsPolicy {
    if strict {
        BoundsPolicy::Interior
    } else {
        BoundsPolicy::HalfOpen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> InputClassifier {
        InputClassifier::new(Geometry::new(16, 16, 256, 256), DEFAULT_DRAG_DELAY_MS, true)
    }

    fn ev(x: f64, y: f64, t: f64) -> PointerEvent {
        PointerEvent::new(x, y, t)
    }

    #[test]
    fn quick_press_release_is_a_click() {
        let mut c = classifier();
        c.on_pointer_down(ev(4.0, 4.0, 1000.0));
        assert_eq!(c.state(), GestureState::Pressed { pressed_at: 1000.0 });

        let req = c.on_pointer_up(ev(4.0, 4.0, 1010.0));
        assert_eq!(req, Some(PaintRequest { index: 0, mode: PaintMode::Click }));
        assert_eq!(c.state(), GestureState::Idle);
    }

    #[test]
    fn jitter_inside_delay_does_not_drag() {
        let mut c = classifier();
        c.on_pointer_down(ev(4.0, 4.0, 0.0));
        assert_eq!(c.on_pointer_move(ev(4.5, 4.2, 20.0)), None);
        assert_eq!(c.on_pointer_move(ev(4.5, 4.2, 50.0)), None);
        assert!(matches!(c.state(), GestureState::Pressed { .. }));

        let req = c.on_pointer_up(ev(4.5, 4.2, 55.0));
        assert_eq!(req.map(|r| r.mode), Some(PaintMode::Click));
    }

    #[test]
    fn move_after_delay_promotes_to_drag() {
        let mut c = classifier();
        c.on_pointer_down(ev(4.0, 4.0, 0.0));
        let req = c.on_pointer_move(ev(20.0, 20.0, 60.0));
        assert_eq!(req, Some(PaintRequest { index: 17, mode: PaintMode::Drag }));
        assert_eq!(c.state(), GestureState::Dragging { pressed_at: 0.0 });

        // later moves keep painting regardless of timing
        let req = c.on_pointer_move(ev(40.0, 20.0, 61.0));
        assert_eq!(req, Some(PaintRequest { index: 18, mode: PaintMode::Drag }));

        let req = c.on_pointer_up(ev(36.0, 36.0, 70.0));
        assert_eq!(req, Some(PaintRequest { index: 34, mode: PaintMode::Drag }));
        assert_eq!(c.state(), GestureState::Idle);
    }

    #[test]
    fn drag_off_canvas_paints_nothing_but_keeps_dragging() {
        let mut c = classifier();
        c.on_pointer_down(ev(4.0, 4.0, 0.0));
        assert_eq!(c.on_pointer_move(ev(300.0, 4.0, 100.0)), None);
        assert!(matches!(c.state(), GestureState::Dragging { .. }));
        assert!(c.on_pointer_move(ev(250.0, 4.0, 101.0)).is_some());
    }

    #[test]
    fn drag_release_excludes_canvas_edges() {
        let mut c = classifier();
        c.on_pointer_down(ev(4.0, 4.0, 0.0));
        c.on_pointer_move(ev(8.0, 8.0, 100.0));
        assert_eq!(c.on_pointer_up(ev(0.0, 8.0, 110.0)), None);
        assert_eq!(c.state(), GestureState::Idle);
    }

    #[test]
    fn relaxed_release_accepts_left_edge() {
        let mut c = classifier();
        c.set_strict_release_bounds(false);
        c.on_pointer_down(ev(4.0, 4.0, 0.0));
        c.on_pointer_move(ev(8.0, 8.0, 100.0));
        let req = c.on_pointer_up(ev(0.0, 8.0, 110.0));
        assert_eq!(req, Some(PaintRequest { index: 0, mode: PaintMode::Drag }));
    }

    #[test]
    fn click_release_accepts_left_edge() {
        let mut c = classifier();
        c.on_pointer_down(ev(0.0, 0.0, 0.0));
        let req = c.on_pointer_up(ev(0.0, 0.0, 5.0));
        assert_eq!(req, Some(PaintRequest { index: 0, mode: PaintMode::Click }));
    }

    #[test]
    fn out_of_bounds_events_are_ignored() {
        let mut c = classifier();
        assert_eq!(c.on_click(ev(300.0, 300.0, 0.0)), None);
        assert_eq!(c.on_click(ev(256.0, 10.0, 0.0)), None);

        c.on_pointer_down(ev(300.0, 300.0, 0.0));
        assert_eq!(c.on_pointer_move(ev(300.0, 10.0, 100.0)), None);
        assert_eq!(c.on_pointer_up(ev(300.0, 10.0, 110.0)), None);
        assert_eq!(c.state(), GestureState::Idle);
    }

    #[test]
    fn press_on_border_column_then_drag_in_paints() {
        let mut c = classifier();
        c.on_pointer_down(ev(256.0, 100.0, 0.0));
        assert_eq!(c.state(), GestureState::Pressed { pressed_at: 0.0 });

        let req = c.on_pointer_move(ev(100.0, 100.0, 60.0));
        assert_eq!(req, Some(PaintRequest { index: 6 * 16 + 6, mode: PaintMode::Drag }));
        assert!(matches!(c.state(), GestureState::Dragging { .. }));
    }

    #[test]
    fn quick_tap_on_border_paints_nothing() {
        let mut c = classifier();
        c.on_pointer_down(ev(256.0, 100.0, 0.0));
        assert_eq!(c.on_pointer_up(ev(256.0, 100.0, 5.0)), None);
        assert_eq!(c.state(), GestureState::Idle);
    }

    #[test]
    fn cancel_drops_the_gesture() {
        let mut c = classifier();
        c.on_pointer_down(ev(4.0, 4.0, 0.0));
        c.on_pointer_cancel();
        assert_eq!(c.state(), GestureState::Idle);
        assert_eq!(c.on_pointer_up(ev(4.0, 4.0, 10.0)), None);
    }

    #[test]
    fn custom_delay_is_respected() {
        let mut c = classifier();
        c.set_drag_delay_ms(200.0);
        c.on_pointer_down(ev(4.0, 4.0, 0.0));
        assert_eq!(c.on_pointer_move(ev(20.0, 20.0, 150.0)), None);
        assert!(c.on_pointer_move(ev(20.0, 20.0, 201.0)).is_some());
    }
}
