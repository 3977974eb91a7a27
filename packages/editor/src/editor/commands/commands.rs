use crate::domain::color::Color;
use crate::input::{PaintRequest, PointerEvent};

use super::EditorSession;

pub(super) fn select_color(session: &mut EditorSession, color: Color) -> bool {
    session.palette.select(color)
}

pub(super) fn select_color_index(session: &mut EditorSession, idx: usize) -> bool {
    session.palette.select_index(idx)
}

pub(super) fn pointer_down(session: &mut EditorSession, event: PointerEvent) {
    session.classifier.on_pointer_down(event);
}

pub(super) fn pointer_move(session: &mut EditorSession, event: PointerEvent) -> bool {
    match session.classifier.on_pointer_move(event) {
        Some(request) => paint(session, request),
        None => false,
    }
}

pub(super) fn pointer_up(session: &mut EditorSession, event: PointerEvent) -> bool {
    match session.classifier.on_pointer_up(event) {
        Some(request) => paint(session, request),
        None => false,
    }
}

pub(super) fn click(session: &mut EditorSession, event: PointerEvent) -> bool {
    match session.classifier.on_click(event) {
        Some(request) => paint(session, request),
        None => false,
    }
}

pub(super) fn pointer_cancel(session: &mut EditorSession) {
    session.classifier.on_pointer_cancel();
}

pub(super) fn paint(session: &mut EditorSession, request: PaintRequest) -> bool {
    let color = session.palette.current();
    session.grid.set_cell(request.index, color, request.mode)
}

pub(super) fn clear(session: &mut EditorSession) {
    session.grid.reset();
}
