use super::EditorSession;

/// Rejects negative and non-finite delays.
pub(super) fn set_drag_delay_ms(session: &mut EditorSession, delay_ms: f64) -> bool {
    if !delay_ms.is_finite() || delay_ms < 0.0 {
        return false;
    }
    session.config.drag_delay_ms = delay_ms;
    session.classifier.set_drag_delay_ms(delay_ms);
    true
}

pub(super) fn set_strict_release_bounds(session: &mut EditorSession, strict: bool) {
    session.config.strict_release_bounds = strict;
    session.classifier.set_strict_release_bounds(strict);
}
