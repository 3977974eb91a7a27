use crate::persistence::{PersistenceAdapter, PersistenceError};
use crate::render::export::{self, Bitmap, ExportError, ExportOptions};
use crate::spatial::grid::Snapshot;

use super::EditorSession;

pub(super) fn load_snapshot(session: &mut EditorSession, snapshot: &Snapshot) -> bool {
    session.grid.load_snapshot(snapshot)
}

pub(super) fn save<P: PersistenceAdapter + ?Sized>(
    session: &EditorSession,
    store: &mut P,
) -> Result<usize, PersistenceError> {
    let count = store.save(&session.grid.snapshot())?;
    console_log!("sprite saved ({} stored)", count);
    Ok(count)
}

pub(super) fn load_saved<P: PersistenceAdapter + ?Sized>(
    session: &mut EditorSession,
    store: &P,
    index: usize,
) -> Result<bool, PersistenceError> {
    let mut saved = store.load_all()?;
    if index >= saved.len() {
        return Ok(false);
    }
    let snapshot = saved.swap_remove(index);
    let loaded = session.grid.load_snapshot(&snapshot);
    if !loaded {
        console_log!(
            "saved sprite {} has {} cells, grid has {}; not loaded",
            index,
            snapshot.len(),
            session.grid.size()
        );
    }
    Ok(loaded)
}

fn options(session: &EditorSession, size: u32, transparent: bool) -> ExportOptions {
    ExportOptions {
        size,
        transparent,
        background: session.grid.background(),
    }
}

pub(super) fn export(session: &EditorSession, size: u32, transparent: bool) -> Result<Bitmap, ExportError> {
    let snapshot = session.grid.snapshot();
    export::render_snapshot(&snapshot, session.grid.cols(), &options(session, size, transparent))
}

pub(super) fn export_png(session: &EditorSession, size: u32, transparent: bool) -> Result<Vec<u8>, ExportError> {
    let bitmap = export(session, size, transparent)?;
    export::encode_png(&bitmap)
}
