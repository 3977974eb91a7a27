//! EditorSession - one editor instance and all of its mutable state
//!
//! Owns the grid, palette, gesture classifier, renderer and config. Event
//! handlers and the frame task reach state only through a session reference;
//! nothing lives in module-level globals.
//!
//! Control flow:
//! pointer event -> InputClassifier -> GridModel::set_cell -> DirtySet
//! frame tick    -> Renderer::flush -> DrawSurface

use crate::domain::color::Color;
use crate::domain::palette::Palette;
use crate::input::{GestureState, InputClassifier, PaintRequest, PointerEvent};
use crate::persistence::{PersistenceAdapter, PersistenceError};
use crate::render::export::{Bitmap, ExportError};
use crate::render::{DrawSurface, Renderer};
use crate::spatial::grid::{GridModel, Snapshot};

#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/storage.rs"]
mod storage;
#[path = "perf/clock.rs"]
mod clock;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "render/render_frame.rs"]
mod render_frame;
mod facade;

pub use config::{ConfigError, EditorConfig};
pub use facade::Editor;
pub use frame_stats::FrameStats;

pub(crate) use clock::{now_ms, PerfTimer};

pub struct EditorSession {
    config: EditorConfig,
    grid: GridModel,
    palette: Palette,
    classifier: InputClassifier,
    renderer: Renderer,
    stats: FrameStats,
}

impl EditorSession {
    /// Create a session; the grid starts reset, so the first flush draws every cell.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(init::create_session(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        let config = EditorConfig::from_json(json)?;
        Ok(init::create_session(config))
    }

    pub fn config(&self) -> &EditorConfig { &self.config }

    pub fn grid(&self) -> &GridModel { &self.grid }

    pub fn palette(&self) -> &Palette { &self.palette }

    pub fn gesture(&self) -> GestureState { self.classifier.state() }

    pub fn frame_stats(&self) -> FrameStats { self.stats.clone() }

    // === Settings ===

    pub fn set_drag_delay_ms(&mut self, delay_ms: f64) -> bool {
        settings::set_drag_delay_ms(self, delay_ms)
    }

    pub fn set_strict_release_bounds(&mut self, strict: bool) {
        settings::set_strict_release_bounds(self, strict);
    }

    // === Palette ===

    pub fn current_color(&self) -> Color { self.palette.current() }

    pub fn select_color(&mut self, color: Color) -> bool {
        commands::select_color(self, color)
    }

    pub fn select_color_index(&mut self, idx: usize) -> bool {
        commands::select_color_index(self, idx)
    }

    // === Pointer input ===

    pub fn on_pointer_down(&mut self, event: PointerEvent) {
        commands::pointer_down(self, event);
    }

    /// True when the move painted a cell.
    pub fn on_pointer_move(&mut self, event: PointerEvent) -> bool {
        commands::pointer_move(self, event)
    }

    pub fn on_pointer_up(&mut self, event: PointerEvent) -> bool {
        commands::pointer_up(self, event)
    }

    pub fn on_click(&mut self, event: PointerEvent) -> bool {
        commands::click(self, event)
    }

    pub fn on_pointer_cancel(&mut self) {
        commands::pointer_cancel(self);
    }

    /// Apply a paint request with the current palette color.
    pub fn paint(&mut self, request: PaintRequest) -> bool {
        commands::paint(self, request)
    }

    /// Wipe the sprite back to the background color.
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === Snapshots, storage, export ===

    pub fn snapshot(&self) -> Snapshot { self.grid.snapshot() }

    pub fn load_snapshot(&mut self, snapshot: &Snapshot) -> bool {
        storage::load_snapshot(self, snapshot)
    }

    /// Append the current sprite to `store`; returns the stored count.
    pub fn save<P: PersistenceAdapter + ?Sized>(&self, store: &mut P) -> Result<usize, PersistenceError> {
        storage::save(self, store)
    }

    /// Load saved sprite `index` into the grid. `Ok(false)` when there is no such entry.
    pub fn load_saved<P: PersistenceAdapter + ?Sized>(&mut self, store: &P, index: usize) -> Result<bool, PersistenceError> {
        storage::load_saved(self, store, index)
    }

    pub fn export(&self, size: u32, transparent: bool) -> Result<Bitmap, ExportError> {
        storage::export(self, size, transparent)
    }

    pub fn export_png(&self, size: u32, transparent: bool) -> Result<Vec<u8>, ExportError> {
        storage::export_png(self, size, transparent)
    }

    // === Rendering ===

    pub fn prepare_surface<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        render_frame::prepare_surface(self, surface);
    }

    /// Schedule the whole sprite for repaint (e.g. after binding a new surface).
    pub fn invalidate(&mut self) {
        render_frame::invalidate(self);
    }

    /// Repaint dirty cells onto `surface`. Returns cells repainted.
    pub fn flush<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        render_frame::flush(self, surface)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        init::create_session(EditorConfig::default())
    }
}

pub use render_frame::{start_render_loop, SurfaceBinding};

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
