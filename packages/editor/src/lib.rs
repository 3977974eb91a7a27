//! Sprite Editor Engine - grid painting core for the browser sprite editor
//!
//! Architecture:
//! - core/        - Logging macros
//! - domain/      - Colors and the palette
//! - spatial/     - Grid store and dirty-cell tracking
//! - input/       - Click vs drag classification
//! - render/      - Dirty-cell renderer, frame loop, export
//! - persistence/ - Append-only sprite storage
//! - editor/      - Session orchestration and the JS facade

// Macros must be declared first so every module below can use them
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod input;
pub mod render;
pub mod persistence;
pub mod editor;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("sprite editor engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default editor config as JSON, for hosts that build their own overrides.
#[wasm_bindgen]
pub fn default_config_json() -> String {
    editor::EditorConfig::default().to_json()
}

// Re-export main types
pub use domain::color::Color;
pub use domain::palette::Palette;
pub use editor::{Editor, EditorConfig, EditorSession, FrameStats};
pub use input::{GestureState, InputClassifier, PointerEvent};
pub use persistence::{PersistenceAdapter, SnapshotStore};
pub use render::{DrawSurface, FrameScheduler, RenderLoopHandle, Renderer};
pub use spatial::grid::{GridModel, PaintMode, Snapshot};
