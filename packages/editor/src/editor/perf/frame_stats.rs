use wasm_bindgen::prelude::*;

/// Render counters, updated on every flush.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) frames: u64,
    pub(super) last_cells: u32,
    pub(super) total_cells: u64,
    pub(super) last_flush_ms: f64,
}

#[wasm_bindgen]
impl FrameStats {
    /// Flushes run since the session started
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u64 { self.frames }

    /// Cells repainted by the most recent flush
    #[wasm_bindgen(getter)]
    pub fn last_cells(&self) -> u32 { self.last_cells }

    #[wasm_bindgen(getter)]
    pub fn total_cells(&self) -> u64 { self.total_cells }

    #[wasm_bindgen(getter)]
    pub fn last_flush_ms(&self) -> f64 { self.last_flush_ms }
}

impl FrameStats {
    pub(super) fn record(&mut self, cells: usize, flush_ms: f64) {
        self.frames += 1;
        self.last_cells = cells as u32;
        self.total_cells += cells as u64;
        self.last_flush_ms = flush_ms;
    }
}
