//! Grid - authoritative color-per-cell store
//!
//! Flat row-major `Vec<Color>` (index = row * cols + column) plus the
//! DirtySet of cells the renderer still has to repaint.
//!
//! Invalid input never errors: out-of-range indices and repeated writes
//! inside one frame are no-ops reported through `bool`.

use crate::domain::color::Color;
use crate::spatial::dirty::DirtySet;

mod geometry;
mod indexing;
mod snapshot;

pub use geometry::{BoundsPolicy, Geometry, Rect};
pub use snapshot::Snapshot;

pub const DEFAULT_ROWS: u32 = 16;
pub const DEFAULT_COLS: u32 = 16;

/// How a write treats a cell that already holds the incoming color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintMode {
    /// Same color again erases back to the background (toggle).
    Click,
    /// Always overwrite; painting never erases mid-drag.
    Drag,
}

pub struct GridModel {
    rows: u32,
    cols: u32,
    size: usize,
    background: Color,
    geometry: Geometry,
    cells: Vec<Color>,
    dirty: DirtySet,
}

impl GridModel {
    /// Create a grid drawn onto a `width x height` pixel canvas.
    /// Every cell starts as `background` and nothing is dirty until `reset`.
    pub fn new(rows: u32, cols: u32, width: u32, height: u32, background: Color) -> Self {
        let size = (rows as usize) * (cols as usize);
        Self {
            rows,
            cols,
            size,
            background,
            geometry: Geometry::new(rows, cols, width, height),
            cells: vec![background; size],
            dirty: DirtySet::new(size),
        }
    }

    #[inline]
    pub fn background(&self) -> Color { self.background }

    #[inline]
    pub fn geometry(&self) -> &Geometry { &self.geometry }

    #[inline]
    pub fn cells(&self) -> &[Color] { &self.cells }

    #[inline]
    pub fn dirty(&self) -> &DirtySet { &self.dirty }

    #[inline]
    pub fn color_at(&self, idx: usize) -> Option<Color> {
        self.cells.get(idx).copied()
    }

    /// Write `color` into cell `idx` and mark it dirty.
    ///
    /// First write wins per frame: a cell already pending repaint is left
    /// alone until the next flush, even when `color` differs.
    pub fn set_cell(&mut self, idx: usize, color: Color, mode: PaintMode) -> bool {
        if idx >= self.size || self.dirty.contains(idx) {
            return false;
        }

        let current = self.cells[idx];
        self.cells[idx] = match mode {
            PaintMode::Click if current == color => self.background,
            _ => color,
        };
        self.dirty.mark(idx);
        true
    }

    /// Every cell back to background, every index dirty exactly once.
    pub fn reset(&mut self) {
        self.cells.fill(self.background);
        self.invalidate_all();
    }

    /// Take the color sequence of the grid as it is right now.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.cells.clone())
    }

    /// Replace every cell from a snapshot. Rejected (grid untouched) on a length mismatch.
    pub fn load_snapshot(&mut self, snapshot: &Snapshot) -> bool {
        if snapshot.len() != self.size {
            return false;
        }
        self.cells.copy_from_slice(snapshot.colors());
        self.invalidate_all();
        true
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty.clear();
    }

    /// Schedule every cell for repaint without changing colors.
    pub fn invalidate_all(&mut self) {
        for idx in 0..self.size {
            self.dirty.mark(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMBER: Color = Color::hex(0xeaaf4d);
    const BLUE: Color = Color::hex(0x58aeee);

    fn grid() -> GridModel {
        GridModel::new(DEFAULT_ROWS, DEFAULT_COLS, 256, 256, Color::WHITE)
    }

    #[test]
    fn click_toggles_same_color_back_to_background() {
        let mut g = grid();
        assert!(g.set_cell(5, AMBER, PaintMode::Click));
        assert_eq!(g.color_at(5), Some(AMBER));

        g.clear_dirty();
        assert!(g.set_cell(5, AMBER, PaintMode::Click));
        assert_eq!(g.color_at(5), Some(Color::WHITE));
    }

    #[test]
    fn click_with_other_color_overwrites() {
        let mut g = grid();
        g.set_cell(5, BLUE, PaintMode::Click);
        g.clear_dirty();
        g.set_cell(5, AMBER, PaintMode::Click);
        assert_eq!(g.color_at(5), Some(AMBER));
    }

    #[test]
    fn drag_never_toggles() {
        let mut g = grid();
        for _ in 0..3 {
            assert!(g.set_cell(9, AMBER, PaintMode::Drag));
            assert_eq!(g.color_at(9), Some(AMBER));
            g.clear_dirty();
        }
    }

    #[test]
    fn first_write_wins_within_a_frame() {
        let mut g = grid();
        assert!(g.set_cell(3, AMBER, PaintMode::Drag));
        assert!(!g.set_cell(3, AMBER, PaintMode::Drag));
        assert!(!g.set_cell(3, BLUE, PaintMode::Drag));
        assert_eq!(g.color_at(3), Some(AMBER));
        assert_eq!(g.dirty().len(), 1);

        g.clear_dirty();
        assert!(g.set_cell(3, BLUE, PaintMode::Drag));
        assert_eq!(g.color_at(3), Some(BLUE));
    }

    #[test]
    fn set_cell_ignores_out_of_range() {
        let mut g = grid();
        assert!(!g.set_cell(256, AMBER, PaintMode::Click));
        assert!(g.dirty().is_empty());
    }

    #[test]
    fn reset_marks_each_cell_once() {
        let mut g = grid();
        g.set_cell(0, AMBER, PaintMode::Drag);
        g.set_cell(255, BLUE, PaintMode::Drag);
        g.reset();

        assert!(g.cells().iter().all(|c| *c == Color::WHITE));
        assert_eq!(g.dirty().len(), 256);
        let mut seen: Vec<usize> = g.dirty().iter().collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 256);
    }

    #[test]
    fn load_snapshot_checks_length() {
        let mut g = grid();
        g.set_cell(1, AMBER, PaintMode::Drag);
        g.clear_dirty();

        assert!(!g.load_snapshot(&Snapshot::new(vec![BLUE; 10])));
        assert_eq!(g.color_at(1), Some(AMBER));
        assert!(g.dirty().is_empty());

        assert!(g.load_snapshot(&Snapshot::new(vec![BLUE; 256])));
        assert!(g.cells().iter().all(|c| *c == BLUE));
        assert_eq!(g.dirty().len(), 256);
    }
}
