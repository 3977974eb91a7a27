//! Renderer - repaint only what changed
//!
//! Each flush walks the DirtySet, fills every pending cell with its current
//! color and redraws that cell's border. Cost is proportional to the number
//! of changed cells, never to the grid size.

use crate::domain::color::Color;
use crate::spatial::grid::{GridModel, Rect};

use super::surface::DrawSurface;

// Lines land on pixel centers so a 1px stroke stays crisp
const HALF_PIXEL: f64 = 0.5;

pub struct Renderer {
    line_color: Color,
    line_width: f64,
}

impl Renderer {
    pub fn new(line_color: Color, line_width: f64) -> Self {
        Self { line_color, line_width }
    }

    /// Size the surface for the grid: one extra pixel so the closing
    /// right/bottom border lines are visible.
    pub fn prepare_surface<S: DrawSurface + ?Sized>(&self, grid: &GridModel, surface: &mut S) {
        let geometry = grid.geometry();
        surface.resize(
            geometry.width().ceil() as u32 + 1,
            geometry.height().ceil() as u32 + 1,
        );
        surface.set_image_smoothing(false);
    }

    /// Repaint every dirty cell, then empty the DirtySet. Returns cells repainted.
    pub fn flush<S: DrawSurface + ?Sized>(&self, grid: &mut GridModel, surface: &mut S) -> usize {
        let mut painted = 0;
        for idx in grid.dirty().iter() {
            let Some(color) = grid.color_at(idx) else {
                continue;
            };
            let (row, column) = grid.index_to_coordinate(idx);
            let rect = grid.geometry().cell_rect(row, column);

            surface.clear_rect(rect);
            surface.fill_rect(rect, color);
            self.stroke_border(rect, surface);
            painted += 1;
        }
        grid.clear_dirty();
        painted
    }

    fn stroke_border<S: DrawSurface + ?Sized>(&self, rect: Rect, surface: &mut S) {
        let x0 = rect.x + HALF_PIXEL;
        let y0 = rect.y + HALF_PIXEL;
        let x1 = rect.x + rect.w + HALF_PIXEL;
        let y1 = rect.y + rect.h + HALF_PIXEL;
        // left, bottom, right, top
        let points = [(x0, y0), (x0, y1), (x1, y1), (x1, y0), (x0, y0)];
        surface.stroke_path(&points, self.line_color, self.line_width);
    }
}
