/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// How a pixel extent check treats the canvas edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// `[0, width) x [0, height)`
    HalfOpen,
    /// `(0, width) x (0, height)`: both edges excluded
    Interior,
}

/// Mapping between the grid and the canvas pixel extent it is drawn onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    rows: u32,
    cols: u32,
    width: f64,
    height: f64,
    cell_w: f64,
    cell_h: f64,
}

impl Geometry {
    pub fn new(rows: u32, cols: u32, width: u32, height: u32) -> Self {
        let width = width as f64;
        let height = height as f64;
        Self {
            rows,
            cols,
            width,
            height,
            cell_w: width / cols.max(1) as f64,
            cell_h: height / rows.max(1) as f64,
        }
    }

    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn width(&self) -> f64 { self.width }

    #[inline]
    pub fn height(&self) -> f64 { self.height }

    #[inline]
    pub fn cell_width(&self) -> f64 { self.cell_w }

    #[inline]
    pub fn contains(&self, x: f64, y: f64, policy: BoundsPolicy) -> bool {
        match policy {
            BoundsPolicy::HalfOpen => x >= 0.0 && x < self.width && y >= 0.0 && y < self.height,
            BoundsPolicy::Interior => x > 0.0 && x < self.width && y > 0.0 && y < self.height,
        }
    }

    /// Row-major flat index; `cols` is the stride.
    #[inline]
    pub fn coordinate_to_index(&self, row: u32, column: u32) -> usize {
        (row as usize) * (self.cols as usize) + (column as usize)
    }

    #[inline]
    pub fn index_to_coordinate(&self, idx: usize) -> (u32, u32) {
        let cols = self.cols.max(1) as usize;
        ((idx / cols) as u32, (idx % cols) as u32)
    }

    /// Cell under a canvas pixel offset, or `None` when the offset maps outside the grid.
    pub fn cell_at_pixel(&self, x: f64, y: f64) -> Option<(u32, u32)> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let column = (x / self.cell_w).floor();
        let row = (y / self.cell_h).floor();
        if column >= self.cols as f64 || row >= self.rows as f64 {
            return None;
        }
        Some((row as u32, column as u32))
    }

    /// Filled area of a cell.
    #[inline]
    pub fn cell_rect(&self, row: u32, column: u32) -> Rect {
        Rect {
            x: column as f64 * self.cell_w,
            y: row as f64 * self.cell_h,
            w: self.cell_w,
            h: self.cell_h,
        }
    }
}
