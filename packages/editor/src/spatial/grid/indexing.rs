use super::*;

impl GridModel {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    // Bounds are the caller's job; input is rejected before it gets here.
    #[inline]
    pub fn coordinate_to_index(&self, row: u32, column: u32) -> usize {
        self.geometry.coordinate_to_index(row, column)
    }

    #[inline]
    pub fn index_to_coordinate(&self, idx: usize) -> (u32, u32) {
        self.geometry.index_to_coordinate(idx)
    }

    /// Index of the cell under a canvas pixel offset.
    #[inline]
    pub fn cell_at_pixel(&self, x: f64, y: f64) -> Option<usize> {
        self.geometry
            .cell_at_pixel(x, y)
            .map(|(row, column)| self.coordinate_to_index(row, column))
    }
}
