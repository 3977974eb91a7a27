//! Snapshot export - rasterize a grid snapshot into an RGBA bitmap
//!
//! Each cell becomes a `ceil(size / cols)` pixel square; the last row and
//! column are clipped to the bitmap. Background cells are either fully
//! transparent or the explicit background color.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::domain::color::Color;
use crate::spatial::grid::Snapshot;

/// Longest bitmap side an export may produce.
pub const MAX_EXPORT_SIDE: u32 = 8192;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export size must be non-zero")]
    ZeroSize,
    #[error("export of {width}x{height}px exceeds the {MAX_EXPORT_SIDE}px limit")]
    TooLarge { width: u32, height: u64 },
    #[error("snapshot has {len} cells, not a multiple of {cols} columns")]
    Shape { len: usize, cols: u32 },
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportOptions {
    /// Bitmap width in pixels; height follows the grid's row/column ratio.
    pub size: u32,
    pub transparent: bool,
    pub background: Color,
}

/// Tightly packed RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.pixels[offset..offset + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}

pub fn render_snapshot(snapshot: &Snapshot, cols: u32, options: &ExportOptions) -> Result<Bitmap, ExportError> {
    if options.size == 0 {
        return Err(ExportError::ZeroSize);
    }
    let len = snapshot.len();
    if cols == 0 || len == 0 || len % cols as usize != 0 {
        return Err(ExportError::Shape { len, cols });
    }
    let rows = (len / cols as usize) as u32;

    let width = options.size;
    let height = ((width as u64 * rows as u64) / cols as u64).max(1);
    if width > MAX_EXPORT_SIDE || height > MAX_EXPORT_SIDE as u64 {
        return Err(ExportError::TooLarge { width, height });
    }
    let height = height as u32;
    let byte_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(4))
        .ok_or(ExportError::TooLarge { width, height: height as u64 })?;

    let cell_px = width.div_ceil(cols);
    let mut pixels = vec![0u8; byte_len];

    for (idx, color) in snapshot.colors().iter().enumerate() {
        let color = if *color == options.background {
            if options.transparent { Color::TRANSPARENT } else { options.background }
        } else {
            Color::rgb(color.r(), color.g(), color.b())
        };
        let rgba = color.to_rgba_bytes();

        let row = (idx / cols as usize) as u32;
        let column = (idx % cols as usize) as u32;
        let start_x = column.saturating_mul(cell_px);
        let start_y = row.saturating_mul(cell_px);
        if start_x >= width || start_y >= height {
            continue;
        }
        let end_x = start_x.saturating_add(cell_px).min(width);
        let end_y = start_y.saturating_add(cell_px).min(height);

        for y in start_y..end_y {
            let row_offset = (y as usize) * (width as usize);
            for x in start_x..end_x {
                let offset = (row_offset + x as usize) * 4;
                pixels[offset..offset + 4].copy_from_slice(&rgba);
            }
        }
    }

    Ok(Bitmap { width, height, pixels })
}

pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, ExportError> {
    let image = RgbaImage::from_raw(bitmap.width, bitmap.height, bitmap.pixels.clone())
        .ok_or(ExportError::Shape { len: bitmap.pixels.len() / 4, cols: bitmap.width })?;
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMBER: Color = Color::hex(0xeaaf4d);

    fn snapshot_with(idx: usize, color: Color) -> Snapshot {
        let mut colors = vec![Color::WHITE; 256];
        colors[idx] = color;
        Snapshot::new(colors)
    }

    fn options(size: u32, transparent: bool) -> ExportOptions {
        ExportOptions { size, transparent, background: Color::WHITE }
    }

    #[test]
    fn transparent_export_clears_background_cells() {
        let bmp = render_snapshot(&snapshot_with(0, AMBER), 16, &options(64, true)).unwrap();
        assert_eq!((bmp.width, bmp.height), (64, 64));
        assert_eq!(bmp.pixel(0, 0), Some([0xea, 0xaf, 0x4d, 0xff]));
        assert_eq!(bmp.pixel(3, 3), Some([0xea, 0xaf, 0x4d, 0xff]));
        assert_eq!(bmp.pixel(4, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn opaque_export_keeps_background_color() {
        let bmp = render_snapshot(&snapshot_with(0, AMBER), 16, &options(64, false)).unwrap();
        assert_eq!(bmp.pixel(63, 63), Some([0xff, 0xff, 0xff, 0xff]));
    }

    #[test]
    fn cell_size_rounds_up_and_clips() {
        // ceil(40 / 16) = 3px cells; cell 13 starts at x=39 and is clipped to 1px
        let bmp = render_snapshot(&snapshot_with(13, AMBER), 16, &options(40, true)).unwrap();
        assert_eq!(bmp.width, 40);
        assert_eq!(bmp.pixel(39, 0), Some([0xea, 0xaf, 0x4d, 0xff]));
        assert_eq!(bmp.pixel(38, 0), Some([0, 0, 0, 0]));
        assert_eq!(bmp.pixel(39, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            render_snapshot(&snapshot_with(0, AMBER), 16, &options(0, true)),
            Err(ExportError::ZeroSize)
        ));
        assert!(matches!(
            render_snapshot(&Snapshot::new(vec![AMBER; 10]), 16, &options(32, true)),
            Err(ExportError::Shape { len: 10, cols: 16 })
        ));
    }

    #[test]
    fn oversized_exports_are_rejected() {
        let snapshot = snapshot_with(0, AMBER);
        assert!(matches!(
            render_snapshot(&snapshot, 16, &options(u32::MAX, true)),
            Err(ExportError::TooLarge { width: u32::MAX, .. })
        ));
        assert!(matches!(
            render_snapshot(&snapshot, 16, &options(MAX_EXPORT_SIDE + 1, false)),
            Err(ExportError::TooLarge { .. })
        ));
        // one column of 256 rows: 64px wide means 16384px tall
        assert!(matches!(
            render_snapshot(&snapshot, 1, &options(64, true)),
            Err(ExportError::TooLarge { width: 64, height: 16384 })
        ));

        // a single row at the limit is still accepted
        let strip = Snapshot::new(vec![AMBER; 16]);
        let bmp = render_snapshot(&strip, 16, &options(MAX_EXPORT_SIDE, true)).unwrap();
        assert_eq!((bmp.width, bmp.height), (MAX_EXPORT_SIDE, MAX_EXPORT_SIDE / 16));
    }

    #[test]
    fn png_has_signature() {
        let bmp = render_snapshot(&snapshot_with(5, AMBER), 16, &options(32, true)).unwrap();
        let png = encode_png(&bmp).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }
}
