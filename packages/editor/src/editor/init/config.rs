use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::color::Color;
use crate::domain::palette::{DEFAULT_CURRENT, DEFAULT_SWATCHES};
use crate::input::DEFAULT_DRAG_DELAY_MS;
use crate::persistence::DEFAULT_STORAGE_KEY;
use crate::spatial::grid::{DEFAULT_COLS, DEFAULT_ROWS};

// Largest grid the editor accepts (keeps the wasm heap bounded)
const MAX_CELLS: u64 = 1 << 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid dimensions: {rows}x{cols} cells on a {width}x{height}px canvas")]
    Dimensions { rows: u32, cols: u32, width: u32, height: u32 },
    #[error("drag delay must be a finite, non-negative number of ms (got {0})")]
    DragDelay(f64),
    #[error("grid line width must be positive (got {0})")]
    LineWidth(f64),
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Editor settings. Every field has a default, so a JSON config only
/// needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub rows: u32,
    pub cols: u32,
    /// Canvas pixel extent the grid is drawn onto.
    pub width: u32,
    pub height: u32,
    pub drag_delay_ms: f64,
    pub background: Color,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    /// Drag release must land strictly inside the canvas (edges excluded).
    pub strict_release_bounds: bool,
    pub storage_key: String,
    pub palette: Vec<Color>,
    pub current_color: Color,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            width: 256,
            height: 256,
            drag_delay_ms: DEFAULT_DRAG_DELAY_MS,
            background: Color::WHITE,
            grid_line_color: Color::BLACK,
            grid_line_width: 0.5,
            strict_release_bounds: true,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            palette: DEFAULT_SWATCHES.to_vec(),
            current_color: DEFAULT_CURRENT,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let cells = self.rows as u64 * self.cols as u64;
        if self.rows == 0 || self.cols == 0 || self.width == 0 || self.height == 0 || cells > MAX_CELLS {
            return Err(ConfigError::Dimensions {
                rows: self.rows,
                cols: self.cols,
                width: self.width,
                height: self.height,
            });
        }
        if !self.drag_delay_ms.is_finite() || self.drag_delay_ms < 0.0 {
            return Err(ConfigError::DragDelay(self.drag_delay_ms));
        }
        if !(self.grid_line_width > 0.0) || !self.grid_line_width.is_finite() {
            return Err(ConfigError::LineWidth(self.grid_line_width));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}
