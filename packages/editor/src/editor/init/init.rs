use crate::domain::palette::Palette;
use crate::input::InputClassifier;
use crate::render::Renderer;
use crate::spatial::grid::GridModel;

use super::config::EditorConfig;
use super::frame_stats::FrameStats;
use super::EditorSession;

/// Build a session from an already validated config.
pub(super) fn create_session(config: EditorConfig) -> EditorSession {
    let mut grid = GridModel::new(
        config.rows,
        config.cols,
        config.width,
        config.height,
        config.background,
    );
    grid.reset();

    let palette = Palette::new(config.palette.iter().copied(), config.current_color)
        .unwrap_or_default();
    let classifier = InputClassifier::new(
        *grid.geometry(),
        config.drag_delay_ms,
        config.strict_release_bounds,
    );
    let renderer = Renderer::new(config.grid_line_color, config.grid_line_width);

    console_log!(
        "sprite editor: {}x{} grid on {}x{}px, {} colors",
        config.rows,
        config.cols,
        config.width,
        config.height,
        palette.len()
    );

    EditorSession {
        config,
        grid,
        palette,
        classifier,
        renderer,
        stats: FrameStats::default(),
    }
}
