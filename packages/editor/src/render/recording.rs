use crate::domain::color::Color;
use crate::spatial::grid::Rect;

use super::surface::DrawSurface;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    ImageSmoothing(bool),
    Clear(Rect),
    Fill(Rect, Color),
    Stroke { points: Vec<(f64, f64)>, color: Color, line_width: f64 },
}

/// Headless surface that keeps every draw call in order.
#[derive(Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Rect, &Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Fill(rect, color) => Some((rect, color)),
            _ => None,
        })
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn set_image_smoothing(&mut self, enabled: bool) {
        self.commands.push(DrawCommand::ImageSmoothing(enabled));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Fill(rect, color));
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], color: Color, line_width: f64) {
        self.commands.push(DrawCommand::Stroke {
            points: points.to_vec(),
            color,
            line_width,
        });
    }
}
