//! Test-only surface that records draw calls instead of painting.

use glam::Vec2;

use crate::surface::{Color, Surface};

#[derive(Default)]
pub struct RecordingSurface {
    pub clears: usize,
    pub discs: Vec<(Vec2, f32, Color)>,
    pub lines: Vec<(Vec2, Vec2, f32, Color)>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Color) {
        self.discs.push((center, radius, color));
    }

    fn stroke_line(&mut self, a: Vec2, b: Vec2, width: f32, color: Color) {
        self.lines.push((a, b, width, color));
    }
}
