//! Platform entity

use macroquad::color::Color;

use super::Canvas;
use crate::world::Rect;

/// A walkable surface, drawn as a filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, fill: Color) {
        canvas.fill_rect(self.rect, fill);
    }
}

impl From<Rect> for Platform {
    fn from(rect: Rect) -> Self {
        Self::new(rect)
    }
}
