//! Rendering - background and platform draw pass
//!
//! Drawing goes through the [`Canvas`] trait so the draw order can be
//! checked without a window. [`MacroquadCanvas`] is the real backend.

mod color;
mod platform;

pub use color::*;
pub use platform::Platform;

use macroquad::color::Color;
use macroquad::shapes::{draw_circle, draw_rectangle};
use macroquad::window::{clear_background, screen_height, screen_width};

use crate::world::{Level, Rect, SpawnPoint};

/// Drawing primitives needed to show a level
pub trait Canvas {
    fn background(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color);
}

/// Canvas that draws to the macroquad window, scaling world units uniformly.
pub struct MacroquadCanvas {
    pub scale: f32,
}

impl MacroquadCanvas {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// Largest scale at which a `world_w` x `world_h` world fits the window
    pub fn fit(world_w: f32, world_h: f32) -> Self {
        let sx = screen_width() / world_w.max(1.0);
        let sy = screen_height() / world_h.max(1.0);
        Self::new(sx.min(sy))
    }
}

impl Canvas for MacroquadCanvas {
    fn background(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let s = self.scale;
        draw_rectangle(rect.x * s, rect.y * s, rect.w * s, rect.h * s, color);
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color) {
        let s = self.scale;
        draw_circle(x * s, y * s, r * s, color);
    }
}

/// A level ready to draw: platform entities plus converted theme colors.
pub struct LevelView {
    pub colors: ThemeColors,
    pub platforms: Vec<Platform>,
    pub spawn: SpawnPoint,
}

impl LevelView {
    pub fn new(level: &Level) -> Self {
        Self {
            colors: ThemeColors::resolve(&level.theme),
            platforms: level.platforms.iter().copied().map(Platform::from).collect(),
            spawn: level.start,
        }
    }

    /// Fill the background, then draw platforms in list order.
    pub fn draw_world(&self, canvas: &mut dyn Canvas) {
        canvas.background(self.colors.bg);
        for platform in &self.platforms {
            platform.draw(canvas, self.colors.platform);
        }
    }

    /// Spawn marker: a blob-colored circle of the spawn radius
    pub fn draw_spawn(&self, canvas: &mut dyn Canvas) {
        canvas.fill_circle(self.spawn.x, self.spawn.y, self.spawn.r, self.colors.blob);
    }

    /// Index of the topmost platform under a world-space point
    pub fn platform_at(&self, x: f32, y: f32) -> Option<usize> {
        self.platforms.iter().rposition(|p| p.rect.contains(x, y))
    }
}
