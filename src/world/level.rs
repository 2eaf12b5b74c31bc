//! Resolved levels
//!
//! `Level::build` turns a [`LevelDescription`] into a ready-to-use level:
//! every missing field gets its default independently, authored platforms
//! come first and generated ones are appended after them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::defaults;
use super::description::{LevelDescription, SpawnDescription, ThemeDescription};
use super::generator;
use super::Rect;

/// Color strings for background, platforms and the player blob.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub bg: String,
    pub platform: String,
    pub blob: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: defaults::theme::BG.to_string(),
            platform: defaults::theme::PLATFORM.to_string(),
            blob: defaults::theme::BLOB.to_string(),
        }
    }
}

impl Theme {
    fn resolve(desc: Option<&ThemeDescription>) -> Self {
        let mut theme = Self::default();
        if let Some(desc) = desc {
            if let Some(bg) = &desc.bg {
                theme.bg = bg.clone();
            }
            if let Some(platform) = &desc.platform {
                theme.platform = platform.clone();
            }
            if let Some(blob) = &desc.blob {
                theme.blob = blob.clone();
            }
        }
        theme
    }
}

/// Player spawn position and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

impl Default for SpawnPoint {
    fn default() -> Self {
        Self {
            x: defaults::spawn::X,
            y: defaults::spawn::Y,
            r: defaults::spawn::R,
        }
    }
}

impl SpawnPoint {
    fn resolve(desc: Option<&SpawnDescription>) -> Self {
        let desc = desc.copied().unwrap_or_default();
        Self {
            x: desc.x.unwrap_or(defaults::spawn::X),
            y: desc.y.unwrap_or(defaults::spawn::Y),
            r: desc.r.unwrap_or(defaults::spawn::R),
        }
    }
}

/// A fully resolved level.
///
/// Platforms are in draw order: later entries are drawn on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub name: String,
    pub theme: Theme,
    pub gravity: f32,
    pub jump_v: f32,
    pub start: SpawnPoint,
    pub platforms: Vec<Rect>,
}

impl Level {
    /// Build a level. Unseeded random generators draw from fresh entropy.
    pub fn build(desc: &LevelDescription) -> Self {
        Self::build_with_rng(desc, &mut StdRng::from_entropy())
    }

    /// Build a level, drawing unseeded randomness from `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(desc: &LevelDescription, rng: &mut R) -> Self {
        let name = desc
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(defaults::LEVEL_NAME)
            .to_string();

        let mut platforms = desc.platforms.clone().unwrap_or_default();
        let authored = platforms.len();
        if let Some(config) = &desc.generated {
            platforms.extend(generator::generate(config, rng));
        }

        log::debug!(
            "built level '{}': {} authored + {} generated platforms",
            name,
            authored,
            platforms.len() - authored
        );

        Self {
            name,
            theme: Theme::resolve(desc.theme.as_ref()),
            gravity: desc.gravity.unwrap_or(defaults::physics::GRAVITY),
            jump_v: desc.jump_v.unwrap_or(defaults::physics::JUMP_V),
            start: SpawnPoint::resolve(desc.start.as_ref()),
            platforms,
        }
    }

    /// Rightmost platform edge, or `default_w` when there are no platforms.
    ///
    /// Only platforms count; the spawn point may lie outside this width.
    pub fn infer_width(&self, default_w: f32) -> f32 {
        self.platforms
            .iter()
            .map(Rect::right)
            .reduce(f32::max)
            .unwrap_or(default_w)
    }

    /// Lowest platform edge, or `default_h` when there are no platforms.
    pub fn infer_height(&self, default_h: f32) -> f32 {
        self.platforms
            .iter()
            .map(Rect::bottom)
            .reduce(f32::max)
            .unwrap_or(default_h)
    }

    /// Canvas size as (width, height) inferred from the platforms
    pub fn canvas_size(&self, default_w: f32, default_h: f32) -> (f32, f32) {
        (self.infer_width(default_w), self.infer_height(default_h))
    }
}
