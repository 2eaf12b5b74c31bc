//! blobhop: data-driven platformer levels
//!
//! A level description (JSON) lists a theme, physics constants, a spawn
//! point and authored platforms, and may ask for procedurally generated
//! platforms:
//! - `stairs`: a floor plus an evenly spaced staircase
//! - `randomHops`: a floor plus randomly sized and spaced platforms,
//!   reproducible when a seed is given
//!
//! [`world::Level::build`] resolves the description with per-field defaults;
//! [`render::LevelView`] draws the result through a [`render::Canvas`].

pub mod logging;
pub mod render;
pub mod world;

pub use world::{Level, LevelDescription, LevelError, Rect};
