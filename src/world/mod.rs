//! World module - platformer levels built from descriptions
//!
//! - Level descriptions with every field optional
//! - Per-field default resolution into a ready-to-use `Level`
//! - Procedural stairs and seeded random-hops platform generators
//! - Canvas size inference from platform geometry

pub mod defaults;
mod description;
mod generator;
mod level;
mod loader;
mod rect;

pub use description::*;
pub use generator::{generate, random_hops, stairs, HopsLayout, StairsLayout};
pub use level::*;
pub use loader::*;
pub use rect::Rect;
