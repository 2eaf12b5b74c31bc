//! Procedural platform generators
//!
//! Two layouts are supported:
//! - Stairs: a floor plus evenly spaced steps climbing to the right
//! - Random hops: a floor plus platforms with random widths, gaps and rises
//!
//! Both emit the floor first. Random hops take an explicit random source;
//! a configured seed replaces it with a private seeded generator, so a
//! seeded layout never advances the caller's stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::defaults::random_hops::{FLOOR_CLEARANCE, MIN_Y};
use super::description::GeneratorConfig;
use super::Rect;

/// Fully resolved stairs parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StairsLayout {
    pub world_w: f32,
    pub floor_y: f32,
    pub floor_h: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub step_w: f32,
    pub step_h: f32,
    pub rise: f32,
    pub count: u32,
}

/// Fully resolved random-hops parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HopsLayout {
    pub world_w: f32,
    pub floor_y: f32,
    pub floor_h: f32,
    pub count: u32,
    pub plat_h: f32,
    pub plat_w_min: f32,
    pub plat_w_max: f32,
    pub gap_min: f32,
    pub gap_max: f32,
    pub rise_min: f32,
    pub rise_max: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub seed: Option<u64>,
}

impl HopsLayout {
    /// Vertical band hop platforms are kept inside, as (top, bottom)
    pub fn band(&self) -> (f32, f32) {
        (MIN_Y, self.floor_y - FLOOR_CLEARANCE)
    }
}

/// Run the generator selected by `config`.
pub fn generate<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Vec<Rect> {
    match config {
        GeneratorConfig::Stairs(params) => stairs(&params.resolve()),
        GeneratorConfig::RandomHops(params) => random_hops(&params.resolve(), rng),
        GeneratorConfig::Unknown => {
            log::warn!("unknown generator type, no platforms generated");
            Vec::new()
        }
    }
}

/// Floor followed by `count` steps, each one `step_w` right and `rise` up.
pub fn stairs(layout: &StairsLayout) -> Vec<Rect> {
    let mut out = Vec::with_capacity(layout.count as usize + 1);
    out.push(Rect::new(0.0, layout.floor_y, layout.world_w, layout.floor_h));

    for i in 0..layout.count {
        let i = i as f32;
        out.push(Rect::new(
            layout.start_x + i * layout.step_w,
            layout.start_y - i * layout.rise,
            layout.step_w,
            layout.step_h,
        ));
    }

    out
}

/// Floor followed by `count` platforms laid out left to right.
///
/// Each platform gets a random integer width, then the cursor moves right by
/// that width plus a random gap and up by a random rise, staying inside
/// [`HopsLayout::band`].
pub fn random_hops<R: Rng + ?Sized>(layout: &HopsLayout, rng: &mut R) -> Vec<Rect> {
    match layout.seed {
        Some(seed) => hops_with(layout, &mut StdRng::seed_from_u64(seed)),
        None => hops_with(layout, rng),
    }
}

fn hops_with<R: Rng + ?Sized>(layout: &HopsLayout, rng: &mut R) -> Vec<Rect> {
    let (top, bottom) = layout.band();

    let mut out = Vec::with_capacity(layout.count as usize + 1);
    out.push(Rect::new(0.0, layout.floor_y, layout.world_w, layout.floor_h));

    let mut x = layout.start_x;
    let mut y = constrain(layout.start_y, top, bottom);

    for _ in 0..layout.count {
        let w = draw_int(rng, layout.plat_w_min, layout.plat_w_max);
        out.push(Rect::new(x, y, w, layout.plat_h));

        let gap = draw_int(rng, layout.gap_min, layout.gap_max);
        let dy = draw_int(rng, layout.rise_min, layout.rise_max);

        x += w + gap;
        y = constrain(y - dy, top, bottom);
    }

    out
}

/// Uniform integer in `[lo, hi]`, both ends included. Reversed bounds are swapped.
fn draw_int<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let lo = lo.floor() as i32;
    let hi = hi.floor() as i32;
    rng.gen_range(lo..=hi) as f32
}

/// Clamp that tolerates `low > high` (returns `low`) instead of panicking.
fn constrain(value: f32, low: f32, high: f32) -> f32 {
    value.min(high).max(low)
}
