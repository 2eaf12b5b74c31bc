//! Default values applied when a level description leaves a field out

/// Theme colors
pub mod theme {
    pub const BG: &str = "#F0F0F0";
    pub const PLATFORM: &str = "#C8C8C8";
    pub const BLOB: &str = "#1478FF";
}

/// Physics constants
pub mod physics {
    pub const GRAVITY: f32 = 0.65;
    /// Initial jump velocity (negative is up)
    pub const JUMP_V: f32 = -11.0;
}

/// Player spawn point
pub mod spawn {
    pub const X: f32 = 80.0;
    pub const Y: f32 = 180.0;
    pub const R: f32 = 26.0;
}

pub const LEVEL_NAME: &str = "Level";

/// Deterministic stairs generator
pub mod stairs {
    pub const WORLD_W: f32 = 640.0;
    pub const FLOOR_Y: f32 = 324.0;
    pub const FLOOR_H: f32 = 36.0;
    pub const START_X: f32 = 120.0;
    pub const START_Y: f32 = 290.0;
    pub const STEP_W: f32 = 80.0;
    pub const STEP_H: f32 = 12.0;
    pub const RISE: f32 = 22.0;
    pub const COUNT: u32 = 8;
}

/// Seeded random-hops generator
pub mod random_hops {
    pub const WORLD_W: f32 = 900.0;
    pub const FLOOR_Y: f32 = 324.0;
    pub const FLOOR_H: f32 = 36.0;
    pub const COUNT: u32 = 10;
    pub const PLAT_H: f32 = 12.0;
    pub const PLAT_W_MIN: f32 = 70.0;
    pub const PLAT_W_MAX: f32 = 120.0;
    pub const GAP_MIN: f32 = 55.0;
    pub const GAP_MAX: f32 = 95.0;
    pub const RISE_MIN: f32 = -15.0;
    pub const RISE_MAX: f32 = 25.0;
    pub const START_X: f32 = 140.0;
    pub const START_Y: f32 = 280.0;

    /// Highest a hop platform may sit (smallest y)
    pub const MIN_Y: f32 = 110.0;
    /// Clearance kept between the lowest hop platform and the floor
    pub const FLOOR_CLEARANCE: f32 = 60.0;
}

/// Canvas size used when a level has no platforms at all
pub mod canvas {
    pub const WIDTH: f32 = 640.0;
    pub const HEIGHT: f32 = 360.0;
}
