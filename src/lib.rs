//! Turret Gallery - a turret shooting gallery for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (projectiles, targets, effects, scoring)
//! - `renderer`: Frame snapshot and Canvas 2D draw pass
//! - `platform`: Browser input mapping
//! - `hud`: Score text
//! - `settings`: Player preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Locale, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (canvas pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Turret base sits centered, 50px above the bottom edge
    pub const TURRET_X: f32 = ARENA_WIDTH / 2.0;
    pub const TURRET_Y: f32 = ARENA_HEIGHT - 50.0;
    /// Initial aim: straight up
    pub const TURRET_START_AIM: f32 = -std::f32::consts::FRAC_PI_2;
    /// Aim change per keystroke (radians)
    pub const AIM_STEP: f32 = 0.1;
    /// Fallback turret body radius and barrel length
    pub const TURRET_RADIUS: f32 = 20.0;
    pub const TURRET_BARREL: f32 = 30.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 5.0; // units per tick
    pub const MAX_PROJECTILES: usize = 10;

    /// Live target count (constant)
    pub const TARGET_COUNT: usize = 5;

    /// Scoring
    pub const STARTING_SCORE: u32 = 100;
    pub const SHOT_COST: u32 = 1;

    /// Effect lifetimes in ticks
    pub const BURST_LIFETIME: u32 = 30;
    pub const POPUP_LIFETIME: u32 = 60;
    /// Popups appear this far above the turret
    pub const POPUP_RISE: f32 = 30.0;
    /// Burst sprite edge length
    pub const BURST_SIZE: f32 = 40.0;
}

/// Unit vector for a heading (radians, screen space: -π/2 is up)
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
