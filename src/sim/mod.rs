//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (reverse index walk during hit resolution)
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod projectile;
pub mod state;
pub mod target;
pub mod tick;

pub use collision::{first_hit_reverse, projectile_hits_target};
pub use effects::{CollisionBurst, Lifetime, ScorePopup, Transient, expire};
pub use projectile::Projectile;
pub use state::{GameEvent, GameState, Turret};
pub use target::{SizeTier, Target};
pub use tick::tick;
