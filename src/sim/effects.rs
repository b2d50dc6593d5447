//! Short-lived visual effects
//!
//! Collision bursts and score popups count down a fixed number of ticks and
//! then vanish. Nothing in the simulation reads them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BURST_LIFETIME, POPUP_LIFETIME};

/// Tick countdown with derived opacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining: u32,
    pub total: u32,
}

impl Lifetime {
    pub fn new(total: u32) -> Self {
        Self {
            remaining: total,
            total,
        }
    }

    /// Count down one tick, returns true while still alive
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }

    /// 1.0 when fresh, 0.0 when expired
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.remaining as f32 / self.total as f32
        }
    }
}

/// Common lifecycle for transient effects
pub trait Transient {
    /// Advance one tick. Returns false once the effect has expired.
    fn advance(&mut self) -> bool;

    fn opacity(&self) -> f32;
}

/// Drop every effect that reports itself expired this tick
pub fn expire<T: Transient>(effects: &mut Vec<T>) {
    effects.retain_mut(|e| e.advance());
}

/// Burst drawn where a projectile struck a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionBurst {
    pub pos: Vec2,
    pub life: Lifetime,
}

impl CollisionBurst {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            life: Lifetime::new(BURST_LIFETIME),
        }
    }

    /// Grows from half size to full size over its life
    pub fn scale(&self) -> f32 {
        1.0 - self.life.fraction() * 0.5
    }
}

impl Transient for CollisionBurst {
    fn advance(&mut self) -> bool {
        self.life.tick()
    }

    fn opacity(&self) -> f32 {
        self.life.fraction()
    }
}

/// "+N" text shown above the turret after a scoring hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePopup {
    pub pos: Vec2,
    pub score: u32,
    pub life: Lifetime,
}

impl ScorePopup {
    pub fn new(score: u32, pos: Vec2) -> Self {
        Self {
            pos,
            score,
            life: Lifetime::new(POPUP_LIFETIME),
        }
    }

    pub fn text(&self) -> String {
        format!("+{}", self.score)
    }
}

impl Transient for ScorePopup {
    fn advance(&mut self) -> bool {
        self.life.tick()
    }

    fn opacity(&self) -> f32 {
        self.life.fraction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of advance() calls until the effect reports dead
    fn ticks_until_expired<T: Transient>(mut effect: T) -> u32 {
        let mut n = 0;
        loop {
            n += 1;
            if !effect.advance() {
                return n;
            }
        }
    }

    #[test]
    fn test_burst_lives_30_ticks() {
        assert_eq!(ticks_until_expired(CollisionBurst::new(Vec2::ZERO)), 30);
    }

    #[test]
    fn test_popup_lives_60_ticks() {
        assert_eq!(ticks_until_expired(ScorePopup::new(5, Vec2::ZERO)), 60);
    }

    #[test]
    fn test_opacity_fades_linearly() {
        let mut popup = ScorePopup::new(10, Vec2::new(400.0, 520.0));
        assert_eq!(popup.opacity(), 1.0);
        for _ in 0..30 {
            popup.advance();
        }
        assert!((popup.opacity() - 0.5).abs() < 1e-6);
        assert_eq!(popup.text(), "+10");
    }

    #[test]
    fn test_burst_scale_grows() {
        let mut burst = CollisionBurst::new(Vec2::ZERO);
        assert!((burst.scale() - 0.5).abs() < 1e-6);
        burst.advance();
        assert!(burst.scale() > 0.5);
    }

    #[test]
    fn test_expire_filters_dead() {
        let mut bursts = vec![CollisionBurst::new(Vec2::ZERO), CollisionBurst::new(Vec2::ONE)];
        bursts[0].life.remaining = 1;
        expire(&mut bursts);
        assert_eq!(bursts.len(), 1);
        assert_eq!(bursts[0].pos, Vec2::ONE);
        assert_eq!(bursts[0].life.remaining, 29);
    }
}
