//! Projectiles fired by the turret
//!
//! A projectile travels at constant speed along a fixed heading and
//! reflects off all four arena walls. It is only ever removed by a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::heading_vector;

/// A projectile entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Heading in radians (-π/2 is up). Unnormalized.
    pub heading: f32,
    pub radius: f32,
    pub speed: f32,
}

impl Projectile {
    pub fn new(origin: Vec2, heading: f32) -> Self {
        Self {
            pos: origin,
            heading,
            radius: PROJECTILE_RADIUS,
            speed: PROJECTILE_SPEED,
        }
    }

    /// Displacement per tick
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        heading_vector(self.heading) * self.speed
    }

    /// Move one tick and reflect off any wall being touched
    pub fn advance(&mut self) {
        self.pos += self.velocity();

        let dir = heading_vector(self.heading);

        // Only reflect while still heading into the wall, so a projectile
        // that is inside the touch band after bouncing doesn't flip back.
        let touch_left = self.pos.x - self.radius <= 0.0 && dir.x < 0.0;
        let touch_right = self.pos.x + self.radius >= ARENA_WIDTH && dir.x > 0.0;
        if touch_left || touch_right {
            self.heading = std::f32::consts::PI - self.heading;
        }

        let touch_top = self.pos.y - self.radius <= 0.0 && dir.y < 0.0;
        let touch_bottom = self.pos.y + self.radius >= ARENA_HEIGHT && dir.y > 0.0;
        if touch_top || touch_bottom {
            self.heading = -self.heading;
        }

        self.pos.x = self.pos.x.clamp(0.0, ARENA_WIDTH);
        self.pos.y = self.pos.y.clamp(0.0, ARENA_HEIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_moves_along_heading() {
        let mut p = Projectile::new(Vec2::new(400.0, 550.0), -FRAC_PI_2);
        p.advance();
        assert!((p.pos.x - 400.0).abs() < 0.001);
        assert!((p.pos.y - 545.0).abs() < 0.001);
        assert!((p.heading + FRAC_PI_2).abs() < 0.0001);
    }

    #[test]
    fn test_left_wall_reflects_to_zero() {
        let mut p = Projectile::new(Vec2::new(2.0, 300.0), PI);
        p.advance();
        // π - π = 0: now heading right
        assert!(p.heading.abs() < 0.0001);
        assert!(heading_vector(p.heading).x > 0.0);
        assert!(p.pos.x >= 0.0);
    }

    #[test]
    fn test_no_double_flip_inside_band() {
        let mut p = Projectile::new(Vec2::new(2.0, 300.0), PI);
        p.advance();
        let after_bounce = p.heading;
        p.advance();
        // Still in the touch band but moving away: heading kept
        assert_eq!(p.heading, after_bounce);
        assert!(p.pos.x > 2.0);
    }

    #[test]
    fn test_top_wall_negates_heading() {
        let mut p = Projectile::new(Vec2::new(300.0, 7.0), -FRAC_PI_2);
        p.advance();
        assert!((p.heading - FRAC_PI_2).abs() < 0.0001);
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let heading = -3.0 * PI / 4.0; // up-left
        let mut p = Projectile::new(Vec2::new(6.0, 6.0), heading);
        p.advance();
        let dir = heading_vector(p.heading);
        assert!(dir.x > 0.0);
        assert!(dir.y > 0.0);
    }
}
