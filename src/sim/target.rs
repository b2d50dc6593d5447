//! Bouncing square targets
//!
//! Each target belongs to a size tier which fixes its color, point value and
//! the chance that a hit actually destroys it. Bigger targets are worth more
//! but are much harder to knock out.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Target size tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeTier {
    /// 30px, green
    Tiny,
    /// 40px, blue
    Small,
    /// 50px, purple
    Medium,
    /// 60px, pink
    Large,
    /// 80px, gold
    Huge,
}

impl SizeTier {
    /// All tiers, smallest first
    pub const ALL: [SizeTier; 5] = [
        SizeTier::Tiny,
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
        SizeTier::Huge,
    ];

    /// Pick a tier uniformly
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Edge length in pixels
    pub fn size(&self) -> f32 {
        match self {
            SizeTier::Tiny => 30.0,
            SizeTier::Small => 40.0,
            SizeTier::Medium => 50.0,
            SizeTier::Large => 60.0,
            SizeTier::Huge => 80.0,
        }
    }

    /// CSS fill color
    pub fn color(&self) -> &'static str {
        match self {
            SizeTier::Tiny => "#00FF00",
            SizeTier::Small => "#0000FF",
            SizeTier::Medium => "#800080",
            SizeTier::Large => "#FFC0CB",
            SizeTier::Huge => "#FFD700",
        }
    }

    /// Probability that a hit destroys the target
    pub fn disappear_chance(&self) -> f32 {
        match self {
            SizeTier::Tiny => 0.5,
            SizeTier::Small => 0.2,
            SizeTier::Medium => 0.1,
            SizeTier::Large => 0.05,
            SizeTier::Huge => 0.02,
        }
    }

    /// Points awarded when destroyed
    pub fn score(&self) -> u32 {
        match self {
            SizeTier::Tiny => 2,
            SizeTier::Small => 5,
            SizeTier::Medium => 10,
            SizeTier::Large => 20,
            SizeTier::Huge => 50,
        }
    }
}

/// Arena edge a target enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    fn random(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..4) {
            0 => Edge::Top,
            1 => Edge::Right,
            2 => Edge::Bottom,
            _ => Edge::Left,
        }
    }
}

/// A target entity (axis-aligned square, `pos` is the top-left corner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub vel: Vec2,
    pub tier: SizeTier,
    /// Copied from the tier at creation; tools may override it
    pub disappear_chance: f32,
}

impl Target {
    pub fn new(tier: SizeTier, pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            tier,
            disappear_chance: tier.disappear_chance(),
        }
    }

    /// Create a random target flush against a random arena edge
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let tier = SizeTier::random(rng);
        let edge = Edge::random(rng);
        let pos = Self::edge_position(edge, tier.size(), rng);
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * 2.0,
            (rng.random::<f32>() - 0.5) * 2.0,
        );
        Self::new(tier, pos, vel)
    }

    /// Random point along `edge`, clamped so the whole square is inside
    fn edge_position(edge: Edge, size: f32, rng: &mut impl Rng) -> Vec2 {
        let max_x = ARENA_WIDTH - size;
        let max_y = ARENA_HEIGHT - size;
        let pos = match edge {
            Edge::Top => Vec2::new(rng.random::<f32>() * ARENA_WIDTH, 0.0),
            Edge::Right => Vec2::new(ARENA_WIDTH, rng.random::<f32>() * ARENA_HEIGHT),
            Edge::Bottom => Vec2::new(rng.random::<f32>() * ARENA_WIDTH, ARENA_HEIGHT),
            Edge::Left => Vec2::new(0.0, rng.random::<f32>() * ARENA_HEIGHT),
        };
        Vec2::new(pos.x.clamp(0.0, max_x), pos.y.clamp(0.0, max_y))
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.tier.size()
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.tier.score()
    }

    #[inline]
    pub fn color(&self) -> &'static str {
        self.tier.color()
    }

    /// Move one tick, bouncing off the arena walls
    pub fn advance(&mut self) {
        self.pos += self.vel;

        let size = self.size();
        let max_x = ARENA_WIDTH - size;
        let max_y = ARENA_HEIGHT - size;

        // Point velocity back into the arena rather than blindly negating,
        // so a target resting on a wall can't jitter in place.
        if self.pos.x <= 0.0 {
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x >= max_x {
            self.vel.x = -self.vel.x.abs();
        }
        if self.pos.y <= 0.0 {
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y >= max_y {
            self.vel.y = -self.vel.y.abs();
        }

        self.pos.x = self.pos.x.clamp(0.0, max_x);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_tier_table() {
        let rows: Vec<_> = SizeTier::ALL
            .iter()
            .map(|t| (t.size(), t.color(), t.disappear_chance(), t.score()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (30.0, "#00FF00", 0.5, 2),
                (40.0, "#0000FF", 0.2, 5),
                (50.0, "#800080", 0.1, 10),
                (60.0, "#FFC0CB", 0.05, 20),
                (80.0, "#FFD700", 0.02, 50),
            ]
        );
    }

    #[test]
    fn test_spawn_on_edge_and_inside() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let t = Target::spawn(&mut rng);
            let max_x = ARENA_WIDTH - t.size();
            let max_y = ARENA_HEIGHT - t.size();
            assert!((0.0..=max_x).contains(&t.pos.x));
            assert!((0.0..=max_y).contains(&t.pos.y));
            let on_edge = t.pos.x == 0.0 || t.pos.x == max_x || t.pos.y == 0.0 || t.pos.y == max_y;
            assert!(on_edge, "spawned off-edge at {:?}", t.pos);
            assert!((-1.0..1.0).contains(&t.vel.x));
            assert!((-1.0..1.0).contains(&t.vel.y));
            assert_eq!(t.disappear_chance, t.tier.disappear_chance());
        }
    }

    #[test]
    fn test_spawn_covers_every_tier() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Target::spawn(&mut rng).tier);
        }
        assert_eq!(seen.len(), SizeTier::ALL.len());
    }

    #[test]
    fn test_bounce_left_wall() {
        let mut t = Target::new(SizeTier::Tiny, Vec2::new(0.5, 100.0), Vec2::new(-1.0, 0.0));
        t.advance();
        assert_eq!(t.pos.x, 0.0);
        assert_eq!(t.vel.x, 1.0);
    }

    #[test]
    fn test_bounce_bottom_wall_clamps() {
        let mut t = Target::new(SizeTier::Huge, Vec2::new(100.0, 519.5), Vec2::new(0.0, 0.9));
        t.advance();
        assert_eq!(t.pos.y, ARENA_HEIGHT - 80.0);
        assert!(t.vel.y < 0.0);
    }

    #[test]
    fn test_free_flight_unchanged_velocity() {
        let mut t = Target::new(SizeTier::Medium, Vec2::new(300.0, 300.0), Vec2::new(0.5, -0.25));
        t.advance();
        assert_eq!(t.pos, Vec2::new(300.5, 299.75));
        assert_eq!(t.vel, Vec2::new(0.5, -0.25));
    }
}
