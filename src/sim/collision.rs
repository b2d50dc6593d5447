//! Projectile vs target overlap test
//!
//! Projectiles are treated as their circumscribing square, so the test is a
//! plain axis-aligned box overlap. Touching edges do not count.

use glam::Vec2;

use super::projectile::Projectile;
use super::target::Target;

/// Strict AABB overlap between two boxes given as (min, max) corners
#[inline]
fn aabb_overlap(a_min: Vec2, a_max: Vec2, b_min: Vec2, b_max: Vec2) -> bool {
    a_max.x > b_min.x && a_min.x < b_max.x && a_max.y > b_min.y && a_min.y < b_max.y
}

/// Does the projectile's bounding square overlap the target?
pub fn projectile_hits_target(projectile: &Projectile, target: &Target) -> bool {
    let r = Vec2::splat(projectile.radius);
    aabb_overlap(
        projectile.pos - r,
        projectile.pos + r,
        target.pos,
        target.pos + Vec2::splat(target.size()),
    )
}

/// Index of the first target hit, scanning from the highest index down
pub fn first_hit_reverse(projectile: &Projectile, targets: &[Target]) -> Option<usize> {
    (0..targets.len())
        .rev()
        .find(|&j| projectile_hits_target(projectile, &targets[j]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::target::SizeTier;

    fn target_at(x: f32, y: f32, tier: SizeTier) -> Target {
        Target::new(tier, Vec2::new(x, y), Vec2::ZERO)
    }

    #[test]
    fn test_hit_inside() {
        let p = Projectile::new(Vec2::new(5.0, 5.0), 0.0);
        assert!(projectile_hits_target(&p, &target_at(0.0, 0.0, SizeTier::Tiny)));
    }

    #[test]
    fn test_hit_by_radius_only() {
        // Center 4px left of the target, radius reaches in
        let p = Projectile::new(Vec2::new(96.0, 110.0), 0.0);
        assert!(projectile_hits_target(&p, &target_at(100.0, 100.0, SizeTier::Tiny)));
    }

    #[test]
    fn test_touching_edge_is_miss() {
        let p = Projectile::new(Vec2::new(95.0, 110.0), 0.0);
        assert!(!projectile_hits_target(&p, &target_at(100.0, 100.0, SizeTier::Tiny)));
    }

    #[test]
    fn test_clear_miss() {
        let p = Projectile::new(Vec2::new(400.0, 550.0), 0.0);
        assert!(!projectile_hits_target(&p, &target_at(0.0, 0.0, SizeTier::Huge)));
    }

    #[test]
    fn test_reverse_scan_prefers_highest_index() {
        let p = Projectile::new(Vec2::new(50.0, 50.0), 0.0);
        let targets = vec![
            target_at(30.0, 30.0, SizeTier::Huge),
            target_at(400.0, 400.0, SizeTier::Tiny),
            target_at(40.0, 40.0, SizeTier::Tiny),
        ];
        assert_eq!(first_hit_reverse(&p, &targets), Some(2));
        assert_eq!(first_hit_reverse(&p, &targets[..2]), Some(0));
        assert_eq!(first_hit_reverse(&p, &targets[1..2]), None);
    }
}
