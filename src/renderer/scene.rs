//! Read-only frame snapshot
//!
//! Everything the draw pass needs, captured from `GameState` once per frame.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GameState, Transient};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurretView {
    pub pos: Vec2,
    pub aim: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetView {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub color: &'static str,
    pub label: String,
}

impl TargetView {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Label font size scales with the square
    pub fn font_px(&self) -> f32 {
        self.size * 0.4
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub heading: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurstView {
    pub pos: Vec2,
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupView {
    pub pos: Vec2,
    pub opacity: f32,
    pub text: String,
}

/// One frame worth of drawable state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub score: u32,
    pub turret: TurretView,
    pub targets: Vec<TargetView>,
    pub projectiles: Vec<ProjectileView>,
    pub bursts: Vec<BurstView>,
    pub popups: Vec<PopupView>,
}

impl Scene {
    pub fn capture(state: &GameState) -> Self {
        Self {
            score: state.score,
            turret: TurretView {
                pos: state.turret.pos,
                aim: state.turret.aim,
            },
            targets: state
                .targets
                .iter()
                .map(|t| TargetView {
                    pos: t.pos,
                    size: t.size(),
                    color: t.color(),
                    label: t.score().to_string(),
                })
                .collect(),
            projectiles: state
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    pos: p.pos,
                    heading: p.heading,
                    radius: p.radius,
                })
                .collect(),
            bursts: state
                .bursts
                .iter()
                .map(|b| BurstView {
                    pos: b.pos,
                    opacity: b.opacity(),
                    scale: b.scale(),
                })
                .collect(),
            popups: state
                .popups
                .iter()
                .map(|p| PopupView {
                    pos: p.pos,
                    opacity: p.opacity(),
                    text: p.text(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{CollisionBurst, ScorePopup, SizeTier, Target};

    #[test]
    fn test_capture_mirrors_state() {
        let mut state = GameState::new(5);
        state.targets[0] = Target::new(SizeTier::Large, Vec2::new(10.0, 20.0), Vec2::ZERO);
        state.fire();
        state.bursts.push(CollisionBurst::new(Vec2::new(1.0, 2.0)));
        state.popups.push(ScorePopup::new(20, state.turret.popup_anchor()));

        let scene = Scene::capture(&state);

        assert_eq!(scene.score, 99);
        assert_eq!(scene.targets.len(), 5);
        assert_eq!(
            scene.targets[0],
            TargetView {
                pos: Vec2::new(10.0, 20.0),
                size: 60.0,
                color: "#FFC0CB",
                label: "20".to_string(),
            }
        );
        assert_eq!(scene.targets[0].center(), Vec2::new(40.0, 50.0));
        assert!((scene.targets[0].font_px() - 24.0).abs() < 1e-4);
        assert_eq!(scene.projectiles.len(), 1);
        assert_eq!(scene.projectiles[0].radius, 5.0);
        assert_eq!(scene.bursts[0].opacity, 1.0);
        assert_eq!(scene.popups[0].text, "+20");
        assert_eq!(scene.popups[0].pos, Vec2::new(400.0, 520.0));
    }

    #[test]
    fn test_scene_serializes() {
        let scene = Scene::capture(&GameState::new(5));
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["score"], 100);
        assert_eq!(json["targets"].as_array().map(|a| a.len()), Some(5));
    }
}
