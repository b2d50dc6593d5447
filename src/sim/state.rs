//! Game state and player commands
//!
//! `GameState` owns every entity collection. Commands (`fire`,
//! `rotate_turret`) apply immediately; `tick` advances everything else.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::{CollisionBurst, ScorePopup};
use super::projectile::Projectile;
use super::target::{SizeTier, Target};
use crate::consts::*;

/// Notifications for the host (HUD, audio). No gameplay effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score changed to the given value
    ScoreChanged { score: u32 },
    /// A projectile left the turret
    Fired,
    /// A projectile struck a target at this point
    Hit { x: f32, y: f32 },
    /// A hit rolled a kill
    TargetDestroyed { tier: SizeTier, score: u32 },
}

/// The player's turret
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Turret {
    /// Fixed base position
    pub pos: Vec2,
    /// Aim angle (radians, -π/2 is up). Never normalized.
    pub aim: f32,
}

impl Default for Turret {
    fn default() -> Self {
        Self {
            pos: Vec2::new(TURRET_X, TURRET_Y),
            aim: TURRET_START_AIM,
        }
    }
}

impl Turret {
    pub fn rotate(&mut self, delta: f32) {
        self.aim += delta;
    }

    /// Where score popups appear
    pub fn popup_anchor(&self) -> Vec2 {
        self.pos - Vec2::new(0.0, POPUP_RISE)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub turret: Turret,
    pub projectiles: Vec<Projectile>,
    /// Always exactly `TARGET_COUNT` long
    pub targets: Vec<Target>,
    pub bursts: Vec<CollisionBurst>,
    pub popups: Vec<ScorePopup>,
    /// Pending host notifications
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let targets = (0..TARGET_COUNT).map(|_| Target::spawn(&mut rng)).collect();

        Self {
            seed,
            rng,
            score: STARTING_SCORE,
            time_ticks: 0,
            turret: Turret::default(),
            projectiles: Vec::with_capacity(MAX_PROJECTILES),
            targets,
            bursts: Vec::new(),
            popups: Vec::new(),
            events: Vec::new(),
        }
    }

    /// True if a fire request would be accepted right now
    pub fn can_fire(&self) -> bool {
        self.score > 0 && self.projectiles.len() < MAX_PROJECTILES
    }

    /// Fire a projectile along the turret's aim.
    ///
    /// Silently refused (returns false) when the score is exhausted or the
    /// projectile cap is reached.
    pub fn fire(&mut self) -> bool {
        if !self.can_fire() {
            return false;
        }

        self.projectiles
            .push(Projectile::new(self.turret.pos, self.turret.aim));
        self.score -= SHOT_COST;
        self.push_event(GameEvent::Fired);
        self.push_event(GameEvent::ScoreChanged { score: self.score });
        true
    }

    /// Turn the turret by `delta` radians
    pub fn rotate_turret(&mut self, delta: f32) {
        self.turret.rotate(delta);
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
