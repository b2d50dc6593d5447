//! Per-frame simulation tick
//!
//! Advances targets, expires effects, then moves projectiles and resolves
//! hits. Both projectiles and targets are walked from the highest index down
//! so removal during the walk never skips or revisits an entity.

use rand::Rng;

use super::collision::first_hit_reverse;
use super::effects::{CollisionBurst, ScorePopup, expire};
use super::state::{GameEvent, GameState};
use super::target::Target;

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;

    for target in &mut state.targets {
        target.advance();
    }

    expire(&mut state.bursts);
    expire(&mut state.popups);

    for i in (0..state.projectiles.len()).rev() {
        state.projectiles[i].advance();

        // Highest-index target wins when several overlap
        let Some(j) = first_hit_reverse(&state.projectiles[i], &state.targets) else {
            continue;
        };

        // Any hit consumes the projectile
        let projectile = state.projectiles.remove(i);
        state.bursts.push(CollisionBurst::new(projectile.pos));
        state.push_event(GameEvent::Hit {
            x: projectile.pos.x,
            y: projectile.pos.y,
        });

        let roll: f32 = state.rng.random();
        if roll < state.targets[j].disappear_chance {
            destroy_target(state, j);
        }
    }
}

/// Score a kill and swap the target for a fresh one
fn destroy_target(state: &mut GameState, index: usize) {
    let target = state.targets.remove(index);
    let points = target.score();

    state.score += points;
    state
        .popups
        .push(ScorePopup::new(points, state.turret.popup_anchor()));

    let replacement = Target::spawn(&mut state.rng);
    state.targets.push(replacement);

    log::debug!(
        "Destroyed {:?} target for {} points (score {})",
        target.tier,
        points,
        state.score
    );

    state.push_event(GameEvent::TargetDestroyed {
        tier: target.tier,
        score: points,
    });
    state.push_event(GameEvent::ScoreChanged { score: state.score });
}
