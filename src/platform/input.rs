//! Input mapping
//!
//! Browser events become `Command`s, which apply straight to the game state.
//! Only the canvas click and the A/D keys are recognized.

use crate::consts::AIM_STEP;
use crate::sim::GameState;

/// A player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire,
    RotateLeft,
    RotateRight,
}

impl Command {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "a" | "A" => Some(Command::RotateLeft),
            "d" | "D" => Some(Command::RotateRight),
            _ => None,
        }
    }

    /// Apply to the game. Returns false if a fire request was refused.
    pub fn apply(self, state: &mut GameState) -> bool {
        match self {
            Command::Fire => state.fire(),
            Command::RotateLeft => {
                state.rotate_turret(-AIM_STEP);
                true
            }
            Command::RotateRight => {
                state.rotate_turret(AIM_STEP);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Command::from_key("a"), Some(Command::RotateLeft));
        assert_eq!(Command::from_key("A"), Some(Command::RotateLeft));
        assert_eq!(Command::from_key("d"), Some(Command::RotateRight));
        assert_eq!(Command::from_key("D"), Some(Command::RotateRight));
        assert_eq!(Command::from_key(" "), None);
        assert_eq!(Command::from_key("ArrowLeft"), None);
        assert_eq!(Command::from_key("w"), None);
    }

    #[test]
    fn test_apply_rotation() {
        let mut state = GameState::new(1);
        let start = state.turret.aim;
        Command::RotateRight.apply(&mut state);
        Command::RotateRight.apply(&mut state);
        Command::RotateLeft.apply(&mut state);
        assert!((state.turret.aim - (start + AIM_STEP)).abs() < 1e-6);
    }

    #[test]
    fn test_apply_fire() {
        let mut state = GameState::new(1);
        assert!(Command::Fire.apply(&mut state));
        assert_eq!(state.projectiles.len(), 1);
        state.score = 0;
        assert!(!Command::Fire.apply(&mut state));
        assert_eq!(state.projectiles.len(), 1);
    }
}
