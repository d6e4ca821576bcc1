//! Session state and core types
//!
//! A `SessionState` lives for exactly one run: created at session start,
//! mutated only by the controller's event handlers, discarded on restart.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; terminal until the session is reconstructed
    GameOver,
}

/// All mutable state for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Remaining lives, always in [0, max_lives]
    pub lives: u8,
    /// Score; penalties can push it negative
    pub score: i64,
    /// Fall-speed multiplier, starts at 1.0, never decreases within a run
    pub speed_multiplier: f32,
    pub phase: GamePhase,
    /// True while exactly one bonus entity is live in the world
    pub bonus_active: bool,
    /// Engine timestamp of the last passive speed ramp (ms)
    pub last_speed_increase_ms: u64,
    /// HUD life icons, kept in lockstep with `lives`
    pub life_icons: u8,
}

impl SessionState {
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let lives = tuning.starting_lives.min(tuning.max_lives);
        Self {
            seed,
            lives,
            score: 0,
            speed_multiplier: 1.0,
            phase: GamePhase::Playing,
            bonus_active: false,
            last_speed_increase_ms: 0,
            life_icons: lives,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Remove a life, clamping at zero. Returns true if anything changed.
    pub fn lose_life(&mut self) -> bool {
        if self.lives == 0 {
            return false;
        }
        self.lives -= 1;
        self.life_icons = self.lives;
        true
    }

    /// Add a life, clamping at `max_lives`. Returns true if anything changed.
    pub fn gain_life(&mut self, max_lives: u8) -> bool {
        if self.lives >= max_lives {
            return false;
        }
        self.lives += 1;
        self.life_icons = self.lives;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = SessionState::new(42, &Tuning::default());
        assert_eq!(state.lives, 3);
        assert_eq!(state.life_icons, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed_multiplier, 1.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.bonus_active);
    }

    #[test]
    fn test_lose_life_clamps_at_zero() {
        let mut state = SessionState::new(1, &Tuning::default());
        for _ in 0..10 {
            state.lose_life();
        }
        assert_eq!(state.lives, 0);
        assert_eq!(state.life_icons, 0);
        assert!(!state.lose_life());
    }

    #[test]
    fn test_gain_life_clamps_at_max() {
        let mut state = SessionState::new(1, &Tuning::default());
        for _ in 0..10 {
            state.gain_life(5);
        }
        assert_eq!(state.lives, 5);
        assert_eq!(state.life_icons, 5);
        assert!(!state.gain_life(5));
    }

    #[test]
    fn test_starting_lives_capped_by_max() {
        let tuning = Tuning {
            starting_lives: 9,
            max_lives: 5,
            ..Default::default()
        };
        let state = SessionState::new(1, &tuning);
        assert_eq!(state.lives, 5);
    }
}
