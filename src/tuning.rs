//! Game balance parameters
//!
//! Every value the design wants to iterate on lives here rather than in
//! scattered constants, so a balance pass is a JSON edit instead of a code
//! change.

use serde::{Deserialize, Serialize};

/// What happens when a falling ingredient leaves the play area uncaught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MissPolicy {
    /// Misses carry no penalty; the entity is simply destroyed.
    #[default]
    Ignore,
    /// Missing a benign ingredient costs one life. Hostile ingredients are
    /// never penalized on a miss (letting them fall is the point), so the
    /// mouse cannot hurt the player twice.
    BenignCostsLife,
}

/// Game balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Lives at session start
    pub starting_lives: u8,
    /// Hard ceiling on lives; bonus pickups cannot raise it further
    pub max_lives: u8,
    /// Period of the ingredient spawn timer (ms)
    pub spawn_interval_ms: u32,
    /// Downward velocity of a fresh spawn at multiplier 1.0 (units/sec)
    pub base_fall_velocity: f32,
    /// How often the passive speed ramp fires (ms)
    pub speed_ramp_interval_ms: u64,
    /// Additive multiplier increase per ramp step
    pub speed_ramp_increment: f32,
    /// Multiplicative speed growth when a fly is collected
    pub fly_speed_growth: f32,
    /// Ceiling on the speed multiplier (applies to ramp and fly growth)
    pub speed_cap: f32,
    /// Spawn roll is uniform in [0, 10]; benign when roll > threshold.
    /// Threshold 3 gives 7/11 benign, 4/11 hostile.
    pub benign_threshold: u32,
    /// Penalty policy for uncaught ingredients
    pub miss_policy: MissPolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            max_lives: 5,
            spawn_interval_ms: 1000,
            base_fall_velocity: 150.0,
            speed_ramp_interval_ms: 20_000,
            speed_ramp_increment: 0.2,
            fly_speed_growth: 1.5,
            speed_cap: 5.0,
            benign_threshold: 3,
            miss_policy: MissPolicy::Ignore,
        }
    }
}

impl Tuning {
    /// Parse a tuning profile from JSON (balance presets ship as data files)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fall velocity for the current speed multiplier
    pub fn fall_velocity(&self, speed_multiplier: f32) -> f32 {
        self.base_fall_velocity * speed_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_sane() {
        let t = Tuning::default();
        assert!(t.starting_lives <= t.max_lives);
        assert!(t.fly_speed_growth > 1.0);
        assert!(t.speed_cap >= 1.0);
        assert!(t.benign_threshold < 10);
    }

    #[test]
    fn test_from_json_roundtrip() {
        let t = Tuning {
            starting_lives: 4,
            miss_policy: MissPolicy::BenignCostsLife,
            ..Default::default()
        };
        let json = serde_json::to_string(&t).unwrap();
        let parsed = Tuning::from_json(&json).unwrap();
        assert_eq!(parsed.starting_lives, 4);
        assert_eq!(parsed.miss_policy, MissPolicy::BenignCostsLife);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Tuning::from_json("not json").is_err());
    }

    #[test]
    fn test_fall_velocity_scales() {
        let t = Tuning::default();
        assert_eq!(t.fall_velocity(1.0), 150.0);
        assert_eq!(t.fall_velocity(2.0), 300.0);
    }
}
