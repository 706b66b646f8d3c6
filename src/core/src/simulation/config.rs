use crate::fighter::DEFAULT_REST_DAYS;
use crate::rating::{DEFAULT_K, DEFAULT_SIGMA};

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Standard deviation of fight-night rating noise.
    pub sigma: f64,
    /// Base Elo K-factor.
    pub k: f64,
    pub injury_chance: f64,
    pub withdrawal_chance: f64,
    pub rest_days: i64,
    pub injury_extra_min: i64,
    pub injury_extra_max: i64,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            sigma: DEFAULT_SIGMA,
            k: DEFAULT_K,
            injury_chance: 0.12,
            withdrawal_chance: 0.10,
            rest_days: DEFAULT_REST_DAYS,
            injury_extra_min: 28,
            injury_extra_max: 84,
        }
    }
}

impl SimConfig {
    /// No noise and no injuries: outcomes depend only on the winner draw.
    pub fn deterministic() -> Self {
        SimConfig {
            sigma: 0.0,
            injury_chance: 0.0,
            withdrawal_chance: 0.0,
            ..SimConfig::default()
        }
    }
}
