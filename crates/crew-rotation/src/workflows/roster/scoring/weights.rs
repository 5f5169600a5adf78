use serde::{Deserialize, Serialize};

pub const DEFAULT_SHORTLIST_SIZE: usize = 5;

/// Weights applied by the priority heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub recency_per_day: f64,
    pub profile_match: f64,
    pub specialty_match: f64,
    pub trip_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            recency_per_day: 1.5,
            profile_match: 100.0,
            specialty_match: 75.0,
            trip_penalty: 0.5,
        }
    }
}
