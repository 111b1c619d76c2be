//! Stalk length derivation
//!
//! Confidence sets the base length, community mood adds a symmetric bonus,
//! and the streak adds a capped bonus. The clamp applies once, to the sum.

use crate::types::StalkParams;

pub const MIN_LENGTH: f64 = 8.8;
pub const MAX_LENGTH: f64 = 33.0;

/// Stalk length in [8.8, 33]
pub fn stalk_length(confidence: f64, community_mood: f64, streak_days: u32) -> f64 {
    let base = 10.0 + confidence * 10.0;
    let community_bonus = (community_mood - 0.5) * 5.0;
    let streak_bonus = (streak_days as f64 * 0.5).min(10.0);

    (base + community_bonus + streak_bonus).clamp(MIN_LENGTH, MAX_LENGTH)
}

pub fn derive_stalk_params(confidence: f64, community_mood: f64, streak_days: u32) -> StalkParams {
    StalkParams {
        base_length: 10.0,
        min_length: MIN_LENGTH,
        max_length: MAX_LENGTH,
        community_mood_threshold: 0.7,
        community_mood_multiplier: 2.0,
        growth_speed: 0.1,
        decay_speed: 0.05,
        current_length: stalk_length(confidence, community_mood, streak_days),
    }
}
