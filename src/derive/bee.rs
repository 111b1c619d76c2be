//! Bee behavior derivation
//!
//! The bee appears after a three-day streak and its roaming box tightens as
//! the streak grows (long streaks keep it close to the flower). Wing speed
//! follows the dominant emotion, scaled by confidence.

use crate::emotion::Emotion;
use crate::types::{BeeParams, BeeRange, DerivedMetrics, Position, Span};

/// Streak days required before the bee appears
pub const APPEARANCE_THRESHOLD: u32 = 3;

fn base_wing_speed(emotion: Option<Emotion>) -> u32 {
    match emotion {
        Some(Emotion::Happy) => 18,
        Some(Emotion::Joy) => 22,
        Some(Emotion::Sadness) => 8,
        Some(Emotion::Fear) => 25,
        Some(Emotion::Anger) => 20,
        Some(Emotion::Disgust) => 12,
        Some(Emotion::Shame) => 10,
        Some(Emotion::Surprise) => 19,
        Some(Emotion::Neutral) | None => 15,
    }
}

/// Wing flaps: base scaled by +/-30% across the confidence range,
/// truncated then clamped to [5, 30]
pub fn wing_speed(emotion: Option<Emotion>, confidence: f64) -> u32 {
    let factor = 1.0 + (confidence - 0.5) * 0.6;
    ((base_wing_speed(emotion) as f64 * factor) as u32).clamp(5, 30)
}

pub fn should_appear(streak_days: u32) -> bool {
    streak_days >= APPEARANCE_THRESHOLD
}

/// Roaming box per streak tier; `None` below the appearance threshold
pub fn bee_range(streak_days: u32) -> Option<BeeRange> {
    let (xz, y_max) = if streak_days >= 21 {
        (1.5, 5.0)
    } else if streak_days >= 14 {
        (5.0, 10.0)
    } else if streak_days >= 7 {
        (10.0, 15.0)
    } else if streak_days >= 3 {
        (18.0, 20.0)
    } else {
        return None;
    };

    Some(BeeRange {
        x_range: Span { min: -xz, max: xz },
        z_range: Span { min: -xz, max: xz },
        y_range: Span { min: 2.2, max: y_max },
    })
}

pub fn derive_bee_params(metrics: &DerivedMetrics, streak_days: u32) -> BeeParams {
    BeeParams {
        base_scale: 1.11,
        base_position: Position {
            x: 0.0,
            y: 2.1,
            z: 0.0,
        },
        wing_speed: wing_speed(metrics.dominant, metrics.confidence),
        wing_flap_range: 0.9,
        wing_flap_intensity: 0.6,
        appearance_threshold: APPEARANCE_THRESHOLD,
        flight_bob_speed: 1.2,
        flight_bob_amplitude: 0.08,
        rotation_speed: 0.3,
        rotation_amplitude: 0.08,
        should_appear: should_appear(streak_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_appearance_threshold() {
        assert!(!should_appear(0));
        assert!(!should_appear(2));
        assert!(should_appear(3));
        assert!(should_appear(30));
    }

    #[test]
    fn test_range_absent_below_threshold() {
        assert!(bee_range(0).is_none());
        assert!(bee_range(2).is_none());
    }

    #[test]
    fn test_range_tiers() {
        let tier = bee_range(3).unwrap();
        assert_eq!(tier.x_range, Span { min: -18.0, max: 18.0 });
        assert_eq!(tier.y_range, Span { min: 2.2, max: 20.0 });

        // Ten-day streak lands in the >=7 tier
        let tier = bee_range(10).unwrap();
        assert_eq!(tier.x_range, Span { min: -10.0, max: 10.0 });
        assert_eq!(tier.z_range, Span { min: -10.0, max: 10.0 });
        assert_eq!(tier.y_range, Span { min: 2.2, max: 15.0 });

        let tier = bee_range(14).unwrap();
        assert_eq!(tier.x_range, Span { min: -5.0, max: 5.0 });

        let tier = bee_range(21).unwrap();
        assert_eq!(tier.x_range, Span { min: -1.5, max: 1.5 });
        assert_eq!(tier.y_range, Span { min: 2.2, max: 5.0 });
    }

    #[test]
    fn test_wing_speed_scaling() {
        // joy at 0.5 confidence is the base
        assert_eq!(wing_speed(Some(Emotion::Joy), 0.5), 22);
        // fear at full confidence: 25 * 1.3 = 32.5 -> 32 -> clamp 30
        assert_eq!(wing_speed(Some(Emotion::Fear), 1.0), 30);
        // sadness at zero confidence: 8 * 0.7 = 5.6 -> 5
        assert_eq!(wing_speed(Some(Emotion::Sadness), 0.0), 5);
        assert_eq!(wing_speed(None, 0.5), 15);
    }
}
