//! Petal rotation derivation
//!
//! Upbeat emotions spin clockwise, the rest counterclockwise; confidence
//! amplifies the per-emotion base intensity.

use crate::emotion::Emotion;
use crate::types::{DerivedMetrics, DirectionOptions, MoodSettings, RotationParams, Span};

fn base_intensity(emotion: Option<Emotion>) -> f64 {
    match emotion {
        Some(Emotion::Happy) => 0.8,
        Some(Emotion::Joy) => 1.0,
        Some(Emotion::Sadness) => 0.01,
        Some(Emotion::Fear) => 0.6,
        Some(Emotion::Anger) => 0.9,
        Some(Emotion::Disgust) => 0.4,
        Some(Emotion::Shame) => 0.3,
        Some(Emotion::Surprise) => 0.7,
        Some(Emotion::Neutral) | None => 0.2,
    }
}

/// Rotation intensity: confidence boosts the base, capped at 1.0
pub fn intensity(emotion: Option<Emotion>, confidence: f64) -> f64 {
    (base_intensity(emotion) * (1.0 + confidence * 0.5)).min(1.0)
}

/// +1 clockwise for {happy, joy, surprise, neutral}, -1 otherwise.
/// Unknown labels spin counterclockwise with the rest.
pub fn direction(emotion: Option<Emotion>) -> i32 {
    match emotion {
        Some(e) if e.rotates_clockwise() => 1,
        _ => -1,
    }
}

pub fn derive_mood_settings(metrics: &DerivedMetrics) -> MoodSettings {
    MoodSettings {
        intensity: intensity(metrics.dominant, metrics.confidence),
        direction: direction(metrics.dominant),
    }
}

/// Fixed renderer metadata for the rotation subsystem
pub fn rotation_params() -> RotationParams {
    RotationParams {
        rotation_update_rate: 0.02,
        alternating_enabled: true,
        individual_layer_rotation: true,
        rotation_intensity_range: Span {
            min: 0.01,
            max: 1.0,
        },
        direction_options: DirectionOptions {
            clockwise: 1,
            counterclockwise: -1,
        },
    }
}
