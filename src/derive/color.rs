//! Color and primary-controls derivation
//!
//! Maps the dominant emotion to a fixed hex color and computes the
//! temperature/opacity controls. The linear coefficients are exact: the
//! renderer depends on temperature landing in [0.5,1.0] for warm labels,
//! [-1.0,-0.5] for cool labels, and exactly 0.0 otherwise.

use crate::emotion::Emotion;

/// Fallback for labels outside the closed set
pub const FALLBACK_COLOR: &str = "#C0C0C0";

/// Hex color for a label; unknown labels take the silver fallback
pub fn hex_color(emotion: Option<Emotion>) -> &'static str {
    match emotion {
        Some(Emotion::Joy) => "#FFD700",
        Some(Emotion::Happy) => "#FF69B4",
        Some(Emotion::Sadness) => "#4169E1",
        Some(Emotion::Fear) => "#800080",
        Some(Emotion::Anger) => "#FF4500",
        Some(Emotion::Disgust) => "#228B22",
        Some(Emotion::Shame) => "#FFB6C1",
        Some(Emotion::Surprise) => "#FF1493",
        Some(Emotion::Neutral) => "#C0C0C0",
        None => FALLBACK_COLOR,
    }
}

/// Color temperature: warm labels scale 0.5..1.0 with confidence, cool labels
/// mirror into -1.0..-0.5. Disgust and unknown labels sit at exactly 0.0.
pub fn color_temperature(emotion: Option<Emotion>, confidence: f64) -> f64 {
    match emotion {
        Some(e) if e.is_warm() => 0.5 + confidence * 0.5,
        Some(e) if e.is_cool() => -0.5 - confidence * 0.5,
        _ => 0.0,
    }
}

/// Opacity scales linearly with confidence into [0.2, 1.0]
pub fn opacity(confidence: f64) -> f64 {
    confidence * 0.8 + 0.2
}
