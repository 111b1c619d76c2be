//! Heartbeat derivation
//!
//! Each emotion carries a base BPM and a base pulse intensity; confidence
//! pushes both toward their extremes. The computed BPM is NOT clamped to the
//! advisory [55,110] range the renderer metadata documents; the formula's
//! raw value is the contract.

use crate::emotion::Emotion;
use crate::types::{DerivedMetrics, HeartbeatParams, HeartbeatSettings, IntSpan, Span};

/// Base BPM per emotion; the neutral value doubles as the unknown fallback
pub fn base_bpm(emotion: Option<Emotion>) -> u32 {
    match emotion {
        Some(Emotion::Happy) => 85,
        Some(Emotion::Joy) => 95,
        Some(Emotion::Sadness) => 55,
        Some(Emotion::Fear) => 110,
        Some(Emotion::Anger) => 100,
        Some(Emotion::Disgust) => 70,
        Some(Emotion::Shame) => 65,
        Some(Emotion::Surprise) => 90,
        Some(Emotion::Neutral) | None => 72,
    }
}

fn base_intensity(emotion: Option<Emotion>) -> f64 {
    match emotion {
        Some(Emotion::Happy) => 0.6,
        Some(Emotion::Joy) => 0.8,
        Some(Emotion::Sadness) => 0.2,
        Some(Emotion::Fear) => 0.9,
        Some(Emotion::Anger) => 0.7,
        Some(Emotion::Disgust) => 0.4,
        Some(Emotion::Shame) => 0.3,
        Some(Emotion::Surprise) => 0.7,
        Some(Emotion::Neutral) | None => 0.4,
    }
}

/// BPM: base scaled by +/-20% across the confidence range, truncated
pub fn bpm(emotion: Option<Emotion>, confidence: f64) -> u32 {
    let factor = 1.0 + (confidence - 0.5) * 0.4;
    (base_bpm(emotion) as f64 * factor) as u32
}

/// Pulse intensity: confidence boosts the base, capped at 0.9
pub fn intensity(emotion: Option<Emotion>, confidence: f64) -> f64 {
    (base_intensity(emotion) * (1.0 + confidence * 0.5)).min(0.9)
}

pub fn derive_heartbeat_settings(metrics: &DerivedMetrics) -> HeartbeatSettings {
    HeartbeatSettings {
        bpm: bpm(metrics.dominant, metrics.confidence),
        intensity: intensity(metrics.dominant, metrics.confidence),
    }
}

/// Fixed renderer metadata for the pulse subsystem
pub fn heartbeat_params() -> HeartbeatParams {
    HeartbeatParams {
        pulse_update_rate: 0.02,
        dual_pulse_enabled: true,
        secondary_pulse_intensity: 0.3,
        glow_intensity_range: Span { min: 0.2, max: 0.9 },
        bpm_range: IntSpan { min: 55, max: 110 },
    }
}
