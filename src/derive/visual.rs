//! Scalar visual and animation controls
//!
//! Flat controls for simple consumers: overall size, the simple-mode petal
//! count, and the animation rates. The simple-mode petal count deliberately
//! uses its own formula; see [`crate::derive::petal`] for the bundle-mode one.

use crate::types::{DerivedMetrics, VisualParams};

/// Rendered size in pixels: 50-250
pub fn flower_size(confidence: f64) -> f64 {
    confidence * 200.0 + 50.0
}

/// Simple-mode petal count, informally 5-25 for the nine-label set
pub fn simple_petal_count(entropy: f64) -> u32 {
    (entropy * 10.0) as u32 + 5
}

/// Animation speed is the inverse of the gap: stable moods animate slowly
pub fn animation_speed(confidence_gap: f64) -> f64 {
    1.0 - confidence_gap
}

pub fn rotation_speed(entropy: f64) -> f64 {
    entropy * 0.5
}

pub fn pulse_rate(confidence: f64) -> f64 {
    confidence * 2.0
}

pub fn tremble_intensity(confidence_gap: f64) -> f64 {
    1.0 - confidence_gap
}

/// Spread between the strongest and weakest label
pub fn texture_variation(confidence: f64, min_probability: f64) -> f64 {
    confidence - min_probability
}

pub fn detail_level(entropy: f64) -> u32 {
    (entropy * 5.0) as u32 + 1
}

pub fn derive_visual_params(metrics: &DerivedMetrics) -> VisualParams {
    VisualParams {
        flower_size: flower_size(metrics.confidence),
        petal_count: simple_petal_count(metrics.entropy),
        animation_speed: animation_speed(metrics.confidence_gap),
        rotation_speed: rotation_speed(metrics.entropy),
        pulse_rate: pulse_rate(metrics.confidence),
        tremble_intensity: tremble_intensity(metrics.confidence_gap),
        texture_variation: texture_variation(metrics.confidence, metrics.min_probability),
        detail_level: detail_level(metrics.entropy),
    }
}
