//! Petal geometry derivation
//!
//! Entropy drives structural complexity (layer/petal/segment counts and
//! rotation), confidence drives scale, and the confidence gap drives layer
//! taper and open/close speed.

use crate::types::{DerivedMetrics, IntSpan, PetalOpenCloseParams, PetalParams};
use std::f64::consts::PI;

/// Petal layers: 1-10
pub fn layer_count(entropy: f64) -> u32 {
    ((entropy * 3.0) as u32 + 1).clamp(1, 10)
}

/// Bundle-mode petal count: 3-20. The simple-mode consumer uses its own
/// formula in [`crate::derive::visual`]; the two are intentionally separate.
pub fn petal_count(entropy: f64) -> u32 {
    ((entropy * 8.0) as u32 + 6).clamp(3, 20)
}

/// Base layer radius: 12-20
pub fn base_layer_radius(confidence: f64) -> f64 {
    12.0 + confidence * 8.0
}

/// Radius decrease per layer: 2-5
pub fn layer_radius_decrease(confidence_gap: f64) -> f64 {
    (2.0 + confidence_gap * 3.0).clamp(2.0, 5.0)
}

/// Petal rotation in radians: 0-0.5
pub fn petal_rotation(entropy: f64) -> f64 {
    (entropy * 0.3).clamp(0.0, 0.5)
}

/// Geometry segments: 10-30
pub fn geometry_segments(entropy: f64) -> u32 {
    ((entropy * 15.0) as u32 + 10).clamp(10, 30)
}

/// Open/close speed: 0.1-1.0, inverse of the gap (ambiguous moods flutter)
pub fn open_close_speed(confidence_gap: f64) -> f64 {
    (1.0 - confidence_gap).clamp(0.1, 1.0)
}

/// Assemble the geometry group. Layer rotations/offsets start zeroed; the
/// renderer animates them at runtime.
pub fn derive_petal_params(metrics: &DerivedMetrics) -> PetalParams {
    PetalParams {
        layer_count: layer_count(metrics.entropy),
        petal_count: petal_count(metrics.entropy),
        base_layer_radius: base_layer_radius(metrics.confidence),
        layer_radius_decrease: layer_radius_decrease(metrics.confidence_gap),
        petal_rotation: petal_rotation(metrics.entropy),
        layer_rotations: [0.0, 0.0],
        layer_offsets: [0.0, 0.0],
        geometry_segments: geometry_segments(metrics.entropy),
        geometry_phi_start: PI / 3.0,
        geometry_phi_length: PI / 3.0,
        geometry_theta_start: 0.0,
        geometry_theta_length: PI,
    }
}

pub fn derive_open_close_params(metrics: &DerivedMetrics) -> PetalOpenCloseParams {
    PetalOpenCloseParams {
        min_open_angle: 0,
        max_open_angle: 90,
        open_close_speed: open_close_speed(metrics.confidence_gap),
        individual_layer_control: true,
        layer_open_close_ranges: vec![IntSpan { min: 0, max: 90 }, IntSpan { min: 0, max: 90 }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layer_count_bounds() {
        assert_eq!(layer_count(0.0), 1);
        // ln(9) ~ 2.197 is the entropy ceiling for nine labels
        assert_eq!(layer_count(2.197), 7);
        assert_eq!(layer_count(100.0), 10);
    }

    #[test]
    fn test_petal_count_bounds() {
        assert_eq!(petal_count(0.0), 6);
        assert_eq!(petal_count(2.0), 20);
        assert_eq!(petal_count(100.0), 20);
    }

    #[test]
    fn test_radius_scales_with_confidence() {
        assert_eq!(base_layer_radius(0.0), 12.0);
        assert_eq!(base_layer_radius(1.0), 20.0);
        assert_eq!(base_layer_radius(0.5), 16.0);
    }

    #[test]
    fn test_radius_decrease_from_gap() {
        assert_eq!(layer_radius_decrease(0.0), 2.0);
        assert_eq!(layer_radius_decrease(1.0), 5.0);
        assert!((layer_radius_decrease(0.5) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_petal_rotation_clamped() {
        assert_eq!(petal_rotation(0.0), 0.0);
        assert!((petal_rotation(1.0) - 0.3).abs() < 1e-12);
        assert_eq!(petal_rotation(10.0), 0.5);
    }

    #[test]
    fn test_segments_bounds() {
        assert_eq!(geometry_segments(0.0), 10);
        assert_eq!(geometry_segments(1.0), 25);
        assert_eq!(geometry_segments(10.0), 30);
    }

    #[test]
    fn test_open_close_speed_floor() {
        assert_eq!(open_close_speed(0.0), 1.0);
        assert_eq!(open_close_speed(0.95), 0.1);
        assert!((open_close_speed(0.3) - 0.7).abs() < 1e-12);
    }
}
