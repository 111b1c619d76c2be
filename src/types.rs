//! Core types for the mood-bloom pipeline
//!
//! This module defines the data structures that flow through each stage:
//! the classifier's probability distribution, the derived metrics reduced
//! from it, and the parameter bundle handed to the renderer.

use crate::emotion::Emotion;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered mapping from emotion label to probability.
///
/// Order matters: the analyzer's ranking is a stable sort, so labels with
/// equal probability keep the order the classifier emitted them in. The
/// mapping serializes as a JSON object preserving that order.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionDistribution {
    entries: Vec<(String, f64)>,
}

impl EmotionDistribution {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// Build a distribution over the full label set in canonical order
    pub fn from_scores(scores: [f64; 9]) -> Self {
        Self {
            entries: Emotion::ALL
                .iter()
                .zip(scores)
                .map(|(e, p)| (e.as_str().to_string(), p))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, f64)> {
        self.entries.iter()
    }

    pub fn probability(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, p)| *p)
    }

    /// Probabilities in emission order
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, p)| *p).collect()
    }
}

impl Serialize for EmotionDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, p) in &self.entries {
            map.serialize_entry(label, p)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EmotionDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistributionVisitor;

        impl<'de> Visitor<'de> for DistributionVisitor {
            type Value = EmotionDistribution;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of emotion label to probability")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, p)) = access.next_entry::<String, f64>()? {
                    entries.push((label, p));
                }
                Ok(EmotionDistribution { entries })
            }
        }

        deserializer.deserialize_map(DistributionVisitor)
    }
}

/// Inputs to one derivation call. Constructed fresh per call and discarded.
#[derive(Debug, Clone)]
pub struct DerivationInputs {
    pub distribution: EmotionDistribution,
    /// Consecutive good-mood days; modulates stalk growth and bee behavior
    pub streak_days: u32,
    /// Community mood score in [0,1]
    pub community_mood: f64,
    /// Trading activity score in [0,1]
    pub trading_activity: f64,
}

impl DerivationInputs {
    /// Wrap a distribution with the default modulation inputs
    pub fn new(distribution: EmotionDistribution) -> Self {
        Self {
            distribution,
            streak_days: 0,
            community_mood: 0.5,
            trading_activity: 0.5,
        }
    }
}

/// Metrics reduced from the distribution by the analyzer.
///
/// Every bundle field is a pure function of these metrics plus the raw
/// derivation inputs; nothing downstream re-reads the distribution except
/// for echo fields.
#[derive(Debug, Clone)]
pub struct DerivedMetrics {
    /// Source distribution, kept for the diagnostic echo
    pub distribution: EmotionDistribution,
    /// Rank-0 label as emitted by the classifier
    pub dominant_label: String,
    /// Rank-0 label resolved against the closed set, if it is a member
    pub dominant: Option<Emotion>,
    /// Rank-0 probability
    pub confidence: f64,
    pub second_label: String,
    pub second: Option<Emotion>,
    pub second_confidence: f64,
    /// confidence − second_confidence, always >= 0
    pub confidence_gap: f64,
    /// Unnormalized natural-log Shannon entropy
    pub entropy: f64,
    /// Smallest probability in the distribution
    pub min_probability: f64,
    /// All (label, probability) pairs, descending, stable on ties
    pub ranked: Vec<(String, f64)>,
}

/// Inclusive float range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

/// Inclusive integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntSpan {
    pub min: i32,
    pub max: i32,
}

/// 3-axis position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Color system outputs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorParams {
    /// Hex color of the dominant emotion
    pub primary_color: String,
    /// Hex color of the second-ranked emotion
    pub secondary_color: String,
    /// -1.0 (cool) to 1.0 (warm); 0.0 for temperature-neutral labels
    pub color_temperature: f64,
    pub color_intensity: f64,
    /// 0.2 to 1.0
    pub opacity: f64,
}

/// Scalar visual and animation controls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualParams {
    /// Rendered flower size in pixels, 50-250
    pub flower_size: f64,
    /// Simple-mode petal count. Distinct from the bundle-mode count in
    /// `PetalParams`; both consumers depend on their own formula.
    pub petal_count: u32,
    pub animation_speed: f64,
    pub rotation_speed: f64,
    pub pulse_rate: f64,
    pub tremble_intensity: f64,
    pub texture_variation: f64,
    pub detail_level: u32,
}

/// Petal layer geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetalParams {
    /// 1-10 layers
    pub layer_count: u32,
    /// 3-20 petals (bundle-mode formula)
    pub petal_count: u32,
    /// 12-20
    pub base_layer_radius: f64,
    /// 2-5
    pub layer_radius_decrease: f64,
    /// 0-0.5 radians
    pub petal_rotation: f64,
    pub layer_rotations: [f64; 2],
    pub layer_offsets: [f64; 2],
    /// 10-30 segments
    pub geometry_segments: u32,
    pub geometry_phi_start: f64,
    pub geometry_phi_length: f64,
    pub geometry_theta_start: f64,
    pub geometry_theta_length: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetalOpenCloseParams {
    pub min_open_angle: u32,
    pub max_open_angle: u32,
    /// 0.1-1.0, inverse of the confidence gap
    pub open_close_speed: f64,
    pub individual_layer_control: bool,
    pub layer_open_close_ranges: Vec<IntSpan>,
}

/// Per-request heartbeat outputs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatSettings {
    pub bpm: u32,
    pub intensity: f64,
}

/// Fixed heartbeat renderer metadata. `bpm_range` is advisory; the computed
/// BPM is deliberately not clamped to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatParams {
    pub pulse_update_rate: f64,
    pub dual_pulse_enabled: bool,
    pub secondary_pulse_intensity: f64,
    pub glow_intensity_range: Span,
    pub bpm_range: IntSpan,
}

/// Per-request rotation outputs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSettings {
    pub intensity: f64,
    /// +1 clockwise, -1 counterclockwise
    pub direction: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationParams {
    pub rotation_update_rate: f64,
    pub alternating_enabled: bool,
    pub individual_layer_rotation: bool,
    pub rotation_intensity_range: Span,
    pub direction_options: DirectionOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionOptions {
    pub clockwise: i32,
    pub counterclockwise: i32,
}

/// Stalk growth outputs and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StalkParams {
    pub base_length: f64,
    pub min_length: f64,
    pub max_length: f64,
    pub community_mood_threshold: f64,
    pub community_mood_multiplier: f64,
    pub growth_speed: f64,
    pub decay_speed: f64,
    /// 8.8-33, clamped after summing base, community and streak bonuses
    pub current_length: f64,
}

/// Connector/core coloring driven by trading activity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorParams {
    pub base_color: String,
    pub trading_activity_colors: TradingColors,
    pub trading_activity_thresholds: TradingThresholds,
    pub color_transition_speed: f64,
    pub current_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingColors {
    pub low: String,
    pub medium: String,
    pub high: String,
    pub very_high: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingThresholds {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

/// Bee behavior outputs and kinematics metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeeParams {
    pub base_scale: f64,
    pub base_position: Position,
    /// 5-30 flaps
    pub wing_speed: u32,
    pub wing_flap_range: f64,
    pub wing_flap_intensity: f64,
    pub appearance_threshold: u32,
    pub flight_bob_speed: f64,
    pub flight_bob_amplitude: f64,
    pub rotation_speed: f64,
    pub rotation_amplitude: f64,
    pub should_appear: bool,
}

/// Bounding box the bee may roam; widens then tightens with streak tier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeeRange {
    pub x_range: Span,
    pub z_range: Span,
    pub y_range: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakParams {
    pub good_mood_threshold: f64,
    pub streak_decay_rate: f64,
    pub max_streak_days: u32,
    pub streak_multiplier: f64,
    pub current_streak_days: u32,
    pub streak_features: StreakFeatures,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakFeatures {
    pub bee_appearance: bool,
    pub bee_range_control: bool,
    pub stalk_growth: bool,
    pub glow_intensity: bool,
    pub rotation_speed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityParams {
    pub member_count: u32,
    pub average_mood: f64,
    pub positive_mood_threshold: f64,
    pub mood_update_frequency: u64,
    pub stalk_growth_factor: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingParams {
    pub trading_volume: u32,
    pub trading_volume_threshold: u32,
    pub trading_activity_score: f64,
    pub activity_update_frequency: u64,
    pub color_transition_speed: f64,
}

/// Raw classifier diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlParams {
    pub complexity_entropy: f64,
    pub confidence_gap: f64,
    pub second_emotion: String,
    pub second_confidence: f64,
    /// Full distribution in emission order
    pub emotion_probabilities: EmotionDistribution,
    /// (label, probability) pairs descending
    pub sorted_emotions: Vec<(String, f64)>,
    /// 0.1-1.0
    pub intensity_multiplier: f64,
    /// Rank-0 label echoed with the classifier spelling
    pub raw_prediction: String,
    pub raw_probabilities: Vec<f64>,
}

/// The full renderer-facing output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterBundle {
    /// Renderer-facing emotion name (sadness is spelled "sad")
    pub current_emotion: String,
    pub confidence: f64,
    pub confidence_percentage: f64,
    pub color_params: ColorParams,
    pub visual_params: VisualParams,
    pub petal_params: PetalParams,
    pub petal_open_close_params: PetalOpenCloseParams,
    pub heartbeat_settings: HeartbeatSettings,
    pub heartbeat_params: HeartbeatParams,
    pub mood_settings: MoodSettings,
    pub rotation_params: RotationParams,
    pub stalk_params: StalkParams,
    pub connector_params: ConnectorParams,
    pub bee_params: BeeParams,
    /// Absent (null) below a 3-day streak
    pub bee_streak_ranges: Option<BeeRange>,
    pub streak_params: StreakParams,
    pub community_params: CommunityParams,
    pub trading_params: TradingParams,
    pub ml_params: MlParams,
}

/// Seven-field summary for basic consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleParams {
    /// Dominant classifier label, unmapped
    pub emotion: String,
    pub confidence: f64,
    pub size: f64,
    /// Simple-mode petal count
    pub petals: u32,
    pub color: String,
    pub speed: f64,
    pub complexity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_distribution_preserves_order() {
        let dist = EmotionDistribution::new(vec![
            ("surprise".to_string(), 0.1),
            ("joy".to_string(), 0.8),
            ("neutral".to_string(), 0.1),
        ]);

        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(json, r#"{"surprise":0.1,"joy":0.8,"neutral":0.1}"#);

        let back: EmotionDistribution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dist);
    }

    #[test]
    fn test_distribution_from_scores_uses_canonical_order() {
        let dist = EmotionDistribution::from_scores([0.2, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1]);
        let labels: Vec<_> = dist.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels[0], "joy");
        assert_eq!(labels[8], "neutral");
        assert_eq!(dist.probability("joy"), Some(0.2));
    }

    #[test]
    fn test_inputs_default_modulation() {
        let inputs = DerivationInputs::new(EmotionDistribution::new(vec![
            ("joy".to_string(), 0.6),
            ("neutral".to_string(), 0.4),
        ]));
        assert_eq!(inputs.streak_days, 0);
        assert_eq!(inputs.community_mood, 0.5);
        assert_eq!(inputs.trading_activity, 0.5);
    }
}
