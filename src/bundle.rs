//! Bundle assembly
//!
//! Composes every deriver's output plus pass-through echoes of the raw
//! inputs into the renderer-facing structures. No derivation logic lives
//! here; both output shapes are built from one [`DerivedMetrics`] without
//! recomputing anything.

use crate::derive::{bee, color, heartbeat, petal, rotation, stalk, trading, visual};
use crate::types::{
    ColorParams, CommunityParams, DerivationInputs, DerivedMetrics, MlParams, ParameterBundle,
    SimpleParams, StreakFeatures, StreakParams, TradingParams,
};

/// Assembler for the full bundle and the simple summary
pub struct BundleAssembler;

impl BundleAssembler {
    /// Build the full nested bundle
    pub fn assemble(metrics: &DerivedMetrics, inputs: &DerivationInputs) -> ParameterBundle {
        let art_emotion = metrics
            .dominant
            .map(|e| e.art_name().to_string())
            .unwrap_or_else(|| metrics.dominant_label.clone());

        ParameterBundle {
            current_emotion: art_emotion,
            confidence: metrics.confidence,
            confidence_percentage: metrics.confidence * 100.0,
            color_params: Self::build_color_params(metrics),
            visual_params: visual::derive_visual_params(metrics),
            petal_params: petal::derive_petal_params(metrics),
            petal_open_close_params: petal::derive_open_close_params(metrics),
            heartbeat_settings: heartbeat::derive_heartbeat_settings(metrics),
            heartbeat_params: heartbeat::heartbeat_params(),
            mood_settings: rotation::derive_mood_settings(metrics),
            rotation_params: rotation::rotation_params(),
            stalk_params: stalk::derive_stalk_params(
                metrics.confidence,
                inputs.community_mood,
                inputs.streak_days,
            ),
            connector_params: trading::derive_connector_params(inputs.trading_activity),
            bee_params: bee::derive_bee_params(metrics, inputs.streak_days),
            bee_streak_ranges: bee::bee_range(inputs.streak_days),
            streak_params: Self::build_streak_params(inputs.streak_days),
            community_params: Self::build_community_params(inputs.community_mood),
            trading_params: Self::build_trading_params(inputs.trading_activity),
            ml_params: Self::build_ml_params(metrics),
        }
    }

    /// Build the 7-field summary from the same metrics
    pub fn assemble_simple(metrics: &DerivedMetrics) -> SimpleParams {
        SimpleParams {
            emotion: metrics.dominant_label.clone(),
            confidence: metrics.confidence,
            size: visual::flower_size(metrics.confidence),
            petals: visual::simple_petal_count(metrics.entropy),
            color: color::hex_color(metrics.dominant).to_string(),
            speed: visual::animation_speed(metrics.confidence_gap),
            complexity: metrics.entropy,
        }
    }

    fn build_color_params(metrics: &DerivedMetrics) -> ColorParams {
        ColorParams {
            primary_color: color::hex_color(metrics.dominant).to_string(),
            secondary_color: color::hex_color(metrics.second).to_string(),
            color_temperature: color::color_temperature(metrics.dominant, metrics.confidence),
            color_intensity: metrics.confidence,
            opacity: color::opacity(metrics.confidence),
        }
    }

    fn build_streak_params(streak_days: u32) -> StreakParams {
        StreakParams {
            good_mood_threshold: 0.7,
            streak_decay_rate: 0.1,
            max_streak_days: 30,
            streak_multiplier: 1.5,
            current_streak_days: streak_days,
            streak_features: StreakFeatures {
                bee_appearance: true,
                bee_range_control: true,
                stalk_growth: true,
                glow_intensity: true,
                rotation_speed: true,
            },
        }
    }

    fn build_community_params(community_mood: f64) -> CommunityParams {
        CommunityParams {
            member_count: 0,
            average_mood: community_mood,
            positive_mood_threshold: 0.7,
            mood_update_frequency: 3_600_000,
            stalk_growth_factor: 0.1,
        }
    }

    fn build_trading_params(trading_activity: f64) -> TradingParams {
        TradingParams {
            trading_volume: 0,
            trading_volume_threshold: 100,
            trading_activity_score: trading_activity,
            activity_update_frequency: 300_000,
            color_transition_speed: 0.1,
        }
    }

    fn build_ml_params(metrics: &DerivedMetrics) -> MlParams {
        MlParams {
            complexity_entropy: metrics.entropy,
            confidence_gap: metrics.confidence_gap,
            second_emotion: metrics.second_label.clone(),
            second_confidence: metrics.second_confidence,
            emotion_probabilities: metrics.distribution.clone(),
            sorted_emotions: metrics.ranked.clone(),
            intensity_multiplier: (metrics.confidence * 1.5).clamp(0.1, 1.0),
            raw_prediction: metrics.dominant_label.clone(),
            raw_probabilities: metrics.distribution.values(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::DistributionAnalyzer;
    use crate::types::EmotionDistribution;
    use pretty_assertions::assert_eq;

    fn make_test_inputs() -> DerivationInputs {
        DerivationInputs {
            distribution: EmotionDistribution::new(vec![
                ("joy".to_string(), 0.8),
                ("surprise".to_string(), 0.1),
                ("neutral".to_string(), 0.05),
                ("sadness".to_string(), 0.05),
            ]),
            streak_days: 10,
            community_mood: 0.8,
            trading_activity: 0.75,
        }
    }

    fn make_test_bundle() -> ParameterBundle {
        let inputs = make_test_inputs();
        let metrics = DistributionAnalyzer::analyze(&inputs.distribution).unwrap();
        BundleAssembler::assemble(&metrics, &inputs)
    }

    #[test]
    fn test_joy_scenario() {
        let bundle = make_test_bundle();

        assert_eq!(bundle.current_emotion, "joy");
        assert_eq!(bundle.confidence, 0.8);
        assert_eq!(bundle.color_params.primary_color, "#FFD700");
        assert_eq!(bundle.color_params.color_temperature, 0.9);
        assert!((bundle.color_params.opacity - 0.84).abs() < 1e-12);
        assert_eq!(bundle.mood_settings.direction, 1);
    }

    #[test]
    fn test_sadness_uses_art_spelling() {
        let inputs = DerivationInputs::new(EmotionDistribution::new(vec![
            ("sadness".to_string(), 0.7),
            ("fear".to_string(), 0.3),
        ]));
        let metrics = DistributionAnalyzer::analyze(&inputs.distribution).unwrap();
        let bundle = BundleAssembler::assemble(&metrics, &inputs);

        assert_eq!(bundle.current_emotion, "sad");
        // The diagnostic echo keeps the classifier spelling
        assert_eq!(bundle.ml_params.raw_prediction, "sadness");
        assert_eq!(bundle.mood_settings.direction, -1);
    }

    #[test]
    fn test_modulation_echoes() {
        let bundle = make_test_bundle();

        assert_eq!(bundle.streak_params.current_streak_days, 10);
        assert_eq!(bundle.community_params.average_mood, 0.8);
        assert_eq!(bundle.trading_params.trading_activity_score, 0.75);
        assert_eq!(bundle.connector_params.current_color, "#00FF00");
    }

    #[test]
    fn test_bee_tier_for_ten_day_streak() {
        let bundle = make_test_bundle();

        assert!(bundle.bee_params.should_appear);
        let range = bundle.bee_streak_ranges.unwrap();
        assert_eq!(range.x_range.min, -10.0);
        assert_eq!(range.x_range.max, 10.0);
        assert_eq!(range.y_range.min, 2.2);
        assert_eq!(range.y_range.max, 15.0);
    }

    #[test]
    fn test_no_bee_without_streak() {
        let mut inputs = make_test_inputs();
        inputs.streak_days = 2;
        let metrics = DistributionAnalyzer::analyze(&inputs.distribution).unwrap();
        let bundle = BundleAssembler::assemble(&metrics, &inputs);

        assert!(!bundle.bee_params.should_appear);
        assert!(bundle.bee_streak_ranges.is_none());
    }

    #[test]
    fn test_both_petal_counts_present() {
        let bundle = make_test_bundle();

        // Two distinct consumer contracts; must not be unified
        assert!(bundle.petal_params.petal_count >= 3);
        assert!(bundle.visual_params.petal_count >= 5);
        let metrics =
            DistributionAnalyzer::analyze(&make_test_inputs().distribution).unwrap();
        assert_eq!(
            bundle.petal_params.petal_count,
            ((metrics.entropy * 8.0) as u32 + 6).clamp(3, 20)
        );
        assert_eq!(
            bundle.visual_params.petal_count,
            (metrics.entropy * 10.0) as u32 + 5
        );
    }

    #[test]
    fn test_simple_summary_shares_metrics() {
        let inputs = make_test_inputs();
        let metrics = DistributionAnalyzer::analyze(&inputs.distribution).unwrap();
        let bundle = BundleAssembler::assemble(&metrics, &inputs);
        let simple = BundleAssembler::assemble_simple(&metrics);

        // Simple summary keeps the classifier spelling and the primary color
        assert_eq!(simple.emotion, "joy");
        assert_eq!(simple.color, bundle.color_params.primary_color);
        assert_eq!(simple.confidence, bundle.confidence);
        assert_eq!(simple.complexity, bundle.ml_params.complexity_entropy);
        assert_eq!(simple.petals, bundle.visual_params.petal_count);
        assert_eq!(simple.size, bundle.visual_params.flower_size);
    }

    #[test]
    fn test_idempotence() {
        let inputs = make_test_inputs();
        let metrics = DistributionAnalyzer::analyze(&inputs.distribution).unwrap();

        let a = serde_json::to_string(&BundleAssembler::assemble(&metrics, &inputs)).unwrap();
        let b = serde_json::to_string(&BundleAssembler::assemble(&metrics, &inputs)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ml_params_echo_distribution() {
        let bundle = make_test_bundle();

        assert_eq!(bundle.ml_params.sorted_emotions[0].0, "joy");
        assert_eq!(bundle.ml_params.sorted_emotions[1].0, "surprise");
        assert_eq!(bundle.ml_params.emotion_probabilities.len(), 4);
        assert_eq!(bundle.ml_params.raw_probabilities, vec![0.8, 0.1, 0.05, 0.05]);
        assert_eq!(bundle.ml_params.second_emotion, "surprise");
        assert!((bundle.ml_params.intensity_multiplier - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_serialized_field_names() {
        let bundle = make_test_bundle();
        let value = serde_json::to_value(&bundle).unwrap();

        assert!(value.get("currentEmotion").is_some());
        assert!(value.get("petalParams").is_some());
        assert!(value["petalParams"].get("layerCount").is_some());
        assert!(value["heartbeatParams"]["bpmRange"].get("min").is_some());
        assert!(value["connectorParams"]["tradingActivityColors"]
            .get("veryHigh")
            .is_some());
        assert!(value["beeParams"]["basePosition"].get("x").is_some());
        assert!(value["mlParams"].get("complexityEntropy").is_some());
    }
}
