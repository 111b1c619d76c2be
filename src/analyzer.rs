//! Distribution analysis
//!
//! This module reduces a classifier probability distribution to the metrics
//! every deriver consumes:
//! - Confidence (top probability) and the confidence gap to the runner-up
//! - Unnormalized natural-log Shannon entropy, the ambiguity proxy
//! - A stable descending ranking of all labels

use crate::emotion::Emotion;
use crate::error::BloomError;
use crate::types::{DerivedMetrics, EmotionDistribution};

/// Offset added inside the log so zero probabilities do not blow up
const ENTROPY_EPSILON: f64 = 1e-10;

/// Analyzer reducing a distribution to derived metrics
pub struct DistributionAnalyzer;

impl DistributionAnalyzer {
    /// Analyze a distribution.
    ///
    /// Fails with [`BloomError::Precondition`] when fewer than two labels are
    /// present; derivation needs both a dominant and a second-ranked emotion.
    pub fn analyze(distribution: &EmotionDistribution) -> Result<DerivedMetrics, BloomError> {
        if distribution.len() < 2 {
            return Err(BloomError::Precondition(distribution.len()));
        }

        let entropy = compute_entropy(distribution);
        let min_probability = distribution
            .iter()
            .map(|(_, p)| *p)
            .fold(f64::INFINITY, f64::min);
        let ranked = rank_descending(distribution);

        let (dominant_label, confidence) = ranked[0].clone();
        let (second_label, second_confidence) = ranked[1].clone();

        Ok(DerivedMetrics {
            distribution: distribution.clone(),
            dominant: Emotion::from_label(&dominant_label),
            dominant_label,
            confidence,
            second: Emotion::from_label(&second_label),
            second_label,
            second_confidence,
            confidence_gap: confidence - second_confidence,
            entropy,
            min_probability,
            ranked,
        })
    }
}

/// Unnormalized Shannon entropy: -sum p * ln(p + epsilon).
/// Range depends on label-set size; not divided by ln(label count).
fn compute_entropy(distribution: &EmotionDistribution) -> f64 {
    -distribution
        .iter()
        .map(|(_, p)| p * (p + ENTROPY_EPSILON).ln())
        .sum::<f64>()
}

/// Sort (label, probability) pairs descending by probability. The sort is
/// stable, so equal probabilities keep the classifier's emission order.
fn rank_descending(distribution: &EmotionDistribution) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = distribution.iter().cloned().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_test_distribution() -> EmotionDistribution {
        EmotionDistribution::new(vec![
            ("joy".to_string(), 0.8),
            ("surprise".to_string(), 0.1),
            ("neutral".to_string(), 0.05),
            ("sadness".to_string(), 0.05),
        ])
    }

    #[test]
    fn test_ranking_and_gap() {
        let metrics = DistributionAnalyzer::analyze(&make_test_distribution()).unwrap();

        assert_eq!(metrics.dominant_label, "joy");
        assert_eq!(metrics.dominant, Some(Emotion::Joy));
        assert_eq!(metrics.confidence, 0.8);
        assert_eq!(metrics.second_label, "surprise");
        assert_eq!(metrics.second_confidence, 0.1);
        assert!((metrics.confidence_gap - 0.7).abs() < 1e-12);
        assert!(metrics.second_confidence <= metrics.confidence);
        assert!(metrics.confidence_gap >= 0.0);
    }

    #[test]
    fn test_stable_tie_break_keeps_emission_order() {
        let dist = EmotionDistribution::new(vec![
            ("fear".to_string(), 0.25),
            ("anger".to_string(), 0.25),
            ("shame".to_string(), 0.25),
            ("disgust".to_string(), 0.25),
        ]);
        let metrics = DistributionAnalyzer::analyze(&dist).unwrap();

        // All equal: emission order wins
        assert_eq!(metrics.dominant_label, "fear");
        assert_eq!(metrics.second_label, "anger");
        assert_eq!(metrics.confidence_gap, 0.0);
    }

    #[test]
    fn test_entropy_is_nonnegative() {
        let metrics = DistributionAnalyzer::analyze(&make_test_distribution()).unwrap();
        assert!(metrics.entropy >= 0.0);

        // A certain distribution collapses to (numerically) zero entropy
        let certain = EmotionDistribution::new(vec![
            ("joy".to_string(), 1.0),
            ("neutral".to_string(), 0.0),
        ]);
        let metrics = DistributionAnalyzer::analyze(&certain).unwrap();
        assert!(metrics.entropy.abs() < 1e-6);
    }

    #[test]
    fn test_entropy_value() {
        // Uniform over 4 labels: -4 * 0.25 * ln(0.25) = ln(4)
        let uniform = EmotionDistribution::new(vec![
            ("joy".to_string(), 0.25),
            ("fear".to_string(), 0.25),
            ("anger".to_string(), 0.25),
            ("neutral".to_string(), 0.25),
        ]);
        let metrics = DistributionAnalyzer::analyze(&uniform).unwrap();
        assert!((metrics.entropy - 4.0f64.ln()).abs() < 1e-6);
    }

    #[test]
    fn test_min_probability() {
        let metrics = DistributionAnalyzer::analyze(&make_test_distribution()).unwrap();
        assert_eq!(metrics.min_probability, 0.05);
    }

    #[test]
    fn test_single_label_is_precondition_error() {
        let dist = EmotionDistribution::new(vec![("joy".to_string(), 1.0)]);
        let err = DistributionAnalyzer::analyze(&dist).unwrap_err();
        assert!(matches!(err, BloomError::Precondition(1)));

        let empty = EmotionDistribution::new(vec![]);
        let err = DistributionAnalyzer::analyze(&empty).unwrap_err();
        assert!(matches!(err, BloomError::Precondition(0)));
    }

    #[test]
    fn test_unknown_dominant_label_is_kept() {
        let dist = EmotionDistribution::new(vec![
            ("confused".to_string(), 0.9),
            ("joy".to_string(), 0.1),
        ]);
        let metrics = DistributionAnalyzer::analyze(&dist).unwrap();
        assert_eq!(metrics.dominant_label, "confused");
        assert_eq!(metrics.dominant, None);
    }
}
