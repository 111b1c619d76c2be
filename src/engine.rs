//! Engine orchestration
//!
//! This module provides the public API: text (or a ready distribution) in,
//! parameter bundle out. The pipeline is classify → analyze → assemble; every
//! stage is a pure function of its inputs, so concurrent calls need no
//! coordination.

use crate::analyzer::DistributionAnalyzer;
use crate::bundle::BundleAssembler;
use crate::classifier::{EmotionClassifier, LexiconClassifier};
use crate::error::BloomError;
use crate::types::{DerivationInputs, ParameterBundle, SimpleParams};
use std::sync::Arc;

/// Derive the full bundle from a ready-made distribution, skipping the
/// classifier entirely.
pub fn derive_parameters(inputs: &DerivationInputs) -> Result<ParameterBundle, BloomError> {
    let metrics = DistributionAnalyzer::analyze(&inputs.distribution)?;
    Ok(BundleAssembler::assemble(&metrics, inputs))
}

/// Derive the 7-field summary from a ready-made distribution
pub fn derive_simple(inputs: &DerivationInputs) -> Result<SimpleParams, BloomError> {
    let metrics = DistributionAnalyzer::analyze(&inputs.distribution)?;
    Ok(BundleAssembler::assemble_simple(&metrics))
}

/// Modulation inputs accompanying a text analysis request
#[derive(Debug, Clone, Copy)]
pub struct Modulation {
    pub streak_days: u32,
    pub community_mood: f64,
    pub trading_activity: f64,
}

impl Default for Modulation {
    fn default() -> Self {
        Self {
            streak_days: 0,
            community_mood: 0.5,
            trading_activity: 0.5,
        }
    }
}

/// Engine holding the injected classifier capability.
///
/// The classifier is process-wide immutable state: built once at startup,
/// shared via `Arc`, never mutated. The engine itself carries no per-request
/// state.
pub struct MoodEngine {
    classifier: Arc<dyn EmotionClassifier>,
}

impl Default for MoodEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodEngine {
    /// Create an engine backed by the built-in lexicon classifier
    pub fn new() -> Self {
        Self {
            classifier: Arc::new(LexiconClassifier::new()),
        }
    }

    /// Create an engine backed by an injected classifier
    pub fn with_classifier(classifier: Arc<dyn EmotionClassifier>) -> Self {
        Self { classifier }
    }

    /// Classify text and derive the full bundle
    pub fn analyze(&self, text: &str, modulation: Modulation) -> Result<ParameterBundle, BloomError> {
        let inputs = self.classify_to_inputs(text, modulation)?;
        derive_parameters(&inputs)
    }

    /// Classify text and derive the 7-field summary
    pub fn analyze_simple(&self, text: &str) -> Result<SimpleParams, BloomError> {
        let inputs = self.classify_to_inputs(text, Modulation::default())?;
        derive_simple(&inputs)
    }

    fn classify_to_inputs(
        &self,
        text: &str,
        modulation: Modulation,
    ) -> Result<DerivationInputs, BloomError> {
        if text.trim().is_empty() {
            return Err(BloomError::InvalidInput);
        }

        let classification = self.classifier.classify(text)?;

        Ok(DerivationInputs {
            distribution: classification.distribution,
            streak_days: modulation.streak_days,
            community_mood: modulation.community_mood,
            trading_activity: modulation.trading_activity,
        })
    }
}
