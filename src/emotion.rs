//! The closed emotion label set
//!
//! Classifiers emit labels from a fixed nine-member set. Every lookup table in
//! the derivation layer is keyed by this enum; labels outside the set fall
//! back per-table rather than being rejected.

use serde::{Deserialize, Serialize};

/// Emotion label as produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Happy,
    Sadness,
    Fear,
    Anger,
    Disgust,
    Shame,
    Surprise,
    Neutral,
}

impl Emotion {
    /// All labels in canonical order. This order is the tie-break order for
    /// the stable ranking in the analyzer.
    pub const ALL: [Emotion; 9] = [
        Emotion::Joy,
        Emotion::Happy,
        Emotion::Sadness,
        Emotion::Fear,
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Shame,
        Emotion::Surprise,
        Emotion::Neutral,
    ];

    /// Classifier-facing label spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Happy => "happy",
            Emotion::Sadness => "sadness",
            Emotion::Fear => "fear",
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Shame => "shame",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        }
    }

    /// Renderer-facing spelling. The art system names the sadness state "sad";
    /// every other label passes through unchanged.
    pub fn art_name(&self) -> &'static str {
        match self {
            Emotion::Sadness => "sad",
            other => other.as_str(),
        }
    }

    /// Parse a classifier label. Unknown labels return `None` so that each
    /// lookup can apply its own fallback.
    pub fn from_label(label: &str) -> Option<Emotion> {
        Emotion::ALL.iter().copied().find(|e| e.as_str() == label)
    }

    /// Warm labels drive color temperature positive
    pub fn is_warm(&self) -> bool {
        matches!(
            self,
            Emotion::Joy | Emotion::Happy | Emotion::Anger | Emotion::Surprise
        )
    }

    /// Cool labels drive color temperature negative. Disgust is in neither
    /// partition and reads as temperature-neutral.
    pub fn is_cool(&self) -> bool {
        matches!(
            self,
            Emotion::Sadness | Emotion::Fear | Emotion::Shame | Emotion::Neutral
        )
    }

    /// Labels that rotate petals clockwise; the rest rotate counterclockwise
    pub fn rotates_clockwise(&self) -> bool {
        matches!(
            self,
            Emotion::Happy | Emotion::Joy | Emotion::Surprise | Emotion::Neutral
        )
    }
}
