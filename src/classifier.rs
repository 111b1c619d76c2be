//! Emotion classification capability
//!
//! The derivation engine treats classification as an opaque capability: any
//! implementation that maps text to a probability distribution over the label
//! set plugs in behind [`EmotionClassifier`]. The trait object is built once
//! at process start and shared read-only across requests.
//!
//! [`LexiconClassifier`] is the built-in reference implementation: a
//! deterministic keyword lexicon with a smoothing prior. It keeps the binary
//! usable end-to-end; production deployments inject a trained model instead.

use crate::emotion::Emotion;
use crate::error::BloomError;
use crate::types::EmotionDistribution;

/// Output of one classification call
#[derive(Debug, Clone)]
pub struct Classification {
    /// Label the classifier predicts for the text
    pub label: String,
    /// Probability per label, summing to 1
    pub distribution: EmotionDistribution,
}

/// Capability contract: text in, label plus probability distribution out.
///
/// Implementations must be safe for concurrent read-only use; the engine
/// never serializes calls.
pub trait EmotionClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Classification, BloomError>;
}

/// Smoothing mass every label starts with
const SMOOTHING_WEIGHT: f64 = 0.15;
/// Extra prior on neutral so keyword-free text classifies as neutral
const NEUTRAL_PRIOR: f64 = 0.35;
/// Mass added per keyword occurrence
const KEYWORD_WEIGHT: f64 = 1.0;

/// Keyword lexicon per emotion, matched against lowercase word tokens
fn keywords(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Joy => &[
            "joy", "joyful", "wonderful", "amazing", "fantastic", "thrilled", "ecstatic",
            "delighted", "excited", "love",
        ],
        Emotion::Happy => &[
            "happy", "glad", "great", "good", "pleased", "cheerful", "content", "smiling",
            "enjoying",
        ],
        Emotion::Sadness => &[
            "sad", "lonely", "unhappy", "depressed", "miserable", "crying", "grief",
            "heartbroken", "down", "hopeless",
        ],
        Emotion::Fear => &[
            "scared", "afraid", "worried", "anxious", "terrified", "nervous", "panic", "dread",
            "fear", "frightened",
        ],
        Emotion::Anger => &[
            "angry", "furious", "frustrated", "annoyed", "mad", "rage", "irritated", "hate",
            "outraged",
        ],
        Emotion::Disgust => &[
            "disgusted", "disgusting", "gross", "revolting", "nasty", "sickening", "repulsed",
            "vile",
        ],
        Emotion::Shame => &[
            "ashamed", "embarrassed", "guilty", "humiliated", "regret", "shame", "shameful",
        ],
        Emotion::Surprise => &[
            "surprised", "shocked", "astonished", "unexpected", "wow", "stunned", "amazed",
            "startled",
        ],
        Emotion::Neutral => &["okay", "fine", "normal", "average", "usual", "alright"],
    }
}

/// Deterministic keyword-lexicon classifier over the nine-label set
#[derive(Debug, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    fn score(text: &str) -> [f64; 9] {
        let mut scores = [SMOOTHING_WEIGHT; 9];
        scores[8] += NEUTRAL_PRIOR; // neutral is last in canonical order

        let lowered = text.to_lowercase();
        let tokens = lowered
            .split(|c: char| !c.is_alphabetic())
            .filter(|t| !t.is_empty());

        for token in tokens {
            for (i, emotion) in Emotion::ALL.iter().enumerate() {
                if keywords(*emotion).iter().any(|k| *k == token) {
                    scores[i] += KEYWORD_WEIGHT;
                }
            }
        }

        scores
    }
}

impl EmotionClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Classification, BloomError> {
        if text.trim().is_empty() {
            return Err(BloomError::InvalidInput);
        }

        let scores = Self::score(text);
        let total: f64 = scores.iter().sum();
        let mut probabilities = [0.0; 9];
        for (p, s) in probabilities.iter_mut().zip(scores) {
            *p = s / total;
        }

        // Argmax with canonical-order tie-break
        let mut best = 8; // neutral wins when nothing scores
        for i in 0..9 {
            if probabilities[i] > probabilities[best] {
                best = i;
            }
        }

        Ok(Classification {
            label: Emotion::ALL[best].as_str().to_string(),
            distribution: EmotionDistribution::from_scores(probabilities),
        })
    }
}
