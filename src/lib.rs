//! Mood Bloom - deterministic mood-to-flower parameter engine
//!
//! Bloom maps the emotion expressed in a short text to the parameter bundle a
//! generative flower-art renderer consumes, through a deterministic pipeline:
//! classification → distribution analysis → per-subsystem derivation →
//! bundle assembly.
//!
//! ## Modules
//!
//! - **classifier**: the opaque classification capability and the built-in
//!   lexicon reference implementation
//! - **analyzer**: confidence/entropy/ranking reduction of a distribution
//! - **derive**: per-subsystem formulas and their static lookup tables
//! - **bundle**: assembly of the full bundle and the 7-field summary
//! - **engine**: public orchestration API
//! - **server** (feature `server`): the HTTP transport contract

pub mod analyzer;
pub mod bundle;
pub mod classifier;
pub mod derive;
pub mod emotion;
pub mod engine;
pub mod error;
pub mod types;

#[cfg(feature = "server")]
pub mod server;

pub use classifier::{Classification, EmotionClassifier, LexiconClassifier};
pub use emotion::Emotion;
pub use engine::{derive_parameters, derive_simple, Modulation, MoodEngine};
pub use error::BloomError;
pub use types::{DerivationInputs, EmotionDistribution, ParameterBundle, SimpleParams};

/// Crate version embedded in diagnostics
pub const BLOOM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "mood-classifier-api";
