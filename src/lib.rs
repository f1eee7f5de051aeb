//! # Emotion Classifier
//!
//! Classifies free text into one of six emotions (Sadness, Joy, Love, Anger,
//! Fear, Surprise) with a pre-trained TF-IDF vectorizer and logistic
//! regression model.
//!
//! ## Features
//!
//! - Text normalization built on a small analysis pipeline, with optional Porter stemming
//! - TF-IDF vectorization and logistic regression loaded from JSON or bincode artifacts
//! - Ranked probabilities for every emotion
//! - An append-only CSV feedback log
//! - A presenter seam so the session logic runs under any UI
//!
//! ## Example
//!
//! ```no_run
//! use emotion_classifier::model::FileArtifactLoader;
//! use emotion_classifier::model::loader::ArtifactFormat;
//! use emotion_classifier::pipeline::InferencePipeline;
//!
//! let loader = FileArtifactLoader::new("./saved_models", ArtifactFormat::Json);
//! let pipeline = InferencePipeline::from_loader(&loader, false)?;
//!
//! let result = pipeline.classify("I am so happy today!!!")?;
//! println!("Predicted Emotion: {}", result.predicted);
//! for score in &result.ranked {
//!     println!("{}", score.percentage_line());
//! }
//! # Ok::<(), emotion_classifier::error::EmotionError>(())
//! ```

pub mod analysis;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod label;
pub mod model;
pub mod normalizer;
pub mod pipeline;

pub mod prelude {
    pub use crate::error::{EmotionError, Result};
    pub use crate::feedback::{CsvFeedbackRecorder, FeedbackRecorder, FeedbackType};
    pub use crate::label::Emotion;
    pub use crate::normalizer::TextNormalizer;
    pub use crate::pipeline::{EmotionScore, InferencePipeline, PredictionResult};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
