//! Error types for the emotion classifier.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`EmotionError`] enum. The variants follow the request lifecycle: artifacts
//! fail at load time, blank input and inference failures are scoped to a single
//! request, and image or feedback problems never end a session.
//!
//! # Examples
//!
//! ```
//! use emotion_classifier::error::{EmotionError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(EmotionError::inference("classifier returned 5 probabilities"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for emotion classifier operations.
#[derive(Error, Debug)]
pub enum EmotionError {
    /// I/O errors (file operations, terminal, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A model artifact is missing, corrupt or incompatible. Fatal at startup.
    #[error("Load error: {0}")]
    Load(String),

    /// The user submitted blank text.
    #[error("Empty input: please provide some text")]
    EmptyInput,

    /// Failure inside normalization, vectorization or prediction.
    #[error("Inference error: {0}")]
    Inference(String),

    /// An illustrative image asset is not present.
    #[error("Asset missing: {0}")]
    AssetMissing(String),

    /// The feedback log could not be written.
    #[error("Feedback write error: {0}")]
    FeedbackWrite(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with EmotionError.
pub type Result<T> = std::result::Result<T, EmotionError>;

impl EmotionError {
    /// Create a new load error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        EmotionError::Load(msg.into())
    }

    /// Create a new inference error.
    pub fn inference<S: Into<String>>(msg: S) -> Self {
        EmotionError::Inference(msg.into())
    }

    /// Create a new asset missing error.
    pub fn asset_missing<S: Into<String>>(msg: S) -> Self {
        EmotionError::AssetMissing(msg.into())
    }

    /// Create a new feedback write error.
    pub fn feedback_write<S: Into<String>>(msg: S) -> Self {
        EmotionError::FeedbackWrite(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        EmotionError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        EmotionError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        EmotionError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        EmotionError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// The message without the variant prefix, for showing to end users.
    pub fn detail(&self) -> String {
        match self {
            EmotionError::Load(msg)
            | EmotionError::Inference(msg)
            | EmotionError::AssetMissing(msg)
            | EmotionError::FeedbackWrite(msg)
            | EmotionError::Analysis(msg)
            | EmotionError::Config(msg)
            | EmotionError::Other(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// Whether this error should stop the process instead of the request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EmotionError::Load(_) | EmotionError::Config(_))
    }
}
