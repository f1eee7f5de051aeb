//! Application configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults, an
//! optional JSON file, and command line flags or their environment variables.
//!
//! ```json
//! {
//!   "model": { "dir": "./saved_models", "format": "json", "stemming": false },
//!   "feedback": { "path": "feedback_summary.csv" },
//!   "ui": { "show_images": true, "joy_image": "./images/joy.jpg" }
//! }
//! ```
//!
//! Every section and field may be omitted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EmotionError, Result};
use crate::feedback::DEFAULT_FEEDBACK_FILE;
use crate::model::loader::{ArtifactFormat, DEFAULT_MODEL_DIR, FileArtifactLoader};

/// Default location of the Joy illustration.
pub const DEFAULT_JOY_IMAGE: &str = "./images/joy.jpg";

/// Where the fitted artifacts live and how text is normalized for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory holding the vectorizer and classifier artifacts.
    pub dir: PathBuf,
    /// Serialization format of the artifacts.
    pub format: ArtifactFormat,
    /// Stem tokens during normalization. Must match how the artifacts were fitted.
    pub stemming: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_MODEL_DIR),
            format: ArtifactFormat::Json,
            stemming: false,
        }
    }
}

impl ModelConfig {
    /// A loader reading the configured artifacts.
    pub fn loader(&self) -> FileArtifactLoader {
        FileArtifactLoader::new(&self.dir, self.format)
    }
}

/// Feedback log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// CSV file receiving feedback rows.
    pub path: PathBuf,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FEEDBACK_FILE),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the illustration when Joy is predicted.
    pub show_images: bool,
    /// Path of the Joy illustration.
    pub joy_image: PathBuf,
    /// Edge length of the square the illustration is resized to.
    pub image_size: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_images: true,
            joy_image: PathBuf::from(DEFAULT_JOY_IMAGE),
            image_size: 150,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub feedback: FeedbackConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Read a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EmotionError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            EmotionError::config(format!("invalid configuration in {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialization cannot.
    pub fn validate(&self) -> Result<()> {
        if self.model.dir.as_os_str().is_empty() {
            return Err(EmotionError::config("model.dir must not be empty"));
        }
        if self.feedback.path.as_os_str().is_empty() {
            return Err(EmotionError::config("feedback.path must not be empty"));
        }
        if self.ui.image_size == 0 {
            return Err(EmotionError::config("ui.image_size must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.model.dir, PathBuf::from("./saved_models"));
        assert_eq!(config.model.format, ArtifactFormat::Json);
        assert!(!config.model.stemming);
        assert_eq!(config.feedback.path, PathBuf::from("feedback_summary.csv"));
        assert!(config.ui.show_images);
        assert_eq!(config.ui.joy_image, PathBuf::from("./images/joy.jpg"));
        assert_eq!(config.ui.image_size, 150);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"model": {"stemming": true, "format": "bincode"}, "ui": {"show_images": false}}"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert!(config.model.stemming);
        assert_eq!(config.model.format, ArtifactFormat::Bincode);
        assert_eq!(config.model.dir, PathBuf::from("./saved_models"));
        assert!(!config.ui.show_images);
        assert_eq!(config.feedback, FeedbackConfig::default());
    }

    #[test]
    fn test_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"model": {"format": "pickle"}}"#).unwrap();

        assert!(matches!(
            AppConfig::from_file(&path),
            Err(EmotionError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_file(temp_dir.path().join("missing.json")),
            Err(EmotionError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_image_size() {
        let mut config = AppConfig::default();
        config.ui.image_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_model_loader_paths() {
        let loader = ModelConfig::default().loader();
        assert!(loader.vectorizer_path().ends_with("vectorizer.json"));
        assert!(loader.classifier_path().ends_with("classifier.json"));
    }
}
