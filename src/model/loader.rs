//! Artifact loading.
//!
//! The inference pipeline never reads files itself: it receives its
//! vectorizer and classifier from an [`ArtifactLoader`]. The shipped
//! [`FileArtifactLoader`] reads them from a model directory, serialized as
//! JSON or bincode. Every failure surfaces as [`EmotionError::Load`].

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{EmotionError, Result};
use crate::model::classifier::{Classifier, LogisticRegression, LogisticRegressionArtifact};
use crate::model::vectorizer::{TfIdfArtifact, TfIdfVectorizer, Vectorizer};

/// Default directory holding the fitted artifacts.
pub const DEFAULT_MODEL_DIR: &str = "./saved_models";

/// Base file name of the vectorizer artifact.
pub const VECTORIZER_FILE_STEM: &str = "vectorizer";

/// Base file name of the classifier artifact.
pub const CLASSIFIER_FILE_STEM: &str = "classifier";

/// Serialization format of artifact files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// Human-readable JSON (`.json`).
    #[default]
    Json,
    /// Compact bincode (`.bin`).
    Bincode,
}

impl ArtifactFormat {
    /// File extension used for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactFormat::Json => "json",
            ArtifactFormat::Bincode => "bin",
        }
    }
}

/// Source of the fitted vectorizer and classifier.
pub trait ArtifactLoader: Send + Sync {
    /// Load the fitted vectorizer.
    fn load_vectorizer(&self) -> Result<Arc<dyn Vectorizer>>;

    /// Load the fitted classifier.
    fn load_classifier(&self) -> Result<Arc<dyn Classifier>>;

    /// Get the name of this loader for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Loads artifacts from `<dir>/vectorizer.<ext>` and `<dir>/classifier.<ext>`.
#[derive(Debug, Clone)]
pub struct FileArtifactLoader {
    dir: PathBuf,
    format: ArtifactFormat,
}

impl FileArtifactLoader {
    /// Create a loader for the given directory and format.
    pub fn new<P: AsRef<Path>>(dir: P, format: ArtifactFormat) -> Self {
        FileArtifactLoader {
            dir: dir.as_ref().to_path_buf(),
            format,
        }
    }

    /// The model directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The artifact format.
    pub fn format(&self) -> ArtifactFormat {
        self.format
    }

    /// Path of the vectorizer artifact.
    pub fn vectorizer_path(&self) -> PathBuf {
        self.artifact_path(VECTORIZER_FILE_STEM)
    }

    /// Path of the classifier artifact.
    pub fn classifier_path(&self) -> PathBuf {
        self.artifact_path(CLASSIFIER_FILE_STEM)
    }

    fn artifact_path(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.{}", self.format.extension()))
    }

    fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        debug!("Reading artifact {}", path.display());

        let file = File::open(path)
            .map_err(|e| EmotionError::load(format!("cannot open {}: {e}", path.display())))?;
        let reader = BufReader::new(file);

        match self.format {
            ArtifactFormat::Json => serde_json::from_reader(reader)
                .map_err(|e| EmotionError::load(format!("cannot parse {}: {e}", path.display()))),
            ArtifactFormat::Bincode => bincode::deserialize_from(reader)
                .map_err(|e| EmotionError::load(format!("cannot decode {}: {e}", path.display()))),
        }
    }

    fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        match self.format {
            ArtifactFormat::Json => serde_json::to_writer_pretty(&mut writer, value)?,
            ArtifactFormat::Bincode => bincode::serialize_into(&mut writer, value)
                .map_err(|e| EmotionError::other(format!("cannot encode artifact: {e}")))?,
        }

        std::io::Write::flush(&mut writer)?;
        Ok(())
    }

    /// Write both artifacts into the model directory, creating it if needed.
    pub fn save(
        &self,
        vectorizer: &TfIdfArtifact,
        classifier: &LogisticRegressionArtifact,
    ) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        self.write(&self.vectorizer_path(), vectorizer)?;
        self.write(&self.classifier_path(), classifier)?;
        info!("Saved model artifacts to {}", self.dir.display());
        Ok(())
    }
}

impl ArtifactLoader for FileArtifactLoader {
    fn load_vectorizer(&self) -> Result<Arc<dyn Vectorizer>> {
        let path = self.vectorizer_path();
        let artifact: TfIdfArtifact = self.read(&path)?;
        let vectorizer = TfIdfVectorizer::from_artifact(artifact)
            .map_err(|e| EmotionError::load(format!("{}: {e}", path.display())))?;

        info!(
            "Loaded vectorizer from {} ({} features)",
            path.display(),
            vectorizer.dimension()
        );
        Ok(Arc::new(vectorizer))
    }

    fn load_classifier(&self) -> Result<Arc<dyn Classifier>> {
        let path = self.classifier_path();
        let artifact: LogisticRegressionArtifact = self.read(&path)?;
        let classifier = LogisticRegression::from_artifact(artifact)
            .map_err(|e| EmotionError::load(format!("{}: {e}", path.display())))?;

        info!(
            "Loaded classifier from {} ({} classes, {} features)",
            path.display(),
            classifier.n_classes(),
            classifier.input_dimension()
        );
        Ok(Arc::new(classifier))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
