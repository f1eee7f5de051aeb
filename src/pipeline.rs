//! Inference pipeline: normalize → vectorize → classify → rank.
//!
//! An [`InferencePipeline`] is assembled once at startup from a normalizer,
//! a vectorizer and a classifier whose dimensions have been checked against
//! each other. After that it is immutable, so one instance can serve any
//! number of threads.
//!
//! # Examples
//!
//! ```no_run
//! use emotion_classifier::model::{ArtifactFormat, FileArtifactLoader};
//! use emotion_classifier::pipeline::InferencePipeline;
//!
//! let loader = FileArtifactLoader::new("./saved_models", ArtifactFormat::Json);
//! let pipeline = InferencePipeline::from_loader(&loader, false).unwrap();
//!
//! let result = pipeline.classify("I am so happy today!!!").unwrap();
//! println!("Predicted Emotion: {}", result.predicted);
//! for score in &result.ranked {
//!     println!("{}", score.percentage_line());
//! }
//! ```

use std::sync::{Arc, OnceLock};

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{EmotionError, Result};
use crate::label::{Emotion, NUM_EMOTIONS};
use crate::model::classifier::Classifier;
use crate::model::loader::ArtifactLoader;
use crate::model::vectorizer::Vectorizer;
use crate::normalizer::TextNormalizer;

/// Allowed deviation of the probability sum from one.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Probability assigned to one emotion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionScore {
    pub emotion: Emotion,
    pub probability: f64,
}

impl EmotionScore {
    /// The probability as a percentage.
    pub fn percentage(&self) -> f64 {
        self.probability * 100.0
    }

    /// Display line such as `Joy: 87.43%`.
    pub fn percentage_line(&self) -> String {
        format!("{}: {:.2}%", self.emotion, self.percentage())
    }
}

/// Outcome of classifying one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// The most probable emotion.
    pub predicted: Emotion,
    /// Every emotion, most probable first.
    pub ranked: Vec<EmotionScore>,
    /// The text after normalization.
    pub normalized: String,
}

impl PredictionResult {
    /// Probability assigned to `emotion`.
    pub fn probability_of(&self, emotion: Emotion) -> f64 {
        self.ranked
            .iter()
            .find(|score| score.emotion == emotion)
            .map(|score| score.probability)
            .unwrap_or(0.0)
    }
}

/// Order label probabilities descending, ties by label index ascending.
pub fn rank(probabilities: &[f64]) -> Result<Vec<EmotionScore>> {
    let mut ranked = probabilities
        .iter()
        .enumerate()
        .map(|(index, &probability)| {
            Ok(EmotionScore {
                emotion: Emotion::from_index(index)?,
                probability,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Stable, so equal probabilities keep index order.
    ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    Ok(ranked)
}

fn validate_distribution(probabilities: &[f64]) -> Result<()> {
    if probabilities.len() != NUM_EMOTIONS {
        return Err(EmotionError::inference(format!(
            "classifier returned {} probabilities, expected {NUM_EMOTIONS}",
            probabilities.len()
        )));
    }
    if let Some(p) = probabilities
        .iter()
        .find(|p| !p.is_finite() || **p < 0.0 || **p > 1.0)
    {
        return Err(EmotionError::inference(format!(
            "classifier returned invalid probability {p}"
        )));
    }

    let sum: f64 = probabilities.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(EmotionError::inference(format!(
            "probabilities sum to {sum}, expected 1"
        )));
    }
    Ok(())
}

/// Loaded-once text classification pipeline.
#[derive(Clone)]
pub struct InferencePipeline {
    normalizer: TextNormalizer,
    vectorizer: Arc<dyn Vectorizer>,
    classifier: Arc<dyn Classifier>,
}

impl std::fmt::Debug for InferencePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferencePipeline")
            .field("stemming", &self.normalizer.stemming())
            .field("vectorizer", &self.vectorizer.name())
            .field("classifier", &self.classifier.name())
            .field("dimension", &self.vectorizer.dimension())
            .finish()
    }
}

impl InferencePipeline {
    /// Assemble a pipeline, checking that the parts fit together.
    pub fn new(
        normalizer: TextNormalizer,
        vectorizer: Arc<dyn Vectorizer>,
        classifier: Arc<dyn Classifier>,
    ) -> Result<Self> {
        if vectorizer.dimension() != classifier.input_dimension() {
            return Err(EmotionError::load(format!(
                "vectorizer produces {} features but classifier expects {}",
                vectorizer.dimension(),
                classifier.input_dimension()
            )));
        }
        if classifier.n_classes() != NUM_EMOTIONS {
            return Err(EmotionError::load(format!(
                "classifier has {} classes, expected {NUM_EMOTIONS}",
                classifier.n_classes()
            )));
        }

        Ok(InferencePipeline {
            normalizer,
            vectorizer,
            classifier,
        })
    }

    /// Load both artifacts through `loader` and assemble a pipeline.
    pub fn from_loader(loader: &dyn ArtifactLoader, stemming: bool) -> Result<Self> {
        let vectorizer = loader.load_vectorizer()?;
        let classifier = loader.load_classifier()?;
        let pipeline = Self::new(TextNormalizer::new(stemming)?, vectorizer, classifier)?;

        info!(
            "Inference pipeline ready ({} loader, {} features, stemming {})",
            loader.name(),
            pipeline.vectorizer.dimension(),
            if stemming { "on" } else { "off" }
        );
        Ok(pipeline)
    }

    /// The normalizer in front of the vectorizer.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// The loaded vectorizer.
    pub fn vectorizer(&self) -> &Arc<dyn Vectorizer> {
        &self.vectorizer
    }

    /// The loaded classifier.
    pub fn classifier(&self) -> &Arc<dyn Classifier> {
        &self.classifier
    }

    /// Classify one raw text.
    ///
    /// Blank text is rejected with [`EmotionError::EmptyInput`]. Any failure
    /// after that is reported as [`EmotionError::Inference`] carrying the
    /// cause.
    pub fn classify(&self, raw: &str) -> Result<PredictionResult> {
        if raw.trim().is_empty() {
            return Err(EmotionError::EmptyInput);
        }

        self.run(raw).map_err(|e| match e {
            EmotionError::Inference(_) => e,
            other => EmotionError::inference(other.to_string()),
        })
    }

    /// Classify many texts in parallel. Results keep the input order.
    pub fn classify_batch<S>(&self, texts: &[S]) -> Vec<Result<PredictionResult>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }

    fn run(&self, raw: &str) -> Result<PredictionResult> {
        let normalized = self.normalizer.normalize(raw)?;
        debug!("Normalized {raw:?} to {normalized:?}");

        let features = self.vectorizer.transform(&normalized)?;
        let (label, probabilities) = self.classifier.predict_with_proba(&features)?;
        validate_distribution(&probabilities)?;

        let predicted = Emotion::from_index(label)?;
        let ranked = rank(&probabilities)?;
        if ranked[0].probability > probabilities[label] {
            return Err(EmotionError::inference(format!(
                "classifier predicted {predicted} but {} is more probable",
                ranked[0].emotion
            )));
        }

        debug!(
            "Predicted {predicted} ({:.4}) from {} active features",
            probabilities[label],
            features.nnz()
        );

        Ok(PredictionResult {
            predicted,
            ranked,
            normalized,
        })
    }
}

static GLOBAL_PIPELINE: OnceLock<InferencePipeline> = OnceLock::new();

/// Install the process-wide pipeline. Fails if one is already installed.
pub fn install_global(pipeline: InferencePipeline) -> Result<&'static InferencePipeline> {
    GLOBAL_PIPELINE
        .set(pipeline)
        .map_err(|_| EmotionError::other("inference pipeline is already installed"))?;
    global().ok_or_else(|| EmotionError::other("inference pipeline was not installed"))
}

/// The process-wide pipeline, if installed.
pub fn global() -> Option<&'static InferencePipeline> {
    GLOBAL_PIPELINE.get()
}
