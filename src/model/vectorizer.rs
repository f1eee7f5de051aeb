//! Feature vectorizers.
//!
//! A [`Vectorizer`] maps normalized text to a [`FeatureVector`] whose
//! dimension is fixed when the fitted artifact is loaded. The shipped
//! implementation replays a fitted TF-IDF transform: the artifact carries the
//! vocabulary, the inverse document frequencies and the tokenization settings
//! the vocabulary was built with.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::{LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::analysis::tokenizer::regex::DEFAULT_TOKEN_PATTERN;
use crate::error::{EmotionError, Result};
use crate::model::feature::FeatureVector;

/// Transform from text to a fixed-dimension feature vector.
pub trait Vectorizer: Send + Sync {
    /// Vectorize already-normalized text.
    ///
    /// Empty text yields the zero vector.
    fn transform(&self, text: &str) -> Result<FeatureVector>;

    /// The dimension of every vector this vectorizer produces.
    fn dimension(&self) -> usize;

    /// Get the name of this vectorizer for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Row normalization applied after TF-IDF weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Scale to unit Euclidean length.
    #[default]
    L2,
    /// Scale to unit sum of absolute values.
    L1,
    /// Leave weights unscaled.
    None,
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_true() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

/// Serialized state of a fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfArtifact {
    /// Term to feature index.
    pub vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency per feature index.
    pub idf: Vec<f64>,
    /// Regex whose matches are the tokens.
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    /// Lowercase tokens before lookup.
    #[serde(default = "default_true")]
    pub lowercase: bool,
    /// Inclusive range of word n-gram sizes.
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    /// Use `1 + ln(tf)` instead of raw counts.
    #[serde(default)]
    pub sublinear_tf: bool,
    /// Row normalization.
    #[serde(default)]
    pub norm: Norm,
    /// Tokens dropped before n-gram generation.
    #[serde(default)]
    pub stop_words: Vec<String>,
}

impl TfIdfArtifact {
    /// Create an artifact with default tokenization settings.
    pub fn new(vocabulary: AHashMap<String, usize>, idf: Vec<f64>) -> Self {
        TfIdfArtifact {
            vocabulary,
            idf,
            token_pattern: default_token_pattern(),
            lowercase: true,
            ngram_range: default_ngram_range(),
            sublinear_tf: false,
            norm: Norm::L2,
            stop_words: Vec::new(),
        }
    }
}

/// TF-IDF vectorizer restored from a fitted artifact.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    norm: Norm,
    /// Analyzer replaying the fit-time tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("ngram_range", &self.ngram_range)
            .field("sublinear_tf", &self.sublinear_tf)
            .field("norm", &self.norm)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Restore a vectorizer from its artifact, validating its consistency.
    pub fn from_artifact(artifact: TfIdfArtifact) -> Result<Self> {
        let TfIdfArtifact {
            vocabulary,
            idf,
            token_pattern,
            lowercase,
            ngram_range,
            sublinear_tf,
            norm,
            stop_words,
        } = artifact;

        if vocabulary.is_empty() {
            return Err(EmotionError::load("vectorizer vocabulary is empty"));
        }
        if idf.len() != vocabulary.len() {
            return Err(EmotionError::load(format!(
                "vectorizer has {} idf weights for {} vocabulary terms",
                idf.len(),
                vocabulary.len()
            )));
        }
        if let Some(weight) = idf.iter().find(|w| !w.is_finite()) {
            return Err(EmotionError::load(format!(
                "vectorizer idf weight {weight} is not finite"
            )));
        }

        let mut seen = AHashSet::with_capacity(vocabulary.len());
        for (term, &index) in &vocabulary {
            if index >= idf.len() || !seen.insert(index) {
                return Err(EmotionError::load(format!(
                    "vocabulary term {term:?} has invalid or duplicate index {index}"
                )));
            }
        }

        let (min_n, max_n) = ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(EmotionError::load(format!(
                "invalid ngram range ({min_n}, {max_n})"
            )));
        }

        let tokenizer = RegexTokenizer::with_pattern(&token_pattern)
            .map_err(|e| EmotionError::load(format!("invalid token pattern: {e}")))?;
        let mut analyzer = PipelineAnalyzer::new(Arc::new(tokenizer)).with_name("tfidf");
        if lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }
        if !stop_words.is_empty() {
            analyzer = analyzer.add_filter(Arc::new(StopFilter::from_words(stop_words)));
        }

        Ok(TfIdfVectorizer {
            vocabulary,
            idf,
            ngram_range,
            sublinear_tf,
            norm,
            analyzer: Arc::new(analyzer),
        })
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Look up the feature index of a term.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Produce the terms of a document: tokens, then word n-grams.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();

        let (min_n, max_n) = self.ngram_range;
        if max_n == 1 {
            return Ok(tokens);
        }

        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        Ok(terms)
    }
}

impl Vectorizer for TfIdfVectorizer {
    fn transform(&self, text: &str) -> Result<FeatureVector> {
        let mut counts: AHashMap<usize, f64> = AHashMap::new();
        for term in self.terms(text)? {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(idx, count)| {
                let tf = if self.sublinear_tf { 1.0 + count.ln() } else { count };
                (idx, tf * self.idf[idx])
            })
            .collect();

        let mut features = FeatureVector::from_entries(self.dimension(), entries)?;

        let norm = match self.norm {
            Norm::L2 => features.l2_norm(),
            Norm::L1 => features.l1_norm(),
            Norm::None => 0.0,
        };
        if norm > 0.0 {
            features.scale(1.0 / norm);
        }

        Ok(features)
    }

    fn dimension(&self) -> usize {
        self.idf.len()
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}
