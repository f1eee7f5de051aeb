//! Linear classifiers over feature vectors.
//!
//! A [`Classifier`] turns a [`FeatureVector`] into a probability distribution
//! indexed by class label. The shipped implementation restores a fitted
//! logistic regression: one weight row and intercept per class, combined with
//! a softmax (multinomial) or normalized sigmoids (one-vs-rest).

use serde::{Deserialize, Serialize};

use crate::error::{EmotionError, Result};
use crate::model::feature::FeatureVector;

/// Index of the largest value, preferring the lowest index on ties.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// A fitted model producing a label and a distribution from a feature vector.
pub trait Classifier: Send + Sync {
    /// Probability per class label, indexed by label.
    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>>;

    /// The most probable label.
    fn predict(&self, features: &FeatureVector) -> Result<usize> {
        Ok(self.predict_with_proba(features)?.0)
    }

    /// The most probable label together with the full distribution.
    ///
    /// The label is always the argmax of the returned distribution.
    fn predict_with_proba(&self, features: &FeatureVector) -> Result<(usize, Vec<f64>)> {
        let probabilities = self.predict_proba(features)?;
        let label = argmax(&probabilities)
            .ok_or_else(|| EmotionError::inference("classifier produced no probabilities"))?;
        Ok((label, probabilities))
    }

    /// Dimension of the feature vectors this classifier accepts.
    fn input_dimension(&self) -> usize;

    /// Number of class labels.
    fn n_classes(&self) -> usize;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &'static str;
}

/// How per-class scores become probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiClass {
    /// Softmax over all class scores.
    #[default]
    Multinomial,
    /// Independent sigmoids normalized to sum to one.
    Ovr,
}

/// Serialized state of a fitted logistic regression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegressionArtifact {
    /// Weight rows, one per class, each of the feature dimension.
    pub coef: Vec<Vec<f64>>,
    /// Intercept per class.
    pub intercept: Vec<f64>,
    /// Label of each weight row.
    pub classes: Vec<usize>,
    /// Probability link.
    #[serde(default)]
    pub multi_class: MultiClass,
}

/// Logistic regression restored from a fitted artifact.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    classes: Vec<usize>,
    multi_class: MultiClass,
    n_features: usize,
}

impl LogisticRegression {
    /// Restore a classifier from its artifact, validating shapes.
    pub fn from_artifact(artifact: LogisticRegressionArtifact) -> Result<Self> {
        let LogisticRegressionArtifact {
            coef,
            intercept,
            classes,
            multi_class,
        } = artifact;

        let n_classes = coef.len();
        if n_classes < 2 {
            return Err(EmotionError::load(format!(
                "classifier needs at least two weight rows, found {n_classes}"
            )));
        }
        if intercept.len() != n_classes || classes.len() != n_classes {
            return Err(EmotionError::load(format!(
                "classifier has {} weight rows, {} intercepts and {} classes",
                n_classes,
                intercept.len(),
                classes.len()
            )));
        }

        let n_features = coef[0].len();
        if n_features == 0 {
            return Err(EmotionError::load("classifier weight rows are empty"));
        }
        if let Some((row, weights)) = coef.iter().enumerate().find(|(_, w)| w.len() != n_features)
        {
            return Err(EmotionError::load(format!(
                "classifier weight row {row} has {} features, expected {n_features}",
                weights.len()
            )));
        }
        if coef.iter().flatten().chain(&intercept).any(|w| !w.is_finite()) {
            return Err(EmotionError::load("classifier weights contain non-finite values"));
        }

        let mut sorted = classes.clone();
        sorted.sort_unstable();
        if sorted.iter().enumerate().any(|(i, &c)| i != c) {
            return Err(EmotionError::load(format!(
                "classifier classes {classes:?} are not a permutation of 0..{n_classes}"
            )));
        }

        Ok(LogisticRegression {
            coef,
            intercept,
            classes,
            multi_class,
            n_features,
        })
    }

    /// Raw decision scores per weight row.
    pub fn decision_function(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        if features.dimension() != self.n_features {
            return Err(EmotionError::inference(format!(
                "feature vector has dimension {}, classifier expects {}",
                features.dimension(),
                self.n_features
            )));
        }

        Ok(self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(weights, bias)| features.dot(weights) + bias)
            .collect())
    }

    /// The probability link in use.
    pub fn multi_class(&self) -> MultiClass {
        self.multi_class
    }

    fn softmax(scores: &[f64]) -> Vec<f64> {
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / sum).collect()
    }

    fn normalized_sigmoids(scores: &[f64]) -> Vec<f64> {
        let sigmoids: Vec<f64> = scores.iter().map(|s| 1.0 / (1.0 + (-s).exp())).collect();
        let sum: f64 = sigmoids.iter().sum();
        if sum > 0.0 {
            sigmoids.into_iter().map(|p| p / sum).collect()
        } else {
            vec![1.0 / scores.len() as f64; scores.len()]
        }
    }
}

impl Classifier for LogisticRegression {
    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        let scores = self.decision_function(features)?;
        let row_probabilities = match self.multi_class {
            MultiClass::Multinomial => Self::softmax(&scores),
            MultiClass::Ovr => Self::normalized_sigmoids(&scores),
        };

        let mut probabilities = vec![0.0; self.classes.len()];
        for (row, p) in row_probabilities.into_iter().enumerate() {
            probabilities[self.classes[row]] = p;
        }
        Ok(probabilities)
    }

    fn input_dimension(&self) -> usize {
        self.n_features
    }

    fn n_classes(&self) -> usize {
        self.classes.len()
    }

    fn name(&self) -> &'static str {
        "logistic_regression"
    }
}
