//! Fitted model artifacts: feature vectorizer, classifier and their loaders.
//!
//! Both artifacts are opaque capabilities behind the [`Vectorizer`] and
//! [`Classifier`] traits. Their compatibility is checked once, when the
//! inference pipeline is assembled.

pub mod classifier;
pub mod feature;
pub mod loader;
pub mod vectorizer;

pub use classifier::{Classifier, LogisticRegression, LogisticRegressionArtifact, MultiClass};
pub use feature::FeatureVector;
pub use loader::{ArtifactFormat, ArtifactLoader, FileArtifactLoader};
pub use vectorizer::{Norm, TfIdfArtifact, TfIdfVectorizer, Vectorizer};
