#![allow(dead_code)]

use std::path::Path;

use ahash::AHashMap;

use emotion_classifier::error::Result;
use emotion_classifier::label::Emotion;
use emotion_classifier::model::classifier::{LogisticRegressionArtifact, MultiClass};
use emotion_classifier::model::loader::{ArtifactFormat, FileArtifactLoader};
use emotion_classifier::model::vectorizer::TfIdfArtifact;

/// Words that push the model towards each emotion, in label order.
pub const KEYWORDS: [(Emotion, &[&str]); 6] = [
    (Emotion::Sadness, &["sad", "lonely", "cry"]),
    (Emotion::Joy, &["happy", "glad", "fun"]),
    (Emotion::Love, &["love", "adore", "sweet"]),
    (Emotion::Anger, &["angry", "furious", "hate"]),
    (Emotion::Fear, &["scared", "afraid", "nervous"]),
    (Emotion::Surprise, &["surprised", "shocked", "wow"]),
];

/// Words known to the vectorizer but carrying no weight.
pub const NEUTRAL: &[&str] = &["am", "so", "today", "feel", "really"];

/// Build a small but consistent vectorizer and classifier pair.
///
/// `stem` maps each vocabulary word, so artifacts can be fitted on stemmed text.
pub fn artifacts_with(stem: impl Fn(&str) -> String) -> (TfIdfArtifact, LogisticRegressionArtifact) {
    let mut vocabulary = AHashMap::new();
    let mut owners = Vec::new();

    for (emotion, words) in KEYWORDS {
        for &word in words {
            let term = stem(word);
            if !vocabulary.contains_key(&term) {
                vocabulary.insert(term, owners.len());
                owners.push(Some(emotion));
            }
        }
    }
    for &word in NEUTRAL {
        let term = stem(word);
        if !vocabulary.contains_key(&term) {
            vocabulary.insert(term, owners.len());
            owners.push(None);
        }
    }

    let dimension = owners.len();
    let idf = owners
        .iter()
        .map(|owner| if owner.is_some() { 2.5 } else { 1.1 })
        .collect();

    let coef = Emotion::ALL
        .iter()
        .map(|emotion| {
            owners
                .iter()
                .map(|owner| match owner {
                    Some(o) if o == emotion => 5.0,
                    Some(_) => -1.0,
                    None => 0.0,
                })
                .collect()
        })
        .collect();

    let vectorizer = TfIdfArtifact::new(vocabulary, idf);
    let classifier = LogisticRegressionArtifact {
        coef,
        intercept: vec![0.0; 6],
        classes: (0..6).collect(),
        multi_class: MultiClass::Multinomial,
    };
    assert_eq!(vectorizer.idf.len(), dimension);

    (vectorizer, classifier)
}

/// Artifacts fitted on plain normalized text.
pub fn artifacts() -> (TfIdfArtifact, LogisticRegressionArtifact) {
    artifacts_with(|word| word.to_string())
}

/// Write artifacts into `dir` and return a loader for them.
pub fn save_artifacts(
    dir: &Path,
    format: ArtifactFormat,
    vectorizer: &TfIdfArtifact,
    classifier: &LogisticRegressionArtifact,
) -> Result<FileArtifactLoader> {
    let loader = FileArtifactLoader::new(dir, format);
    loader.save(vectorizer, classifier)?;
    Ok(loader)
}

/// Write the default fixture artifacts into `dir`.
pub fn fixture_loader(dir: &Path, format: ArtifactFormat) -> Result<FileArtifactLoader> {
    let (vectorizer, classifier) = artifacts();
    save_artifacts(dir, format, &vectorizer, &classifier)
}
