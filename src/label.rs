//! Emotion labels.
//!
//! The classifier emits class indices 0 through 5. [`Emotion`] is the fixed,
//! total mapping from those indices to human-readable names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EmotionError, Result};

/// Number of emotion classes the classifier must produce.
pub const NUM_EMOTIONS: usize = 6;

/// One of the six emotions the classifier predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Emotion {
    /// Class index 0.
    Sadness,
    /// Class index 1.
    Joy,
    /// Class index 2.
    Love,
    /// Class index 3.
    Anger,
    /// Class index 4.
    Fear,
    /// Class index 5.
    Surprise,
}

impl Emotion {
    /// All emotions ordered by class index.
    pub const ALL: [Emotion; NUM_EMOTIONS] = [
        Emotion::Sadness,
        Emotion::Joy,
        Emotion::Love,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
    ];

    /// Look up the emotion for a classifier output index.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            EmotionError::inference(format!(
                "class index {index} is outside the emotion label set (0..{NUM_EMOTIONS})"
            ))
        })
    }

    /// The classifier output index of this emotion.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The display name of this emotion.
    pub fn name(self) -> &'static str {
        match self {
            Emotion::Sadness => "Sadness",
            Emotion::Joy => "Joy",
            Emotion::Love => "Love",
            Emotion::Anger => "Anger",
            Emotion::Fear => "Fear",
            Emotion::Surprise => "Surprise",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Emotion {
    type Err = EmotionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|emotion| emotion.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EmotionError::invalid_argument(format!("unknown emotion: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping() {
        let names: Vec<&str> = (0..NUM_EMOTIONS)
            .map(|i| Emotion::from_index(i).unwrap().name())
            .collect();

        assert_eq!(
            names,
            vec!["Sadness", "Joy", "Love", "Anger", "Fear", "Surprise"]
        );
    }

    #[test]
    fn test_index_round_trip() {
        for (i, emotion) in Emotion::ALL.iter().enumerate() {
            assert_eq!(emotion.index(), i);
        }
    }

    #[test]
    fn test_out_of_range_index() {
        let err = Emotion::from_index(6).unwrap_err();
        assert!(matches!(err, EmotionError::Inference(_)));
    }

    #[test]
    fn test_parse_name() {
        assert_eq!("joy".parse::<Emotion>().unwrap(), Emotion::Joy);
        assert_eq!(" Fear ".parse::<Emotion>().unwrap(), Emotion::Fear);
        assert!("boredom".parse::<Emotion>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Emotion::Surprise.to_string(), "Surprise");
    }
}
