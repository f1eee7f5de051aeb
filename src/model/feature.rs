//! Sparse feature vectors.

use serde::{Deserialize, Serialize};

use crate::error::{EmotionError, Result};

/// A fixed-dimension feature vector stored as sorted `(index, value)` pairs.
///
/// Indices are strictly increasing and below `dimension`. Entries absent
/// from the list are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    dimension: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    /// Create the all-zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        FeatureVector {
            dimension,
            entries: Vec::new(),
        }
    }

    /// Build a vector from unordered entries.
    ///
    /// Duplicate indices are summed and exact zeros are dropped. Fails if an
    /// index is out of range or a value is not finite.
    pub fn from_entries(dimension: usize, mut entries: Vec<(usize, f64)>) -> Result<Self> {
        if let Some((index, _)) = entries.iter().find(|(i, _)| *i >= dimension) {
            return Err(EmotionError::inference(format!(
                "feature index {index} out of range for dimension {dimension}"
            )));
        }
        if let Some((index, value)) = entries.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EmotionError::inference(format!(
                "feature {index} has non-finite value {value}"
            )));
        }

        entries.sort_by_key(|(i, _)| *i);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (index, value) in entries {
            match merged.last_mut() {
                Some((last, sum)) if *last == index => *sum += value,
                _ => merged.push((index, value)),
            }
        }
        merged.retain(|(_, v)| *v != 0.0);

        Ok(FeatureVector {
            dimension,
            entries: merged,
        })
    }

    /// Build a vector from a dense slice.
    pub fn from_dense(values: &[f64]) -> Result<Self> {
        Self::from_entries(values.len(), values.iter().copied().enumerate().collect())
    }

    /// The dimension of the vector.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The non-zero entries in index order.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at `index` (zero when absent or out of range).
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(i, _)| *i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Dot product with a dense weight row of the same dimension.
    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.entries
            .iter()
            .map(|(i, v)| weights.get(*i).copied().unwrap_or(0.0) * v)
            .sum()
    }

    /// Euclidean norm.
    pub fn l2_norm(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt()
    }

    /// Sum of absolute values.
    pub fn l1_norm(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v.abs()).sum()
    }

    /// Multiply every component by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for (_, v) in &mut self.entries {
            *v *= factor;
        }
    }

    /// Expand into a dense vector.
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dimension];
        for (i, v) in &self.entries {
            dense[*i] = *v;
        }
        dense
    }
}
