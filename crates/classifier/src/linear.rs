use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::ClassifierError;
use crate::DescriptionClassifier;

/// TF-IDF vocabulary artifact: term -> column index plus per-column inverse
/// document frequencies.
#[derive(Debug, Deserialize)]
struct VectorizerArtifact {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

/// Linear decision function artifact: one coefficient per vocabulary column
/// and an intercept.
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    coefficients: Vec<f64>,
    intercept: f64,
}

/// A pre-trained TF-IDF + linear-model classifier loaded from JSON artifact
/// files.
///
/// Both artifacts are loaded once at process start; a missing or malformed
/// file is fatal. The loaded model is never mutated, so one instance can be
/// shared across concurrent evaluations.
#[derive(Debug)]
pub struct LinearClassifier {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearClassifier {
    /// Load the vectorizer and model artifacts. Fails fast on a missing or
    /// unparseable file — the caller must abort start-up, not retry.
    pub fn load(
        vectorizer_path: impl AsRef<Path>,
        model_path: impl AsRef<Path>,
    ) -> Result<Self, ClassifierError> {
        let vectorizer: VectorizerArtifact = read_artifact(vectorizer_path.as_ref())?;
        let model: ModelArtifact = read_artifact(model_path.as_ref())?;
        info!(
            vocabulary_size = vectorizer.vocabulary.len(),
            "classifier artifacts loaded"
        );
        Ok(Self {
            vocabulary: vectorizer.vocabulary,
            idf: vectorizer.idf,
            coefficients: model.coefficients,
            intercept: model.intercept,
        })
    }

    /// Build a classifier from in-memory artifacts.
    pub fn from_parts(
        vocabulary: HashMap<String, usize>,
        idf: Vec<f64>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Self {
        Self {
            vocabulary,
            idf,
            coefficients,
            intercept,
        }
    }

    /// Sparse TF-IDF feature vector (column index -> weight), L2-normalized.
    fn vectorize(&self, description: &str) -> Result<Vec<(usize, f64)>, ClassifierError> {
        let lowered = description.to_lowercase();
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in lowered.split(|c: char| !c.is_alphanumeric()) {
            if token.is_empty() {
                continue;
            }
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = Vec::with_capacity(counts.len());
        for (idx, tf) in counts {
            let idf = self.idf.get(idx).copied().ok_or_else(|| {
                ClassifierError::Vectorization(format!(
                    "vocabulary index {idx} outside idf table of length {}",
                    self.idf.len()
                ))
            })?;
            vector.push((idx, tf * idf));
        }

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut vector {
                *w /= norm;
            }
        }
        Ok(vector)
    }
}

impl DescriptionClassifier for LinearClassifier {
    fn classify(&self, description: &str) -> Result<bool, ClassifierError> {
        let vector = self.vectorize(description)?;
        let mut score = self.intercept;
        for (idx, weight) in vector {
            let coef = self.coefficients.get(idx).copied().ok_or_else(|| {
                ClassifierError::Vectorization(format!(
                    "vocabulary index {idx} outside coefficient table of length {}",
                    self.coefficients.len()
                ))
            })?;
            score += coef * weight;
        }
        Ok(score >= 0.0)
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ClassifierError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ClassifierError::Artifact(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| ClassifierError::Artifact(format!("{}: {e}", path.display())))
}
