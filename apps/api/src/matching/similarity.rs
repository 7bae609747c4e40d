//! Similarity Scorer: bag-of-words count vectors and cosine similarity.

use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;

use crate::matching::stopwords::StopWords;

/// Word runs of at least two word characters; single characters are not counted.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Builds term-count vectors for a pair of documents over their shared vocabulary.
///
/// Stopwords are filtered here as well as in the normalizer; for
/// already-normalized input the second filter removes nothing.
pub struct BagOfWordsVectorizer {
    token_pattern: Regex,
    stop_words: StopWords,
}

impl BagOfWordsVectorizer {
    pub fn english() -> Result<Self, regex::Error> {
        Ok(Self {
            token_pattern: Regex::new(TOKEN_PATTERN)?,
            stop_words: StopWords::english(),
        })
    }

    fn count_terms<'a>(&self, text: &'a str) -> BTreeMap<&'a str, f64> {
        let mut counts = BTreeMap::new();
        for token in self.token_pattern.find_iter(text).map(|m| m.as_str()) {
            if !self.stop_words.contains(token) {
                *counts.entry(token).or_insert(0.0) += 1.0;
            }
        }
        counts
    }

    /// Returns the two count vectors, aligned on the sorted union of both documents' terms.
    pub fn fit_transform_pair(&self, a: &str, b: &str) -> (Vec<f64>, Vec<f64>) {
        let counts_a = self.count_terms(a);
        let counts_b = self.count_terms(b);

        let vocabulary: BTreeSet<&str> = counts_a.keys().chain(counts_b.keys()).copied().collect();

        let vector = |counts: &BTreeMap<&str, f64>| -> Vec<f64> {
            vocabulary
                .iter()
                .map(|term| counts.get(term).copied().unwrap_or(0.0))
                .collect()
        };

        (vector(&counts_a), vector(&counts_b))
    }

    /// Cosine similarity of two normalized documents as a percentage, rounded to 2 decimals.
    pub fn score(&self, cv_normalized: &str, job_normalized: &str) -> f64 {
        let (cv_vector, job_vector) = self.fit_transform_pair(cv_normalized, job_normalized);
        round2(cosine_similarity(&cv_vector, &job_vector) * 100.0)
    }
}

/// dot(a, b) / (|a| * |b|), or 0.0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
