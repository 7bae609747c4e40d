//! Text Normalizer: lowercases, strips punctuation, drops stopwords and reduces
//! each remaining token to its root form.
//!
//! The pipeline is built once at startup and owned by `CvMatcher`; nothing in
//! here is mutated after construction, so a single instance serves every request.

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::matching::stopwords::StopWords;

/// Anything that is neither a word character nor whitespace.
const PUNCTUATION_PATTERN: &str = r"[^\w\s]";

/// Upper bound on re-stemming a single token; chains settle within a few passes.
const MAX_STEM_PASSES: usize = 8;

pub struct TextNormalizer {
    punctuation: Regex,
    stop_words: StopWords,
    stemmer: Stemmer,
}

impl TextNormalizer {
    /// English pipeline: Snowball stemmer plus the standard English stopword list.
    pub fn english() -> Result<Self, regex::Error> {
        Ok(Self {
            punctuation: Regex::new(PUNCTUATION_PATTERN)?,
            stop_words: StopWords::english(),
            stemmer: Stemmer::create(Algorithm::English),
        })
    }

    /// Returns the space-joined root forms of all non-stopword tokens, in order.
    /// Empty input yields an empty string.
    ///
    /// Output is a fixed point: every emitted token is its own root form and is
    /// not a stopword, so normalizing the result again changes nothing.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let cleaned = self.punctuation.replace_all(&lowered, " ");

        cleaned
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(token))
            .map(|token| self.root_form(token))
            .filter(|root| !self.stop_words.contains(root))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Stems until the token stops changing ("overall" → "overal" → "over").
    fn root_form(&self, token: &str) -> String {
        let mut current = token.to_string();
        for _ in 0..MAX_STEM_PASSES {
            let next = self.stemmer.stem(&current);
            if next.as_ref() == current.as_str() {
                break;
            }
            current = next.into_owned();
        }
        current
    }
}
