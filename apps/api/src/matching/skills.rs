//! Skill Extractor: fixed-vocabulary substring scan over raw text.
//!
//! Matching is plain containment on the lowercased text, not token-aware:
//! "aws" also matches inside "laws". Known precision limitation.

use std::collections::BTreeSet;

/// Default skill vocabulary, in scan order.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "react",
    "angular",
    "node.js",
    "machine learning",
    "data analysis",
    "project management",
    "agile",
    "scrum",
    "communication",
    "leadership",
    "problem solving",
];

/// Ordered list of lowercase skill phrases to scan for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::from_terms(DEFAULT_SKILLS.iter().copied())
    }
}

impl SkillVocabulary {
    /// Builds a vocabulary from arbitrary terms: trimmed, lowercased, empty
    /// entries dropped, duplicates dropped keeping the first occurrence.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .filter(|t| seen.insert(t.clone()))
            .collect();
        Self { terms }
    }

    /// Parses a comma-separated list, e.g. the `SKILL_VOCABULARY` env var.
    pub fn parse_list(raw: &str) -> Self {
        Self::from_terms(raw.split(','))
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns every vocabulary term that occurs as a substring of `text`,
    /// compared case-insensitively. Result is always a subset of the vocabulary.
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let text_lower = text.to_lowercase();
        self.terms
            .iter()
            .filter(|term| text_lower.contains(term.as_str()))
            .cloned()
            .collect()
    }
}
