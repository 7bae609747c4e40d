//! Match Calculator: orchestrates skill extraction, normalization and scoring
//! for one (CV, job description) pair.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::matching::normalizer::TextNormalizer;
use crate::matching::similarity::{round2, BagOfWordsVectorizer};
use crate::matching::skills::SkillVocabulary;

/// The single error type surfaced by the matching core.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Similarity score is not a finite number: {0}")]
    NonFiniteScore(f64),
}

/// Computed comparison of a CV against a job description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub overall_match_percentage: f64, // 0 – 100
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    pub skill_match_percentage: f64, // 0 – 100
}

/// Immutable matcher shared by every request (`Arc<CvMatcher>` in `AppState`).
pub struct CvMatcher {
    normalizer: TextNormalizer,
    vectorizer: BagOfWordsVectorizer,
    vocabulary: SkillVocabulary,
}

impl CvMatcher {
    pub fn new(
        normalizer: TextNormalizer,
        vocabulary: SkillVocabulary,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            normalizer,
            vectorizer: BagOfWordsVectorizer::english()?,
            vocabulary,
        })
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn calculate_match(
        &self,
        cv_text: &str,
        job_description: &str,
    ) -> Result<MatchResult, MatchError> {
        let cv_skills = self.vocabulary.extract_skills(cv_text);
        let job_skills = self.vocabulary.extract_skills(job_description);

        let cv_normalized = self.normalizer.normalize(cv_text);
        let job_normalized = self.normalizer.normalize(job_description);
        debug!(
            cv_tokens = cv_normalized.split_whitespace().count(),
            job_tokens = job_normalized.split_whitespace().count(),
            "Normalized documents"
        );

        let overall_match_percentage = self.vectorizer.score(&cv_normalized, &job_normalized);
        if !overall_match_percentage.is_finite() {
            return Err(MatchError::NonFiniteScore(overall_match_percentage));
        }

        let matching: BTreeSet<&String> = cv_skills.intersection(&job_skills).collect();
        let missing: BTreeSet<&String> = job_skills.difference(&cv_skills).collect();
        let extra: BTreeSet<&String> = cv_skills.difference(&job_skills).collect();

        let skill_match_percentage = if job_skills.is_empty() {
            0.0
        } else {
            round2(matching.len() as f64 / job_skills.len() as f64 * 100.0)
        };

        Ok(MatchResult {
            overall_match_percentage,
            matching_skills: to_vec(matching),
            missing_skills: to_vec(missing),
            extra_skills: to_vec(extra),
            skill_match_percentage,
        })
    }
}

fn to_vec(skills: BTreeSet<&String>) -> Vec<String> {
    skills.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> CvMatcher {
        CvMatcher::new(TextNormalizer::english().unwrap(), SkillVocabulary::default()).unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn as_set(items: &[String]) -> BTreeSet<String> {
        items.iter().cloned().collect()
    }

    #[test]
    fn test_matcher_builds_from_english_pipeline() {
        let built = CvMatcher::new(TextNormalizer::english().unwrap(), SkillVocabulary::default());
        let m = built.expect("pipeline patterns compile");
        assert_eq!(m.vocabulary().len(), 18);
    }

    #[test]
    fn test_partial_skill_overlap() {
        let result = matcher()
            .calculate_match("I know Python and AWS", "Looking for Python and Docker skills")
            .unwrap();

        assert_eq!(result.matching_skills, strings(&["python"]));
        assert_eq!(result.missing_skills, strings(&["docker"]));
        assert_eq!(result.extra_skills, strings(&["aws"]));
        assert_eq!(result.skill_match_percentage, 50.0);
        assert!(result.overall_match_percentage > 0.0);
        assert!(result.overall_match_percentage < 100.0);
    }

    #[test]
    fn test_both_empty() {
        let result = matcher().calculate_match("", "").unwrap();

        assert_eq!(result.overall_match_percentage, 0.0);
        assert!(result.matching_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert!(result.extra_skills.is_empty());
        assert_eq!(result.skill_match_percentage, 0.0);
    }

    #[test]
    fn test_identical_texts_match_fully() {
        let text = "Senior engineer with Python, Docker and Kubernetes experience. \
                    Comfortable in agile teams using Scrum; strong communication.";
        let result = matcher().calculate_match(text, text).unwrap();

        assert_eq!(result.overall_match_percentage, 100.0);
        assert_eq!(
            as_set(&result.matching_skills),
            matcher().vocabulary().extract_skills(text)
        );
        assert_eq!(
            result.matching_skills,
            strings(&["agile", "communication", "docker", "kubernetes", "python", "scrum"])
        );
        assert!(result.missing_skills.is_empty());
        assert!(result.extra_skills.is_empty());
        assert_eq!(result.skill_match_percentage, 100.0);
    }

    #[test]
    fn test_no_job_skills_gives_zero_skill_match() {
        let result = matcher()
            .calculate_match(
                "Python, Java, SQL, Docker, Kubernetes, leadership",
                "We need a friendly barista for weekend shifts",
            )
            .unwrap();

        assert_eq!(result.skill_match_percentage, 0.0);
        assert!(result.matching_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.extra_skills.len(), 6);
    }

    #[test]
    fn test_skill_sets_partition() {
        let m = matcher();
        let cv = "React and Angular front-end work, some SQL and data analysis";
        let job = "Full-stack role: React, Node.js, SQL, AWS, project management";
        let result = m.calculate_match(cv, job).unwrap();

        let cv_skills = m.vocabulary().extract_skills(cv);
        let job_skills = m.vocabulary().extract_skills(job);
        let matching = as_set(&result.matching_skills);
        let missing = as_set(&result.missing_skills);
        let extra = as_set(&result.extra_skills);

        assert_eq!(&matching | &missing, job_skills);
        assert_eq!(&matching | &extra, cv_skills);
        assert!(matching.is_disjoint(&missing));
        assert!(matching.is_disjoint(&extra));
    }

    #[test]
    fn test_skill_match_percentage_rounded() {
        // job has python, docker, aws → 1 of 3 matched
        let result = matcher()
            .calculate_match("python", "python docker aws")
            .unwrap();
        assert_eq!(result.skill_match_percentage, 33.33);
    }

    #[test]
    fn test_overall_score_bounded_0_to_100() {
        let m = matcher();
        let pairs = [
            ("", "Python developer"),
            ("Python developer", ""),
            ("the and of", "a an the"),
            ("Rust Rust Rust", "Rust"),
            ("Data analysis with SQL", "Machine learning engineer"),
        ];
        for (cv, job) in pairs {
            let score = m.calculate_match(cv, job).unwrap().overall_match_percentage;
            assert!((0.0..=100.0).contains(&score), "Score was {score}");
        }
    }

    #[test]
    fn test_custom_vocabulary() {
        let m = CvMatcher::new(
            TextNormalizer::english().unwrap(),
            SkillVocabulary::parse_list("rust,tokio"),
        )
        .unwrap();
        let result = m
            .calculate_match("Rust and Python", "Rust with Tokio")
            .unwrap();
        assert_eq!(result.matching_skills, strings(&["rust"]));
        assert_eq!(result.missing_skills, strings(&["tokio"]));
        assert!(result.extra_skills.is_empty());
    }
}
