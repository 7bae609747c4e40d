//! Report Assembler: reshapes a `MatchResult` into the display-oriented report
//! the frontend consumes.

use serde::Serialize;

use crate::matching::matcher::{CvMatcher, MatchError, MatchResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    #[serde(rename = "Overall Match")]
    pub overall_match: String,
    #[serde(rename = "Skills Match")]
    pub skills_match: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsAnalysis {
    #[serde(rename = "Matching Skills")]
    pub matching_skills: Vec<String>,
    #[serde(rename = "Missing Skills")]
    pub missing_skills: Vec<String>,
    #[serde(rename = "Additional Skills")]
    pub additional_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub metrics: Metrics,
    pub skills_analysis: SkillsAnalysis,
}

impl From<MatchResult> for Report {
    fn from(result: MatchResult) -> Self {
        Report {
            metrics: Metrics {
                overall_match: format_percentage(result.overall_match_percentage),
                skills_match: format_percentage(result.skill_match_percentage),
            },
            skills_analysis: SkillsAnalysis {
                matching_skills: result.matching_skills,
                missing_skills: result.missing_skills,
                additional_skills: result.extra_skills,
            },
        }
    }
}

impl CvMatcher {
    pub fn generate_report(
        &self,
        cv_text: &str,
        job_description: &str,
    ) -> Result<Report, MatchError> {
        Ok(self.calculate_match(cv_text, job_description)?.into())
    }
}

/// "73.25%"
fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}
