//! Analysis result value object
//!
//! The sole payload handed to presentation after a successful analysis.
//! Field names mirror the wire contract declared to the AI endpoint, so
//! the whole tree round-trips through serde without a mapping layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Expected lower bound for skill scores and career match percentages
pub const SCORE_MIN: i64 = 0;
/// Expected upper bound for skill scores and career match percentages
pub const SCORE_MAX: i64 = 100;

/// Three-way skill classification declared in the response schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Soft Skill")]
    SoftSkill,
    #[serde(rename = "Hard Skill")]
    HardSkill,
    #[serde(rename = "Tool/Tech")]
    ToolTech,
}

impl SkillCategory {
    /// Get the wire label for this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SoftSkill => "Soft Skill",
            Self::HardSkill => "Hard Skill",
            Self::ToolTech => "Tool/Tech",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A professional skill with a 0-100 proficiency estimate.
/// The score is trusted as returned by the endpoint and never clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub score: i64,
}

impl Skill {
    /// Whether the score lies in the expected 0-100 band
    pub fn score_in_range(&self) -> bool {
        (SCORE_MIN..=SCORE_MAX).contains(&self.score)
    }
}

/// Video-game style achievement badge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub emoji: String,
    pub description: String,
    /// Hex color hint for presentation
    pub color: String,
}

/// A suggested career path with match strength and market context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub title: String,
    pub match_percentage: i64,
    pub description: String,
    pub avg_salary: String,
    pub outlook: String,
}

/// Likely interview question with an answering tip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub tip: String,
}

/// Immutable value object produced by a successful analysis.
/// Created atomically from one endpoint response; replaces any prior
/// result and lives until the user starts a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    /// Short archetype label, e.g. "The Creative Visionary"
    pub vibe: String,
    pub vibe_emoji: String,
    pub badges: Vec<Badge>,
    pub skills: Vec<Skill>,
    pub elevator_pitch: String,
    pub resume_points: Vec<String>,
    pub careers: Vec<CareerPath>,
    pub interview_questions: Vec<InterviewQuestion>,
}

impl AnalysisResult {
    /// Names of skills whose score falls outside the expected 0-100 band.
    /// Out-of-range values are still rendered verbatim; this only feeds a
    /// non-fatal warning.
    pub fn out_of_range_scores(&self) -> Vec<&str> {
        self.skills
            .iter()
            .filter(|s| !s.score_in_range())
            .map(|s| s.name.as_str())
            .collect()
    }

    /// The career with the highest match percentage, if any
    pub fn top_career(&self) -> Option<&CareerPath> {
        self.careers.iter().max_by_key(|c| c.match_percentage)
    }
}
