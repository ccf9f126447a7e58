//! Analysis domain module

mod prompt;
mod result;

pub use prompt::{AnalysisPrompt, DIGITIZE_INSTRUCTION};
pub use result::{
    AnalysisResult, Badge, CareerPath, InterviewQuestion, Skill, SkillCategory, SCORE_MAX,
    SCORE_MIN,
};
