//! Analysis prompt value object

/// Fixed instruction sent with every digitize call. Covers both text
/// documents and photos of activities or objects.
pub const DIGITIZE_INSTRUCTION: &str = "Transcribe the text from this document. If it is a photo of an activity or object, describe what is happening in detail so it can be used for a resume.";

/// Instruction template for experience analysis. The user's text is
/// embedded verbatim; the seven numbered facets match the declared
/// response schema.
const ANALYSIS_TEMPLATE: &str = r#"Analyze the following user experience description (hobbies, jobs, or resume text):
"{input}"

Target Audience: High School / College Students.
Tone: Encouraging, Professional but Modern.

Task:
1. **Vibe Check**: Give them a cool 2-3 word archetype title (e.g., "Chaos Coordinator", "Tech Wizard"). Pick a matching Emoji.
2. **Badges**: Award 3 "Video Game Style" achievement badges based on their skills (e.g., "Bug Hunter" for coding, "Team Tank" for leadership). Give each a color hex code.
3. **Skills**: Identify professional skills (Soft/Hard/Tools) with 0-100 scores.
4. **Elevator Pitch**: Write a punchy 30-second introduction script they can say in an interview.
5. **Resume**: Rewrite 3-4 bullet points using strong action verbs.
6. **Careers**: Suggest 3 career paths with salary/outlook.
7. **Boss Battle Prep**: Generate 3 likely interview questions for these roles, with a short "Pro Tip" on how to answer.

Return strictly JSON."#;

/// Value object representing the complete analysis prompt.
/// Embeds the user's experience text into the fixed instruction template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt {
    content: String,
}

impl AnalysisPrompt {
    /// Build an analysis prompt around the given experience text
    pub fn build(input: &str) -> Self {
        Self {
            content: ANALYSIS_TEMPLATE.replace("{input}", input),
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the content
    pub fn into_content(self) -> String {
        self.content
    }
}
