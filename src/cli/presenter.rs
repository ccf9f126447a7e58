//! CLI presenter for output formatting

use std::io::{self, Write};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::analysis::AnalysisResult;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Output text to stdout without newline
    pub fn output_inline(&self, text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Format a 0-100 score as a bar. The printed number is verbatim;
    /// only the bar geometry is bounded.
    pub fn format_score_bar(&self, score: i64) -> String {
        let bar_width: i64 = 20;
        let filled = (score.clamp(0, 100) * bar_width / 100) as usize;
        let empty = bar_width as usize - filled;

        format!(
            "[{}{}] {:>3}",
            "█".repeat(filled).cyan(),
            "░".repeat(empty),
            score
        )
    }

    /// Render the full analysis dashboard to stdout
    pub fn render_result(&self, result: &AnalysisResult) {
        println!();
        println!(
            "{} {}  {}",
            result.vibe_emoji,
            result.vibe.bold(),
            "— your vibe".dimmed()
        );
        println!("{}", result.summary);

        if !result.badges.is_empty() {
            println!();
            println!("{}", "Badges".bold().underline());
            for badge in &result.badges {
                println!(
                    "  {} {} {}",
                    badge.emoji,
                    badge.name.bold(),
                    format!("— {}", badge.description).dimmed()
                );
            }
        }

        if !result.skills.is_empty() {
            println!();
            println!("{}", "Skills".bold().underline());
            for skill in &result.skills {
                println!(
                    "  {:<24} {} {}",
                    skill.name,
                    self.format_score_bar(skill.score),
                    format!("({})", skill.category).dimmed()
                );
            }
        }

        println!();
        println!("{}", "Elevator Pitch".bold().underline());
        println!("  {}", result.elevator_pitch.italic());

        if !result.resume_points.is_empty() {
            println!();
            println!("{}", "Resume Bullets".bold().underline());
            for point in &result.resume_points {
                println!("  {} {}", "•".cyan(), point);
            }
        }

        if !result.careers.is_empty() {
            println!();
            println!("{}", "Career Matches".bold().underline());
            for career in &result.careers {
                println!(
                    "  {} {}",
                    format!("{}%", career.match_percentage).green().bold(),
                    career.title.bold()
                );
                println!("      {}", career.description);
                println!(
                    "      {} {}  {} {}",
                    "salary:".dimmed(),
                    career.avg_salary,
                    "outlook:".dimmed(),
                    career.outlook
                );
            }
        }

        if !result.interview_questions.is_empty() {
            println!();
            println!("{}", "Boss Battle Prep".bold().underline());
            for (i, q) in result.interview_questions.iter().enumerate() {
                println!("  {}. {}", i + 1, q.question.bold());
                println!("     {} {}", "Pro Tip:".yellow(), q.tip);
            }
        }

        println!();
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
