//! Console output formatter for council results

use colored::Colorize;
use council_domain::CouncilResult;

/// Formats council results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete council result
    pub fn format(result: &CouncilResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("CxO Council Results"));

        // Stage 1: Executive Domain Reviews
        output.push_str(&Self::section_header("Stage 1: Executive Domain Reviews"));
        for entry in &result.stage1 {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", entry.role).yellow().bold(),
                entry.response
            ));
        }

        // Stage 2: Cross-Domain Questions
        output.push_str(&Self::section_header("Stage 2: Cross-Domain Questions"));
        for entry in &result.stage2 {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", entry.role).yellow().bold(),
                entry.response
            ));
        }

        // Stage 3: Responses to Questions
        output.push_str(&Self::section_header("Stage 3: Responses to Questions"));
        if result.responses_skipped() {
            output.push_str(&format!(
                "\n{}\n",
                "No questions directed to specific roles.".dimmed()
            ));
        } else {
            for entry in &result.stage3 {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", entry.role).yellow().bold(),
                    entry.response
                ));
            }
        }

        // Stage 4: CEO Synthesis
        output.push_str(&Self::section_header("Stage 4: CEO Synthesis"));
        output.push_str(&format!("\n{}\n", result.synthesis));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &CouncilResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format synthesis only (concise output)
    pub fn format_synthesis_only(result: &CouncilResult) -> String {
        format!(
            "{}\n\n{}\n",
            "=== CxO Council Synthesis ===".cyan().bold(),
            result.synthesis
        )
    }

    fn header(title: &str) -> String {
        format!(
            "\n{}\n{}\n{}\n",
            "=".repeat(60).cyan(),
            title.cyan().bold(),
            "=".repeat(60).cyan()
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(60).cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
