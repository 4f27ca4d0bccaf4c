//! Transcript aggregation - turns a stage's results into prompt context.
//!
//! Both modes emit one `### {role}` heading per result followed by its
//! response text, preserving canonical role order. Sectioned mode
//! separates blocks with a horizontal rule and is used for
//! Stage-1-derived context; plain mode separates with a blank line and
//! is used for Stage-2/Stage-3-derived context.

use crate::deliberation::value_objects::StageResult;

/// Format stage results with `---` rules between role sections.
///
/// Empty input yields the empty string; the orchestrator substitutes a
/// sentinel where a skipped stage needs placeholder text.
pub fn sectioned(results: &[StageResult]) -> String {
    results
        .iter()
        .map(|r| format!("### {}\n{}\n", r.role, r.response))
        .collect::<Vec<_>>()
        .join("\n---\n")
}

/// Format stage results separated by blank lines only.
pub fn plain(results: &[StageResult]) -> String {
    results
        .iter()
        .map(|r| format!("### {}\n{}\n", r.role, r.response))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::role::Role;

    fn sample() -> Vec<StageResult> {
        vec![
            StageResult::new(Role::Cpo, "Product looks viable."),
            StageResult::new(Role::Cto, "Architecture needs work."),
            StageResult::new(Role::Coo, "Rollout plan is thin."),
        ]
    }

    #[test]
    fn test_sectioned_preserves_order_and_count() {
        let text = sectioned(&sample());
        let blocks: Vec<&str> = text.split("\n---\n").collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].starts_with("### CPO\n"));
        assert!(blocks[1].starts_with("### CTO\n"));
        assert!(blocks[2].starts_with("### COO\n"));
    }

    #[test]
    fn test_plain_has_no_rule_marker() {
        let text = plain(&sample());
        assert!(!text.contains("---"));
        assert_eq!(text.matches("### ").count(), 3);
    }

    #[test]
    fn test_plain_blocks_separated_by_blank_line() {
        let text = plain(&sample());
        // Each block ends with '\n' and blocks are joined by '\n'
        assert!(text.contains("Product looks viable.\n\n### CTO"));
    }

    #[test]
    fn test_empty_input_yields_empty_text() {
        assert_eq!(sectioned(&[]), "");
        assert_eq!(plain(&[]), "");
    }

    #[test]
    fn test_single_result_has_no_separator() {
        let one = vec![StageResult::new(Role::Ciso, "Fine.")];
        assert_eq!(sectioned(&one), "### CISO\nFine.\n");
        assert_eq!(plain(&one), "### CISO\nFine.\n");
    }
}
