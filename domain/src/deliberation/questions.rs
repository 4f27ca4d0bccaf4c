//! Directed-question routing between council roles.
//!
//! Stage-2 responses address questions to peers in free text, e.g.
//! `"Question to CTO: How is compliance handled?"`. These functions
//! extract routing decisions from that text. Pure functions, no I/O.
//!
//! Matching is plain case-insensitive substring containment: a pattern
//! appearing inside quotation, a code fence, or unrelated prose still
//! counts as a match. Callers must not tighten the matching semantics.
//!
//! Case folding is ASCII-only (`to_ascii_uppercase`), which keeps byte
//! offsets into the original line valid for extraction.

use crate::core::role::Role;
use crate::deliberation::value_objects::StageResult;
use std::collections::HashSet;

/// Returned by [`extract_directed_questions`] when no question in the
/// input addresses the target role. Distinguishes "checked, found none"
/// from an uninitialized value in the consuming prompt.
pub const NO_QUESTIONS_SENTINEL: &str = "No questions directed to your role.";

/// Addressing patterns that capture question text, in match priority
/// order. The first pattern that matches a line wins; a line can never
/// match more than once.
fn extraction_patterns(role: &Role) -> [String; 4] {
    let name = role.as_str();
    [
        format!("QUESTION TO {}:", name.to_ascii_uppercase()),
        format!("QUESTION FOR {}:", name.to_ascii_uppercase()),
        format!("TO {}:", name.to_ascii_uppercase()),
        format!("@{}:", name.to_ascii_uppercase()),
    ]
}

/// Pattern families used for membership detection. Note the missing
/// trailing colon on three of them: detection is looser than
/// extraction, so a role can be flagged even when extraction later
/// yields only the sentinel.
fn detection_patterns(role: &Role) -> [String; 4] {
    let name = role.as_str().to_ascii_uppercase();
    [
        format!("QUESTION TO {}", name),
        format!("QUESTION FOR {}", name),
        format!("TO {}:", name),
        format!("@{}", name),
    ]
}

/// Extract every question addressed to `target` from a set of stage
/// responses.
///
/// Each response is scanned line by line; the first matching pattern on
/// a line yields the substring from the match position through the end
/// of the line. Extracted questions are attributed to their source role
/// (`"From CPO: Question to CTO: ..."`) and joined by blank lines.
///
/// Returns [`NO_QUESTIONS_SENTINEL`] when nothing matched, never an
/// empty string.
pub fn extract_directed_questions(responses: &[StageResult], target: &Role) -> String {
    let patterns = extraction_patterns(target);
    let mut questions = Vec::new();

    for resp in responses {
        for line in resp.response.lines() {
            let line_upper = line.to_ascii_uppercase();
            for pattern in &patterns {
                if let Some(idx) = line_upper.find(pattern.as_str()) {
                    questions.push(format!("From {}: {}", resp.role, &line[idx..]));
                    break;
                }
            }
        }
    }

    if questions.is_empty() {
        return NO_QUESTIONS_SENTINEL.to_string();
    }

    questions.join("\n\n")
}

/// Determine which of `roles` have at least one question addressed to
/// them anywhere in the given responses.
///
/// Membership only; duplicate matches do not change the result. An
/// empty set means the response round can be skipped entirely.
pub fn roles_with_questions(responses: &[StageResult], roles: &[Role]) -> HashSet<Role> {
    let mut flagged = HashSet::new();

    for resp in responses {
        let content = resp.response.to_ascii_uppercase();
        for role in roles {
            if flagged.contains(role) {
                continue;
            }
            let patterns = detection_patterns(role);
            if patterns.iter().any(|p| content.contains(p.as_str())) {
                flagged.insert(role.clone());
            }
        }
    }

    flagged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(role: Role, text: &str) -> StageResult {
        StageResult::new(role, text)
    }

    // ==================== extract_directed_questions ====================

    #[test]
    fn test_extract_basic_question() {
        let responses = vec![result(
            Role::Cpo,
            "Some analysis.\nQuestion to CTO: How is compliance handled?",
        )];
        let extracted = extract_directed_questions(&responses, &Role::Cto);
        assert_eq!(
            extracted,
            "From CPO: Question to CTO: How is compliance handled?"
        );
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let lower = vec![result(Role::Coo, "question to cto: capacity plan?")];
        let upper = vec![result(Role::Coo, "QUESTION TO CTO: CAPACITY PLAN?")];

        let from_lower = extract_directed_questions(&lower, &Role::Cto);
        let from_upper = extract_directed_questions(&upper, &Role::Cto);

        assert!(from_lower.starts_with("From COO: question to cto:"));
        assert!(from_upper.starts_with("From COO: QUESTION TO CTO:"));
    }

    #[test]
    fn test_extract_starts_at_match_position() {
        let responses = vec![result(
            Role::Ciso,
            "1. Question to COO: Who owns incident response?",
        )];
        let extracted = extract_directed_questions(&responses, &Role::Coo);
        // Leading list marker before the match is dropped
        assert_eq!(
            extracted,
            "From CISO: Question to COO: Who owns incident response?"
        );
    }

    #[test]
    fn test_extract_first_match_wins_per_line() {
        // Line matches both "Question to X:" and "To X:"; only the
        // earlier pattern in priority order fires, once.
        let responses = vec![result(Role::Cpo, "Question to CTO: see note To CTO: above")];
        let extracted = extract_directed_questions(&responses, &Role::Cto);
        assert_eq!(
            extracted,
            "From CPO: Question to CTO: see note To CTO: above"
        );
        assert_eq!(extracted.matches("From CPO").count(), 1);
    }

    #[test]
    fn test_extract_alternate_pattern_families() {
        let responses = vec![
            result(Role::Cpo, "Question for CISO: threat model status?"),
            result(Role::Cto, "To CISO: is SSO mandatory?"),
            result(Role::Coo, "@CISO: audit cadence?"),
        ];
        let extracted = extract_directed_questions(&responses, &Role::Ciso);
        assert!(extracted.contains("From CPO: Question for CISO: threat model status?"));
        assert!(extracted.contains("From CTO: To CISO: is SSO mandatory?"));
        assert!(extracted.contains("From COO: @CISO: audit cadence?"));
        // Blank line between attributed questions
        assert_eq!(extracted.matches("\n\n").count(), 2);
    }

    #[test]
    fn test_extract_no_questions_returns_sentinel() {
        let responses = vec![result(Role::Cpo, "No concerns from product.")];
        let extracted = extract_directed_questions(&responses, &Role::Cto);
        assert_eq!(extracted, NO_QUESTIONS_SENTINEL);
    }

    #[test]
    fn test_extract_ignores_questions_to_other_roles() {
        let responses = vec![result(Role::Cpo, "Question to COO: staffing plan?")];
        let extracted = extract_directed_questions(&responses, &Role::Cto);
        assert_eq!(extracted, NO_QUESTIONS_SENTINEL);
    }

    #[test]
    fn test_extract_matches_inside_prose() {
        // Plain containment matches even inside quoted text
        let responses = vec![result(
            Role::Cto,
            "I would avoid phrasing like \"Question to CISO: ...\" here.",
        )];
        let extracted = extract_directed_questions(&responses, &Role::Ciso);
        assert!(extracted.starts_with("From CTO: Question to CISO:"));
    }

    // ==================== roles_with_questions ====================

    #[test]
    fn test_detection_flags_addressed_role_only() {
        let roles = Role::default_council();
        let responses = vec![
            result(Role::Cpo, "Question to CTO: How is compliance handled?"),
            result(Role::Coo, "No questions from operations."),
        ];
        let flagged = roles_with_questions(&responses, &roles);
        assert!(flagged.contains(&Role::Cto));
        assert!(!flagged.contains(&Role::Cpo));
        assert_eq!(flagged.len(), 1);
    }

    #[test]
    fn test_detection_empty_when_no_patterns_present() {
        let roles = Role::default_council();
        let responses = vec![
            result(Role::Cpo, "Strong plan."),
            result(Role::Cto, "Architecture is sound."),
            result(Role::Coo, "Rollout is feasible."),
            result(Role::Ciso, "Controls look adequate."),
        ];
        assert!(roles_with_questions(&responses, &roles).is_empty());
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        let roles = Role::default_council();
        let responses = vec![result(Role::Cpo, "question to cto: anything?")];
        assert!(roles_with_questions(&responses, &roles).contains(&Role::Cto));
    }

    #[test]
    fn test_detection_duplicates_do_not_change_membership() {
        let roles = Role::default_council();
        let responses = vec![
            result(Role::Cpo, "Question to CTO: a?\nQuestion to CTO: b?"),
            result(Role::Coo, "@CTO: c?"),
        ];
        let flagged = roles_with_questions(&responses, &roles);
        assert_eq!(flagged.len(), 1);
    }

    #[test]
    fn test_detection_looser_than_extraction() {
        // "@CTO" without a colon flags the role for detection, but the
        // extraction patterns all require the colon.
        let roles = Role::default_council();
        let responses = vec![result(Role::Cpo, "Deferring to @CTO on this one")];
        let flagged = roles_with_questions(&responses, &roles);
        assert!(flagged.contains(&Role::Cto));
        assert_eq!(
            extract_directed_questions(&responses, &Role::Cto),
            NO_QUESTIONS_SENTINEL
        );
    }
}
