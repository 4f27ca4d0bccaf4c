//! Stage prompt templates and placeholder rendering.
//!
//! Templates carry named `{placeholder}` markers that are filled by
//! literal textual substitution; there is no conditional or loop
//! evaluation. Placeholders the caller does not supply stay in the
//! output as literal markers; it is the caller's job to provide
//! everything a template uses.

/// Stage 1: every role reviews the document from its own domain
const STAGE1_TEMPLATE: &str = r#"{role_instructions}

{operational_context}

---

You are reviewing the following plan or specification:

{document_content}

---

Provide your {role} perspective on this plan. Focus on your domain expertise.

Structure your review:
1. **Domain Assessment**: Key observations from your perspective
2. **Strengths**: What's working well
3. **Concerns**: Issues or risks in your domain
4. **Questions**: What you need clarified (if any)
5. **Recommendations**: Specific suggestions

Be direct and actionable. Flag critical issues clearly."#;

/// Stage 2: roles surface cross-domain tensions and address questions
/// to each other in the `Question to [ROLE]:` form the router scans for
const STAGE2_TEMPLATE: &str = r#"{role_instructions}

{operational_context}

You've seen initial reviews from the executive team:

{stage1_text}

---

Now identify cross-domain tensions and ask clarifying questions.

Your task:
1. Identify where your domain concerns may conflict with others
2. Note areas of implicit disagreement
3. Ask 1-3 specific questions to OTHER executives

Format your questions as:
"Question to [ROLE]: [Your question]"

Example:
"Question to CTO: How does the proposed architecture handle the compliance requirements I flagged?"

Be specific. Good questions surface hidden tensions."#;

/// Stage 3: addressed roles answer the questions routed to them
const STAGE3_TEMPLATE: &str = r#"{role_instructions}

{operational_context}

Previous discussion:

{stage1_text}

---

Questions directed to you:

{directed_questions}

---

Respond to questions directed to your role. Be specific and actionable.

If a question reveals a genuine tension, acknowledge it rather than dismissing it.
If you need to defer to another executive, say so explicitly."#;

/// Stage 4: the CEO synthesizes the full deliberation into a decision
const STAGE4_TEMPLATE: &str = r#"You are the CEO synthesizing the executive team's deliberation.

{operational_context}

---

Original Plan:
{document_content}

---

Executive Reviews (Stage 1):
{stage1_text}

---

Cross-Domain Questions (Stage 2):
{stage2_text}

---

Responses (Stage 3):
{stage3_text}

---

Synthesize into an executive decision. Use this structure:

## Executive Decision
[Clear go/no-go/conditional-go with rationale]

## Key Consensus Points
[Where the team agreed]

## Unresolved Tensions
[Tradeoffs that remain - don't force false consensus]

## Action Items
[Concrete next steps with ownership]
- [ ] [Action] - Owner: [Role]

## Phase Gate Criteria
[What must be true before proceeding to next phase?]

## What Remains Unknown
[Honest acknowledgment of uncertainties]

Be decisive while honoring the complexity surfaced by your team."#;

/// Fill named placeholders in a template.
///
/// Every `{name}` whose name appears in `vars` is replaced by its
/// value; unknown placeholders are left untouched. Pure function:
/// identical inputs produce byte-identical output.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut text = template.to_string();
    for (name, value) in vars {
        text = text.replace(&format!("{{{}}}", name), value);
    }
    text
}

/// The four stage templates handed to the orchestrator at construction.
///
/// A configuration value, not process-wide state, so concurrent runs
/// with different prompt sets cannot interfere.
#[derive(Debug, Clone)]
pub struct PromptSet {
    pub stage1: String,
    pub stage2: String,
    pub stage3: String,
    pub stage4: String,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self {
            stage1: STAGE1_TEMPLATE.to_string(),
            stage2: STAGE2_TEMPLATE.to_string(),
            stage3: STAGE3_TEMPLATE.to_string(),
            stage4: STAGE4_TEMPLATE.to_string(),
        }
    }
}
