//! Run Council use case
//!
//! Orchestrates the four-stage deliberation flow:
//! Reviews -> Questions -> Responses (conditional) -> Synthesis.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use council_domain::{
    CouncilConfig, CouncilResult, Document, ModelId, PromptSet, Role, Stage, StageResult,
    extract_directed_questions, render, roles_with_questions, transcript,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Stage-3 placeholder text used in the synthesis prompt when the
/// question gate found no addressed roles.
pub const SKIPPED_RESPONSES_TEXT: &str = "No responses required.";

const REVIEW_TEMPERATURE: f32 = 0.7;
const QUESTION_TEMPERATURE: f32 = 0.6;
const RESPONSE_TEMPERATURE: f32 = 0.7;
const SYNTHESIS_TEMPERATURE: f32 = 0.7;

/// Errors that can occur during council execution
///
/// Deliberately small: per-call gateway failures degrade into inline
/// `ERROR: ...` response text instead of aborting the run.
#[derive(Error, Debug)]
pub enum RunCouncilError {
    #[error("No roles configured")]
    NoRoles,
}

/// Input for the RunCouncil use case
#[derive(Debug, Clone)]
pub struct RunCouncilInput {
    /// The document under review
    pub document: Document,
}

impl RunCouncilInput {
    pub fn new(document: impl Into<Document>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

/// Use case for running a four-stage council deliberation
///
/// Holds its configuration and prompt set from construction; nothing is
/// read from global state, so concurrent runs cannot interfere.
pub struct RunCouncilUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    config: CouncilConfig,
    prompts: PromptSet,
}

impl<G: LlmGateway + 'static> RunCouncilUseCase<G> {
    pub fn new(gateway: Arc<G>, config: CouncilConfig) -> Self {
        Self {
            gateway,
            config,
            prompts: PromptSet::default(),
        }
    }

    pub fn with_prompts(mut self, prompts: PromptSet) -> Self {
        self.prompts = prompts;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunCouncilInput) -> Result<CouncilResult, RunCouncilError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunCouncilInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<CouncilResult, RunCouncilError> {
        if self.config.roles.is_empty() {
            return Err(RunCouncilError::NoRoles);
        }

        info!("Starting council review with {} roles", self.config.roles.len());
        let document = input.document.content();

        // Stage 1: every role reviews the document from its domain
        let stage1 = self
            .run_stage(
                Stage::Reviews,
                &self.config.roles,
                &self.config.executive_model,
                REVIEW_TEMPERATURE,
                |role| {
                    render(
                        &self.prompts.stage1,
                        &[
                            ("role_instructions", self.config.instructions_for(role)),
                            ("operational_context", &self.config.operational_context),
                            ("document_content", document),
                            ("role", role.as_str()),
                        ],
                    )
                },
                progress,
            )
            .await;

        let stage1_text = transcript::sectioned(&stage1);

        // Stage 2: every role raises cross-domain questions
        let stage2 = self
            .run_stage(
                Stage::Questions,
                &self.config.roles,
                &self.config.executive_model,
                QUESTION_TEMPERATURE,
                |role| {
                    render(
                        &self.prompts.stage2,
                        &[
                            ("role_instructions", self.config.instructions_for(role)),
                            ("operational_context", &self.config.operational_context),
                            ("stage1_text", &stage1_text),
                        ],
                    )
                },
                progress,
            )
            .await;

        // Transition gate: only roles with directed questions respond
        let flagged = roles_with_questions(&stage2, &self.config.roles);

        let stage3 = if flagged.is_empty() {
            info!("No directed questions found, skipping response stage");
            progress.on_stage_skipped(&Stage::Responses);
            Vec::new()
        } else {
            let respondents: Vec<Role> = self
                .config
                .roles
                .iter()
                .filter(|r| flagged.contains(r))
                .cloned()
                .collect();

            self.run_stage(
                Stage::Responses,
                &respondents,
                &self.config.executive_model,
                RESPONSE_TEMPERATURE,
                |role| {
                    let directed_questions = extract_directed_questions(&stage2, role);
                    render(
                        &self.prompts.stage3,
                        &[
                            ("role_instructions", self.config.instructions_for(role)),
                            ("operational_context", &self.config.operational_context),
                            ("stage1_text", &stage1_text),
                            ("directed_questions", &directed_questions),
                        ],
                    )
                },
                progress,
            )
            .await
        };

        let stage2_text = transcript::plain(&stage2);
        let stage3_text = if stage3.is_empty() {
            SKIPPED_RESPONSES_TEXT.to_string()
        } else {
            transcript::plain(&stage3)
        };

        // Stage 4: single CEO synthesis call
        let synthesis = self
            .run_synthesis(document, &stage1_text, &stage2_text, &stage3_text, progress)
            .await;

        Ok(CouncilResult::new(stage1, stage2, stage3, synthesis))
    }

    /// Query every role in a stage concurrently.
    ///
    /// Results are slotted by role position so the returned sequence
    /// follows the given role order, never completion order - question
    /// routing and aggregation depend on a stable textual ordering.
    async fn run_stage<F>(
        &self,
        stage: Stage,
        roles: &[Role],
        model: &ModelId,
        temperature: f32,
        build_prompt: F,
        progress: &dyn ProgressNotifier,
    ) -> Vec<StageResult>
    where
        F: Fn(&Role) -> String,
    {
        info!("Stage: {}", stage);
        progress.on_stage_start(&stage, roles.len());

        let mut join_set = JoinSet::new();

        for (idx, role) in roles.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let role = role.clone();
            let model = model.clone();
            let prompt = build_prompt(&role);

            join_set.spawn(async move {
                let outcome = gateway.query(&prompt, &model, temperature).await;
                (idx, role, outcome)
            });
        }

        let mut slots: Vec<Option<StageResult>> = vec![None; roles.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((idx, role, Ok(content))) => {
                    debug!("{} responded in {}", role, stage.as_str());
                    progress.on_role_complete(&stage, &role, true);
                    slots[idx] = Some(StageResult::new(role, content));
                }
                Ok((idx, role, Err(e))) => {
                    warn!("{} failed in {}: {}", role, stage.as_str(), e);
                    progress.on_role_complete(&stage, &role, false);
                    slots[idx] = Some(StageResult::new(role, format!("ERROR: {}", e)));
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        progress.on_stage_complete(&stage);
        slots.into_iter().flatten().collect()
    }

    /// Single decision-maker call closing the run.
    async fn run_synthesis(
        &self,
        document: &str,
        stage1_text: &str,
        stage2_text: &str,
        stage3_text: &str,
        progress: &dyn ProgressNotifier,
    ) -> String {
        info!("Stage: {}", Stage::Synthesis);
        progress.on_stage_start(&Stage::Synthesis, 1);

        let prompt = render(
            &self.prompts.stage4,
            &[
                ("operational_context", &self.config.operational_context),
                ("document_content", document),
                ("stage1_text", stage1_text),
                ("stage2_text", stage2_text),
                ("stage3_text", stage3_text),
            ],
        );

        let ceo = Role::Custom("CEO".to_string());
        let synthesis = match self
            .gateway
            .query(&prompt, &self.config.ceo_model, SYNTHESIS_TEMPERATURE)
            .await
        {
            Ok(content) => {
                progress.on_role_complete(&Stage::Synthesis, &ceo, true);
                content
            }
            Err(e) => {
                warn!("Synthesis call failed: {}", e);
                progress.on_role_complete(&Stage::Synthesis, &ceo, false);
                format!("ERROR: {}", e)
            }
        };

        progress.on_stage_complete(&Stage::Synthesis);
        synthesis
    }
}
