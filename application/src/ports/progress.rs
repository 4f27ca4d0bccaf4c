//! Progress notification port
//!
//! Defines the interface for reporting progress during a council run.

use council_domain::{Role, Stage};

/// Callback for progress updates during council execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, progress bars, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts, with the number of roles it queries
    fn on_stage_start(&self, stage: &Stage, total_roles: usize);

    /// Called when one role's call completes within a stage
    fn on_role_complete(&self, stage: &Stage, role: &Role, success: bool);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: &Stage);

    /// Called when a stage is skipped entirely (the Stage-3 gate)
    fn on_stage_skipped(&self, _stage: &Stage) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: &Stage, _total_roles: usize) {}
    fn on_role_complete(&self, _stage: &Stage, _role: &Role, _success: bool) {}
    fn on_stage_complete(&self, _stage: &Stage) {}
}
