//! Progress reporting for council execution

use colored::Colorize;
use council_application::ports::progress::ProgressNotifier;
use council_domain::{Role, Stage};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during council execution with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn stage_display_name(stage: &Stage) -> &'static str {
        match stage {
            Stage::Reviews => "Stage 1: Executive Domain Reviews",
            Stage::Questions => "Stage 2: Cross-Domain Questions",
            Stage::Responses => "Stage 3: Responses to Questions",
            Stage::Synthesis => "Stage 4: CEO Synthesis",
        }
    }

    fn stage_short_name(stage: &Stage) -> &'static str {
        match stage {
            Stage::Reviews => "Stage 1",
            Stage::Questions => "Stage 2",
            Stage::Responses => "Stage 3",
            Stage::Synthesis => "Stage 4",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: &Stage, total_roles: usize) {
        let stage_name = Self::stage_display_name(stage);

        let pb = self.multi.add(ProgressBar::new(total_roles as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(stage_name.to_string());
        pb.set_message("Starting...");

        *self.stage_bar.lock().unwrap() = Some(pb);
    }

    fn on_role_complete(&self, _stage: &Stage, role: &Role, success: bool) {
        if let Some(pb) = self.stage_bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), role)
            } else {
                format!("{} {}", "x".red(), role)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: &Stage) {
        if let Some(pb) = self.stage_bar.lock().unwrap().take() {
            let stage_name = Self::stage_short_name(stage);
            pb.finish_with_message(format!("{} complete!", stage_name.green()));
        }
    }

    fn on_stage_skipped(&self, _stage: &Stage) {
        let _ = self.multi.println(
            "No questions directed to specific roles. Skipping Stage 3."
                .dimmed()
                .to_string(),
        );
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: &Stage, total_roles: usize) {
        let stage_name = ProgressReporter::stage_display_name(stage);
        println!(
            "{} {} ({} roles)",
            "->".cyan(),
            stage_name.bold(),
            total_roles
        );
    }

    fn on_role_complete(&self, _stage: &Stage, role: &Role, success: bool) {
        if success {
            println!("  {} {}", "v".green(), role);
        } else {
            println!("  {} {} (failed)", "x".red(), role);
        }
    }

    fn on_stage_complete(&self, _stage: &Stage) {
        println!();
    }

    fn on_stage_skipped(&self, _stage: &Stage) {
        println!(
            "{}",
            "No questions directed to specific roles. Skipping Stage 3.".dimmed()
        );
    }
}
