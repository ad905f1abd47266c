//! Progress reporting for consensus runs

use colored::Colorize;
use council_application::ProgressNotifier;
use council_domain::{AgentRole, Stage};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during a consensus run with progress bars
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
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn stage_label(stage: &Stage, pass: u8) -> String {
        match stage {
            Stage::Analysis => stage.display_name().to_string(),
            _ => format!("{} (pass {})", stage.display_name(), pass),
        }
    }

    fn agent_status(role: &AgentRole, degraded: bool) -> String {
        if degraded {
            format!("{} {} (fallback)", "x".red(), role)
        } else {
            format!("{} {}", "v".green(), role)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: &Stage, pass: u8, total_agents: usize) {
        let pb = self.multi.add(ProgressBar::new(total_agents as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(Self::stage_label(stage, pass));
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.stage_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_agent_complete(&self, _stage: &Stage, role: &AgentRole, degraded: bool) {
        if let Ok(bar) = self.stage_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(Self::agent_status(role, degraded));
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: &Stage) {
        if let Ok(mut bar) = self.stage_bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("{} complete!", stage.display_name().green()));
        }
    }

    fn on_refinement(&self, first_pass_score: u8, threshold: u8) {
        let _ = self.multi.println(format!(
            "{} consensus {} below {}, refining",
            "->".yellow(),
            first_pass_score,
            threshold
        ));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: &Stage, pass: u8, total_agents: usize) {
        eprintln!(
            "{} {} ({} agents)",
            "->".cyan(),
            ProgressReporter::stage_label(stage, pass).bold(),
            total_agents
        );
    }

    fn on_agent_complete(&self, _stage: &Stage, role: &AgentRole, degraded: bool) {
        eprintln!("  {}", ProgressReporter::agent_status(role, degraded));
    }

    fn on_stage_complete(&self, _stage: &Stage) {
        eprintln!();
    }

    fn on_refinement(&self, first_pass_score: u8, threshold: u8) {
        eprintln!(
            "{} consensus {} below {}, refining",
            "->".yellow(),
            first_pass_score,
            threshold
        );
    }
}
