//! Progress reporting for senate use cases

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use senate_application::{ProgressNotifier, Stage};
use std::sync::Mutex;
use std::time::Duration;

/// Reports pipeline stages with a spinner on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage) {
        let Ok(mut guard) = self.bar.lock() else {
            return;
        };
        let bar = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_prefix("senate");
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        bar.set_message(format!("{}...", stage.as_str()));
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        if let Ok(guard) = self.bar.lock()
            && let Some(bar) = guard.as_ref()
        {
            let mark = if success { "v".green() } else { "x".red() };
            bar.println(format!("{} {}", mark, stage.as_str()));
        }
    }

    fn on_finished(&self) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(bar) = guard.take()
        {
            bar.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage) {
        eprintln!("{} {}", "->".cyan(), stage.as_str().bold());
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), stage.as_str());
        } else {
            eprintln!("  {} {} (failed)", "x".red(), stage.as_str());
        }
    }
}
