//! Progress notification port
//!
//! Defines the interface for reporting progress while a case moves through
//! the deliberation pipeline.

/// Pipeline stages reported to a [`ProgressNotifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SaveCase,
    Deliberate,
    SaveTranscript,
    Handoff,
    SaveVerdict,
    IndexPrecedent,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::SaveCase => "Filing case",
            Stage::Deliberate => "Deliberating",
            Stage::SaveTranscript => "Recording transcript",
            Stage::Handoff => "Handing off",
            Stage::SaveVerdict => "Recording verdict",
            Stage::IndexPrecedent => "Indexing precedent",
        }
    }
}

/// Callback for progress updates during a use case
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: Stage);

    /// Called when a stage finishes, successfully or not
    fn on_stage_complete(&self, stage: Stage, success: bool);

    /// Called once the whole pipeline is done
    fn on_finished(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
}
