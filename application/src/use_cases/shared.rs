//! Helpers shared by the use cases

use crate::config::HandoffParams;
use crate::ports::handoff::{HandoffError, HandoffPort, HandoffResult};
use crate::ports::progress::{ProgressNotifier, Stage};
use senate_domain::Verdict;
use tracing::warn;

/// Run one synchronous pipeline stage, reporting start and completion
pub(crate) fn run_stage<T, E>(
    progress: &dyn ProgressNotifier,
    stage: Stage,
    f: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    progress.on_stage_start(stage);
    let result = f();
    progress.on_stage_complete(stage, result.is_ok());
    result
}

/// Ask the tracker for a work item, bounded by the configured deadline.
///
/// The adapter future is dropped on expiry, which stops any child process it
/// started.
pub(crate) async fn file_work_item(
    port: &dyn HandoffPort,
    verdict: &Verdict,
    params: &HandoffParams,
    progress: &dyn ProgressNotifier,
) -> Result<HandoffResult, HandoffError> {
    progress.on_stage_start(Stage::Handoff);
    let attempt = port.create_bead(verdict, params.workspace.as_deref());
    let result = match tokio::time::timeout(params.timeout, attempt).await {
        Ok(result) => result,
        Err(_) => Err(HandoffError::Timeout(params.timeout)),
    };
    if let Err(e) = &result {
        warn!("Handoff for case {} failed: {}", verdict.case_id, e);
    }
    progress.on_stage_complete(Stage::Handoff, result.is_ok());
    result
}
