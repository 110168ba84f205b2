//! Application layer for senate
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{HandoffParams, PanelParams};
pub use ports::{
    case_outbox::{CaseFiledEnvelope, CaseOutbox, OutboxError},
    case_repository::{CaseRepository, RepositoryError},
    handoff::{HandoffError, HandoffPort, HandoffResult, NoHandoff},
    precedent_index::{PrecedentError, PrecedentIndex},
    progress::{NoProgress, ProgressNotifier, Stage},
};
pub use use_cases::deliberate::{
    DeliberateError, DeliberateInput, DeliberateOutput, DeliberateUseCase,
};
pub use use_cases::file_case::{FileCaseError, FileCaseOutput, FileCaseUseCase};
pub use use_cases::handoff_verdict::{
    HandoffVerdictError, HandoffVerdictInput, HandoffVerdictOutput, HandoffVerdictUseCase,
};
pub use use_cases::search_precedents::{
    SearchPrecedentsError, SearchPrecedentsInput, SearchPrecedentsUseCase,
};
