use async_trait::async_trait;

use crate::candidate::application::ports::outgoing::CandidateRecord;
use crate::candidate::application::services::PersistenceError;
use crate::candidate::application::validation::ValidationError;
use crate::candidate::domain::CandidateInput;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Validation and persistence failures stay apart; neither is folded into the other.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveCandidateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Validates a payload and stores it: inserts when it has no `id`,
/// otherwise updates the existing candidate.
#[async_trait]
pub trait SaveCandidateUseCase: Send + Sync {
    async fn execute(&self, input: CandidateInput) -> Result<CandidateRecord, SaveCandidateError>;
}
