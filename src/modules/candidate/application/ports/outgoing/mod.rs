pub mod candidate_repository;
pub mod storage_error;

pub use candidate_repository::{CandidateRecord, CandidateRepository, NewCandidate};
pub use storage_error::{StorageError, StorageErrorKind};
