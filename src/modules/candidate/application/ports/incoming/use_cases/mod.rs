pub mod save_candidate;

pub use save_candidate::{SaveCandidateError, SaveCandidateUseCase};
