pub mod error_translator;
pub mod save_candidate_service;

pub use error_translator::{translate_storage_error, PersistenceError};
pub use save_candidate_service::SaveCandidateService;
