pub mod entities;
pub mod presence;

pub use entities::{CandidateInput, CvEntry, EducationEntry, WorkExperienceEntry};
pub use presence::Presence;
