// src/modules/candidate/application/ports/outgoing/candidate_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::storage_error::StorageError;
use crate::candidate::domain::{CandidateInput, CvEntry, EducationEntry, WorkExperienceEntry};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// What gets written. Values are copied from the payload as they came;
/// absent and null optionals both become `None` / empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub educations: Vec<EducationEntry>,
    pub work_experiences: Vec<WorkExperienceEntry>,
    pub cv: Option<CvEntry>,
}

impl From<CandidateInput> for NewCandidate {
    fn from(input: CandidateInput) -> Self {
        Self {
            first_name: input.first_name.into_provided().unwrap_or_default(),
            last_name: input.last_name.into_provided().unwrap_or_default(),
            email: input.email.into_provided().unwrap_or_default(),
            phone: input.phone.into_provided(),
            address: input.address.into_provided(),
            educations: input.educations.into_provided().unwrap_or_default(),
            work_experiences: input.work_experiences.into_provided().unwrap_or_default(),
            cv: input.cv.into_provided(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub educations: Vec<EducationEntry>,
    pub work_experiences: Vec<WorkExperienceEntry>,
    pub cv: Option<CvEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CandidateRepository: Send + Sync {
    async fn insert_candidate(&self, data: NewCandidate) -> Result<CandidateRecord, StorageError>;

    /// Replaces every column of an existing candidate.
    /// A missing row is reported as `StorageErrorKind::RecordNotFound`.
    async fn update_candidate(
        &self,
        candidate_id: Uuid,
        data: NewCandidate,
    ) -> Result<CandidateRecord, StorageError>;
}
