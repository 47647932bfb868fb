use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Model};
use crate::candidate::application::ports::outgoing::{
    CandidateRecord, CandidateRepository, NewCandidate, StorageError, StorageErrorKind,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct CandidateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CandidateRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CandidateRepository for CandidateRepositoryPostgres {
    async fn insert_candidate(&self, data: NewCandidate) -> Result<CandidateRecord, StorageError> {
        let now = Utc::now().fixed_offset();

        let mut model = columns_from(data)?;
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(now);
        model.updated_at = Set(now);

        let inserted = model.insert(&*self.db).await?;

        model_to_record(inserted)
    }

    async fn update_candidate(
        &self,
        candidate_id: Uuid,
        data: NewCandidate,
    ) -> Result<CandidateRecord, StorageError> {
        let mut model = columns_from(data)?;
        model.id = Unchanged(candidate_id);
        model.updated_at = Set(Utc::now().fixed_offset());

        // No matching row comes back as DbErr::RecordNotUpdated.
        let updated = model.update(&*self.db).await?;

        model_to_record(updated)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn columns_from(data: NewCandidate) -> Result<ActiveModel, StorageError> {
    let cv = match &data.cv {
        Some(cv) => Some(to_json(cv)?),
        None => None,
    };

    Ok(ActiveModel {
        first_name: Set(data.first_name),
        last_name: Set(data.last_name),
        email: Set(data.email),
        phone: Set(data.phone),
        address: Set(data.address),
        educations: Set(to_json(&data.educations)?),
        work_experiences: Set(to_json(&data.work_experiences)?),
        cv: Set(cv),
        ..Default::default()
    })
}

fn model_to_record(model: Model) -> Result<CandidateRecord, StorageError> {
    let cv = match &model.cv {
        Some(json) if !json.is_null() => Some(from_json(json)?),
        _ => None,
    };

    Ok(CandidateRecord {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        phone: model.phone,
        address: model.address,
        educations: from_json(&model.educations)?,
        work_experiences: from_json(&model.work_experiences)?,
        cv,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, StorageError> {
    serde_json::to_value(data).map_err(|e| {
        StorageError::new(
            StorageErrorKind::Other,
            format!("Serialization error: {}", e),
        )
    })
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, StorageError> {
    serde_json::from_value(json.clone()).map_err(|e| {
        StorageError::new(
            StorageErrorKind::Other,
            format!("Serialization error: {}", e),
        )
    })
}

// ============================================================================
// Tests
// ============================================================================
