use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::candidate::application::ports::incoming::use_cases::{
    SaveCandidateError, SaveCandidateUseCase,
};
use crate::candidate::application::ports::outgoing::{
    CandidateRecord, CandidateRepository, NewCandidate,
};
use crate::candidate::application::services::error_translator::{
    translate_storage_error, PersistenceError,
};
use crate::candidate::application::validation::validate_candidate;
use crate::candidate::domain::CandidateInput;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct SaveCandidateService<R>
where
    R: CandidateRepository,
{
    candidate_repository: R,
}

impl<R> SaveCandidateService<R>
where
    R: CandidateRepository,
{
    pub fn new(candidate_repository: R) -> Self {
        Self {
            candidate_repository,
        }
    }
}

#[async_trait]
impl<R> SaveCandidateUseCase for SaveCandidateService<R>
where
    R: CandidateRepository + Send + Sync,
{
    async fn execute(&self, input: CandidateInput) -> Result<CandidateRecord, SaveCandidateError> {
        if let Err(e) = validate_candidate(&input) {
            warn!(field = %e.field, kind = ?e.kind, "Candidate payload rejected");
            return Err(e.into());
        }

        let raw_id = input.id.provided().cloned();
        let data = NewCandidate::from(input);

        let result = match raw_id {
            None => self.candidate_repository.insert_candidate(data).await,
            Some(raw_id) => {
                // The update path is not validated.
                warn!(candidate_id = %raw_id, "Updating candidate without validation");

                // An id that is not a UUID cannot address a stored row.
                let Some(id) = parse_candidate_id(&raw_id) else {
                    warn!(candidate_id = %raw_id, "Candidate id is not a UUID");
                    return Err(PersistenceError::RecordNotFound.into());
                };
                self.candidate_repository.update_candidate(id, data).await
            }
        };

        match result {
            Ok(record) => {
                info!(candidate_id = %record.id, "Candidate saved");
                Ok(record)
            }
            Err(raw) => {
                let err = translate_storage_error(raw);
                match &err {
                    PersistenceError::Unknown(raw) => error!(
                        error = %raw,
                        code = ?raw.code,
                        target = ?raw.target,
                        "Unclassified storage error while saving candidate"
                    ),
                    classified => warn!(error = %classified, "Candidate could not be saved"),
                }
                Err(err.into())
            }
        }
    }
}

fn parse_candidate_id(raw_id: &JsonValue) -> Option<Uuid> {
    raw_id.as_str().and_then(|s| Uuid::parse_str(s.trim()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::application::ports::outgoing::storage_error::codes;
    use crate::candidate::application::ports::outgoing::{StorageError, StorageErrorKind};
    use crate::candidate::application::validation::ValidationErrorKind;
    use crate::candidate::domain::Presence;
    use chrono::Utc;
    use mockall::{mock, predicate::*};
    use serde_json::json;

    mock! {
        pub CandidateRepositoryMock {}
        #[async_trait]
        impl CandidateRepository for CandidateRepositoryMock {
            async fn insert_candidate(&self, data: NewCandidate) -> Result<CandidateRecord, StorageError>;
            async fn update_candidate(
                &self,
                candidate_id: Uuid,
                data: NewCandidate,
            ) -> Result<CandidateRecord, StorageError>;
        }
    }

    fn valid_input() -> CandidateInput {
        CandidateInput {
            first_name: Presence::Value("Ana".to_string()),
            last_name: Presence::Value("García".to_string()),
            email: Presence::Value("ana.garcia@example.com".to_string()),
            ..Default::default()
        }
    }

    fn record_from(id: Uuid, data: NewCandidate) -> CandidateRecord {
        let now = Utc::now();
        CandidateRecord {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            address: data.address,
            educations: data.educations,
            work_experiences: data.work_experiences,
            cv: data.cv,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_insert_success() {
        let mut repo = MockCandidateRepositoryMock::new();
        repo.expect_insert_candidate()
            .withf(|data| data.email == "ana.garcia@example.com" && data.phone.is_none())
            .times(1)
            .returning(|data| Ok(record_from(Uuid::new_v4(), data)));
        repo.expect_update_candidate().never();

        let service = SaveCandidateService::new(repo);
        let record = service.execute(valid_input()).await.unwrap();

        assert_eq!(record.first_name, "Ana");
        assert_eq!(record.last_name, "García");
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_repository() {
        let mut repo = MockCandidateRepositoryMock::new();
        repo.expect_insert_candidate().never();
        repo.expect_update_candidate().never();

        let service = SaveCandidateService::new(repo);
        let input = CandidateInput {
            phone: Presence::Value("123".to_string()),
            ..valid_input()
        };

        match service.execute(input).await {
            Err(SaveCandidateError::Validation(e)) => {
                assert_eq!(e.kind, ValidationErrorKind::InvalidPhone);
                assert_eq!(e.to_string(), "Invalid phone");
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_id_routes_to_update_without_validation() {
        let candidate_id = Uuid::new_v4();

        let mut repo = MockCandidateRepositoryMock::new();
        repo.expect_insert_candidate().never();
        repo.expect_update_candidate()
            .with(eq(candidate_id), always())
            .times(1)
            .returning(|id, data| Ok(record_from(id, data)));

        let service = SaveCandidateService::new(repo);
        let input = CandidateInput {
            id: Presence::Value(json!(candidate_id.to_string())),
            first_name: Presence::Value(String::new()),
            email: Presence::Value("invalid-email".to_string()),
            ..Default::default()
        };

        let record = service.execute(input).await.unwrap();
        assert_eq!(record.id, candidate_id);
        assert_eq!(record.email, "invalid-email");
    }

    #[tokio::test]
    async fn test_non_uuid_id_is_record_not_found_without_validation() {
        for raw_id in [json!(42), json!("abc"), json!({ "nested": true })] {
            let mut repo = MockCandidateRepositoryMock::new();
            repo.expect_insert_candidate().never();
            repo.expect_update_candidate().never();

            let service = SaveCandidateService::new(repo);
            let input = CandidateInput {
                id: Presence::Value(raw_id),
                first_name: Presence::Value(String::new()),
                ..Default::default()
            };

            let err = service.execute(input).await.unwrap_err();
            assert_eq!(
                err,
                SaveCandidateError::Persistence(PersistenceError::RecordNotFound)
            );
        }
    }

    #[test]
    fn test_parse_candidate_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_candidate_id(&json!(id.to_string())), Some(id));
        assert_eq!(parse_candidate_id(&json!(42)), None);
        assert_eq!(parse_candidate_id(&json!("abc")), None);
        assert_eq!(parse_candidate_id(&json!(null)), None);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_translated() {
        let mut repo = MockCandidateRepositoryMock::new();
        repo.expect_insert_candidate().times(1).returning(|_| {
            Err(StorageError::new(
                StorageErrorKind::Query,
                "duplicate key value violates unique constraint \"candidates_email_key\"",
            )
            .with_code(codes::UNIQUE_VIOLATION)
            .with_target(["candidates_email_key"]))
        });

        let service = SaveCandidateService::new(repo);
        let err = service.execute(valid_input()).await.unwrap_err();

        assert_eq!(
            err,
            SaveCandidateError::Persistence(PersistenceError::DuplicateEmail)
        );
        assert_eq!(err.to_string(), "The email already exists in the database");
    }

    #[tokio::test]
    async fn test_missing_record_on_update_is_translated() {
        let mut repo = MockCandidateRepositoryMock::new();
        repo.expect_update_candidate().times(1).returning(|_, _| {
            Err(StorageError::new(
                StorageErrorKind::RecordNotFound,
                "None of the records are updated",
            ))
        });

        let service = SaveCandidateService::new(repo);
        let input = CandidateInput {
            id: Presence::Value(json!(Uuid::new_v4().to_string())),
            ..valid_input()
        };

        let err = service.execute(input).await.unwrap_err();
        assert_eq!(
            err,
            SaveCandidateError::Persistence(PersistenceError::RecordNotFound)
        );
    }

    #[tokio::test]
    async fn test_unknown_storage_error_passes_through() {
        let raw = StorageError::new(StorageErrorKind::Query, "syntax error at or near \"VALUES\"")
            .with_code("42601");
        let returned = raw.clone();

        let mut repo = MockCandidateRepositoryMock::new();
        repo.expect_insert_candidate()
            .times(1)
            .returning(move |_| Err(returned.clone()));

        let service = SaveCandidateService::new(repo);
        let err = service.execute(valid_input()).await.unwrap_err();

        assert_eq!(
            err,
            SaveCandidateError::Persistence(PersistenceError::Unknown(raw))
        );
    }
}
