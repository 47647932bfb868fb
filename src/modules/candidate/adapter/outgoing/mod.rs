pub mod candidate_repository_postgres;
pub mod database;
pub mod db_error;
pub mod sea_orm_entity;

pub use candidate_repository_postgres::CandidateRepositoryPostgres;
