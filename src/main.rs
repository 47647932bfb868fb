use std::env;
use std::sync::Arc;

use anyhow::Context;
use candidate_intake::candidate::adapter::outgoing::{database, CandidateRepositoryPostgres};
use candidate_intake::candidate::application::ports::incoming::use_cases::SaveCandidateUseCase;
use candidate_intake::candidate::application::services::{
    translate_storage_error, SaveCandidateService,
};
use candidate_intake::candidate::domain::CandidateInput;
use candidate_intake::config::AppConfig;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let payload_path = env::args()
        .nth(1)
        .context("usage: candidate_intake <payload.json>")?;

    let config = AppConfig::from_env()?;
    info!(environment = %config.environment, "Starting candidate intake...");

    let raw = std::fs::read_to_string(&payload_path)
        .with_context(|| format!("Failed to read {}", payload_path))?;
    let input: CandidateInput =
        serde_json::from_str(&raw).context("Payload is not a valid candidate document")?;

    let conn = database::connect(&config)
        .await
        .map_err(translate_storage_error)?;

    let repository = CandidateRepositoryPostgres::new(Arc::new(conn));
    let service = SaveCandidateService::new(repository);

    let record = service.execute(input).await?;

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
