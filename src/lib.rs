pub mod cli;
pub mod config;
pub mod errors;
pub mod github;
pub mod kube;
pub mod logging;
pub mod upsert;

use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// One deadline for the whole run; an expired deadline cancels whatever
/// call is in flight and fails the run.
pub const RUN_DEADLINE: Duration = Duration::from_secs(5 * 60);

pub async fn run(config: Config) -> AppResult<()> {
    run_with_deadline(RUN_DEADLINE, run_inner(config)).await
}

async fn run_with_deadline<F>(deadline: Duration, fut: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result,
        Err(_) => Err(AppError::DeadlineExceeded(deadline)),
    }
}

/// Sign, exchange, then write the two secret variants. Strictly sequential,
/// one attempt per step. Signing comes first so a bad key fails the run
/// before anything touches the network.
async fn run_inner(config: Config) -> AppResult<()> {
    let assertion = github::signer::sign(&config.key_file, &config.app_id, config.ttl_secs)?;
    tracing::debug!(app_id = %config.app_id, "signed app JWT");

    let http = github::exchange::http_client()?;
    let token =
        github::exchange::fetch_installation_token(&http, config.installation_id, &assertion)
            .await?;
    tracing::info!(
        installation_id = config.installation_id,
        "obtained installation access token"
    );

    let client = kube::client::make_client().await?;
    let store = kube::secrets::KubeSecretStore::new(client, &config.namespace);

    upsert::sync_token_secrets(&store, &config, &token).await
}
