//! ya-note server binary.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use ya_core::{Result, Settings, site};

async fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    let state = ya_note::prepare(settings.clone()).await?;
    let router = site::router(&state)?.push(ya_note::routes());
    site::serve(&settings, router).await;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "ya-note stopped");
            ExitCode::FAILURE
        }
    }
}
