use anyhow::{bail, Result};
use bias_buster::config::Config;
use bias_buster::i18n::{CatalogValidator, FileStorage, LanguageContext};
use bias_buster::web::{self, AppState};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bias_buster=info".parse()?),
        )
        .init();

    info!("Starting Bias Buster");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Refuse to serve a broken catalog
    let report = CatalogValidator::validate();
    for warning in &report.warnings {
        warn!("Catalog: {}", warning);
    }
    if report.has_errors() {
        for e in &report.errors {
            error!("Catalog: {}", e);
        }
        bail!("Translation catalog has {} error(s)", report.errors.len());
    }
    info!(
        "Translation catalog validated ({} warning(s))",
        report.warnings.len()
    );

    // Resolve the starting language
    let storage = FileStorage::new(&config.preferences_path);
    let context = LanguageContext::new(Box::new(storage), config.browser_language.as_deref());
    info!("Active language: {}", context.language());

    if config.api_key.is_none() {
        warn!("API_KEY not set, i18n diagnostics endpoints are unauthenticated");
    }

    let state = AppState::new(context, config.theme, config.api_key.clone());
    web::serve(config.socket_addr()?, state).await
}
