use anyhow::Context;
use greeter_service::{build_app, run_server, AppConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = AppConfig::from_env();
    let addr = cfg.bind_addr()?;
    tracing::info!(
        model = %cfg.completion.model,
        base_url = %cfg.completion.base_url,
        api_key_set = cfg.completion.api_key.is_some(),
        template = ?cfg.template,
        "loaded configuration"
    );
    if cfg.completion.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; requests will render an error");
    }

    let state = AppState::from_config(&cfg).context("failed to build application state")?;
    let app = build_app(state);

    run_server(app, addr)
        .await
        .with_context(|| format!("server on {addr} failed"))
}
