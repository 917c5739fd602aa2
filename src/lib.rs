pub mod api;
pub mod completion;
pub mod config;
pub mod prompt;
pub mod render;

use std::{net::SocketAddr, sync::Arc};

use axum::Router;

pub use completion::{greeting_text, CompletionClient, CompletionError};
pub use config::{AppConfig, CompletionSettings, ConfigError};
pub use render::Renderer;

/// Process-wide singletons shared by every request.
pub struct AppState {
    pub client: CompletionClient,
    pub renderer: Renderer,
    pub prompt: String,
}

impl AppState {
    /// Builds the completion client and loads the template (if any) once.
    /// A missing API key is not an error here; it surfaces on the first request.
    pub fn from_config(cfg: &AppConfig) -> Result<Arc<Self>, ConfigError> {
        let renderer = match &cfg.template {
            Some(path) => Renderer::from_template_file(path)?,
            None => Renderer::Heading,
        };

        Ok(Arc::new(Self {
            client: CompletionClient::new(cfg.completion.clone())?,
            renderer,
            prompt: cfg.prompt.clone(),
        }))
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
