use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::completion::greeting_text;
use crate::AppState;

pub async fn greet(State(state): State<Arc<AppState>>) -> Html<String> {
    let result = state.client.complete(&state.prompt).await;
    match &result {
        Ok(text) => {
            tracing::debug!(model = state.client.model(), text = %text, "completion succeeded")
        }
        Err(err) => tracing::warn!(error = %err, "completion failed, rendering error text"),
    }

    Html(state.renderer.render(&greeting_text(result)))
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html("<h1>Not Found</h1>")).into_response()
}
