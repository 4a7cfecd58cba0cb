use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::models::{CommentRequest, CommentResponse, HealthResponse};
use crate::app_state::AppState;
use crate::error::ApiError;
use crate::llm::{parse, prompt};

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.model_name.clone(),
    })
}

pub async fn generate_comment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    let keyword = payload.keyword.trim();
    if keyword.is_empty() {
        return Err(ApiError::InvalidInput(
            "keyword must not be empty".to_string(),
        ));
    }

    tracing::info!("Comment request for keyword: {:?}", keyword);

    let completion = state
        .llm
        .chat_completion(
            prompt::SYSTEM_PROMPT,
            &prompt::comment_prompt(keyword),
            prompt::TEMPERATURE,
            prompt::MAX_TOKENS,
        )
        .await?;

    let generated_comments = parse::parse_comments(&completion)?;

    tracing::info!("Generated comments: {:?}", generated_comments);

    Ok(Json(CommentResponse {
        keyword: keyword.to_string(),
        generated_comments,
    }))
}
