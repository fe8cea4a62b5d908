use axum::{Json, http::StatusCode, response::IntoResponse};

use super::ApiResponse;

const NOT_FOUND_MESSAGE: &str = "Rota não encontrada";

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure(NOT_FOUND_MESSAGE)),
    )
}
