use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor. Tente novamente mais tarde.";

/// Envelope shared by every JSON reply the form talks to.
#[derive(Serialize, Debug)]
pub struct ApiResponse {
    #[serde(rename = "sucesso")]
    pub success: bool,
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "emailId", skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>, email_id: String) -> Self {
        Self {
            success: true,
            message: message.into(),
            email_id: Some(email_id),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            email_id: None,
        }
    }
}

/// Opaque 500. Whatever went wrong is for the logs, not for the client.
pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}
