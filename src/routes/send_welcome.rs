use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::{ApiResponse, internal_error};
use crate::{
    domain::{NewWelcome, ValidationError, WelcomeName},
    email_client::{EmailClient, EmailClientError},
    email_template::EmailTemplate,
    startup::AppState,
};

const MALFORMED_PAYLOAD_MESSAGE: &str = "Corpo da requisição inválido";

/// Body posted by the form. Field names follow the wire format.
#[derive(Deserialize, Debug)]
pub struct WelcomePayload {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
}

impl TryFrom<WelcomePayload> for NewWelcome {
    type Error = ValidationError;

    fn try_from(value: WelcomePayload) -> Result<Self, Self::Error> {
        NewWelcome::parse(value.name, value.email)
    }
}

/// A welcome email the provider accepted.
#[derive(Debug)]
pub struct WelcomeSent {
    pub name: WelcomeName,
    pub email_id: String,
}

#[derive(thiserror::Error, Debug)]
pub enum WelcomeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("malformed welcome payload: {0}")]
    MalformedPayload(#[from] JsonRejection),
    #[error("failed to send the welcome email")]
    SendFailure(#[from] EmailClientError),
}

impl IntoResponse for WelcomeError {
    fn into_response(self) -> Response {
        match self {
            WelcomeError::Validation(e) => {
                tracing::warn!("{}", e);
                (StatusCode::BAD_REQUEST, Json(ApiResponse::failure(e.to_string()))).into_response()
            }
            WelcomeError::MalformedPayload(e) => {
                tracing::warn!(error.message = %e.body_text(), "Rejected a malformed payload");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::failure(MALFORMED_PAYLOAD_MESSAGE)),
                )
                    .into_response()
            }
            WelcomeError::SendFailure(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to send a welcome email"
                );
                internal_error()
            }
        }
    }
}

/// Validates `payload`, renders `template` with the name and hands the
/// result to the provider. Nothing is sent unless validation passes.
#[tracing::instrument(
    name = "Dispatching a welcome email",
    skip(email_client, template, payload),
    fields(
        welcome_name = ?payload.name,
        welcome_email = ?payload.email
    )
)]
pub async fn dispatch_welcome(
    email_client: &EmailClient,
    template: &EmailTemplate,
    payload: WelcomePayload,
) -> Result<WelcomeSent, WelcomeError> {
    let new_welcome: NewWelcome = payload.try_into()?;

    let message = template.render(new_welcome.name.as_ref());

    let email_id = email_client
        .send_email(&new_welcome.email, &message)
        .await?;

    Ok(WelcomeSent {
        name: new_welcome.name,
        email_id,
    })
}

pub async fn send_welcome(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<WelcomePayload>, JsonRejection>,
) -> Result<Json<ApiResponse>, WelcomeError> {
    let Json(payload) = payload?;

    let sent = dispatch_welcome(&app_state.email_client, &app_state.template, payload).await?;

    Ok(Json(ApiResponse::success(
        format!("Email de boas-vindas enviado para {}!", sent.name),
        sent.email_id,
    )))
}
