use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ServerStatus {
    pub status: &'static str,
    #[serde(rename = "mensagem")]
    pub message: &'static str,
    /// UTC, millisecond precision, `Z` suffix.
    pub timestamp: String,
}

pub async fn api_status() -> Json<ServerStatus> {
    Json(ServerStatus {
        status: "online",
        message: "Servidor funcionando normalmente",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
