use std::{any::Any, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    Router,
    extract::Request,
    handler::HandlerWithoutStateExt,
    http::{Method, header},
    response::Response,
    routing::{get, post},
    serve::Serve,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{Span, info, info_span};
use uuid::Uuid;

use crate::{
    configuration::Settings,
    email_client::EmailClient,
    email_template::EmailTemplate,
    routes::{api_status, health_check, internal_error, not_found, send_welcome},
};

/// Read-only state shared by every request.
pub struct AppState {
    pub email_client: EmailClient,
    pub template: EmailTemplate,
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    template: EmailTemplate,
    static_dir: &str,
) -> Serve<TcpListener, Router, Router> {
    let app_state = Arc::new(AppState {
        email_client,
        template,
    });

    // `/` and the form assets come from disk. Unknown paths, and known paths
    // hit with the wrong method, get the JSON 404.
    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    let app = Router::new()
        .route("/send-welcome", post(send_welcome))
        .route("/api/status", get(api_status))
        .route("/health_check", get(health_check))
        .method_not_allowed_fallback(not_found)
        .fallback_service(static_files)
        .with_state(app_state);

    axum::serve(listener, with_service_layers(app))
}

/// Panic catching, CORS and request tracing shared by every route.
fn with_service_layers(app: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    app.layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let request_id = Uuid::new_v4();
                    info_span!(
                        "http_request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        request_id = ?request_id,
                        status = tracing::field::Empty,
                    )
                })
                .on_response(|response: &Response, latency: Duration, span: &Span| {
                    let status = response.status();
                    let headers = response.headers();
                    span.record("status", status.as_u16());
                    info!(parent: span, ?status, ?headers, ?latency, "Response sent");
                }),
        )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic.message = %details, "Request handler panicked");

    internal_error()
}

pub struct Application {
    port: u16,
    server: Serve<TcpListener, Router, Router>,
}

impl Application {
    pub async fn build(configuration: Settings) -> anyhow::Result<Self> {
        let sender_email = configuration
            .email_client
            .sender()
            .context("Invalid sender email address.")?;
        let timeout = configuration.email_client.timeout();
        let email_client = EmailClient::new(
            sender_email,
            configuration.email_client.base_url,
            configuration.email_client.api_key,
            timeout,
        )
        .context("Failed to build the email HTTP client.")?;

        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        ))
        .await?;
        let port = listener.local_addr()?.port();
        info!(port, "Listening for welcome submissions");

        let server = run(
            listener,
            email_client,
            EmailTemplate::welcome(),
            &configuration.application.static_dir,
        );

        Ok(Self { server, port })
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        Ok(self.server.await?)
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}
