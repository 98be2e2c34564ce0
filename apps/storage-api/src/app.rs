use axum::{http::HeaderName, http::StatusCode, routing::get, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServiceConfig;
use crate::methods::health_check::health_check;
use crate::methods::routes::{
    OPENAPI_JSON_PATH, SERVICE_DOCS_PATH, SERVICE_HEALTH_PATH, WRITE_PATH,
};
use crate::methods::write_message::write_message;
use crate::openapi::ApiDoc;
use crate::state::AppState;

const X_REQUEST_ID: &str = "x-request-id";

/// Routes with the per-route timeout; request-wide middleware lives in `build_router`.
pub fn routes(state: AppState, config: &ServiceConfig) -> Router {
    // A dropped write future can still land on disk, so /write runs to completion.
    let write_routes = Router::new().route(WRITE_PATH, get(write_message));

    // Timeout layer (returns 408 Request Timeout)
    let service_routes = Router::new()
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ));

    Router::new()
        .merge(write_routes)
        .merge(service_routes)
        .with_state(state)
}

// Order: Request → Request ID → Trace → (Timeout, except /write) → Handler
pub fn build_router(state: AppState, config: &ServiceConfig) -> Router {
    let mut app = routes(state, config);

    // 1. Trace layer (innermost - closest to handler)
    app = app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(tracing::Level::DEBUG))
            .on_response(DefaultOnResponse::new().level(tracing::Level::DEBUG)),
    );

    // 2. Request ID layers
    let x_request_id = HeaderName::from_static(X_REQUEST_ID);
    app.layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}
