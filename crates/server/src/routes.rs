use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::records::RecordService;

use crate::openapi::ApiDoc;

pub mod records;

/// Shared handler state. Cloning only bumps the repository `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub records: RecordService,
}

impl ServerState {
    pub fn new(records: RecordService) -> Self { Self { records } }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: record routes, health and optional API docs
pub fn build_router(state: ServerState, cors: CorsLayer, enable_docs: bool) -> Router {
    let record_routes = Router::new()
        .route("/get-data/:data_id", get(records::get_data))
        .route("/query-data", get(records::query_data))
        .route("/add-data", post(records::add_data))
        .route("/update/:data_id", put(records::update_data))
        .route("/delete/:data_id", delete(records::delete_data))
        .with_state(state);

    let mut app = Router::new()
        .route("/health", get(health))
        .merge(record_routes);

    if enable_docs {
        app = app.merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));
    }

    app.layer(cors).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            // status code and latency
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
