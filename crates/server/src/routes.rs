use std::sync::Arc;

use axum::{routing::get, Json, Router};
use common::{audit::AuditLog, types::Health};
use sea_orm::DatabaseConnection;
use service::{audit::Auditor, AuthorService, BookService};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;

pub mod authors;
pub mod books;

/// Shared by every handler.
#[derive(Clone)]
pub struct ServerState {
    pub db: Arc<DatabaseConnection>,
    pub authors: AuthorService,
    pub books: BookService,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, audit: Arc<dyn AuditLog>) -> Self {
        let auditor = Auditor::new(audit);
        Self {
            db: Arc::new(db),
            authors: AuthorService::new(auditor.clone()),
            books: BookService::new(auditor),
        }
    }
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service alive", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the application router: health, author and book APIs, swagger docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let authors = Router::new()
        .route("/api/authors", get(authors::list).post(authors::create).put(authors::edit))
        .route("/api/authors/:id", get(authors::get).delete(authors::delete))
        .route("/api/authors/by-book/:book_id", get(authors::by_book));

    let books = Router::new()
        .route("/api/books", get(books::list).post(books::create).put(books::edit))
        .route("/api/books/:id", get(books::get).delete(books::delete))
        .route("/api/books/by-author/:author_id", get(books::by_author));

    Router::new()
        .route("/health", get(health))
        .merge(authors)
        .merge(books)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
