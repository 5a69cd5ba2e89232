//! Items HTTP Server.
//!
//! Maps each aggregate operation to a REST endpoint. Command shape is
//! validated here before the service is called; domain failures are mapped
//! to status codes by kind:
//!
//! | failure               | status |
//! |-----------------------|--------|
//! | `NotFound`            | 404    |
//! | `DuplicateId`         | 409    |
//! | `IdsExhausted`        | 409    |
//! | everything else       | 400    |
//!
//! Bodies that fail to deserialize are answered with 400 and the same
//! `VALIDATION_ERROR` code as shape checks.

pub mod types;
pub mod validation;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::adapters::categories::SharedCategorySource;
use crate::domain::errors::TodoError;
use crate::domain::models::{ItemId, ServerConfig};
use crate::services::TodoService;

pub use types::{
    CategoriesResponse, CreateItemRequest, ErrorResponse, ItemResponse, ProgressionResponse,
    RegisterProgressionRequest, ReplaceCategoriesRequest, UpdateItemRequest,
};
pub use validation::RequestValidationError;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared state for the items HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TodoService>,
    pub categories: Arc<SharedCategorySource>,
}

impl AppState {
    /// `categories` must be the same source the service's list consults.
    pub fn new(service: Arc<TodoService>, categories: Arc<SharedCategorySource>) -> Self {
        Self {
            service,
            categories,
        }
    }
}

/// Build the API router.
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let app = Router::new()
        .route("/api/v1/items", get(list_items).post(create_item))
        .route(
            "/api/v1/items/{id}",
            get(get_item).put(update_item).delete(remove_item),
        )
        .route(
            "/api/v1/items/{id}/progressions",
            post(register_progression),
        )
        .route(
            "/api/v1/categories",
            get(list_categories).put(replace_categories),
        )
        .route("/health", get(health_check))
        .with_state(state);

    if enable_cors {
        app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
            .layer(TraceLayer::new_for_http())
    } else {
        app.layer(TraceLayer::new_for_http())
    }
}

/// Items HTTP Server.
pub struct ItemsHttpServer {
    config: ServerConfig,
    state: AppState,
}

impl ItemsHttpServer {
    /// Create a server bound to `config.host:config.port` once started.
    pub fn new(state: AppState, config: ServerConfig) -> Self {
        Self { config, state }
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let router = build_router(self.state, self.config.enable_cors);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Items HTTP server listening on {}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

fn todo_error(err: &TodoError) -> ApiError {
    let status = match err {
        TodoError::NotFound(_) => StatusCode::NOT_FOUND,
        TodoError::DuplicateId(_) | TodoError::IdsExhausted(_) => StatusCode::CONFLICT,
        TodoError::InvalidCategory(_)
        | TodoError::CannotModify { .. }
        | TodoError::InvalidProgression { .. } => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: err.error_code().to_string(),
        }),
    )
}

fn validation_error(err: &RequestValidationError) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.to_string(),
            code: err.error_code().to_string(),
        }),
    )
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: rejection.body_text(),
                code: RequestValidationError::CODE.to_string(),
            }),
        )),
    }
}

// Handler functions

async fn health_check() -> &'static str {
    "OK"
}

async fn list_items(State(state): State<AppState>) -> Json<Vec<ItemResponse>> {
    let items = state.service.list_items().await;
    Json(items.iter().map(ItemResponse::from).collect())
}

async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let new_item = json_body(payload)?.validate().map_err(|e| validation_error(&e))?;
    let item = state
        .service
        .create_item(new_item.title, new_item.description, new_item.category)
        .await
        .map_err(|e| todo_error(&e))?;
    Ok(Json(ItemResponse::from(item)))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.service.get_item(id).await.map_err(|e| todo_error(&e))?;
    Ok(Json(ItemResponse::from(item)))
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let description = json_body(payload)?.validate().map_err(|e| validation_error(&e))?;
    let item = state
        .service
        .update_item(id, description)
        .await
        .map_err(|e| todo_error(&e))?;
    Ok(Json(ItemResponse::from(item)))
}

async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.service.remove_item(id).await.map_err(|e| todo_error(&e))?;
    Ok(Json(ItemResponse::from(item)))
}

async fn register_progression(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    payload: Result<Json<RegisterProgressionRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let progression = json_body(payload)?.validate().map_err(|e| validation_error(&e))?;
    let item = state
        .service
        .register_progression(id, progression.date, progression.percent)
        .await
        .map_err(|e| todo_error(&e))?;
    Ok(Json(ItemResponse::from(item)))
}

async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.service.categories().await,
    })
}

async fn replace_categories(
    State(state): State<AppState>,
    payload: Result<Json<ReplaceCategoriesRequest>, JsonRejection>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = json_body(payload)?.validate().map_err(|e| validation_error(&e))?;
    let count = categories.len();
    state.categories.replace(categories);
    tracing::info!(count, "categories replaced");

    Ok(Json(CategoriesResponse {
        categories: state.service.categories().await,
    }))
}
