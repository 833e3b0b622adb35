//! HTTP API for content-studio
//!
//! Exposes the generation endpoint plus project/content CRUD over JSON.
//! Every error leaves as `{ "success": false, "error": "..." }`.

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, Method, StatusCode,
    },
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::content::{GenerationRequest, GenerationResponse};
use crate::error::{Error, Result};
use crate::store::{
    ContentId, ContentItem, ContentStore, ContentUpdate, MemoryContentStore, NewContent,
    NewProject, Project, ProjectId, ProjectUpdate,
};

/// Generation endpoint, mounted where hosted-function clients call it.
pub const GENERATE_PATH: &str = "/functions/v1/generate-content";

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryContentStore::new()))
    }
}

/// CORS policy: any origin, the CRUD verbs, and the headers browser clients send.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// Build the application router
pub fn create_router(state: AppState, cors_enabled: bool) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route(GENERATE_PATH, post(generate_content))
        .route("/generate-content", post(generate_content))
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/projects/{id}/content",
            get(list_project_content).post(create_project_content),
        )
        .route(
            "/content/{id}",
            get(get_content).put(update_content).delete(delete_content),
        )
        .route("/content/{id}/generate", post(generate_for_content))
        .fallback(route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        router.layer(cors_layer())
    } else {
        router
    }
}

/// HTTP server bound to the configured address
pub struct HttpServer {
    config: AppConfig,
    state: AppState,
}

impl HttpServer {
    pub fn new(config: AppConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone(), self.config.cors.enabled)
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.server.bind_addr.clone();
        let app = self.router();

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("🚀 content-studio listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated")?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Decode a JSON body, mapping failures into the error envelope.
fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::InvalidJson(e.to_string()))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn route_not_found() -> Error {
    Error::NotFound("route".to_string())
}

/// POST /functions/v1/generate-content
async fn generate_content(body: Bytes) -> Result<Json<GenerationResponse>> {
    let request: GenerationRequest = decode(&body)?;
    let validated = request.into_validated()?;

    if validated.is_fallback() {
        debug!(
            "Unknown content type '{}', using {} template",
            validated.requested_type, validated.content_type
        );
    }

    let content = validated.generate();
    info!(
        content_type = %validated.content_type,
        length = content.len(),
        "Generated content"
    );
    Ok(Json(GenerationResponse::ok(content)))
}

async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>> {
    Ok(Json(state.store.list_projects().await?))
}

async fn create_project(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let new_project: NewProject = decode(&body)?;
    let project = state.store.create_project(new_project).await?;
    info!("Created project {} ({})", project.id, project.name);
    Ok((StatusCode::CREATED, Json(project)))
}

async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>> {
    let id = ProjectId::from(id);
    state
        .store
        .get_project(&id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("project {}", id)))
}

async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Project>> {
    let update: ProjectUpdate = decode(&body)?;
    let project = state
        .store
        .update_project(&ProjectId::from(id), update)
        .await?;
    Ok(Json(project))
}

async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = ProjectId::from(id);
    if state.store.delete_project(&id).await? {
        info!("Deleted project {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound(format!("project {}", id)))
    }
}

async fn list_project_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ContentItem>>> {
    let id = ProjectId::from(id);
    if state.store.get_project(&id).await?.is_none() {
        return Err(Error::NotFound(format!("project {}", id)));
    }
    Ok(Json(state.store.list_content(&id).await?))
}

async fn create_project_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let new_content: NewContent = decode(&body)?;
    let item = state
        .store
        .create_content(&ProjectId::from(id), new_content)
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentItem>> {
    let id = ContentId::from(id);
    state
        .store
        .get_content(&id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("content {}", id)))
}

async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<ContentItem>> {
    let update: ContentUpdate = decode(&body)?;
    let item = state
        .store
        .update_content(&ContentId::from(id), update)
        .await?;
    Ok(Json(item))
}

async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = ContentId::from(id);
    if state.store.delete_content(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound(format!("content {}", id)))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateIntoContent {
    topic: Option<String>,
}

/// POST /content/{id}/generate
///
/// Fills the item's body from its title, its type and the supplied topic.
async fn generate_for_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<ContentItem>> {
    let request: GenerateIntoContent = decode(&body)?;
    let topic = request
        .topic
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::Validation("Missing required field: topic".to_string()))?;

    let id = ContentId::from(id);
    let item = state
        .store
        .get_content(&id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("content {}", id)))?;
    if item.title.is_empty() {
        return Err(Error::Validation(
            "Content item needs a title before generating".to_string(),
        ));
    }

    let generated = item.template_type().render(&item.title, &topic);
    let updated = state
        .store
        .update_content(&id, ContentUpdate::body(generated))
        .await?;
    info!("Generated body for content {}", id);
    Ok(Json(updated))
}
