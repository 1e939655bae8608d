// Axum server for the portfolio page
//
// Routes:
//   GET /             full page, or the nav partial for htmx requests
//   GET /api/content  portfolio content as JSON
//   GET /health       liveness probe

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use axum_htmx::HxRequest;
use moka::future::Cache;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::component::PortfolioComponent;
use crate::config::{ServerConfig, MAX_CACHE_TTL_SECS};
use crate::content::{ContentError, PortfolioContent};
use crate::sections::SectionId;
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<PortfolioContent>,
    /// Rendered full pages keyed by highlighted section
    pub page_cache: Cache<SectionId, String>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, ContentError> {
        match &config.content_path {
            Some(path) => tracing::info!("Loading portfolio content from {}", path.display()),
            None => tracing::info!("Using built-in portfolio content"),
        }
        let content = PortfolioContent::load(config.content_path.as_deref())?;
        Ok(Self::with_content(content, config.cache_ttl))
    }

    pub fn with_content(content: PortfolioContent, cache_ttl: Duration) -> Self {
        let page_cache = Cache::builder()
            .max_capacity(SectionId::ALL.len() as u64)
            .time_to_live(cache_ttl.min(Duration::from_secs(MAX_CACHE_TTL_SECS)))
            .build();

        Self {
            content: Arc::new(content),
            page_cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(portfolio_page))
        .route("/api/content", get(get_content))
        .route("/health", get(health_check))
        .fallback(not_found)
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Section to highlight; unknown values fall back to the first section
    pub section: Option<String>,
}

/// `/` answers with a full page or the nav partial depending on `HX-Request`
type PageResponse = ([(header::HeaderName, HeaderValue); 1], Html<String>);

fn vary_on_htmx(html: String) -> PageResponse {
    (
        [(header::VARY, HeaderValue::from_static("HX-Request"))],
        Html(html),
    )
}

async fn portfolio_page(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Query(query): Query<PageQuery>,
) -> Result<PageResponse, AppError> {
    let active = query
        .section
        .as_deref()
        .and_then(SectionId::parse)
        .unwrap_or_default();
    let view = PortfolioComponent::with_active(active).view();

    if is_htmx {
        tracing::debug!("Rendering nav partial for {}", active);
        let html = pages::render_nav(&state.content, view)
            .map_err(|e| AppError::Template(e.to_string()))?;
        return Ok(vary_on_htmx(html));
    }

    if let Some(cached) = state.page_cache.get(&active).await {
        tracing::debug!("Cache hit for page {}", active);
        return Ok(vary_on_htmx(cached));
    }

    let html = pages::render_page(&state.content, view)
        .map_err(|e| AppError::Template(e.to_string()))?;
    state.page_cache.insert(active, html.clone()).await;

    Ok(vary_on_htmx(html))
}

async fn get_content(State(state): State<AppState>) -> Json<PortfolioContent> {
    Json(state.content.as_ref().clone())
}

async fn not_found() -> AppError {
    AppError::NotFound("no such page".to_string())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Template(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Template(msg) => {
                tracing::error!("Template rendering failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
