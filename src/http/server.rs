//! HTTP rendering harness.
//!
//! # Responsibilities
//! - Create the Axum router: introspection endpoints, static assets, and a
//!   fallback that renders every other path through the application
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve until the shutdown signal fires
//!
//! # Design Decisions
//! - Every path reaches the route table; unmatched paths still get the layout
//! - HTTP status reflects the fallback policy: 200 for an empty slot, 404 for
//!   the not-found page
//! - Only GET and HEAD render documents

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::app::{Application, Outcome, Rendered};
use crate::config::validation::INTROSPECTION_PREFIX;
use crate::config::{FallbackMode, ShellConfig};
use crate::error::ShellError;
use crate::http::request::{
    make_request_span, propagate_request_id_layer, set_request_id_layer,
};
use crate::http::response::{html, render_document};
use crate::routing::{Location, RouteSummary, TrailingSlash};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

/// HTTP server hosting the route table.
pub struct HttpServer {
    router: Router,
    config: ShellConfig,
    app: Arc<Application>,
}

impl HttpServer {
    /// Build the application from `config` and the server around it.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let app = Arc::new(Application::from_config(&config)?);
        Ok(Self::with_application(config, app))
    }

    /// Build the server around an existing application.
    pub fn with_application(config: ShellConfig, app: Arc<Application>) -> Self {
        let state = AppState { app: app.clone() };
        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            app,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ShellConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route(&format!("{}/health", INTROSPECTION_PREFIX), get(health))
            .route(&format!("{}/routes", INTROSPECTION_PREFIX), get(list_routes))
            .route(&format!("{}/tree", INTROSPECTION_PREFIX), get(render_tree));

        if config.static_files.enabled {
            tracing::info!(
                prefix = %config.static_files.url_prefix,
                dir = %config.static_files.dir,
                "Serving static files"
            );
            router = router.nest_service(
                &config.static_files.url_prefix,
                ServeDir::new(&config.static_files.dir),
            );
        }

        router
            .fallback(render_page)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(propagate_request_id_layer()),
            )
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.app.router().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The Axum router, for in-process requests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn application(&self) -> &Arc<Application> {
        &self.app
    }
}

/// Render any non-introspection path as a document.
async fn render_page(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        let mut response = StatusCode::METHOD_NOT_ALLOWED.into_response();
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("GET, HEAD"));
        return response;
    }

    let location = match Location::from_parts(uri.path(), uri.query()) {
        Ok(l) => l,
        Err(e) => {
            tracing::warn!(uri = %uri, error = %e, "Rejected location");
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    let rendered = state.app.render(&location);
    let status = match rendered.outcome {
        Outcome::NotFound => StatusCode::NOT_FOUND,
        Outcome::Matched | Outcome::Empty => StatusCode::OK,
    };

    html(status, render_document(state.app.title(), &rendered.tree))
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Route table as served by the introspection endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteTableView {
    pub routes: Vec<RouteSummary>,
    pub fallback: FallbackMode,
    pub case_sensitive: bool,
    pub trailing_slash: TrailingSlash,
}

async fn list_routes(State(state): State<AppState>) -> Json<RouteTableView> {
    let router = state.app.router();
    let options = router.options();
    Json(RouteTableView {
        routes: router.summaries(),
        fallback: state.app.fallback(),
        case_sensitive: options.case_sensitive,
        trailing_slash: options.trailing_slash,
    })
}

#[derive(Debug, Deserialize)]
struct TreeQuery {
    path: Option<String>,
}

async fn render_tree(
    State(state): State<AppState>,
    Query(query): Query<TreeQuery>,
) -> Result<Json<Rendered>, (StatusCode, Json<serde_json::Value>)> {
    let target = query.path.unwrap_or_else(|| "/".to_string());
    let location = Location::parse(&target).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
    })?;
    Ok(Json(state.app.render(&location)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn send(server: &HttpServer, method: Method, uri: &str) -> Response {
        server
            .router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_renders_simulation_page() {
        let server = HttpServer::new(ShellConfig::default()).unwrap();
        let response = send(&server, Method::GET, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let body = body_string(response).await;
        assert!(body.contains("data-component=\"basic-layout\""));
        assert!(body.contains("data-component=\"simulation-page\""));
    }

    #[tokio::test]
    async fn test_unknown_path_renders_empty_slot() {
        let server = HttpServer::new(ShellConfig::default()).unwrap();
        let response = send(&server, Method::GET, "/unknown").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("<main data-slot=\"content\"></main>"));
        assert!(!body.contains("simulation-page"));
    }

    #[tokio::test]
    async fn test_not_found_mode_returns_404() {
        let mut config = ShellConfig::default();
        config.routing.fallback = FallbackMode::NotFound;
        let server = HttpServer::new(config).unwrap();
        let response = send(&server, Method::GET, "/unknown").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("not-found-page"));
    }

    #[tokio::test]
    async fn test_post_not_allowed() {
        let server = HttpServer::new(ShellConfig::default()).unwrap();
        let response = send(&server, Method::POST, "/simulation").await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET, HEAD");
    }

    #[tokio::test]
    async fn test_tree_endpoint() {
        let server = HttpServer::new(ShellConfig::default()).unwrap();
        let response = send(&server, Method::GET, "/__shell/tree?path=/simulation").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["outcome"], "matched");
        assert_eq!(json["route"], "/simulation");
        assert_eq!(json["page"], "simulation");
    }

    #[tokio::test]
    async fn test_head_renders_document_headers() {
        let server = HttpServer::new(ShellConfig::default()).unwrap();
        let response = send(&server, Method::HEAD, "/simulation").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_double_slash_targets_are_paths() {
        let server = HttpServer::new(ShellConfig::default()).unwrap();

        for target in ["//simulation", "//", "//evil.example/simulation"] {
            let response = send(&server, Method::GET, target).await;
            assert_eq!(response.status(), StatusCode::OK, "target {}", target);
            let body = body_string(response).await;
            assert!(
                body.contains("<main data-slot=\"content\"></main>"),
                "target {}",
                target
            );
            assert!(!body.contains("simulation-page"), "target {}", target);
        }
    }

    #[tokio::test]
    async fn test_tree_endpoint_double_slash_unmatched() {
        let server = HttpServer::new(ShellConfig::default()).unwrap();
        let response = send(&server, Method::GET, "/__shell/tree?path=%2F%2Fsimulation").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["outcome"], "empty");
        assert_eq!(json["location"]["path"], "//simulation");
        assert!(json["route"].is_null());
    }

    #[tokio::test]
    async fn test_tree_endpoint_rejects_unparseable_location() {
        let server = HttpServer::new(ShellConfig::default()).unwrap();
        let response = send(&server, Method::GET, "/__shell/tree?path=http%3A%2F%2F").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid location `http://`"));
    }

    #[tokio::test]
    async fn test_request_id_preserved() {
        let server = HttpServer::new(ShellConfig::default()).unwrap();
        let response = server
            .router()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-request-id", "client-supplied")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "client-supplied");
    }
}
