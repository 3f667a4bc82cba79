//! Preview server implementation.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use specimen_registry::{Registry, RegistryError};
use specimen_synth::{ExamplePipeline, PipelineOptions, RenderHooks};

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{reload_client_script, ReloadHub, ReloadMessage};

const RELOAD_PATH: &str = "/__reload";

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct PreviewServerConfig {
    /// Registry document to serve
    pub registry_path: PathBuf,

    /// Directory of pre-authored examples
    pub examples_dir: Option<PathBuf>,

    /// Pipeline settings
    pub options: PipelineOptions,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for PreviewServerConfig {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from("registry.yaml"),
            examples_dir: None,
            options: PipelineOptions::default(),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(String, String),

    #[error("Server error: {0}")]
    ServeError(String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Shared server state.
pub struct ServerState {
    config: PreviewServerConfig,
    hub: ReloadHub,
    pipeline: ExamplePipeline,
}

impl ServerState {
    pub fn new(config: PreviewServerConfig, pipeline: ExamplePipeline) -> Self {
        Self {
            config,
            hub: ReloadHub::new(),
            pipeline,
        }
    }

    pub fn hub(&self) -> &ReloadHub {
        &self.hub
    }

    pub fn pipeline(&self) -> &ExamplePipeline {
        &self.pipeline
    }
}

pub type SharedState = Arc<RwLock<ServerState>>;

/// Preview server.
pub struct PreviewServer {
    config: PreviewServerConfig,
}

impl PreviewServer {
    /// Create a new preview server.
    pub fn new(config: PreviewServerConfig) -> Self {
        Self { config }
    }

    /// Load the registry, start watching it, and serve until shut down.
    pub async fn start(self) -> Result<(), ServerError> {
        let registry = Registry::load(
            &self.config.registry_path,
            self.config.examples_dir.as_deref(),
        )?;
        let component_count = registry.len();
        let pipeline = ExamplePipeline::new(registry, self.config.options.clone());

        let state = Arc::new(RwLock::new(ServerState::new(self.config.clone(), pipeline)));

        let mut watch_paths = vec![self.config.registry_path.clone()];
        watch_paths.extend(self.config.examples_dir.clone());

        let (watcher, mut rx) =
            FileWatcher::new(&watch_paths).map_err(|e| ServerError::WatchError(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = router(state);

        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::BindError(addr.clone(), e.to_string()))?;

        tracing::info!(
            "Serving {} components at http://{}",
            component_count,
            addr
        );

        if self.config.open {
            let url = format!("http://{}/api/components", addr);
            let _ = open::that(&url);
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        Ok(())
    }
}

/// Build the HTTP routes over `state`.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/components", get(list_handler))
        .route("/api/components/{name}", get(component_handler))
        .route("/api/components/{name}/example", get(example_handler))
        .route("/api/components/{name}/source", get(source_handler))
        .route(RELOAD_PATH, get(ws_handler))
        .route("/__reload.js", get(reload_script_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Reload the registry and swap in a new pipeline.
///
/// On failure the previous pipeline stays in place.
async fn reload_registry(state: &SharedState) -> Result<usize, RegistryError> {
    let (path, examples_dir, options) = {
        let state = state.read().await;
        (
            state.config.registry_path.clone(),
            state.config.examples_dir.clone(),
            state.config.options.clone(),
        )
    };

    let registry = Registry::load(&path, examples_dir.as_deref())?;
    let count = registry.len();

    state.write().await.pipeline = ExamplePipeline::new(registry, options);
    Ok(count)
}

/// Handle file watch events.
async fn handle_watch_event(state: &SharedState, event: WatchEvent) {
    tracing::info!("Changed: {}", event.path().display());

    let message = match reload_registry(state).await {
        Ok(components) => {
            tracing::info!("Reloaded registry ({} components)", components);
            ReloadMessage::RegistryReloaded { components }
        }
        Err(e) => {
            tracing::warn!("Failed to reload registry, keeping previous: {}", e);
            ReloadMessage::ReloadFailed {
                message: e.to_string(),
            }
        }
    };

    state.read().await.hub.send(message);
}

/// Handler for the component list.
async fn list_handler(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(state.read().await.pipeline.list_available())
}

/// Handler for resolved metadata of one component.
async fn component_handler(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Response {
    match state.read().await.pipeline.resolve(&name) {
        Ok(meta) => Json(meta).into_response(),
        Err(e) => not_found(e.to_string()),
    }
}

/// Handler for the display-ready example. Always succeeds.
async fn example_handler(State(state): State<SharedState>, Path(name): Path<String>) -> Response {
    let rendered = state
        .read()
        .await
        .pipeline
        .render(&name, &RenderHooks::new());

    let fallback = if rendered.is_fallback() { "true" } else { "false" };
    (
        [
            (header::CONTENT_TYPE.as_str(), "text/plain; charset=utf-8"),
            ("x-specimen-fallback", fallback),
        ],
        rendered.source,
    )
        .into_response()
}

/// Handler for the raw, unnormalized example.
async fn source_handler(State(state): State<SharedState>, Path(name): Path<String>) -> Response {
    match state.read().await.pipeline.generate(&name) {
        Ok(source) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            source,
        )
            .into_response(),
        Err(e) => not_found(e.to_string()),
    }
}

fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: SharedState) {
    let mut rx = state.read().await.hub.subscribe();

    if send_message(&mut socket, &ReloadMessage::Connected).await.is_err() {
        return;
    }

    // Forward reload messages to the client
    while let Ok(msg) = rx.recv().await {
        if send_message(&mut socket, &msg).await.is_err() {
            break;
        }
    }
}

async fn send_message(socket: &mut WebSocket, msg: &ReloadMessage) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    socket.send(Message::Text(json.into())).await
}

/// Handler for the reload client script.
async fn reload_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        reload_client_script(RELOAD_PATH),
    )
}
