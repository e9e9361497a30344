//! Process wiring for the student records API.
//!
//! Loads [`ServerConfig`], and assembles the top-level axum [`Router`]: the
//! JSON API from [`roster_api`] under the configured prefix, a plain-text
//! greeting at `/`, request tracing, panic recovery and permissive CORS for
//! the web client.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{Router, routing::get};
use roster_core::store::DocumentStore;
use serde::Deserialize;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

/// Body of `GET /`.
pub const WELCOME: &str = "Welcome to the Personal and Social Records API!";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROSTER_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Prefix every resource group is mounted under.
  pub api_prefix: String,
}

impl ServerConfig {
  /// Layer defaults, the TOML file at `path` (optional) and the environment,
  /// in increasing order of precedence.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 5000)?
      .set_default("store_path", "roster.db")?
      .set_default("api_prefix", "/api")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("ROSTER"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application router for `store`.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: DocumentStore + 'static,
{
  let api = roster_api::api_router(store);
  let prefix = config.api_prefix.trim_matches('/');

  let router = Router::new().route("/", get(welcome));
  let router = if prefix.is_empty() {
    router.merge(api)
  } else {
    router.nest(&format!("/{prefix}"), api)
  };

  layered(router)
}

/// Middleware shared by every route. A panicking handler answers with the
/// same opaque 500 as any other unhandled failure.
fn layered(router: Router) -> Router {
  router
    .layer(CatchPanicLayer::custom(roster_api::error::panic_response))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
}

async fn welcome() -> &'static str { WELCOME }

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for Ctrl-C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut signal) => {
        signal.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }
  tracing::info!("shutdown signal received");
}

// ─── Integration tests ────────────────────────────────────────────────────────
