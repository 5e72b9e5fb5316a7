// crates/popdb-web/src/lib.rs

//! # popdb-web
//!
//! HTTP surface over [`popdb_core`]: a country selector, chart generation
//! for the chosen country, and the generated PNGs served from the chart
//! directory.
//!
//! | Route                 | Response                                    |
//! |-----------------------|---------------------------------------------|
//! | `GET /`               | HTML `<select>` of stored countries         |
//! | `POST /visualize`     | HTML page with the three charts             |
//! | `GET /api/countries`  | JSON array of stored countries              |
//! | `POST /api/visualize` | JSON paths and URLs of the three charts     |
//! | `GET /static/{file}`  | generated chart files                       |
//!
//! The core is synchronous, so every store or render call runs on the
//! blocking pool. Chart files have fixed names; one render lock keeps two
//! requests from writing them at the same time.

mod error;
mod handlers;
mod pages;

pub use error::WebError;

use axum::routing::{get, post};
use axum::Router;
use popdb_core::{ChartPaths, RecordStore, Settings, Visualizer};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// URL prefix the chart directory is mounted under.
pub const STATIC_PREFIX: &str = "/static";

/// Shared state behind every handler.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    viz: Visualizer<Arc<dyn RecordStore>>,
    // Owned guards travel into the blocking task, so a dropped request
    // keeps the lock until its render has finished.
    render_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, chart_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            inner: Arc::new(Inner {
                viz: Visualizer::new(store, chart_dir),
                render_lock: Arc::new(Mutex::new(())),
            }),
        }
    }

    pub fn visualizer(&self) -> &Visualizer<Arc<dyn RecordStore>> {
        &self.inner.viz
    }
}

/// Browser-facing locations of the generated charts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartLinks {
    pub country: String,
    pub population_growth: String,
    pub country_pie: String,
    pub gender_distribution: String,
}

impl ChartLinks {
    pub fn for_country(country: impl Into<String>) -> Self {
        let url = |name: &str| format!("{STATIC_PREFIX}/{name}");
        Self {
            country: country.into(),
            population_growth: url(ChartPaths::POPULATION_GROWTH),
            country_pie: url(ChartPaths::COUNTRY_PIE),
            gender_distribution: url(ChartPaths::GENDER_DISTRIBUTION),
        }
    }
}

/// Builds the application router with request tracing.
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.visualizer().chart_dir());
    Router::new()
        .route("/", get(handlers::index))
        .route("/visualize", post(handlers::visualize_page))
        .route("/api/countries", get(handlers::api_countries))
        .route("/api/visualize", post(handlers::api_visualize))
        .nest_service(STATIC_PREFIX, static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `settings.bind` and serves until the process is stopped.
pub async fn serve(settings: &Settings, store: Arc<dyn RecordStore>) -> std::io::Result<()> {
    let state = AppState::new(store, settings.chart_dir.clone());
    let app = router(state);

    let listener = TcpListener::bind(&settings.bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        charts = %settings.chart_dir.display(),
        "popdb web listening"
    );
    axum::serve(listener, app).await
}
