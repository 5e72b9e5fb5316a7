// crates/popdb-web/src/handlers.rs
use crate::error::WebError;
use crate::pages::{index_page, result_page};
use crate::{AppState, ChartLinks};
use axum::extract::{Form, State};
use axum::response::Html;
use axum::Json;
use popdb_core::ChartPaths;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct VisualizeForm {
    country: Option<String>,
}

/// Body of `POST /api/visualize`.
#[derive(Debug, Serialize)]
pub struct VisualizeResponse {
    pub country: String,
    pub files: ChartPaths,
    pub urls: ChartLinks,
}

/// Runs `f` against the visualizer on the blocking pool.
async fn blocking<T, F>(state: &AppState, f: F) -> Result<T, WebError>
where
    T: Send + 'static,
    F: FnOnce(&AppState) -> popdb_core::Result<T> + Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| WebError::Worker(e.to_string()))?
        .map_err(WebError::from)
}

fn required_country(form: VisualizeForm) -> Result<String, WebError> {
    match form.country {
        Some(c) if !c.trim().is_empty() => Ok(c),
        _ => Err(WebError::BadRequest("missing form field `country`".to_owned())),
    }
}

/// Resolves and renders under the render lock.
async fn render(state: &AppState, input: String) -> Result<ChartPaths, WebError> {
    let guard = Arc::clone(&state.inner.render_lock).lock_owned().await;
    blocking(state, move |s| {
        let _guard = guard;
        let viz = s.visualizer();
        let country = viz.resolve(&input)?;
        viz.visualize(&country)
    })
    .await
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let countries = blocking(&state, |s| s.visualizer().countries()).await?;
    Ok(Html(index_page(&countries)))
}

pub async fn visualize_page(
    State(state): State<AppState>,
    Form(form): Form<VisualizeForm>,
) -> Result<Html<String>, WebError> {
    let input = required_country(form)?;
    let paths = render(&state, input).await?;
    Ok(Html(result_page(&ChartLinks::for_country(paths.country))))
}

pub async fn api_countries(State(state): State<AppState>) -> Result<Json<Vec<String>>, WebError> {
    let countries = blocking(&state, |s| s.visualizer().countries()).await?;
    Ok(Json(countries))
}

pub async fn api_visualize(
    State(state): State<AppState>,
    Form(form): Form<VisualizeForm>,
) -> Result<Json<VisualizeResponse>, WebError> {
    let input = required_country(form)?;
    let files = render(&state, input).await?;
    Ok(Json(VisualizeResponse {
        country: files.country.clone(),
        urls: ChartLinks::for_country(files.country.clone()),
        files,
    }))
}
