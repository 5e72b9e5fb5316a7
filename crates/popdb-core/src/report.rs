// crates/popdb-core/src/report.rs

//! # Visualizer
//!
//! One call per visualization request: drop stale artifacts, query the
//! store, render every chart to its fixed name and hand back the paths.

use crate::chart::{render_distribution_chart, render_gender_chart, render_growth_chart};
use crate::distribution::distribution;
use crate::error::Result;
use crate::model::ChartPaths;
use crate::series::{gender_series, growth_series};
use crate::text::resolve_country;
use crate::traits::RecordStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Deletes every `*.png` directly inside `dir` and returns how many went.
///
/// Removal failures are logged and skipped; a missing directory counts as
/// already clean.
pub fn clear_old_charts(dir: &Path) -> usize {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "chart dir not readable, nothing to clear");
            return 0;
        }
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png || !path.is_file() {
            continue;
        }
        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not remove old chart"),
        }
    }
    removed
}

/// Chart generation over a [`RecordStore`].
#[derive(Debug)]
pub struct Visualizer<S> {
    store: S,
    chart_dir: PathBuf,
}

impl<S: RecordStore> Visualizer<S> {
    pub fn new(store: S, chart_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            chart_dir: chart_dir.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn chart_dir(&self) -> &Path {
        &self.chart_dir
    }

    /// Distinct countries for a selector.
    pub fn countries(&self) -> Result<Vec<String>> {
        self.store.distinct_countries()
    }

    /// Canonical stored name for user input, or the input unchanged when
    /// nothing matches.
    pub fn resolve(&self, input: &str) -> Result<String> {
        let known = self.store.distinct_countries()?;
        Ok(resolve_country(&known, input)
            .unwrap_or(input)
            .to_owned())
    }

    /// Regenerates all charts for `country`.
    ///
    /// An unknown country is not rejected up front: its series is empty and
    /// the growth chart fails with a chart render error.
    pub fn visualize(&self, country: &str) -> Result<ChartPaths> {
        tracing::info!(country, dir = %self.chart_dir.display(), "generating charts");
        fs::create_dir_all(&self.chart_dir)?;
        let removed = clear_old_charts(&self.chart_dir);
        tracing::debug!(removed, "cleared stale charts");

        let paths = ChartPaths::in_dir(&self.chart_dir, country);

        let growth = growth_series(&self.store, country)?;
        render_growth_chart(&growth, &paths.population_growth)?;

        let dist = distribution(&self.store, country)?;
        render_distribution_chart(&dist, &paths.country_pie)?;

        let gender = gender_series(&self.store, country)?;
        render_gender_chart(&gender, &paths.gender_distribution)?;

        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_only_touches_png_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("old.png"), b"x").unwrap();
        fs::write(dir.path().join("OLD2.PNG"), b"x").unwrap();
        fs::write(dir.path().join("keep.css"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        assert_eq!(clear_old_charts(dir.path()), 2);
        assert!(dir.path().join("keep.css").exists());
        assert!(dir.path().join("nested.png").exists());
    }

    #[test]
    fn clearing_missing_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(clear_old_charts(&dir.path().join("absent")), 0);
    }
}
