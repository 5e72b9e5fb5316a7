// crates/popdb-core/src/chart/line.rs
use super::{font, render_err, LINE_SIZE};
use crate::error::{PopError, Result};
use crate::model::GrowthSeries;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Axis label in millions with one decimal, e.g. `83.2M`.
pub fn format_millions(value: f64) -> String {
    format!("{:.1}M", value * 1e-6)
}

/// Y bounds `[min * 0.95, max * 1.05]`, widened when they collapse.
pub fn growth_y_range(min: u64, max: u64) -> Range<f64> {
    let lower = min as f64 * 0.95;
    let upper = max as f64 * 1.05;
    if upper > lower {
        lower..upper
    } else {
        // all zero
        (lower - 1.0)..(upper + 1.0)
    }
}

/// X bounds spanning the observed years; a single year gets one year of
/// padding on each side.
///
/// `None` when the padded range or its width does not fit in `i32`.
pub fn year_range(first: i32, last: i32) -> Option<Range<i32>> {
    let range = if last > first {
        first..last
    } else {
        first.checked_sub(1)?..last.checked_add(1)?
    };
    // the axis measures its width in i32
    range.end.checked_sub(range.start)?;
    Some(range)
}

pub(crate) fn checked_year_range(first: i32, last: i32, country: &str) -> Result<Range<i32>> {
    year_range(first, last).ok_or_else(|| {
        PopError::chart(format!(
            "years {first}..={last} of `{country}` cannot be laid out on an axis"
        ))
    })
}

/// Line chart of population growth for `series.country`.
///
/// Fails with [`PopError::ChartRender`] on an empty series without touching
/// `path`.
pub fn render_growth_chart(series: &GrowthSeries, path: &Path) -> Result<()> {
    let (min, max) = series.population_bounds().ok_or_else(|| {
        PopError::chart(format!(
            "no population data for `{}`; cannot draw growth chart",
            series.country
        ))
    })?;
    let (first, last) = series.year_bounds().ok_or_else(|| {
        PopError::chart(format!("no years for `{}`", series.country))
    })?;
    let years = checked_year_range(first, last, &series.country)?;
    font::ensure_registered()?;

    let points: Vec<(i32, f64)> = series
        .points
        .iter()
        .map(|p| (p.year, p.population as f64))
        .collect();

    let root = BitMapBackend::new(path, LINE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let title = format!("Population Growth in {}", series.country);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, (font::FAMILY, 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d(years, growth_y_range(min, max))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Population (millions)")
        .x_label_formatter(&|year| year.to_string())
        .y_label_formatter(&|v| format_millions(*v))
        .label_style((font::FAMILY, 14))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(render_err)?;
    chart
        .draw_series(
            points
                .iter()
                .map(|&(year, population)| Circle::new((year, population), 4, BLUE.filled())),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    tracing::debug!(path = %path.display(), points = points.len(), "rendered growth chart");
    Ok(())
}
