// crates/popdb-core/src/chart/pie.rs
use super::{font, render_err, PIE_SIZE};
use crate::distribution::Distribution;
use crate::error::{PopError, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Angle (degrees, counter-clockwise from 3 o'clock) of the first slice edge.
pub const START_ANGLE: f64 = 90.0;

const LABEL_DISTANCE: f64 = 1.15;
const PERCENT_DISTANCE: f64 = 0.6;

/// `(start, end)` angle in degrees for every slice, in ranked order.
///
/// Slices run counter-clockwise from [`START_ANGLE`] and together cover
/// exactly one turn when the grand total is positive.
pub fn slice_angles(dist: &Distribution) -> Vec<(f64, f64)> {
    let mut start = START_ANGLE;
    dist.slices()
        .map(|s| {
            let end = start + s.fraction * 360.0;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}

fn polar(center: (i32, i32), radius: f64, degrees: f64) -> (i32, i32) {
    let rad = degrees.to_radians();
    (
        center.0 + (radius * rad.cos()).round() as i32,
        // screen y grows downwards
        center.1 - (radius * rad.sin()).round() as i32,
    )
}

/// Outline of one slice: the center followed by arc points at most one
/// degree apart.
pub fn slice_polygon(center: (i32, i32), radius: f64, start: f64, end: f64) -> Vec<(i32, i32)> {
    let steps = ((end - start).abs().ceil() as usize).max(1);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let angle = start + (end - start) * i as f64 / steps as f64;
        points.push(polar(center, radius, angle));
    }
    points
}

/// Pie chart of country totals.
///
/// Labels and percentage annotations are read by slice index from the
/// parallel `labels` sequence; slices with an empty label get neither.
pub fn render_distribution_chart(dist: &Distribution, path: &Path) -> Result<()> {
    if dist.is_empty() {
        return Err(PopError::chart("no countries to draw in distribution chart"));
    }
    if dist.grand_total() == 0 {
        return Err(PopError::chart(
            "total population is zero; cannot draw distribution chart",
        ));
    }
    font::ensure_registered()?;

    let root = BitMapBackend::new(path, PIE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let area = root
        .titled("Population Distribution by Country", (font::FAMILY, 24))
        .map_err(render_err)?;

    let (w, h) = area.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    // leave room for labels outside the circle
    let radius = f64::from(w.min(h)) / 2.0 * 0.68;
    let angles = slice_angles(dist);

    for (slice, &(start, end)) in dist.slices().zip(&angles) {
        if end <= start {
            continue;
        }
        let color = Palette99::pick(slice.index);
        area.draw(&Polygon::new(
            slice_polygon(center, radius, start, end),
            color.filled(),
        ))
        .map_err(render_err)?;
    }

    for (slice, &(start, end)) in dist.slices().zip(&angles) {
        let Some(percent) = slice.percent_label() else {
            continue;
        };
        let mid = (start + end) / 2.0;

        let h_pos = if mid.to_radians().cos() >= 0.0 {
            HPos::Left
        } else {
            HPos::Right
        };
        let label_style = TextStyle::from((font::FAMILY, 13).into_font())
            .color(&BLACK)
            .pos(Pos::new(h_pos, VPos::Center));
        area.draw(&Text::new(
            slice.label.to_owned(),
            polar(center, radius * LABEL_DISTANCE, mid),
            label_style,
        ))
        .map_err(render_err)?;

        let percent_style = TextStyle::from((font::FAMILY, 12).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        area.draw(&Text::new(
            percent,
            polar(center, radius * PERCENT_DISTANCE, mid),
            percent_style,
        ))
        .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    tracing::debug!(
        path = %path.display(),
        slices = dist.len(),
        labeled = dist.labeled_countries().len(),
        "rendered distribution chart"
    );
    Ok(())
}
