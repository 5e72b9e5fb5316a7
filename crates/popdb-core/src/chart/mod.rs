// crates/popdb-core/src/chart/mod.rs

//! # Chart Renderer
//!
//! Stateless renderers: every function takes all of its inputs plus an
//! output path and writes exactly one PNG. There is no shared "current
//! figure"; two calls never see each other's state.

use crate::error::PopError;
use std::fmt::Display;

mod font;
mod gender;
mod line;
mod pie;

pub use gender::render_gender_chart;
pub use line::{format_millions, growth_y_range, render_growth_chart, year_range};
pub use pie::{render_distribution_chart, slice_angles, slice_polygon, START_ANGLE};

pub const LINE_SIZE: (u32, u32) = (1000, 500);
pub const PIE_SIZE: (u32, u32) = (800, 800);

/// Maps any plotters failure into [`PopError::ChartRender`].
pub(crate) fn render_err<E: Display>(e: E) -> PopError {
    PopError::ChartRender(e.to_string())
}
