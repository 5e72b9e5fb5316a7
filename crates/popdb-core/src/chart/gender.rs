// crates/popdb-core/src/chart/gender.rs
use super::{font, line::checked_year_range, render_err, LINE_SIZE};
use crate::error::{PopError, Result};
use crate::model::GenderSeries;
use plotters::prelude::*;
use std::path::Path;

const FEMALE: RGBColor = RGBColor(214, 39, 40);

/// Male and female share of the population by year, one line each.
pub fn render_gender_chart(series: &GenderSeries, path: &Path) -> Result<()> {
    let (first, last) = series.year_bounds().ok_or_else(|| {
        PopError::chart(format!(
            "no gender data for `{}`; cannot draw gender chart",
            series.country
        ))
    })?;
    let years = checked_year_range(first, last, &series.country)?;
    font::ensure_registered()?;

    let male: Vec<(i32, f64)> = series
        .points
        .iter()
        .map(|p| (p.year, p.male_percentage))
        .collect();
    let female: Vec<(i32, f64)> = series
        .points
        .iter()
        .map(|p| (p.year, p.female_percentage))
        .collect();

    let root = BitMapBackend::new(path, LINE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let title = format!("Gender Distribution in {}", series.country);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, (font::FAMILY, 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(years, 0f64..100f64)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Share of population (%)")
        .x_label_formatter(&|year| year.to_string())
        .y_label_formatter(&|v| format!("{v:.0}%"))
        .label_style((font::FAMILY, 14))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(male, &BLUE))
        .map_err(render_err)?
        .label("Male")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(LineSeries::new(female, &FEMALE))
        .map_err(render_err)?
        .label("Female")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], FEMALE));

    chart
        .configure_series_labels()
        .label_font((font::FAMILY, 14))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    tracing::debug!(path = %path.display(), points = series.len(), "rendered gender chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GenderPoint;

    #[test]
    fn empty_series_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            render_gender_chart(&GenderSeries::default(), &dir.path().join("g.png")).unwrap_err();
        assert!(matches!(err, PopError::ChartRender(_)));
    }

    #[test]
    fn extreme_year_is_a_render_error() {
        let series = GenderSeries {
            country: "A".into(),
            points: vec![GenderPoint {
                year: i32::MIN,
                male_percentage: 50.0,
                female_percentage: 50.0,
            }],
        };
        let dir = tempfile::tempdir().unwrap();
        let err = render_gender_chart(&series, &dir.path().join("g.png")).unwrap_err();
        assert!(matches!(err, PopError::ChartRender(_)));
    }
}
