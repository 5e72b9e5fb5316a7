// crates/popdb-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One population observation for a country in a given year.
///
/// Records are created only by the loader and never updated or deleted.
/// Nothing enforces uniqueness of `(country, year)`: ingesting the same
/// source twice stores every row twice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopulationRecord {
    pub country: String,
    pub year: i32,
    pub population: u64,
    pub male_percentage: f64,
    pub female_percentage: f64,
}

impl PopulationRecord {
    pub fn new(
        country: impl Into<String>,
        year: i32,
        population: u64,
        male_percentage: f64,
        female_percentage: f64,
    ) -> Self {
        Self {
            country: country.into(),
            year,
            population,
            male_percentage,
            female_percentage,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

/// A single `(year, population)` point of a growth series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: i32,
    pub population: u64,
}

/// Population over time for one country, ascending by year.
///
/// Duplicate years are kept as separate points.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthSeries {
    pub country: String,
    pub points: Vec<GrowthPoint>,
}

impl GrowthSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.points.iter().map(|p| p.year)
    }

    pub fn populations(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.iter().map(|p| p.population)
    }

    /// `(min, max)` population, `None` for an empty series.
    pub fn population_bounds(&self) -> Option<(u64, u64)> {
        let min = self.populations().min()?;
        let max = self.populations().max()?;
        Some((min, max))
    }

    /// `(first, last)` year, `None` for an empty series.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        Some((self.points.first()?.year, self.points.last()?.year))
    }
}

/// Male/female split for one year.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenderPoint {
    pub year: i32,
    pub male_percentage: f64,
    pub female_percentage: f64,
}

/// Gender split over time for one country, ascending by year.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenderSeries {
    pub country: String,
    pub points: Vec<GenderPoint>,
}

impl GenderSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        Some((self.points.first()?.year, self.points.last()?.year))
    }
}

/// Population summed over all years for one country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTotal {
    pub country: String,
    pub total: u64,
}

impl CountryTotal {
    pub fn new(country: impl Into<String>, total: u64) -> Self {
        Self {
            country: country.into(),
            total,
        }
    }
}

/// Artifacts written by one visualization request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPaths {
    pub country: String,
    pub population_growth: PathBuf,
    pub country_pie: PathBuf,
    pub gender_distribution: PathBuf,
}

impl ChartPaths {
    pub const POPULATION_GROWTH: &'static str = "population_growth.png";
    pub const COUNTRY_PIE: &'static str = "country_pie.png";
    pub const GENDER_DISTRIBUTION: &'static str = "gender_distribution.png";

    /// The fixed artifact names inside `dir`.
    pub fn in_dir(dir: &std::path::Path, country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            population_growth: dir.join(Self::POPULATION_GROWTH),
            country_pie: dir.join(Self::COUNTRY_PIE),
            gender_distribution: dir.join(Self::GENDER_DISTRIBUTION),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        [
            &self.population_growth,
            &self.country_pie,
            &self.gender_distribution,
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_series_bounds() {
        let series = GrowthSeries {
            country: "A".into(),
            points: vec![
                GrowthPoint { year: 2000, population: 300 },
                GrowthPoint { year: 2001, population: 100 },
                GrowthPoint { year: 2003, population: 200 },
            ],
        };
        assert_eq!(series.population_bounds(), Some((100, 300)));
        assert_eq!(series.year_bounds(), Some((2000, 2003)));
        assert_eq!(GrowthSeries::default().population_bounds(), None);
    }

    #[test]
    fn chart_paths_use_fixed_names() {
        let paths = ChartPaths::in_dir(std::path::Path::new("static"), "A");
        assert!(paths.country_pie.ends_with("country_pie.png"));
        assert_eq!(paths.iter().count(), 3);
    }
}
