// crates/popdb-core/src/series.rs
use crate::error::Result;
use crate::model::{GenderPoint, GenderSeries, GrowthPoint, GrowthSeries};
use crate::traits::RecordStore;

/// Builds the `(year, population)` series for `country`.
///
/// Points come back ascending by year. Repeated years are not merged; each
/// stored row becomes its own point. An unknown country gives an empty
/// series rather than an error, so callers decide whether that is fatal.
pub fn growth_series<S: RecordStore + ?Sized>(store: &S, country: &str) -> Result<GrowthSeries> {
    let points = store
        .query_by_country(country)?
        .into_iter()
        .map(|r| GrowthPoint {
            year: r.year,
            population: r.population,
        })
        .collect();

    Ok(GrowthSeries {
        country: country.to_owned(),
        points,
    })
}

/// Male/female percentage per year for `country`, same ordering rules as
/// [`growth_series`].
pub fn gender_series<S: RecordStore + ?Sized>(store: &S, country: &str) -> Result<GenderSeries> {
    let points = store
        .query_by_country(country)?
        .into_iter()
        .map(|r| GenderPoint {
            year: r.year,
            male_percentage: r.male_percentage,
            female_percentage: r.female_percentage,
        })
        .collect();

    Ok(GenderSeries {
        country: country.to_owned(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PopulationRecord;
    use crate::store::MemoryStore;

    #[test]
    fn duplicate_years_are_kept() {
        let store = MemoryStore::with_records(vec![
            PopulationRecord::new("A", 2001, 150, 50.0, 50.0),
            PopulationRecord::new("A", 2000, 100, 50.0, 50.0),
            PopulationRecord::new("A", 2001, 160, 50.0, 50.0),
        ]);
        let series = growth_series(&store, "A").unwrap();
        let years: Vec<i32> = series.years().collect();
        assert_eq!(years, vec![2000, 2001, 2001]);
        let pops: Vec<u64> = series.populations().collect();
        assert_eq!(pops, vec![100, 150, 160]);
    }

    #[test]
    fn unknown_country_is_empty() {
        let store = MemoryStore::new();
        let series = growth_series(&store, "Z").unwrap();
        assert!(series.is_empty());
        assert_eq!(series.country, "Z");
    }

    #[test]
    fn gender_points_follow_years() {
        let store = MemoryStore::with_records(vec![
            PopulationRecord::new("A", 2001, 150, 49.0, 51.0),
            PopulationRecord::new("A", 2000, 100, 50.5, 49.5),
        ]);
        let series = gender_series(&store, "A").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points[0].male_percentage, 50.5);
        assert_eq!(series.year_bounds(), Some((2000, 2001)));
    }
}
