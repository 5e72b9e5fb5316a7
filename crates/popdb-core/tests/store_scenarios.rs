use popdb_core::prelude::*;
use popdb_core::{CountryTotal, GrowthPoint};

fn scenario_rows() -> Vec<PopulationRecord> {
    vec![
        PopulationRecord::new("A", 2000, 100, 50.0, 50.0),
        PopulationRecord::new("A", 2001, 150, 50.2, 49.8),
        PopulationRecord::new("B", 2000, 500, 48.9, 51.1),
    ]
}

fn backends() -> Vec<(&'static str, Box<dyn RecordStore>)> {
    vec![
        ("memory", Box::new(MemoryStore::new())),
        ("sqlite", Box::new(SqliteStore::in_memory().unwrap())),
    ]
}

#[test]
fn distinct_countries_and_ordered_query() {
    for (name, store) in backends() {
        store.insert_records(&scenario_rows()).unwrap();

        let mut countries = store.distinct_countries().unwrap();
        countries.sort();
        assert_eq!(countries, vec!["A", "B"], "{name}");

        let series = growth_series(&*store, "A").unwrap();
        assert_eq!(
            series.points,
            vec![
                GrowthPoint { year: 2000, population: 100 },
                GrowthPoint { year: 2001, population: 150 },
            ],
            "{name}"
        );
    }
}

#[test]
fn totals_and_labels_for_two_countries() {
    for (name, store) in backends() {
        store.insert_records(&scenario_rows()).unwrap();

        assert_eq!(
            store.totals_by_country().unwrap(),
            vec![CountryTotal::new("B", 500), CountryTotal::new("A", 250)],
            "{name}"
        );

        let dist = distribution(&*store, "A").unwrap();
        assert_eq!(dist.labels, vec!["B", "A"], "{name}");
    }
}

#[test]
fn unknown_country_gives_empty_series() {
    for (name, store) in backends() {
        store.insert_records(&scenario_rows()).unwrap();
        let series = growth_series(&*store, "Z").unwrap();
        assert!(series.is_empty(), "{name}");
    }
}

#[test]
fn every_ingested_row_is_retrievable() {
    let mut rows = Vec::new();
    for (i, country) in ["Chile", "Peru", "Chile", "Bolivia", "Peru", "Chile"]
        .iter()
        .enumerate()
    {
        rows.push(PopulationRecord::new(*country, 2000 + (i as i32 % 2), 1_000 * i as u64, 50.0, 50.0));
    }

    for (name, store) in backends() {
        store.insert_records(&rows).unwrap();
        let countries = store.distinct_countries().unwrap();
        let mut seen = 0;
        for country in &countries {
            let series = growth_series(&*store, country).unwrap();
            let years: Vec<i32> = series.years().collect();
            let mut sorted = years.clone();
            sorted.sort();
            assert_eq!(years, sorted, "{name}: {country} not sorted");
            seen += series.len();
        }
        assert_eq!(seen, rows.len(), "{name}");
    }
}

#[test]
fn labeled_set_is_top_five_plus_selection() {
    let rows: Vec<PopulationRecord> = (0..10)
        .map(|i| PopulationRecord::new(format!("Country{i:02}"), 2000, 1_000 + i as u64, 50.0, 50.0))
        .collect();

    for (name, store) in backends() {
        store.insert_records(&rows).unwrap();
        let dist = distribution(&*store, "Country01").unwrap();
        assert_eq!(dist.totals.len(), dist.labels.len(), "{name}");
        assert_eq!(
            dist.labeled_countries(),
            vec!["Country09", "Country08", "Country07", "Country06", "Country05", "Country01"],
            "{name}"
        );
    }
}

#[test]
fn backends_agree_on_ties() {
    let rows = vec![
        PopulationRecord::new("Norway", 2000, 5, 50.0, 50.0),
        PopulationRecord::new("Denmark", 2000, 5, 50.0, 50.0),
        PopulationRecord::new("Finland", 2000, 5, 50.0, 50.0),
    ];
    let memory = MemoryStore::new();
    let sqlite = SqliteStore::in_memory().unwrap();
    memory.insert_records(&rows).unwrap();
    sqlite.insert_records(&rows).unwrap();

    let expected = vec![
        CountryTotal::new("Denmark", 5),
        CountryTotal::new("Finland", 5),
        CountryTotal::new("Norway", 5),
    ];
    assert_eq!(memory.totals_by_country().unwrap(), expected);
    assert_eq!(sqlite.totals_by_country().unwrap(), expected);
}

#[test]
fn backends_agree_on_overflowing_totals() {
    let rows = vec![
        PopulationRecord::new("A", 2000, i64::MAX as u64, 50.0, 50.0),
        PopulationRecord::new("A", 2001, 10, 50.0, 50.0),
        PopulationRecord::new("B", 2000, 5, 50.0, 50.0),
    ];
    for (name, store) in backends() {
        store.insert_records(&rows).unwrap();
        assert!(store.totals_by_country().is_err(), "{name}");
        assert!(distribution(&*store, "B").is_err(), "{name}");
    }
}
