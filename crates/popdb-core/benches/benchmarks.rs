use criterion::{criterion_group, criterion_main, Criterion};
use popdb_core::{
    distribution, growth_series, CountryTotal, Distribution, MemoryStore, PopulationRecord,
    RecordStore, SqliteStore,
};
use std::hint::black_box;

fn synthetic_records(countries: usize, years: i32) -> Vec<PopulationRecord> {
    let mut out = Vec::with_capacity(countries * years as usize);
    for c in 0..countries {
        for y in 0..years {
            out.push(PopulationRecord::new(
                format!("Country {c:03}"),
                1960 + y,
                1_000_000 + (c as u64 * 7_919 + y as u64 * 104_729) % 50_000_000,
                49.5,
                50.5,
            ));
        }
    }
    out
}

fn bench_distribution(c: &mut Criterion) {
    let totals: Vec<CountryTotal> = (0..250)
        .map(|i| CountryTotal::new(format!("Country {i:03}"), 1_000_000_000 - i as u64 * 1_000))
        .collect();
    c.bench_function("labels_from_totals_250", |b| {
        b.iter(|| Distribution::from_totals(black_box(totals.clone()), "Country 200"))
    });

    let memory = MemoryStore::with_records(synthetic_records(250, 60));
    c.bench_function("memory_distribution_15k_rows", |b| {
        b.iter(|| distribution(&memory, black_box("Country 100")).unwrap())
    });

    let sqlite = SqliteStore::in_memory().unwrap();
    sqlite.insert_records(&synthetic_records(250, 60)).unwrap();
    c.bench_function("sqlite_distribution_15k_rows", |b| {
        b.iter(|| distribution(&sqlite, black_box("Country 100")).unwrap())
    });
    c.bench_function("sqlite_growth_series", |b| {
        b.iter(|| growth_series(&sqlite, black_box("Country 100")).unwrap())
    });
}

criterion_group!(benches, bench_distribution);
criterion_main!(benches);
