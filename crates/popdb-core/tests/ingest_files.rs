use popdb_core::prelude::*;
use std::fs;
use std::path::Path;

const CSV: &str = "\
Country,Year,Population,Male_Percentage,Female_Percentage
Germany,2000,82200000,48.8,51.2
Germany,2001,82300000,48.8,51.2
France,2000,60900000,48.6,51.4
";

fn write_csv(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn csv_file_lands_in_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_csv(dir.path(), "world.csv", CSV);
    let store = SqliteStore::open(dir.path().join("pop.db")).unwrap();

    let report = ingest_path(&store, &src, &LoadOptions::default()).unwrap();
    assert_eq!(report.rows, 3);
    assert_eq!(report.countries, 2);
    assert_eq!(store.query_by_country("Germany").unwrap().len(), 2);
}

#[test]
fn missing_source_is_not_found() {
    let store = MemoryStore::new();
    let err = ingest_path(&store, "no/such/file.csv", &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, PopError::NotFound(_)));
    assert!(err.is_input_error());
}

#[test]
fn malformed_file_leaves_store_empty() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_csv(dir.path(), "bad.csv", &format!("{CSV}Spain,2000,,49,51\n"));
    let store = SqliteStore::in_memory().unwrap();

    let err = ingest_path(&store, &src, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, PopError::Ingestion { line: 5, .. }), "{err}");
    assert_eq!(store.stats().unwrap().records, 0);
}

#[cfg(feature = "compact")]
#[test]
fn gzip_source_matches_plain_source() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let gz_path = dir.path().join("world.csv.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&gz_path).unwrap(), Compression::default());
    encoder.write_all(CSV.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let plain = MemoryStore::new();
    let zipped = MemoryStore::new();
    ingest_path(&plain, write_csv(dir.path(), "world.csv", CSV), &LoadOptions::default()).unwrap();
    ingest_path(&zipped, &gz_path, &LoadOptions::default()).unwrap();

    assert_eq!(
        plain.totals_by_country().unwrap(),
        zipped.totals_by_country().unwrap()
    );
}
