use popdb_core::prelude::*;
use popdb_core::report::clear_old_charts;
use std::fs;

fn store() -> MemoryStore {
    MemoryStore::with_records(vec![
        PopulationRecord::new("A", 2000, 100_000_000, 50.0, 50.0),
        PopulationRecord::new("A", 2001, 150_000_000, 50.2, 49.8),
        PopulationRecord::new("B", 2000, 500_000_000, 48.9, 51.1),
        PopulationRecord::new("C", 2000, 20_000_000, 49.5, 50.5),
    ])
}

#[test]
fn writes_all_three_charts() {
    let dir = tempfile::tempdir().unwrap();
    let viz = Visualizer::new(store(), dir.path().join("static"));

    let paths = viz.visualize("A").unwrap();
    for path in paths.iter() {
        let bytes = fs::read(path).unwrap();
        // PNG signature
        assert_eq!(&bytes[..4], b"\x89PNG", "{}", path.display());
    }
}

#[test]
fn same_request_gives_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let viz = Visualizer::new(store(), dir.path());

    let first = viz.visualize("B").unwrap();
    let before: Vec<Vec<u8>> = first.iter().map(|p| fs::read(p).unwrap()).collect();
    let second = viz.visualize("B").unwrap();
    let after: Vec<Vec<u8>> = second.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(before, after);
}

#[test]
fn stale_charts_are_removed_before_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let stale = dir.path().join("from_last_request.png");
    fs::write(&stale, b"old").unwrap();

    Visualizer::new(store(), dir.path()).visualize("C").unwrap();
    assert!(!stale.exists());
}

#[test]
fn unknown_country_fails_with_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let viz = Visualizer::new(store(), dir.path());

    let err = viz.visualize("Z").unwrap_err();
    assert!(matches!(err, PopError::ChartRender(_)), "{err}");
    assert_eq!(clear_old_charts(dir.path()), 0, "no partial artifacts");
}

#[test]
fn resolve_maps_case_insensitive_input() {
    let viz = Visualizer::new(store(), "unused");
    assert_eq!(viz.resolve("a").unwrap(), "A");
    assert_eq!(viz.resolve("Atlantis").unwrap(), "Atlantis");
}

#[test]
fn year_at_the_integer_edge_fails_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::with_records(vec![PopulationRecord::new(
        "A",
        i32::MAX,
        1_000,
        50.0,
        50.0,
    )]);
    let err = Visualizer::new(store, dir.path()).visualize("A").unwrap_err();
    assert!(matches!(err, PopError::ChartRender(_)), "{err}");
}
