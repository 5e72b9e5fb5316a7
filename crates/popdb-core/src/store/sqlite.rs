// crates/popdb-core/src/store/sqlite.rs
use crate::common::StoreStats;
use crate::error::{PopError, Result};
use crate::model::{CountryTotal, PopulationRecord};
use crate::traits::RecordStore;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS population_data (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    country           TEXT    NOT NULL,
    year              INTEGER NOT NULL,
    population        INTEGER NOT NULL,
    male_percentage   REAL    NOT NULL,
    female_percentage REAL    NOT NULL
);
CREATE INDEX IF NOT EXISTS population_data_country ON population_data (country);
";

/// SQLite-backed implementation of [`RecordStore`].
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
    db_path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open (or create) a store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
            db_path: Some(path.to_path_buf()),
        };
        store.initialize()?;
        tracing::debug!(path = %path.display(), "opened sqlite store");
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
            db_path: None,
        };
        store.initialize()?;
        Ok(store)
    }

    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    fn initialize(&self) -> Result<()> {
        let conn = self.conn();
        // WAL is silently ignored for in-memory databases
        let _ = conn.execute_batch("PRAGMA journal_mode = WAL;");
        conn.execute_batch("PRAGMA synchronous = NORMAL;")?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    // Statements run inside a transaction, so a poisoned guard never sees a
    // half-written batch.
    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn to_sql_population(population: u64) -> Result<i64> {
    i64::try_from(population).map_err(|_| {
        PopError::InvalidData(format!("population {population} does not fit the store"))
    })
}

fn from_sql_population(value: i64) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| PopError::InvalidData(format!("negative population {value} in store")))
}

impl RecordStore for SqliteStore {
    fn insert_records(&self, records: &[PopulationRecord]) -> Result<usize> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO population_data
                     (country, year, population, male_percentage, female_percentage)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for r in records {
                stmt.execute(params![
                    r.country,
                    r.year,
                    to_sql_population(r.population)?,
                    r.male_percentage,
                    r.female_percentage,
                ])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }

    fn distinct_countries(&self) -> Result<Vec<String>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare_cached("SELECT DISTINCT country FROM population_data ORDER BY country")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn query_by_country(&self, country: &str) -> Result<Vec<PopulationRecord>> {
        let conn = self.conn();
        let mut stmt = conn.prepare_cached(
            "SELECT country, year, population, male_percentage, female_percentage
             FROM population_data
             WHERE country = ?1
             ORDER BY year ASC, id ASC",
        )?;
        let rows = stmt.query_map(params![country], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i32>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, f64>(4)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (country, year, population, male, female) = row?;
            out.push(PopulationRecord {
                country,
                year,
                population: from_sql_population(population)?,
                male_percentage: male,
                female_percentage: female,
            });
        }
        Ok(out)
    }

    fn totals_by_country(&self) -> Result<Vec<CountryTotal>> {
        let conn = self.conn();
        // BINARY collation on `country` matches Rust's `str` ordering.
        let mut stmt = conn.prepare_cached(
            "SELECT country, SUM(population) AS total_population
             FROM population_data
             GROUP BY country
             ORDER BY total_population DESC, country ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (country, total) = row?;
            out.push(CountryTotal::new(country, from_sql_population(total)?));
        }
        Ok(out)
    }

    fn stats(&self) -> Result<StoreStats> {
        let conn = self.conn();
        let (records, countries, min_year, max_year) = conn.query_row(
            "SELECT COUNT(*), COUNT(DISTINCT country), MIN(year), MAX(year)
             FROM population_data",
            [],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, Option<i32>>(2)?,
                    row.get::<_, Option<i32>>(3)?,
                ))
            },
        )?;
        Ok(StoreStats {
            records: records as usize,
            countries: countries as usize,
            min_year,
            max_year,
        })
    }
}
