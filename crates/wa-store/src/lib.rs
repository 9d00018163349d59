//! Storage layer for the household waste audit.
//!
//! Persists a [`WasteLedger`] as a CSV file using the `csv` crate.
//!
//! # File Format
//!
//! A header row `date,category,item,weight_grams,notes` followed by one row
//! per entry in ledger order. Fields containing commas, quotes or newlines are
//! quoted the standard CSV way. Saving overwrites the whole file.
//!
//! # Load Modes
//!
//! [`LoadMode::Permissive`] accepts any row that decodes: unknown category
//! labels, malformed dates and negative weights are kept as-is.
//! [`LoadMode::Strict`] rejects the whole file on the first row that fails
//! [`WasteEntry::check`]. A non-numeric weight column fails decoding in both
//! modes.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use wa_core::{InvalidInput, WasteEntry, WasteLedger};

/// Default file name used when the user does not pick one.
pub const DEFAULT_FILE_NAME: &str = "waste_data.csv";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file to load does not exist.
    #[error("file {} not found", .0.display())]
    NotFound(PathBuf),
    /// Refused to write a file for an empty ledger.
    #[error("no data to save")]
    NothingToSave,
    /// An I/O error while writing the file.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A CSV encoding or decoding error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// A row failed strict validation.
    #[error("invalid row at line {line}: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: InvalidInput,
    },
}

/// How loaded rows are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadMode {
    #[default]
    Permissive,
    Strict,
}

/// A ledger file on disk.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
    mode: LoadMode,
}

impl CsvStore {
    /// A store at `path` with permissive loading.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_mode(path, LoadMode::default())
    }

    pub fn with_mode(path: impl Into<PathBuf>, mode: LoadMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn mode(&self) -> LoadMode {
        self.mode
    }

    /// Writes every entry of `ledger`, replacing any existing file.
    ///
    /// Returns the number of rows written. An empty ledger writes nothing.
    pub fn save(&self, ledger: &WasteLedger) -> Result<usize, StoreError> {
        if ledger.is_empty() {
            return Err(StoreError::NothingToSave);
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        for entry in ledger.entries() {
            writer.serialize(entry)?;
        }
        writer.flush().map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), rows = ledger.len(), "ledger saved");
        Ok(ledger.len())
    }

    /// Reads every row of the file.
    pub fn load(&self) -> Result<Vec<WasteEntry>, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound(self.path.clone()));
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers()?.clone();

        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record?;
            let entry: WasteEntry = record.deserialize(Some(&headers))?;

            if self.mode == LoadMode::Strict {
                if let Err(source) = entry.check() {
                    let line = record.position().map_or(0, csv::Position::line);
                    tracing::debug!(line, error = %source, "rejected row");
                    return Err(StoreError::InvalidRow { line, source });
                }
            }
            entries.push(entry);
        }

        tracing::debug!(path = %self.path.display(), rows = entries.len(), "ledger loaded");
        Ok(entries)
    }

    /// Loads the file and replaces the ledger's entries with its rows.
    ///
    /// On error the ledger is left unchanged.
    pub fn load_into(&self, ledger: &mut WasteLedger) -> Result<usize, StoreError> {
        let entries = self.load()?;
        let count = entries.len();
        ledger.replace(entries);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use wa_core::NewEntry;

    const DATE: &str = "2025-03-14";

    fn entry(category: usize, item: &str, weight: &str, notes: &str) -> NewEntry {
        NewEntry {
            date: DATE.to_string(),
            category: category.to_string(),
            item: item.to_string(),
            weight: weight.to_string(),
            notes: notes.to_string(),
        }
    }

    fn sample_ledger() -> WasteLedger {
        let mut ledger = WasteLedger::new();
        ledger.add_entry(entry(3, "banana peel", "150", "")).unwrap();
        ledger.add_entry(entry(2, "bag", "50", "")).unwrap();
        ledger
            .add_entry(entry(6, "cereal box, large", "85.5", "said \"family size\""))
            .unwrap();
        ledger
    }

    #[test]
    fn save_then_load_roundtrips() {
        let temp = tempfile::tempdir().unwrap();
        let store = CsvStore::new(temp.path().join("waste.csv"));
        let ledger = sample_ledger();

        assert_eq!(store.save(&ledger).unwrap(), 3);
        let loaded = store.load().unwrap();

        assert_eq!(loaded, ledger.entries());
    }

    #[test]
    fn save_writes_header_and_quotes_fields() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("waste.csv");
        CsvStore::new(&path).save(&sample_ledger()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("date,category,item,weight_grams,notes"));
        assert_eq!(lines.next(), Some("2025-03-14,Food Scraps,banana peel,150.0,"));
        assert_eq!(lines.next(), Some("2025-03-14,Plastic Film,bag,50.0,"));
        assert_eq!(
            lines.next(),
            Some(
                "2025-03-14,Other Paper/Cardboard,\"cereal box, large\",85.5,\"said \"\"family size\"\"\""
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn save_overwrites_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        let store = CsvStore::new(temp.path().join("waste.csv"));
        store.save(&sample_ledger()).unwrap();

        let mut small = WasteLedger::new();
        small.add_entry(entry(1, "tray", "10", "")).unwrap();
        store.save(&small).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn empty_ledger_writes_no_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("waste.csv");
        let store = CsvStore::new(&path);

        let err = store.save(&WasteLedger::new()).unwrap_err();
        assert!(matches!(err, StoreError::NothingToSave));
        assert!(!path.exists());
    }

    #[test]
    fn missing_file_leaves_ledger_unchanged() {
        let temp = tempfile::tempdir().unwrap();
        let store = CsvStore::new(temp.path().join("nope.csv"));
        let mut ledger = sample_ledger();
        let before = ledger.total_weight();

        let err = store.load_into(&mut ledger).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert!((ledger.total_weight() - before).abs() < f64::EPSILON);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn load_into_replaces_instead_of_merging() {
        let temp = tempfile::tempdir().unwrap();
        let store = CsvStore::new(temp.path().join("waste.csv"));

        let mut saved = WasteLedger::new();
        saved.add_entry(entry(5, "bottle", "30", "")).unwrap();
        store.save(&saved).unwrap();

        let mut ledger = sample_ledger();
        assert_eq!(store.load_into(&mut ledger).unwrap(), 1);
        assert_eq!(ledger.entries(), saved.entries());
    }

    #[test]
    fn permissive_load_keeps_unchecked_rows() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("legacy.csv");
        std::fs::write(
            &path,
            "date,category,item,weight_grams,notes\n\
             someday,Glass,jar,-20,\n\
             2025-03-01,Food Scraps,peel,15,\n",
        )
        .unwrap();

        let entries = CsvStore::new(&path).load().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, "Glass");
        assert!((entries[0].weight_grams + 20.0).abs() < f64::EPSILON);
        assert_eq!(entries[0].notes, "");
    }

    #[test]
    fn strict_load_rejects_unchecked_rows() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("legacy.csv");
        std::fs::write(
            &path,
            "date,category,item,weight_grams,notes\n\
             2025-03-01,Food Scraps,peel,15,\n\
             2025-03-02,Glass,jar,20,\n",
        )
        .unwrap();

        let store = CsvStore::with_mode(&path, LoadMode::Strict);
        let mut ledger = sample_ledger();
        let err = store.load_into(&mut ledger).unwrap_err();

        match err {
            StoreError::InvalidRow { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, InvalidInput::UnknownCategory("Glass".to_string()));
            }
            other => panic!("expected InvalidRow, got {other:?}"),
        }
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn non_numeric_weight_fails_in_both_modes() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.csv");
        std::fs::write(
            &path,
            "date,category,item,weight_grams,notes\n2025-03-01,Food Scraps,peel,heavy,\n",
        )
        .unwrap();

        for mode in [LoadMode::Permissive, LoadMode::Strict] {
            let err = CsvStore::with_mode(&path, mode).load().unwrap_err();
            assert!(matches!(err, StoreError::Csv(_)), "mode {mode:?}: {err}");
        }
    }

    #[test]
    fn header_only_file_loads_empty() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("empty.csv");
        std::fs::write(&path, "date,category,item,weight_grams,notes\n").unwrap();

        let mut ledger = sample_ledger();
        assert_eq!(CsvStore::new(&path).load_into(&mut ledger).unwrap(), 0);
        assert!(ledger.is_empty());
    }
}
