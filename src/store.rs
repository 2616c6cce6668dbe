use crate::error::AppError;
use crate::playtime::{format_storage, parse_time_string, Minutes};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Character name → minutes played, ordered by name.
pub type HeroTimes = BTreeMap<String, Minutes>;

const HEADER: [&str; 2] = ["Hero", "Time"];

#[derive(Debug, Deserialize)]
struct TimeRow {
    #[serde(rename = "Hero")]
    hero: String,
    #[serde(rename = "Time", default)]
    time: String,
}

/// One `<tag>.csv` per account inside a data directory.
#[derive(Debug, Clone)]
pub struct HeroTimeStore {
    dir: PathBuf,
}

impl HeroTimeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        HeroTimeStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn table_path(&self, tag: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", tag))
    }

    /// A missing file is an empty table.
    pub fn load(&self, tag: &str) -> Result<HeroTimes, AppError> {
        let path = self.table_path(tag);

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no stored table at {}", path.display());
                return Ok(HeroTimes::new());
            }
            Err(e) => {
                return Err(AppError::StorageError(format!(
                    "Failed to open {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader.headers().map_err(|e| {
            AppError::StorageError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        if headers.is_empty() {
            return Ok(HeroTimes::new());
        }
        if !headers.iter().any(|h| h == HEADER[0]) {
            return Err(AppError::StorageError(format!(
                "{} has no {} column",
                path.display(),
                HEADER[0]
            )));
        }

        let mut table = HeroTimes::new();
        for (idx, row) in reader.deserialize::<TimeRow>().enumerate() {
            match row {
                Ok(row) => {
                    table.insert(row.hero, parse_time_string(&row.time));
                }
                Err(e) => {
                    log::warn!("skipping row {} of {}: {}", idx + 2, path.display(), e);
                }
            }
        }

        Ok(table)
    }

    /// Rewrites the whole file: header, then one row per character by name.
    pub fn save(&self, tag: &str, table: &HeroTimes) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::StorageError(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        let path = self.table_path(tag);
        let write_err =
            |e: csv::Error| AppError::StorageError(format!("Failed to write {}: {}", path.display(), e));

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_path(&path)
            .map_err(write_err)?;

        writer.write_record(HEADER).map_err(write_err)?;
        for (hero, minutes) in table {
            writer
                .write_record([hero.as_str(), format_storage(*minutes).as_str()])
                .map_err(write_err)?;
        }
        writer.flush().map_err(|e| {
            AppError::StorageError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        log::info!("saved {} heroes to {}", table.len(), path.display());
        Ok(())
    }
}
