use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

use crate::infra::{contracts::NameStore, error::StoreError};

pub const HEADER: &str = "Name";

#[cfg(unix)]
const STORE_FILE_MODE: u32 = 0o644;

/// CSV-backed name store. The file is opened, appended, and flushed per
/// call; whether the header row is due is re-derived from a filesystem
/// check each time, so the store survives process restarts without any
/// in-memory state.
#[derive(Debug, Clone)]
pub struct CsvNameStore {
    path: PathBuf,
}

impl CsvNameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NameStore for CsvNameStore {
    fn append(&mut self, name: &str) -> Result<(), StoreError> {
        let existed = self.path.is_file();

        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        options.mode(STORE_FILE_MODE);

        let file = options.open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if !existed {
            writer
                .write_record([HEADER])
                .map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
        }

        writer
            .write_record([name])
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;

        writer.flush().map_err(|source| StoreError::Flush {
            path: self.path.clone(),
            source,
        })
    }
}
