use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no data found for player {0}")]
    NotFound(String),
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Deterministic file name a player's report is stored under.
pub fn report_file_name(player_id: &str) -> String {
    format!("player_{}.txt", player_id)
}

/// Key-value view of report storage: one report per player identifier,
/// each save fully replacing the previous content. Keeps rendering and
/// aggregation independent of the storage mechanism.
pub trait ReportStore {
    fn put(&self, player_id: &str, report: &str) -> Result<(), StoreError>;
    fn get(&self, player_id: &str) -> Result<String, StoreError>;
}

/// Flat-file store writing `player_<ID>.txt` under a base directory
/// (the working directory in production).
#[derive(Debug, Clone)]
pub struct FileReportStore {
    dir: PathBuf,
}

impl FileReportStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self::with_dir(".")
    }

    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        FileReportStore {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn report_path(&self, player_id: &str) -> PathBuf {
        self.dir.join(report_file_name(player_id))
    }
}

impl Default for FileReportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportStore for FileReportStore {
    fn put(&self, player_id: &str, report: &str) -> Result<(), StoreError> {
        fs::write(self.report_path(player_id), report)?;
        Ok(())
    }

    fn get(&self, player_id: &str) -> Result<String, StoreError> {
        match fs::read_to_string(self.report_path(player_id)) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(player_id.to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
