use crate::core::runtime::CycleReport;
use crate::error::StoreError;
use std::path::{Path, PathBuf};

pub const LATEST_RESULTS_FILE: &str = "latest_results.json";

/// Stores the most recent cycle as pretty-printed JSON, replacing the
/// previous one.
#[derive(Debug, Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn latest_path(&self) -> PathBuf {
        self.dir.join(LATEST_RESULTS_FILE)
    }

    /// Write `report`, returning the file it was written to.
    pub async fn save(&self, report: &CycleReport) -> Result<PathBuf, StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_vec_pretty(report)?;

        // Atomic replace.
        let path = self.latest_path();
        let tmp = self.dir.join(format!("{}.tmp", LATEST_RESULTS_FILE));
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(path)
    }

    /// The last saved report, or `None` if nothing has been saved yet.
    pub async fn load_latest(&self) -> Result<Option<CycleReport>, StoreError> {
        match tokio::fs::read(self.latest_path()).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
