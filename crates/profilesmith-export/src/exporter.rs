use std::fs::{OpenOptions, create_dir_all};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::canonical::CanonicalProfile;
use crate::error::ExportError;

/// Writes canonical profile documents into the results directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    /// Create an exporter, creating the results directory if absent.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, ExportError> {
        let output_dir = output_dir.into();
        if !output_dir.exists() {
            create_dir_all(&output_dir)?;
            info!(dir = %output_dir.display(), "created results directory");
        }
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write one document as `profile_<customer_id>_<timestamp>.json`,
    /// returning the path of the created file.
    pub fn export(&self, document: &CanonicalProfile) -> Result<PathBuf, ExportError> {
        let timestamp = document.create_date.format("%Y%m%d_%H%M%S");
        let filename = format!(
            "profile_{}_{}.json",
            document.identification.customer_id, timestamp
        );
        let path = self.output_dir.join(filename);

        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&path)?;
        serde_json::to_writer_pretty(file, document)?;

        info!(path = %path.display(), "profile exported");
        Ok(path)
    }
}
