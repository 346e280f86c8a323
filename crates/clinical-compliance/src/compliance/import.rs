use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::domain::{ComplianceSnapshot, SessionRecord};

#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Io(err) => write!(f, "failed to read snapshot: {}", err),
            SnapshotError::Json(err) => write!(f, "invalid snapshot JSON: {}", err),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io(err) => Some(err),
            SnapshotError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Loads caller-exported records from JSON for offline evaluation.
pub struct SnapshotImporter;

impl SnapshotImporter {
    pub fn snapshot_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<ComplianceSnapshot, SnapshotError> {
        let file = std::fs::File::open(path)?;
        Self::snapshot_from_reader(file)
    }

    pub fn snapshot_from_reader<R: Read>(reader: R) -> Result<ComplianceSnapshot, SnapshotError> {
        parse(reader)
    }

    pub fn session_from_path<P: AsRef<Path>>(path: P) -> Result<SessionRecord, SnapshotError> {
        let file = std::fs::File::open(path)?;
        Self::session_from_reader(file)
    }

    pub fn session_from_reader<R: Read>(reader: R) -> Result<SessionRecord, SnapshotError> {
        parse(reader)
    }
}

fn parse<T: DeserializeOwned, R: Read>(reader: R) -> Result<T, SnapshotError> {
    let reader = std::io::BufReader::new(reader);
    Ok(serde_json::from_reader(reader)?)
}
