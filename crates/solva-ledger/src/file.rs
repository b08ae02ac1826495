// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-file JSON-array persistence shared by both ledgers.
//!
//! Each log file holds a single JSON array. Appending reads the full array,
//! pushes one entry, and rewrites the file. Concurrent requests racing on
//! the same file may lose updates (last writer wins on the whole array);
//! this is an accepted limitation of the format, not a consistent log.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use solva_core::SolvaError;
use tracing::warn;

fn io_err(e: std::io::Error) -> SolvaError {
    SolvaError::Ledger {
        source: Box::new(e),
    }
}

/// Append one entry to the JSON array stored at `path`.
///
/// Creates parent directories on first write. A missing file starts a new
/// array; an unreadable or non-array file is reinitialized with a warning
/// rather than failing the request.
pub(crate) async fn append_entry(path: &Path, entry: Value) -> Result<(), SolvaError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    let mut entries = match tokio::fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Vec<Value>>(&bytes) {
            Ok(existing) => existing,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "log file is not a JSON array, reinitializing");
                Vec::new()
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(io_err(e)),
    };

    entries.push(entry);

    let body = serde_json::to_vec_pretty(&entries).map_err(|e| SolvaError::Ledger {
        source: Box::new(e),
    })?;
    tokio::fs::write(path, body).await.map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn appends_grow_the_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");

        append_entry(&path, json!({"n": 1})).await.unwrap();
        append_entry(&path, json!({"n": 2})).await.unwrap();

        let content = tokio::fs::read(&path).await.unwrap();
        let entries: Vec<Value> = serde_json::from_slice(&content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["n"], 1);
        assert_eq!(entries[1]["n"], 2);
    }

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/log.json");

        append_entry(&path, json!({"ok": true})).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_reinitialized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        tokio::fs::write(&path, b"this is not json").await.unwrap();

        append_entry(&path, json!({"n": 1})).await.unwrap();

        let content = tokio::fs::read(&path).await.unwrap();
        let entries: Vec<Value> = serde_json::from_slice(&content).unwrap();
        assert_eq!(entries.len(), 1);
    }
}
