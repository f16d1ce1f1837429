//! Snapshot persistence.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use megacap_market_data::Snapshot;

/// Writes the completed snapshot to its artifact path.
///
/// Invoked at most once per run, and only after the whole roster fetched
/// successfully; a failed run never reaches it, so the previous artifact
/// stays untouched.
pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    /// Create a writer targeting `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Serialize `snapshot` pretty-printed and write (or overwrite) the
    /// artifact, creating the parent directory first if it does not exist.
    pub fn write(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }

        let json =
            serde_json::to_string_pretty(snapshot).context("failed to serialize snapshot")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        Ok(())
    }

    /// The artifact path this writer targets.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use megacap_market_data::{QuoteRecord, Snapshot, TickerSpec};

    const NVDA: TickerSpec = TickerSpec {
        symbol: "NVDA",
        name_jp: "エヌビディア",
        company: "NVIDIA",
        sector: "半導体・電子テクノロジー",
    };

    fn snapshot(change_pct: Option<f64>) -> Snapshot {
        Snapshot::new(vec![QuoteRecord::new(&NVDA, change_pct, Some(3200.1))])
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("latest.json");
        let writer = SnapshotWriter::new(&path);

        writer.write(&snapshot(Some(2.5))).unwrap();

        assert!(path.is_file());
    }

    #[test]
    fn test_written_artifact_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest.json");
        let writer = SnapshotWriter::new(&path);

        let original = snapshot(None);
        writer.write(&original).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let back: Snapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(back, original);

        // null stays null on disk, pretty-printed
        assert!(text.contains("\"changePct\": null"));
    }

    #[test]
    fn test_write_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest.json");
        let writer = SnapshotWriter::new(&path);

        writer.write(&snapshot(Some(1.0))).unwrap();
        writer.write(&snapshot(Some(-2.0))).unwrap();

        let back: Snapshot =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.items[0].change_pct, Some(-2.0));
    }
}
