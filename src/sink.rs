// src/sink.rs

//! Persistence sinks that receive the exported grid on `S NAME`.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Destination for saved grids.
///
/// The router hands over the file name exactly as the user typed it together
/// with the exported bytes. Path resolution and encoding belong to the sink.
pub trait PersistenceSink {
    fn save(&mut self, filename: &str, contents: &[u8]) -> Result<()>;
}

/// Writes saves to the file system, relative to the working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSink;

impl PersistenceSink for FileSink {
    fn save(&mut self, filename: &str, contents: &[u8]) -> Result<()> {
        let path = Path::new(filename);
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write grid to {}", path.display()))?;
        info!("Saved {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

/// Keeps every save in memory, in order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    saves: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All saves so far as `(filename, contents)` pairs.
    pub fn saves(&self) -> &[(String, Vec<u8>)] {
        &self.saves
    }

    /// Contents of the most recent save under `filename`.
    pub fn contents(&self, filename: &str) -> Option<&[u8]> {
        self.saves
            .iter()
            .rev()
            .find(|(name, _)| name == filename)
            .map(|(_, contents)| contents.as_slice())
    }
}

impl PersistenceSink for MemorySink {
    fn save(&mut self, filename: &str, contents: &[u8]) -> Result<()> {
        self.saves.push((filename.to_string(), contents.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_returns_latest_save() {
        let mut sink = MemorySink::new();
        sink.save("a.txt", b"OO").unwrap();
        sink.save("a.txt", b"XX").unwrap();
        assert_eq!(sink.saves().len(), 2);
        assert_eq!(sink.contents("a.txt"), Some(&b"XX"[..]));
        assert_eq!(sink.contents("b.txt"), None);
    }

    #[test]
    fn test_file_sink_writes_file() {
        let path = std::env::temp_dir().join(format!("pixel-matrix-sink-{}.txt", std::process::id()));
        let name = path.to_str().unwrap().to_string();
        FileSink.save(&name, b"OAO\nOOO").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"OAO\nOOO");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_sink_reports_missing_directory() {
        let path = std::env::temp_dir()
            .join("pixel-matrix-no-such-dir")
            .join("out.txt");
        let err = FileSink.save(path.to_str().unwrap(), b"O").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to write grid"));
    }
}
