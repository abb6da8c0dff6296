//! Match history, stored in a checksummed binary file.
//!
//! File format:
//! - Version magic (8 bytes)
//! - Data length (4 bytes)
//! - Bincode-serialized record list (variable length)
//! - SHA256 checksum over the three fields above (32 bytes)

use crate::core::constants::HISTORY_VERSION_MAGIC;
use crate::core::summary::GameSummary;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// One finished session, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub game_id: String,
    pub score: u32,
    pub duration_seconds: u64,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub finished_at: i64,
}

impl MatchRecord {
    pub fn from_summary(summary: &GameSummary, finished_at: i64) -> Self {
        Self {
            game_id: summary.game_id.to_string(),
            score: summary.score,
            duration_seconds: summary.duration_seconds,
            correct_count: summary.correct.len() as u32,
            incorrect_count: summary.incorrect.len() as u32,
            finished_at,
        }
    }
}

pub struct HistoryStore {
    history_path: PathBuf,
}

impl HistoryStore {
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "atlas").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            history_path: config_dir.join("history.dat"),
        })
    }

    /// Use an explicit file path (tests point this at a temp file).
    pub fn with_path(history_path: PathBuf) -> Self {
        Self { history_path }
    }

    pub fn exists(&self) -> bool {
        self.history_path.exists()
    }

    /// Append one record, creating the file on first write.
    pub fn append(&self, record: MatchRecord) -> io::Result<()> {
        let mut records = if self.exists() {
            self.load()?
        } else {
            Vec::new()
        };
        records.push(record);
        self.save(&records)
    }

    /// The most recent `count` records, newest first.
    pub fn recent(&self, count: usize) -> io::Result<Vec<MatchRecord>> {
        let records = if self.exists() { self.load()? } else { Vec::new() };
        Ok(records.into_iter().rev().take(count).collect())
    }

    pub fn save(&self, records: &[MatchRecord]) -> io::Result<()> {
        let data = bincode::serialize(records)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(HISTORY_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.history_path)?;
        file.write_all(&HISTORY_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;
        Ok(())
    }

    pub fn load(&self) -> io::Result<Vec<MatchRecord>> {
        let mut file = fs::File::open(&self.history_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != HISTORY_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid history version: expected 0x{:016X}, got 0x{:016X}",
                    HISTORY_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> HistoryStore {
        let path = std::env::temp_dir().join(format!("atlas-history-test-{}.dat", tag));
        let _ = fs::remove_file(&path);
        HistoryStore::with_path(path)
    }

    fn record(game_id: &str, score: u32) -> MatchRecord {
        MatchRecord {
            game_id: game_id.to_string(),
            score,
            duration_seconds: 60,
            correct_count: 6,
            incorrect_count: 2,
            finished_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_append_and_recent() {
        let store = temp_store("append");
        store.append(record("flags", 40)).unwrap();
        store.append(record("capitals", 75)).unwrap();
        store.append(record("flags", 55)).unwrap();

        let recent = store.recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].score, 55);
        assert_eq!(recent[1].game_id, "capitals");

        fs::remove_file(&store.history_path).unwrap();
    }

    #[test]
    fn test_recent_on_missing_file_is_empty() {
        let store = temp_store("missing");
        assert!(store.recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_load_rejects_corrupted_payload() {
        let store = temp_store("corrupt");
        store.append(record("flags", 40)).unwrap();

        // Flip one payload byte; the checksum must catch it.
        let mut bytes = fs::read(&store.history_path).unwrap();
        bytes[14] ^= 0xFF;
        fs::write(&store.history_path, &bytes).unwrap();

        let result = store.load();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);

        fs::remove_file(&store.history_path).unwrap();
    }

    #[test]
    fn test_load_rejects_wrong_magic() {
        let store = temp_store("magic");
        store.append(record("flags", 40)).unwrap();

        let mut bytes = fs::read(&store.history_path).unwrap();
        bytes[0] ^= 0xFF;
        fs::write(&store.history_path, &bytes).unwrap();

        let result = store.load();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);

        fs::remove_file(&store.history_path).unwrap();
    }

    #[test]
    fn test_record_from_summary() {
        let summary = GameSummary {
            game_id: "territories",
            score: 90,
            duration_seconds: 58,
            correct: vec!["PR", "GL", "GI"],
            incorrect: vec!["AW"],
        };
        let record = MatchRecord::from_summary(&summary, 1_700_000_123);
        assert_eq!(record.game_id, "territories");
        assert_eq!(record.correct_count, 3);
        assert_eq!(record.incorrect_count, 1);
        assert_eq!(record.finished_at, 1_700_000_123);
    }
}
