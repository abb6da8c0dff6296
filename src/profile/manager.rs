//! Profile persistence: one JSON file per player under `~/.atlas`.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::constants::{PROFILE_FILE_VERSION, PROFILE_NAME_MAX_LENGTH};
use crate::profile::limits::PlayGate;
use crate::profile::stats::ProfileStats;

/// In-memory profile state for the active player.
#[derive(Debug, Clone)]
pub struct Profile {
    pub profile_id: String,
    pub name: String,
    pub premium: bool,
    pub created_at: i64,
    pub last_save_time: i64,
    pub gate: PlayGate,
    pub stats: ProfileStats,
}

impl Profile {
    pub fn new(name: String, current_time: i64) -> Self {
        use uuid::Uuid;

        Self {
            profile_id: Uuid::new_v4().to_string(),
            name,
            premium: false,
            created_at: current_time,
            last_save_time: current_time,
            gate: PlayGate::default(),
            stats: ProfileStats::default(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct ProfileSaveData {
    version: u32,
    profile_id: String,
    name: String,
    premium: bool,
    created_at: i64,
    last_save_time: i64,
    #[serde(default)]
    gate: PlayGate,
    #[serde(default)]
    stats: ProfileStats,
}

/// Listing entry for the select screen.
#[derive(Debug, Clone)]
pub struct ProfileInfo {
    pub name: String,
    pub filename: String,
    pub premium: bool,
    pub games_played: u32,
    pub last_save_time: i64,
    pub is_corrupted: bool,
}

pub struct ProfileManager {
    atlas_dir: PathBuf,
}

impl ProfileManager {
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Self::with_root(home_dir.join(".atlas"))
    }

    /// Use an explicit root directory (tests point this at a temp dir).
    pub fn with_root(atlas_dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&atlas_dir)?;
        Ok(Self { atlas_dir })
    }

    pub fn save_profile(&self, profile: &Profile) -> io::Result<()> {
        let save_data = ProfileSaveData {
            version: PROFILE_FILE_VERSION,
            profile_id: profile.profile_id.clone(),
            name: profile.name.clone(),
            premium: profile.premium,
            created_at: profile.created_at,
            last_save_time: profile.last_save_time,
            gate: profile.gate.clone(),
            stats: profile.stats.clone(),
        };

        let json = serde_json::to_string_pretty(&save_data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let filename = format!("{}.json", sanitize_name(&profile.name));
        fs::write(self.atlas_dir.join(filename), json)?;
        Ok(())
    }

    pub fn load_profile(&self, filename: &str) -> io::Result<Profile> {
        let json = fs::read_to_string(self.atlas_dir.join(filename))?;
        let save_data: ProfileSaveData = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(Profile {
            profile_id: save_data.profile_id,
            name: save_data.name,
            premium: save_data.premium,
            created_at: save_data.created_at,
            last_save_time: save_data.last_save_time,
            gate: save_data.gate,
            stats: save_data.stats,
        })
    }

    pub fn list_profiles(&self) -> io::Result<Vec<ProfileInfo>> {
        let mut profiles = Vec::new();

        for entry in fs::read_dir(&self.atlas_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let filename = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };

            match self.load_profile(&filename) {
                Ok(profile) => profiles.push(ProfileInfo {
                    name: profile.name,
                    filename,
                    premium: profile.premium,
                    games_played: profile.stats.games_played,
                    last_save_time: profile.last_save_time,
                    is_corrupted: false,
                }),
                Err(_) => profiles.push(ProfileInfo {
                    name: filename.trim_end_matches(".json").to_string(),
                    filename,
                    premium: false,
                    games_played: 0,
                    last_save_time: 0,
                    is_corrupted: true,
                }),
            }
        }

        profiles.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(profiles)
    }

    pub fn delete_profile(&self, filename: &str) -> io::Result<()> {
        fs::remove_file(self.atlas_dir.join(filename))
    }

    pub fn rename_profile(&self, filename: &str, new_name: String) -> io::Result<()> {
        validate_name(&new_name).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let mut profile = self.load_profile(filename)?;
        profile.name = new_name;
        self.save_profile(&profile)?;

        let new_filename = format!("{}.json", sanitize_name(&profile.name));
        if new_filename != filename {
            self.delete_profile(filename)?;
        }
        Ok(())
    }
}

/// Check a display name: 1..=16 chars, alphanumeric plus space/hyphen/underscore.
pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if trimmed.len() > PROFILE_NAME_MAX_LENGTH {
        return Err(format!(
            "Name must be at most {} characters",
            PROFILE_NAME_MAX_LENGTH
        ));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_')
    {
        return Err("Name may only contain letters, numbers, spaces, - and _".to_string());
    }
    Ok(())
}

/// Lowercase, underscore-joined filename stem for a display name.
pub fn sanitize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-' || *c == '_')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_manager(tag: &str) -> ProfileManager {
        let dir = std::env::temp_dir().join(format!("atlas-profile-test-{}", tag));
        let _ = fs::remove_dir_all(&dir);
        ProfileManager::with_root(dir).expect("temp profile dir")
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Marco").is_ok());
        assert!(validate_name("Player 1").is_ok());
        assert!(validate_name("geo-fan_2").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("12345678901234567").is_err());
        assert!(validate_name("bad!name").is_err());
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Marco"), "marco");
        assert_eq!(sanitize_name("Player One"), "player_one");
        assert_eq!(sanitize_name("geo-fan"), "geo-fan");
        assert_eq!(sanitize_name("  Spaces  "), "spaces");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let manager = temp_manager("roundtrip");
        let mut profile = Profile::new("Tester".to_string(), 1_700_000_000);
        profile.premium = true;
        profile.gate.record_play("2026-08-04");
        profile.stats.games_played = 3;

        manager.save_profile(&profile).unwrap();
        let loaded = manager.load_profile("tester.json").unwrap();

        assert_eq!(loaded.profile_id, profile.profile_id);
        assert_eq!(loaded.name, "Tester");
        assert!(loaded.premium);
        assert_eq!(loaded.gate.plays, 1);
        assert_eq!(loaded.gate.day, "2026-08-04");
        assert_eq!(loaded.stats.games_played, 3);
    }

    #[test]
    fn test_list_flags_corrupted_files() {
        let manager = temp_manager("corrupted");
        let profile = Profile::new("Good".to_string(), 0);
        manager.save_profile(&profile).unwrap();
        fs::write(manager.atlas_dir.join("broken.json"), "{ not json").unwrap();

        let list = manager.list_profiles().unwrap();
        assert_eq!(list.len(), 2);
        let broken = list.iter().find(|p| p.name == "broken").unwrap();
        assert!(broken.is_corrupted);
        let good = list.iter().find(|p| p.name == "Good").unwrap();
        assert!(!good.is_corrupted);
    }

    #[test]
    fn test_delete_profile() {
        let manager = temp_manager("delete");
        let profile = Profile::new("Gone".to_string(), 0);
        manager.save_profile(&profile).unwrap();
        assert_eq!(manager.list_profiles().unwrap().len(), 1);

        manager.delete_profile("gone.json").unwrap();
        assert!(manager.list_profiles().unwrap().is_empty());
    }

    #[test]
    fn test_rename_profile_moves_file() {
        let manager = temp_manager("rename");
        let profile = Profile::new("Before".to_string(), 0);
        manager.save_profile(&profile).unwrap();

        manager
            .rename_profile("before.json", "After".to_string())
            .unwrap();

        let list = manager.list_profiles().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "After");
        assert_eq!(list[0].filename, "after.json");
    }

    #[test]
    fn test_rename_rejects_invalid_name() {
        let manager = temp_manager("rename-invalid");
        let profile = Profile::new("Keep".to_string(), 0);
        manager.save_profile(&profile).unwrap();

        let result = manager.rename_profile("keep.json", "bad!".to_string());
        assert!(result.is_err());
        assert_eq!(manager.list_profiles().unwrap()[0].name, "Keep");
    }
}
