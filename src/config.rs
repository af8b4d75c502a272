use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{Session, TeamMember};

fn default_simulated_latency_ms() -> u64 {
    800
}

fn default_auth_latency_ms() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_team_members() -> Vec<TeamMember> {
    vec![
        TeamMember::new("1", "Alice Johnson", "alice@example.com"),
        TeamMember::new("2", "Bob Smith", "bob@example.com"),
        TeamMember::new("3", "Carol Davis", "carol@example.com"),
        TeamMember::new("4", "David Wilson", "david@example.com"),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Delay before a submitted project or task form completes.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
    #[serde(default = "default_auth_latency_ms")]
    pub auth_latency_ms: u64,
    /// `tracing` filter directive, overridden by `SYNERGY_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
    #[serde(default = "default_team_members")]
    pub team_members: Vec<TeamMember>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_simulated_latency_ms(),
            auth_latency_ms: default_auth_latency_ms(),
            log_level: default_log_level(),
            seed_demo_data: default_seed_demo_data(),
            team_members: default_team_members(),
            user_name: None,
            user_email: None,
        }
    }
}

impl Config {
    pub fn load() -> io::Result<Self> {
        Self::load_from(&get_config_path())
    }

    pub fn load_from(path: &Path) -> io::Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        } else {
            Ok(Config::default())
        }
    }

    pub fn init() -> io::Result<bool> {
        Self::init_at(&get_config_path())
    }

    pub fn init_at(path: &Path) -> io::Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, "")?;
        Ok(true)
    }

    #[must_use]
    pub fn form_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    #[must_use]
    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    /// Session to start with, when both user fields are configured.
    #[must_use]
    pub fn preset_session(&self) -> Option<Session> {
        let name = self.user_name.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let email = self.user_email.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some(Session {
            id: "user-0".to_string(),
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("synergy")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

pub fn get_log_dir() -> PathBuf {
    get_config_dir().join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.form_latency(), Duration::from_millis(800));
        assert_eq!(config.team_members.len(), 4);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "simulated_latency_ms = 0\n\n[[team_members]]\nid = \"9\"\nname = \"Erin Hale\"\nemail = \"erin@example.com\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.simulated_latency_ms, 0);
        assert_eq!(config.auth_latency_ms, 1000);
        assert!(config.seed_demo_data);
        assert_eq!(
            config.team_members,
            vec![TeamMember::new("9", "Erin Hale", "erin@example.com")]
        );
    }

    #[test]
    fn bad_toml_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "simulated_latency_ms = \"soon\"").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn init_creates_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        assert!(Config::init_at(&path).unwrap());
        assert!(!Config::init_at(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn preset_session_needs_name_and_email() {
        let mut config = Config {
            user_name: Some("Dana Scully".into()),
            ..Default::default()
        };
        assert!(config.preset_session().is_none());
        config.user_email = Some("dana@example.com".into());
        assert_eq!(
            config.preset_session().map(|s| s.name),
            Some("Dana Scully".to_string())
        );
    }
}
