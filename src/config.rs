use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::types::Config;

pub fn config_path() -> PathBuf {
    if let Ok(p) = std::env::var("POWER_MODE_SWITCHER_CONFIG") {
        return PathBuf::from(p);
    }
    // Prefer APPDATA for user-mode config
    let base = std::env::var("APPDATA").unwrap_or_else(|_| r"C:\ProgramData".into());
    PathBuf::from(base)
        .join("PowerModeSwitcher")
        .join("config.json")
}

pub fn load() -> Config {
    load_from(&config_path())
}

/// Read config from `path`, falling back to defaults on any problem.
pub fn load_from(path: &Path) -> Config {
    if let Ok(mut f) = File::open(path) {
        let mut buf = String::new();
        if let Err(e) = f.read_to_string(&mut buf) {
            tracing::warn!("Failed to read config file {:?}: {}", path, e);
            return Config::default();
        }
        match serde_json::from_str::<Config>(&buf) {
            Ok(cfg) => {
                info!("Loaded config from {:?}", path);
                return cfg;
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file {:?}: {}. Using defaults.", path, e);
            }
        }
    } else {
        tracing::debug!("No config file at {:?}, using defaults", path);
    }
    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_from(&dir.path().join("nope.json"));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{{ not json").unwrap();
        assert_eq!(load_from(f.path()), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{ "powercfg": {{ "path": "C:\\Windows\\System32\\powercfg.exe", "plan_marker": "GUID du mode" }} }}"#
        )
        .unwrap();
        let cfg = load_from(f.path());
        assert_eq!(cfg.powercfg.path, r"C:\Windows\System32\powercfg.exe");
        assert_eq!(cfg.powercfg.plan_marker, "GUID du mode");
        assert_eq!(cfg.powercfg.timeout_secs, 30);
    }
}
