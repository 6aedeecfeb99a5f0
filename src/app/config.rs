use lazy_static::lazy_static;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Movie list shown in the grid.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
    /// Directory for decoded poster PNGs.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    #[serde(default = "default_columns")]
    pub columns: usize,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("poster_cache")
}

fn default_columns() -> usize {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            cache_dir: default_cache_dir(),
            columns: default_columns(),
        }
    }
}

lazy_static! {
    pub static ref APP_CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

fn config_file_path() -> PathBuf {
    // Allow override for tests and portable installs
    if let Ok(p) = std::env::var("MOVIE_CARDS_CONFIG_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from("movie_cards_config.json")
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let mut cfg: AppConfig = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        cfg.columns = cfg.columns.max(1);
        Ok(cfg)
    }
}

pub fn load_config_from_disk() {
    let path = config_file_path();
    match AppConfig::load_from_file(&path) {
        Ok(cfg) => {
            if let Ok(mut slot) = APP_CONFIG.write() {
                *slot = cfg;
            }
            log::info!("Loaded config from {}", path.to_string_lossy());
        }
        Err(e) => {
            // Keep defaults if missing/unreadable
            log::info!(
                "Using default config; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

pub fn current() -> AppConfig {
    APP_CONFIG
        .read()
        .map(|cfg| cfg.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_keys_use_defaults() {
        let path = write_temp("partial_config.json", r#"{"columns": 5}"#);
        let cfg = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(cfg.columns, 5);
        assert_eq!(cfg.catalog_path, PathBuf::from("catalog.json"));
        assert_eq!(cfg.cache_dir, PathBuf::from("poster_cache"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn zero_columns_is_clamped() {
        let path = write_temp("zero_columns.json", r#"{"columns": 0}"#);
        assert_eq!(AppConfig::load_from_file(&path).unwrap().columns, 1);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn invalid_json_is_invalid_data() {
        let path = write_temp("bad_config.json", "{ not json");
        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        let _ = std::fs::remove_file(path);
    }
}
