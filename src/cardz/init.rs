use crate::api::{CardzApi, CardzPaths};
use crate::config::CardzConfig;
use crate::error::{CardzError, Result};
use crate::store::fs::{FileStore, DEFAULT_DATA_FILE};
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Overrides the location of the card store.
pub const DATA_ENV: &str = "CARDZ_DATA";

pub struct CardzContext {
    pub api: CardzApi<FileStore>,
    pub config: CardzConfig,
}

/// Where the card store lives: an explicit path wins, then `CARDZ_DATA`, then
/// the platform data directory.
pub fn resolve_data_file(explicit: Option<PathBuf>, env: Option<OsString>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = env.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let proj_dirs = ProjectDirs::from("com", "cardz", "cardz")
        .ok_or_else(|| CardzError::Store("Could not determine data dir".into()))?;
    Ok(proj_dirs.data_dir().join(DEFAULT_DATA_FILE))
}

pub fn initialize(data_file: Option<PathBuf>) -> Result<CardzContext> {
    let data_file = resolve_data_file(data_file, std::env::var_os(DATA_ENV))?;
    let paths = CardzPaths::new(data_file.clone());

    let config = CardzConfig::load(paths.config_dir()).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        CardzConfig::default()
    });
    debug!(path = %data_file.display(), ?config, "initializing");

    let store = FileStore::new(data_file).with_pretty(config.pretty);
    let api = CardzApi::new(store, paths, config.clone());

    Ok(CardzContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILENAME;
    use crate::model::CardDraft;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_data_file(
            Some(PathBuf::from("/a/cards.json")),
            Some(OsString::from("/b/cards.json")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/a/cards.json"));
    }

    #[test]
    fn test_env_used_when_no_flag() {
        let path = resolve_data_file(None, Some(OsString::from("/b/cards.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/b/cards.json"));
    }

    #[test]
    fn test_empty_env_falls_back_to_data_dir() {
        if let Ok(path) = resolve_data_file(None, Some(OsString::new())) {
            assert!(path.ends_with(DEFAULT_DATA_FILE));
        }
    }

    #[test]
    fn test_initialize_reads_config_next_to_store() {
        let temp = TempDir::new().unwrap();
        let config = CardzConfig {
            max_results: 7,
            ..CardzConfig::default()
        };
        config.save(temp.path()).unwrap();

        let mut ctx = initialize(Some(temp.path().join("cards.json"))).unwrap();
        assert_eq!(ctx.config.max_results, 7);

        ctx.api.create_card(CardDraft::new("Agenda")).unwrap();
        assert!(temp.path().join("cards.json").exists());
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILENAME), "{ max_results: ").unwrap();

        let ctx = initialize(Some(temp.path().join("cards.json"))).unwrap();
        assert_eq!(ctx.config, CardzConfig::default());
        assert_eq!(
            std::fs::read_to_string(temp.path().join(CONFIG_FILENAME)).unwrap(),
            "{ max_results: "
        );
    }
}
