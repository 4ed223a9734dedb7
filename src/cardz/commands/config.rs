use crate::commands::{CardzPaths, CmdMessage, CmdResult};
use crate::config::CardzConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &CardzPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.config_dir();
    match action {
        ConfigAction::ShowAll => {
            let config = CardzConfig::load(&dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = CardzConfig::load(&dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = CardzConfig::load(&dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(&dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::IdStrategy;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> CardzPaths {
        CardzPaths::new(dir.path().join("cards.json"))
    }

    #[test]
    fn set_then_show() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        run(&paths, ConfigAction::Set("id-strategy".into(), "counter".into())).unwrap();
        let shown = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.config.unwrap().id_strategy, IdStrategy::Counter);

        let key = run(&paths, ConfigAction::ShowKey("id-strategy".into())).unwrap();
        assert_eq!(key.messages[0].content, "counter");
    }

    #[test]
    fn bad_value_is_reported_and_not_saved() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let result = run(&paths, ConfigAction::Set("max-results".into(), "-3".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(!dir.path().join("config.json").exists());
    }
}
