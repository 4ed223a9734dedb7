use super::{parse_document, render_document, Loaded, TreeStore};
use crate::error::{CardzError, Result};
use crate::model::Forest;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "cards.json";

pub struct FileStore {
    path: PathBuf,
    pretty: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(CardzError::Io)?;
        }
        Ok(())
    }
}

impl TreeStore for FileStore {
    fn load(&self) -> Result<Loaded> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no card store yet");
            return Ok(Loaded::missing());
        }
        let content = fs::read_to_string(&self.path).map_err(CardzError::Io)?;
        let loaded = parse_document(&content);
        if let super::LoadOrigin::Corrupt(reason) = &loaded.origin {
            warn!(path = %self.path.display(), %reason, "card store is unreadable");
        }
        Ok(loaded)
    }

    fn save(&mut self, forest: &Forest) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        self.ensure_dir(dir)?;

        let content = render_document(forest, self.pretty)?;

        // Write next to the target, then swap it in
        let tmp_file = dir.join(format!(".cards-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(CardzError::Io)?;
        fs::rename(&tmp_file, &self.path).map_err(CardzError::Io)?;

        debug!(path = %self.path.display(), roots = forest.cards.len(), "card store saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
