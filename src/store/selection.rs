//! Last-used link selection persistence

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::{debug, warn};

use crate::{error::StoreError, feed::LinkId, utils::lock};

/// Key under which the selection is stored
pub const LAST_USED_KEY: &str = "lastUsedPortal";

/// Durable record of the most recently activated link
pub trait SelectionStore: Send + Sync {
    /// Last activated link id, `None` before any activation
    fn get(&self) -> Option<LinkId>;

    /// Overwrite the last activated link id
    fn set(&self, id: LinkId) -> Result<(), StoreError>;
}

fn decode(value: &str) -> Option<LinkId> {
    match value.trim().parse() {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("Ignoring unreadable {} value {:?}: {}", LAST_USED_KEY, value, e);
            None
        }
    }
}

/// In-memory store, lost on restart
#[derive(Debug, Default)]
pub struct MemorySelectionStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemorySelectionStore {
    fn get(&self) -> Option<LinkId> {
        lock(&self.entries)
            .get(LAST_USED_KEY)
            .and_then(|value| decode(value))
    }

    fn set(&self, id: LinkId) -> Result<(), StoreError> {
        lock(&self.entries).insert(LAST_USED_KEY.to_string(), id.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object of string keys and values on disk
#[derive(Debug)]
pub struct FileSelectionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, content).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

impl SelectionStore for FileSelectionStore {
    fn get(&self) -> Option<LinkId> {
        match self.read_entries() {
            Ok(entries) => entries.get(LAST_USED_KEY).and_then(|value| decode(value)),
            Err(e) => {
                warn!("Failed to read selection store: {}", e);
                None
            }
        }
    }

    fn set(&self, id: LinkId) -> Result<(), StoreError> {
        let _guard = lock(&self.write_lock);

        // Unrelated keys survive; only a corrupt file is replaced
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StoreError::Json(e)) => {
                warn!("Replacing corrupt selection store: {}", e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(LAST_USED_KEY.to_string(), id.to_string());
        self.write_entries(&entries)?;

        debug!("Stored last used link {} in {}", id, self.path.display());
        Ok(())
    }
}
