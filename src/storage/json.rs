//! JSON file-based layout store.
//!
//! Keeps every saved layout in one human-readable JSON file. Writes go to a
//! temporary file that is then renamed over the target, so a crash never
//! leaves a half-written file behind.

use crate::domain::error::{GridError, Result};
use crate::engine::layout::LayoutState;
use crate::storage::backend::LayoutStore;
use crate::storage::models::LayoutRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current file format version.
const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    version: u32,

    #[serde(default)]
    tables: BTreeMap<String, LayoutRecord>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            tables: BTreeMap::new(),
        }
    }
}

/// JSON file layout store.
///
/// The whole file is loaded on creation and rewritten on every change.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "tables": {
///     "orders": {
///       "layout": {
///         "widths": { "customer": 220 },
///         "order": ["customer", "total", "placed"]
///       },
///       "saved_at": 1760000000
///     }
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonLayoutStore {
    file_path: PathBuf,
    data: StoreData,
}

impl JsonLayoutStore {
    /// Opens the store at `file_path`, creating parent directories.
    ///
    /// A missing file is an empty store; it is created on the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but is not valid JSON
    /// - The file was written by a newer format version
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening layout store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no layout file yet, starting empty");
            StoreData::default()
        };

        tracing::debug!(tables = data.tables.len(), "layout store opened");
        Ok(Self { file_path, data })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Full record saved under `table`, including its timestamp.
    #[must_use]
    pub fn record(&self, table: &str) -> Option<&LayoutRecord> {
        self.data.tables.get(table)
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)?;
        if data.version > FORMAT_VERSION {
            return Err(GridError::Storage(format!(
                "layout file version {} is newer than supported version {FORMAT_VERSION}",
                data.version
            )));
        }
        tracing::debug!(version = data.version, tables = data.tables.len(), "loaded layout file");
        Ok(data)
    }

    fn save_to_file(&mut self) -> Result<()> {
        self.data.version = FORMAT_VERSION;
        let json = serde_json::to_string_pretty(&self.data)?;

        let tmp_path = self.file_path.with_extension("tmp");
        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "layout store saved");
        Ok(())
    }
}

impl LayoutStore for JsonLayoutStore {
    fn load(&self, table: &str) -> Result<Option<LayoutState>> {
        Ok(self.data.tables.get(table).map(|r| r.layout.clone()))
    }

    fn save(&mut self, table: &str, layout: &LayoutState) -> Result<()> {
        let _span = tracing::debug_span!("save_layout", table, columns = layout.order.len()).entered();
        if self.data.tables.get(table).is_some_and(|r| &r.layout == layout) {
            tracing::trace!("layout unchanged, skipping save");
            return Ok(());
        }
        self.data
            .tables
            .insert(table.to_string(), LayoutRecord::new(layout.clone()));
        self.save_to_file()
    }

    fn remove(&mut self, table: &str) -> Result<bool> {
        if self.data.tables.remove(table).is_none() {
            return Ok(false);
        }
        self.save_to_file()?;
        Ok(true)
    }

    fn tables(&self) -> Vec<String> {
        self.data.tables.keys().cloned().collect()
    }
}
