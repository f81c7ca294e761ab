//! JSON-file entry store.
//!
//! Records (with ciphertext secrets) live in a single JSON document:
//!
//! ```json
//! {
//!   "next_id": 3,
//!   "entries": [ { "id": 1, "website": "...", ... } ]
//! }
//! ```
//!
//! Every mutation rewrites the file atomically via temp-file + rename,
//! so readers never see a half-written store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};
use crate::vault::CredentialEntry;

use super::EntryStore;

/// On-disk shape of the records file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    next_id: u64,
    entries: Vec<CredentialEntry>,
}

/// Entry store persisted to a JSON file on every mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<u64, CredentialEntry>,
    next_id: u64,
}

impl FileStore {
    /// Open the store at `path`, creating an empty one in memory if the
    /// file does not exist yet (it is written on the first mutation).
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                path: path.to_path_buf(),
                entries: BTreeMap::new(),
                next_id: 1,
            });
        }

        let contents = fs::read_to_string(path)?;
        let doc: StoreDocument = serde_json::from_str(&contents).map_err(|e| {
            VaultError::Store(format!("corrupt store file {}: {e}", path.display()))
        })?;

        let mut entries = BTreeMap::new();
        let mut max_id = 0;
        for entry in doc.entries {
            let id = entry.id.ok_or_else(|| {
                VaultError::Store(format!("record without id in {}", path.display()))
            })?;
            max_id = max_id.max(id);
            entries.insert(id, entry);
        }

        Ok(Self {
            path: path.to_path_buf(),
            entries,
            // Trust the stored counter but never fall behind existing ids.
            next_id: doc.next_id.max(max_id + 1).max(1),
        })
    }

    /// Serialize the store and write it to disk atomically.
    fn persist(&self) -> Result<()> {
        let doc = StoreDocument {
            next_id: self.next_id,
            entries: self.entries.values().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&doc)
            .map_err(|e| VaultError::Serialization(format!("store file: {e}")))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Temp file in the same directory so the rename stays on one
        // filesystem and is atomic.
        let parent = self.path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

impl EntryStore for FileStore {
    fn find_all(&self) -> Result<Vec<CredentialEntry>> {
        Ok(self.entries.values().cloned().collect())
    }

    fn find_by_id(&self, id: u64) -> Result<Option<CredentialEntry>> {
        Ok(self.entries.get(&id).cloned())
    }

    fn save(&mut self, mut entry: CredentialEntry) -> Result<CredentialEntry> {
        let id = match entry.id {
            Some(id) => {
                self.next_id = self.next_id.max(id + 1);
                id
            }
            None => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        };
        entry.id = Some(id);
        self.entries.insert(id, entry.clone());
        self.persist()?;
        Ok(entry)
    }

    fn delete_by_id(&mut self, id: u64) -> Result<()> {
        if self.entries.remove(&id).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn exists_by_id(&self, id: u64) -> Result<bool> {
        Ok(self.entries.contains_key(&id))
    }
}
