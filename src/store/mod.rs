//! The persistence boundary for credential records.
//!
//! The vault core depends only on the [`EntryStore`] trait; any keyed
//! storage backend can sit behind it.  Two implementations ship here:
//! an in-memory map ([`MemoryStore`]) used by tests and ephemeral runs,
//! and a JSON records file ([`FileStore`]) used by the CLI.
//!
//! Everything a store sees is ciphertext — the vault layer encrypts
//! before `save` and decrypts after every read.

pub mod file;

use std::collections::BTreeMap;

use crate::errors::Result;
use crate::vault::CredentialEntry;

pub use file::FileStore;

/// Keyed CRUD over credential records.
///
/// `save` assigns a fresh id when the entry carries none and upserts
/// when it does; ids are never reused within a store's lifetime.
pub trait EntryStore {
    fn find_all(&self) -> Result<Vec<CredentialEntry>>;
    fn find_by_id(&self, id: u64) -> Result<Option<CredentialEntry>>;
    fn save(&mut self, entry: CredentialEntry) -> Result<CredentialEntry>;
    fn delete_by_id(&mut self, id: u64) -> Result<()>;
    fn exists_by_id(&self, id: u64) -> Result<bool>;
}

/// In-memory entry store backed by a `BTreeMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<u64, CredentialEntry>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl EntryStore for MemoryStore {
    fn find_all(&self) -> Result<Vec<CredentialEntry>> {
        Ok(self.entries.values().cloned().collect())
    }

    fn find_by_id(&self, id: u64) -> Result<Option<CredentialEntry>> {
        Ok(self.entries.get(&id).cloned())
    }

    fn save(&mut self, mut entry: CredentialEntry) -> Result<CredentialEntry> {
        let id = match entry.id {
            Some(id) => {
                // Upsert at an explicit id; keep the counter ahead of it.
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
        Ok(entry)
    }

    fn delete_by_id(&mut self, id: u64) -> Result<()> {
        self.entries.remove(&id);
        Ok(())
    }

    fn exists_by_id(&self, id: u64) -> Result<bool> {
        Ok(self.entries.contains_key(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_assigns_sequential_ids() {
        let mut store = MemoryStore::new();
        let a = store
            .save(CredentialEntry::new("a.com", "alice", "ct-1"))
            .unwrap();
        let b = store
            .save(CredentialEntry::new("b.com", "bob", "ct-2"))
            .unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[test]
    fn save_with_id_upserts() {
        let mut store = MemoryStore::new();
        let saved = store
            .save(CredentialEntry::new("a.com", "alice", "ct-1"))
            .unwrap();

        let mut updated = saved.clone();
        updated.username = "alice2".into();
        let saved2 = store.save(updated).unwrap();

        assert_eq!(saved2.id, saved.id);
        assert_eq!(store.find_all().unwrap().len(), 1);
        assert_eq!(
            store.find_by_id(saved.id.unwrap()).unwrap().unwrap().username,
            "alice2"
        );
    }

    #[test]
    fn delete_and_exists() {
        let mut store = MemoryStore::new();
        let saved = store
            .save(CredentialEntry::new("a.com", "alice", "ct-1"))
            .unwrap();
        let id = saved.id.unwrap();

        assert!(store.exists_by_id(id).unwrap());
        store.delete_by_id(id).unwrap();
        assert!(!store.exists_by_id(id).unwrap());
        assert!(store.find_by_id(id).unwrap().is_none());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = MemoryStore::new();
        let a = store
            .save(CredentialEntry::new("a.com", "alice", "ct-1"))
            .unwrap();
        store.delete_by_id(a.id.unwrap()).unwrap();

        let b = store
            .save(CredentialEntry::new("b.com", "bob", "ct-2"))
            .unwrap();
        assert_ne!(b.id, a.id);
    }
}
