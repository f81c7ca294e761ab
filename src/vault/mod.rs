//! Vault module — the credential-vault core.
//!
//! This module provides:
//! - the `CredentialEntry` model (`entry`)
//! - the `Vault` orchestrator, which composes the secret codec, the
//!   secret generator, the exchange codec, and an [`EntryStore`] into
//!   the full list/get/create/update/delete/sort/import/export surface.
//!
//! The orchestrator owns the encrypt-before-write / decrypt-after-read
//! boundary: no plaintext secret ever crosses into the store, and no
//! ciphertext ever leaves the vault toward a caller.

pub mod entry;

use std::cmp::Ordering;

use crate::crypto::SecretCodec;
use crate::errors::Result;
use crate::exchange::{ExchangeCodec, ExchangeFormat};
use crate::generator::SecretGenerator;
use crate::store::EntryStore;

pub use entry::CredentialEntry;

/// Length of secrets produced by [`Vault::generate_secret`].
pub const DEFAULT_SECRET_LENGTH: usize = 16;

/// The business core: CRUD, sorting, and bulk import/export over an
/// injected persistence backend.
pub struct Vault<S: EntryStore> {
    store: S,
    codec: SecretCodec,
    generator: SecretGenerator,
    exchange: ExchangeCodec,
}

impl<S: EntryStore> Vault<S> {
    pub fn new(store: S, codec: SecretCodec, exchange: ExchangeCodec) -> Self {
        Self {
            store,
            codec,
            generator: SecretGenerator::new(),
            exchange,
        }
    }

    /// All entries, secrets decrypted.
    pub fn list(&self) -> Result<Vec<CredentialEntry>> {
        let mut entries = self.store.find_all()?;
        for entry in &mut entries {
            entry.secret = self.codec.decode(&entry.secret)?;
        }
        Ok(entries)
    }

    /// One entry by id, secret decrypted.  A missing id is a normal
    /// empty result, not an error.
    pub fn get(&self, id: u64) -> Result<Option<CredentialEntry>> {
        match self.store.find_by_id(id)? {
            Some(mut entry) => {
                entry.secret = self.codec.decode(&entry.secret)?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    /// Encrypt the entry's secret, persist it, and return the saved
    /// entry with its assigned id and the secret back in plaintext.
    pub fn create(&mut self, mut entry: CredentialEntry) -> Result<CredentialEntry> {
        entry.secret = self.codec.encode(&entry.secret)?;
        let mut saved = self.store.save(entry)?;
        saved.secret = self.codec.decode(&saved.secret)?;
        Ok(saved)
    }

    /// Replace website, username, and secret of an existing entry.
    ///
    /// Returns `None` without writing when no record exists for `id`.
    /// There is no partial-field merge: all three fields are overwritten
    /// with the supplied values.
    pub fn update(&mut self, id: u64, entry: CredentialEntry) -> Result<Option<CredentialEntry>> {
        let Some(mut existing) = self.store.find_by_id(id)? else {
            return Ok(None);
        };

        existing.website = entry.website;
        existing.username = entry.username;
        existing.secret = self.codec.encode(&entry.secret)?;

        let mut saved = self.store.save(existing)?;
        saved.secret = self.codec.decode(&saved.secret)?;
        Ok(Some(saved))
    }

    /// Delete by id.  Returns `true` when a record existed and was
    /// removed, `false` (with no write) when it did not.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        if self.store.exists_by_id(id)? {
            self.store.delete_by_id(id)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Generate a fresh random secret of the default length.
    pub fn generate_secret(&self) -> Result<String> {
        self.generator.generate(DEFAULT_SECRET_LENGTH)
    }

    /// Export the whole vault (decrypted) to the named target.
    pub fn export_to(&self, format: ExchangeFormat, name: &str) -> Result<()> {
        let entries = self.list()?;
        self.exchange.write(format, name, &entries)
    }

    /// Import entries from the named source, then return the full vault.
    ///
    /// Incoming ids are discarded — every imported entry is created as
    /// new, receiving a fresh id and fresh ciphertext.  Imports are not
    /// transactional: a failure partway through leaves the entries
    /// created so far in place.
    pub fn import_from(
        &mut self,
        format: ExchangeFormat,
        name: &str,
    ) -> Result<Vec<CredentialEntry>> {
        let imported = self.exchange.read(format, name)?;
        for mut entry in imported {
            entry.id = None;
            self.create(entry)?;
        }
        self.list()
    }
}

/// In-place, case-insensitive, ascending sort by website.
///
/// Partition-exchange (quicksort) with the last element as pivot, kept
/// for behavioral parity with the stored-record ordering this vault has
/// always produced.  Not stable: entries with equal websites may swap
/// relative order.  Worst case is O(n²) on already-sorted input, with
/// recursion depth equal to the partition depth — acceptable for the
/// interactive-scale collections this tool manages.
pub fn sort_by_website(entries: &mut [CredentialEntry]) {
    if entries.len() > 1 {
        quicksort(entries, 0, entries.len() - 1);
    }
}

fn quicksort(entries: &mut [CredentialEntry], low: usize, high: usize) {
    if low < high {
        let pivot = partition(entries, low, high);
        if pivot > low {
            quicksort(entries, low, pivot - 1);
        }
        quicksort(entries, pivot + 1, high);
    }
}

fn partition(entries: &mut [CredentialEntry], low: usize, high: usize) -> usize {
    let mut i = low;
    for j in low..high {
        if compare_websites(&entries[j].website, &entries[high].website) == Ordering::Less {
            entries.swap(i, j);
            i += 1;
        }
    }
    entries.swap(i, high);
    i
}

fn compare_websites(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
