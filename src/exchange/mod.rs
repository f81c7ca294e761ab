//! Bulk import/export interchange formats.
//!
//! Two on-disk representations of a plaintext credential collection:
//!
//! - **JSON**: a flat, pretty-printed array of records.
//! - **XML**: a hierarchical wrapper — a `<credentials>` root holding
//!   one `<entry>` element per record.
//!
//! The codec only ever sees plaintext collections.  The vault layer
//! decrypts before export and re-encrypts everything read back in, so
//! interchange files are *not* an at-rest storage format.
//!
//! Reading a source that does not exist returns an empty collection
//! rather than an error — first-time imports are expected to point at
//! files that are not there yet.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};
use crate::vault::CredentialEntry;

/// The two supported interchange formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeFormat {
    Json,
    Xml,
}

impl ExchangeFormat {
    /// Conventional file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            ExchangeFormat::Json => "json",
            ExchangeFormat::Xml => "xml",
        }
    }
}

impl FromStr for ExchangeFormat {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExchangeFormat::Json),
            "xml" => Ok(ExchangeFormat::Xml),
            other => Err(VaultError::Validation(format!(
                "unknown interchange format '{other}' — use 'json' or 'xml'"
            ))),
        }
    }
}

impl fmt::Display for ExchangeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Root element wrapping the entry list in the XML representation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "credentials")]
struct CredentialsDocument {
    #[serde(rename = "entry", default)]
    entries: Vec<CredentialEntry>,
}

/// Serializes and deserializes credential collections under a data
/// directory.  Targets and sources are plain file names resolved
/// against that directory.
#[derive(Debug, Clone)]
pub struct ExchangeCodec {
    data_dir: PathBuf,
}

impl ExchangeCodec {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Full path for a named interchange file.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Write a plaintext collection to the named target.
    ///
    /// The data directory is created if missing; any write failure
    /// propagates as an IO error.
    pub fn write(
        &self,
        format: ExchangeFormat,
        name: &str,
        entries: &[CredentialEntry],
    ) -> Result<()> {
        let content = match format {
            ExchangeFormat::Json => serde_json::to_string_pretty(entries)
                .map_err(|e| VaultError::Serialization(format!("JSON export: {e}")))?,
            ExchangeFormat::Xml => to_xml(entries)?,
        };

        fs::create_dir_all(&self.data_dir)?;
        fs::write(self.resolve(name), content)?;
        Ok(())
    }

    /// Read a plaintext collection from the named source.
    ///
    /// A missing source yields an empty collection; a source that exists
    /// but cannot be parsed for its format is a `Decode` error.
    pub fn read(&self, format: ExchangeFormat, name: &str) -> Result<Vec<CredentialEntry>> {
        let path = self.resolve(name);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        match format {
            ExchangeFormat::Json => serde_json::from_str(&content)
                .map_err(|e| malformed(&path, "JSON", &e.to_string())),
            ExchangeFormat::Xml => quick_xml::de::from_str::<CredentialsDocument>(&content)
                .map(|doc| doc.entries)
                .map_err(|e| malformed(&path, "XML", &e.to_string())),
        }
    }
}

fn malformed(path: &Path, format: &str, reason: &str) -> VaultError {
    VaultError::Decode(format!(
        "malformed {format} in {}: {reason}",
        path.display()
    ))
}

/// Serialize entries into the element-wrapped XML form, indented.
fn to_xml(entries: &[CredentialEntry]) -> Result<String> {
    let doc = CredentialsDocument {
        entries: entries.to_vec(),
    };

    let mut xml = String::new();
    let mut ser = quick_xml::se::Serializer::new(&mut xml);
    ser.indent(' ', 2);
    doc.serialize(ser)
        .map_err(|e| VaultError::Serialization(format!("XML export: {e}")))?;
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_entries() -> Vec<CredentialEntry> {
        vec![
            CredentialEntry {
                id: Some(1),
                website: "github.com".into(),
                username: "octocat".into(),
                secret: "s3cr3t".into(),
            },
            CredentialEntry {
                id: Some(2),
                website: "example.org".into(),
                username: "alice".into(),
                secret: "pa<ss>&word".into(),
            },
        ]
    }

    #[test]
    fn json_write_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let codec = ExchangeCodec::new(dir.path());
        let entries = sample_entries();

        codec
            .write(ExchangeFormat::Json, "creds.json", &entries)
            .unwrap();
        let read = codec.read(ExchangeFormat::Json, "creds.json").unwrap();
        assert_eq!(read, entries);
    }

    #[test]
    fn xml_write_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let codec = ExchangeCodec::new(dir.path());
        let entries = sample_entries();

        codec
            .write(ExchangeFormat::Xml, "creds.xml", &entries)
            .unwrap();
        let read = codec.read(ExchangeFormat::Xml, "creds.xml").unwrap();
        assert_eq!(read, entries);
    }

    #[test]
    fn xml_output_is_element_wrapped() {
        let dir = TempDir::new().unwrap();
        let codec = ExchangeCodec::new(dir.path());

        codec
            .write(ExchangeFormat::Xml, "creds.xml", &sample_entries())
            .unwrap();
        let content = fs::read_to_string(codec.resolve("creds.xml")).unwrap();
        assert!(content.contains("<credentials"));
        assert!(content.contains("<entry"));
        assert!(content.contains("<website>github.com</website>"));
    }

    #[test]
    fn missing_source_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let codec = ExchangeCodec::new(dir.path());

        let read = codec.read(ExchangeFormat::Json, "nope.json").unwrap();
        assert!(read.is_empty());
        let read = codec.read(ExchangeFormat::Xml, "nope.xml").unwrap();
        assert!(read.is_empty());
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let codec = ExchangeCodec::new(dir.path());
        fs::write(codec.resolve("bad.json"), "this is not json").unwrap();

        let err = codec.read(ExchangeFormat::Json, "bad.json").unwrap_err();
        assert!(matches!(err, VaultError::Decode(_)));
    }

    #[test]
    fn malformed_xml_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let codec = ExchangeCodec::new(dir.path());
        fs::write(codec.resolve("bad.xml"), "<credentials><entry>").unwrap();

        let err = codec.read(ExchangeFormat::Xml, "bad.xml").unwrap_err();
        assert!(matches!(err, VaultError::Decode(_)));
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<ExchangeFormat>().unwrap(), ExchangeFormat::Json);
        assert_eq!("xml".parse::<ExchangeFormat>().unwrap(), ExchangeFormat::Xml);
        assert!("yaml".parse::<ExchangeFormat>().is_err());
    }

    #[test]
    fn entries_without_ids_survive_the_roundtrip() {
        let dir = TempDir::new().unwrap();
        let codec = ExchangeCodec::new(dir.path());
        let entries = vec![CredentialEntry::new("a.com", "alice", "pw")];

        codec
            .write(ExchangeFormat::Json, "noids.json", &entries)
            .unwrap();
        let read = codec.read(ExchangeFormat::Json, "noids.json").unwrap();
        assert_eq!(read, entries);
        assert!(read[0].id.is_none());
    }
}
