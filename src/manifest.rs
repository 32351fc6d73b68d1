//! JAR manifest extraction.
//!
//! A JAR is a ZIP container whose metadata lives in `META-INF/MANIFEST.MF`.
//! This module opens the container, parses the manifest's main section, and
//! returns a case-insensitive attribute map (keys lowercased). Archives
//! without a manifest yield an empty map; archives that cannot be opened as
//! ZIP yield [`ManifestError::CorruptArchive`].

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Maximum bytes read from the manifest entry (bomb protection).
const MAX_MANIFEST_BYTES: u64 = 1024 * 1024;

const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";

/// Attributes of one archive's manifest main section, keyed by lowercased
/// attribute name. Built once per archive and never mutated afterwards.
pub type AttributeMap = HashMap<String, String>;

/// Manifest extraction error.
#[derive(Debug)]
pub enum ManifestError {
    /// The container could not be opened or read as a ZIP archive.
    CorruptArchive(String),
    /// The file itself could not be opened.
    Io(std::io::Error),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::CorruptArchive(e) => write!(f, "corrupt archive: {}", e),
            ManifestError::Io(e) => write!(f, "failed to open archive: {}", e),
        }
    }
}

impl std::error::Error for ManifestError {}

/// Read the manifest attributes of the archive at `path`.
///
/// Returns an empty map when the archive has no manifest entry. The file
/// handle is scoped to this call and released before returning, on success
/// and failure alike.
pub fn read_attributes(path: &Path) -> Result<AttributeMap, ManifestError> {
    let file = File::open(path).map_err(ManifestError::Io)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| ManifestError::CorruptArchive(e.to_string()))?;

    let mut raw = String::new();
    match archive.by_name(MANIFEST_ENTRY) {
        Ok(entry) => {
            entry
                .take(MAX_MANIFEST_BYTES)
                .read_to_string(&mut raw)
                .map_err(|e| ManifestError::CorruptArchive(e.to_string()))?;
        }
        Err(zip::result::ZipError::FileNotFound) => return Ok(AttributeMap::new()),
        Err(e) => return Err(ManifestError::CorruptArchive(e.to_string())),
    }

    Ok(parse_main_section(&raw))
}

/// Parse the main section of manifest text into a lowercased-key map.
///
/// Manifest lines are `Name: value`; a line starting with a single space is
/// a continuation of the previous value (the format wraps at 72 bytes).
/// Parsing stops at the first blank line: per-entry sections carry signing
/// data, not provenance.
pub fn parse_main_section(raw: &str) -> AttributeMap {
    let mut attributes = AttributeMap::new();
    let mut last_key: Option<String> = None;

    for line in raw.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            break;
        }
        if let Some(continuation) = line.strip_prefix(' ') {
            if let Some(key) = &last_key {
                if let Some(value) = attributes.get_mut(key) {
                    value.push_str(continuation);
                }
            }
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let key = name.trim().to_lowercase();
            attributes.insert(key.clone(), value.trim().to_string());
            last_key = Some(key);
        }
    }

    attributes
}
