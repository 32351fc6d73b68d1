use anyhow::{Context, Result};
use sha1::{Digest, Sha1};
use std::path::Path;

/// SHA-1 of a byte slice as 40 lowercase hex characters.
pub fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// SHA-1 of a file's full content.
///
/// An unreadable file is a hard error: the inventory must be complete to be
/// useful, so the caller lets this abort the run.
pub fn sha1_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read archive: {}", path.display()))?;
    Ok(sha1_hex(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn hash_is_deterministic_lowercase_hex() {
        let a = sha1_hex(b"hello world");
        let b = sha1_hex(b"hello world");
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        // Known vector for "hello world".
        assert_eq!(a, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
    }

    #[test]
    fn file_hash_matches_byte_hash() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("blob.bin");
        fs::write(&path, b"payload").unwrap();
        assert_eq!(sha1_file(&path).unwrap(), sha1_hex(b"payload"));
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(sha1_file(&tmp.path().join("missing.jar")).is_err());
    }
}
