//! Core data models used throughout the inventory pipeline.
//!
//! These types represent the archives discovered on disk and the fully
//! resolved identity records that flow into the report.

use std::path::PathBuf;

/// A candidate archive discovered by the walker, before identification.
#[derive(Debug, Clone)]
pub struct ArchiveFile {
    /// Path relative to the scan root, always `/`-separated.
    pub relative_path: String,
    /// Absolute path used to open the file.
    pub absolute_path: PathBuf,
}

/// One fully resolved inventory row.
///
/// Every field except `file` and `sha1` may be empty; an empty string means
/// "unknown" (never `None`, so the report layer can project columns without
/// null handling). The record is assembled once per archive and not mutated
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct ArchiveRecord {
    /// Path relative to the scan root; unique key within a run.
    pub file: String,
    /// SHA-1 of the full archive bytes, 40 lowercase hex chars. Always set.
    pub sha1: String,

    /// Display title after precedence resolution.
    pub title: String,
    /// Display vendor after precedence resolution.
    pub vendor: String,
    /// Display version after precedence resolution.
    pub version: String,

    // Raw manifest triples, kept for the full report view.
    pub bundle_name: String,
    pub bundle_vendor: String,
    pub bundle_version: String,
    pub implementation_title: String,
    pub implementation_vendor: String,
    pub implementation_version: String,
    pub specification_title: String,
    pub specification_vendor: String,
    pub specification_version: String,

    // Registry-derived fields; all empty when the registry had no match.
    pub maven_group: String,
    pub maven_artifact: String,
    pub maven_version: String,
    pub maven_release_date: String,
    /// Version the registry designates as "latest" (may lag reality).
    pub maven_latest_version: String,
    pub maven_latest_date: String,
    /// Most recently published version by publish timestamp.
    pub maven_recentest_version: String,
    pub maven_recentest_date: String,
}
