//! CSV report sink.
//!
//! Projects finished [`ArchiveRecord`]s into a spreadsheet-friendly table.
//! The default view carries the display columns only; the full view adds
//! every intermediate field (raw manifest triples, reported-latest variant,
//! content hash) for deeper auditing.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::models::ArchiveRecord;

/// Display projection: one row of the public report.
#[derive(Serialize)]
struct DisplayRow<'a> {
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Vendor")]
    vendor: &'a str,
    #[serde(rename = "Version")]
    version: &'a str,
    #[serde(rename = "File")]
    file: &'a str,
    #[serde(rename = "MavenGroup")]
    maven_group: &'a str,
    #[serde(rename = "MavenArtifact")]
    maven_artifact: &'a str,
    #[serde(rename = "MavenVersion")]
    maven_version: &'a str,
    #[serde(rename = "MavenRelDate")]
    maven_release_date: &'a str,
    #[serde(rename = "MavenRecentestVer")]
    maven_recentest_version: &'a str,
    #[serde(rename = "MavenRecentestDate")]
    maven_recentest_date: &'a str,
}

/// Full projection: display columns plus all intermediate fields.
///
/// Kept flat (no serde flatten) because the CSV serializer only accepts
/// scalar fields.
#[derive(Serialize)]
struct FullRow<'a> {
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Vendor")]
    vendor: &'a str,
    #[serde(rename = "Version")]
    version: &'a str,
    #[serde(rename = "File")]
    file: &'a str,
    #[serde(rename = "MavenGroup")]
    maven_group: &'a str,
    #[serde(rename = "MavenArtifact")]
    maven_artifact: &'a str,
    #[serde(rename = "MavenVersion")]
    maven_version: &'a str,
    #[serde(rename = "MavenRelDate")]
    maven_release_date: &'a str,
    #[serde(rename = "MavenRecentestVer")]
    maven_recentest_version: &'a str,
    #[serde(rename = "MavenRecentestDate")]
    maven_recentest_date: &'a str,
    #[serde(rename = "Sha1")]
    sha1: &'a str,
    #[serde(rename = "BundleName")]
    bundle_name: &'a str,
    #[serde(rename = "BundleVendor")]
    bundle_vendor: &'a str,
    #[serde(rename = "BundleVersion")]
    bundle_version: &'a str,
    #[serde(rename = "ImplementationTitle")]
    implementation_title: &'a str,
    #[serde(rename = "ImplementationVendor")]
    implementation_vendor: &'a str,
    #[serde(rename = "ImplementationVersion")]
    implementation_version: &'a str,
    #[serde(rename = "SpecificationTitle")]
    specification_title: &'a str,
    #[serde(rename = "SpecificationVendor")]
    specification_vendor: &'a str,
    #[serde(rename = "SpecificationVersion")]
    specification_version: &'a str,
    #[serde(rename = "MavenLatestVer")]
    maven_latest_version: &'a str,
    #[serde(rename = "MavenLatestDate")]
    maven_latest_date: &'a str,
}

fn display_row(record: &ArchiveRecord) -> DisplayRow<'_> {
    DisplayRow {
        title: &record.title,
        vendor: &record.vendor,
        version: &record.version,
        file: &record.file,
        maven_group: &record.maven_group,
        maven_artifact: &record.maven_artifact,
        maven_version: &record.maven_version,
        maven_release_date: &record.maven_release_date,
        maven_recentest_version: &record.maven_recentest_version,
        maven_recentest_date: &record.maven_recentest_date,
    }
}

/// Write the report for all records to `output`.
///
/// Parent directories are created as needed. Nothing is written until every
/// record has been resolved, so a fatal failure earlier in the run leaves no
/// partial report behind.
pub fn write_report(records: &[ArchiveRecord], output: &Path, full: bool) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("failed to create report: {}", output.display()))?;

    for record in records {
        if full {
            writer.serialize(FullRow {
                title: &record.title,
                vendor: &record.vendor,
                version: &record.version,
                file: &record.file,
                maven_group: &record.maven_group,
                maven_artifact: &record.maven_artifact,
                maven_version: &record.maven_version,
                maven_release_date: &record.maven_release_date,
                maven_recentest_version: &record.maven_recentest_version,
                maven_recentest_date: &record.maven_recentest_date,
                sha1: &record.sha1,
                bundle_name: &record.bundle_name,
                bundle_vendor: &record.bundle_vendor,
                bundle_version: &record.bundle_version,
                implementation_title: &record.implementation_title,
                implementation_vendor: &record.implementation_vendor,
                implementation_version: &record.implementation_version,
                specification_title: &record.specification_title,
                specification_vendor: &record.specification_vendor,
                specification_version: &record.specification_version,
                maven_latest_version: &record.maven_latest_version,
                maven_latest_date: &record.maven_latest_date,
            })?;
        } else {
            writer.serialize(display_row(record))?;
        }
    }

    writer.flush().context("failed to flush report")?;
    Ok(())
}
