//! Inventory pipeline orchestration.
//!
//! Coordinates the full scan: walk the tree, filter to archive files, run
//! the identity resolver on each one strictly in order, then write the CSV
//! report. Progress goes to stderr so stdout stays parseable.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::known;
use crate::models::{ArchiveFile, ArchiveRecord};
use crate::registry::{MavenCentralClient, OfflineClient, RegistryClient};
use crate::report;
use crate::resolve;
use crate::walker;

fn build_registry_client(config: &Config, offline: bool) -> Result<Box<dyn RegistryClient>> {
    if offline || !config.registry.enabled {
        Ok(Box::new(OfflineClient))
    } else {
        Ok(Box::new(MavenCentralClient::new(&config.registry)?))
    }
}

/// Run the full inventory and write the report.
pub async fn run_scan(
    config: &Config,
    offline: bool,
    full: bool,
    output: Option<&Path>,
) -> Result<()> {
    let registry = build_registry_client(config, offline)?;

    eprintln!("scan {}  discovering...", config.scan.root.display());
    let files = walker::walk_files(&config.scan.root, &config.scan.exclude_globs)?;
    let archives = walker::filter_extension(files, &config.scan.extension);
    let total = archives.len();

    let mut records: Vec<ArchiveRecord> = Vec::with_capacity(total);
    for (n, file) in archives.iter().enumerate() {
        eprintln!(
            "scan  identifying  {} / {}  {}",
            n + 1,
            total,
            file.relative_path
        );
        let record = resolve::identify(
            file,
            known::KNOWN_FINGERPRINTS,
            registry.as_ref(),
            &config.registry.preferred_groups,
        )
        .await?;
        records.push(record);
    }

    let output = output.unwrap_or_else(|| config.report.output.as_path());
    let full = full || config.report.full;
    report::write_report(&records, output, full)?;

    println!("inventoried {} archives -> {}", records.len(), output.display());
    Ok(())
}

/// Identify a single archive file and print the resolved record.
pub async fn run_identify(config: &Config, path: &Path, offline: bool) -> Result<()> {
    let registry = build_registry_client(config, offline)?;

    let absolute: PathBuf = path
        .canonicalize()
        .unwrap_or_else(|_| path.to_path_buf());
    let relative = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let file = ArchiveFile {
        relative_path: relative,
        absolute_path: absolute,
    };
    let record = resolve::identify(
        &file,
        known::KNOWN_FINGERPRINTS,
        registry.as_ref(),
        &config.registry.preferred_groups,
    )
    .await?;

    println!("File:               {}", record.file);
    println!("Sha1:               {}", record.sha1);
    println!("Title:              {}", record.title);
    println!("Vendor:             {}", record.vendor);
    println!("Version:            {}", record.version);
    println!("MavenGroup:         {}", record.maven_group);
    println!("MavenArtifact:      {}", record.maven_artifact);
    println!("MavenVersion:       {}", record.maven_version);
    println!("MavenRelDate:       {}", record.maven_release_date);
    println!("MavenRecentestVer:  {}", record.maven_recentest_version);
    println!("MavenRecentestDate: {}", record.maven_recentest_date);
    Ok(())
}
