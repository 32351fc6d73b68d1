//! Identity resolution: the reconciliation engine.
//!
//! For each discovered archive this module combines three sources of varying
//! reliability — manifest attributes, the curated known-fingerprint table,
//! and Maven Central search results — into one [`ArchiveRecord`], applying a
//! fixed precedence policy:
//!
//! - known-table entries override the implementation-* manifest fields;
//! - display fields take the first non-empty of
//!   bundle → implementation → specification → registry;
//! - among registry candidates, a trusted publisher group wins, otherwise
//!   the registry's own ranking order is kept.
//!
//! Registry failures never abort the run: they degrade to empty registry
//! fields for the affected archive only. Unreadable files and corrupt
//! archives propagate and end the run, since a partial inventory is worse
//! than none.

use anyhow::Result;
use chrono::{TimeZone, Utc};

use crate::fingerprint;
use crate::known::KnownEntry;
use crate::manifest::{self, AttributeMap};
use crate::models::{ArchiveFile, ArchiveRecord};
use crate::registry::{Candidate, LatestVersions, RegistryClient};

/// First non-empty value of an ordered candidate sequence, or `""`.
///
/// The single fallback helper behind the three display-field chains; keeps
/// their tie-break semantics identical.
pub fn first_non_empty<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .find(|v| !v.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Pick the registry candidate to trust.
///
/// A candidate from a preferred (trusted publisher) group wins; with no
/// preferred group present the registry's own relevance order stands and the
/// first candidate is taken.
pub fn select_candidate<'a>(
    candidates: &'a [Candidate],
    preferred_groups: &[String],
) -> Option<&'a Candidate> {
    candidates
        .iter()
        .find(|c| preferred_groups.iter().any(|g| g == &c.group))
        .or_else(|| candidates.first())
}

/// Epoch seconds → ISO calendar date, or `""` for missing timestamps.
fn iso_date(epoch_secs: i64) -> String {
    if epoch_secs <= 0 {
        return String::new();
    }
    Utc.timestamp_opt(epoch_secs, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn attr(attributes: &AttributeMap, key: &str) -> String {
    attributes.get(key).cloned().unwrap_or_default()
}

/// Resolve one archive into a finished [`ArchiveRecord`].
///
/// `known` is the curated fingerprint table and `registry` the search
/// client; both are explicit dependencies so tests can substitute fakes.
pub async fn identify(
    file: &ArchiveFile,
    known: &[KnownEntry],
    registry: &dyn RegistryClient,
    preferred_groups: &[String],
) -> Result<ArchiveRecord> {
    let sha1 = fingerprint::sha1_file(&file.absolute_path)?;
    let attributes = manifest::read_attributes(&file.absolute_path)?;

    let mut record = ArchiveRecord {
        file: file.relative_path.clone(),
        sha1,
        bundle_name: attr(&attributes, "bundle-name"),
        bundle_vendor: attr(&attributes, "bundle-vendor"),
        bundle_version: attr(&attributes, "bundle-version"),
        implementation_title: attr(&attributes, "implementation-title"),
        implementation_vendor: attr(&attributes, "implementation-vendor"),
        implementation_version: attr(&attributes, "implementation-version"),
        specification_title: attr(&attributes, "specification-title"),
        specification_vendor: attr(&attributes, "specification-vendor"),
        specification_version: attr(&attributes, "specification-version"),
        ..ArchiveRecord::default()
    };

    // Curated ground truth beats whatever the archive claims about itself.
    if let Some(entry) = crate::known::lookup(known, &record.sha1) {
        record.implementation_title = entry.title.to_string();
        record.implementation_vendor = entry.vendor.to_string();
        record.implementation_version = entry.version.to_string();
    }

    let candidates = match registry.search_by_fingerprint(&record.sha1).await {
        Ok(candidates) => candidates,
        Err(e) => {
            eprintln!(
                "warning: registry lookup failed for {}: {:#}",
                record.file, e
            );
            Vec::new()
        }
    };

    if let Some(candidate) = select_candidate(&candidates, preferred_groups) {
        record.maven_group = candidate.group.clone();
        record.maven_artifact = candidate.artifact.clone();
        record.maven_version = candidate.version.clone();
        record.maven_release_date = iso_date(candidate.timestamp);

        let latest = match registry
            .resolve_latest(&candidate.group, &candidate.artifact)
            .await
        {
            Ok(latest) => latest,
            Err(e) => {
                eprintln!(
                    "warning: latest-version lookup failed for {}:{}: {:#}",
                    candidate.group, candidate.artifact, e
                );
                LatestVersions::default()
            }
        };
        if let Some(reported) = latest.reported {
            record.maven_latest_version = reported.version;
            record.maven_latest_date = iso_date(reported.timestamp);
        }
        if let Some(recent) = latest.most_recent {
            record.maven_recentest_version = recent.version;
            record.maven_recentest_date = iso_date(recent.timestamp);
        }
    }

    record.title = first_non_empty([
        record.bundle_name.as_str(),
        record.implementation_title.as_str(),
        record.specification_title.as_str(),
        record.maven_artifact.as_str(),
    ]);
    record.version = first_non_empty([
        record.bundle_version.as_str(),
        record.implementation_version.as_str(),
        record.specification_version.as_str(),
        record.maven_version.as_str(),
    ]);
    record.vendor = first_non_empty([
        record.bundle_vendor.as_str(),
        record.implementation_vendor.as_str(),
        record.specification_vendor.as_str(),
        record.maven_group.as_str(),
    ]);

    Ok(record)
}
