//! Maven Central search client.
//!
//! Two lookups back the identification pipeline:
//! - fingerprint search: `q=1:"<sha1>"` against the default core, returning
//!   candidate `(g, a, v, timestamp)` documents;
//! - latest-version resolution for a `(g, a)` coordinate, combining the
//!   registry's own `latestVersion` designation with a scan of published
//!   versions (`core=gav`) for the most recent publish timestamp. The
//!   designation can lag behind reality, which is why both are reported.
//!   The gav scan reads at most 200 documents and relies on the registry
//!   returning coordinates newest-first; a coordinate with more than 200
//!   published versions whose newest fell outside that window would be
//!   misreported.
//!
//! The client is an explicit dependency of the resolver (a trait object), so
//! tests substitute a fake instead of touching the network. Timestamps are
//! normalized to Unix epoch seconds at this boundary; the wire format uses
//! milliseconds.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::config::RegistryConfig;

/// One candidate match for a content hash.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub group: String,
    pub artifact: String,
    pub version: String,
    /// Publish time, Unix epoch seconds.
    pub timestamp: i64,
}

/// A resolved version with its publish time (epoch seconds).
#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub version: String,
    pub timestamp: i64,
}

/// Latest-version resolution for a coordinate. Either side may be absent
/// independently; callers must tolerate both.
#[derive(Debug, Clone, Default)]
pub struct LatestVersions {
    /// What the registry reports as "latest".
    pub reported: Option<VersionInfo>,
    /// Maximum publish timestamp across all published versions.
    pub most_recent: Option<VersionInfo>,
}

/// Registry lookups used by the identity resolver.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Search candidates by content hash. Empty means no match.
    async fn search_by_fingerprint(&self, sha1: &str) -> Result<Vec<Candidate>>;

    /// Resolve latest-version info for a `(group, artifact)` coordinate.
    async fn resolve_latest(&self, group: &str, artifact: &str) -> Result<LatestVersions>;
}

// ============ Wire format ============

#[derive(Debug, Deserialize)]
struct SelectResponse {
    response: ResponseBody,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(rename = "numFound")]
    #[allow(dead_code)]
    num_found: u64,
    #[serde(default)]
    docs: Vec<Doc>,
}

#[derive(Debug, Deserialize)]
struct Doc {
    #[serde(default)]
    g: String,
    #[serde(default)]
    a: String,
    /// Set on `core=gav` documents.
    #[serde(default)]
    v: Option<String>,
    /// Set on default-core documents.
    #[serde(rename = "latestVersion", default)]
    latest_version: Option<String>,
    /// Epoch milliseconds on the wire.
    #[serde(default)]
    timestamp: i64,
}

fn to_epoch_seconds(millis: i64) -> i64 {
    millis / 1000
}

// ============ Maven Central ============

/// HTTP client for the Maven Central search API.
pub struct MavenCentralClient {
    http: reqwest::Client,
    base_url: String,
}

impl MavenCentralClient {
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn select(&self, query: &str, core: Option<&str>, rows: u32) -> Result<SelectResponse> {
        let mut request = self
            .http
            .get(&self.base_url)
            .query(&[("q", query), ("wt", "json")])
            .query(&[("rows", rows)]);
        if let Some(core) = core {
            request = request.query(&[("core", core)]);
        }
        let response = request.send().await.context("registry request failed")?;
        let response = response
            .error_for_status()
            .context("registry returned an error status")?;
        response
            .json::<SelectResponse>()
            .await
            .context("failed to decode registry response")
    }
}

#[async_trait]
impl RegistryClient for MavenCentralClient {
    async fn search_by_fingerprint(&self, sha1: &str) -> Result<Vec<Candidate>> {
        let query = format!("1:\"{}\"", sha1);
        let body = self.select(&query, None, 20).await?;
        Ok(body
            .response
            .docs
            .into_iter()
            .map(|doc| Candidate {
                group: doc.g,
                artifact: doc.a,
                version: doc.v.or(doc.latest_version).unwrap_or_default(),
                timestamp: to_epoch_seconds(doc.timestamp),
            })
            .collect())
    }

    async fn resolve_latest(&self, group: &str, artifact: &str) -> Result<LatestVersions> {
        let query = format!("g:\"{}\" AND a:\"{}\"", group, artifact);

        // Registry-designated latest from the default core.
        let reported = self
            .select(&query, None, 1)
            .await?
            .response
            .docs
            .into_iter()
            .next()
            .and_then(|doc| {
                doc.latest_version.map(|version| VersionInfo {
                    version,
                    timestamp: to_epoch_seconds(doc.timestamp),
                })
            });

        // Most recent publish across the first 200 gav documents; the
        // registry lists versions newest-first, so the maximum is in range.
        let most_recent = self
            .select(&query, Some("gav"), 200)
            .await?
            .response
            .docs
            .into_iter()
            .filter_map(|doc| {
                doc.v.map(|version| VersionInfo {
                    version,
                    timestamp: to_epoch_seconds(doc.timestamp),
                })
            })
            .max_by_key(|info| info.timestamp);

        Ok(LatestVersions { reported, most_recent })
    }
}

// ============ Offline ============

/// No-network client: every lookup reports no match. Used by `--offline`
/// runs and when `[registry].enabled = false`.
pub struct OfflineClient;

#[async_trait]
impl RegistryClient for OfflineClient {
    async fn search_by_fingerprint(&self, _sha1: &str) -> Result<Vec<Candidate>> {
        Ok(Vec::new())
    }

    async fn resolve_latest(&self, _group: &str, _artifact: &str) -> Result<LatestVersions> {
        Ok(LatestVersions::default())
    }
}
