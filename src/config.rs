use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub scan: ScanConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScanConfig {
    /// Root of the installation tree to inventory.
    pub root: PathBuf,
    /// Archive extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
}

fn default_extension() -> String {
    "jar".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegistryConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Trusted publisher groups preferred during candidate selection.
    #[serde(default = "default_preferred_groups")]
    pub preferred_groups: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            enabled: default_enabled(),
            timeout_secs: default_timeout_secs(),
            preferred_groups: default_preferred_groups(),
        }
    }
}

fn default_base_url() -> String {
    "https://search.maven.org/solrsearch/select".to_string()
}
fn default_enabled() -> bool {
    true
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_preferred_groups() -> Vec<String> {
    [
        "commons-codec",
        "commons-io",
        "commons-logging",
        "commons-lang",
        "org.apache.commons",
        "org.apache.xerces",
        "xerces",
        "xalan",
        "org.jdom",
        "jdom",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Emit every intermediate column instead of the display projection.
    #[serde(default)]
    pub full: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            full: false,
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("./jar-report.csv")
}

impl Config {
    /// Minimal config for commands that operate on a single explicit file
    /// and only need registry settings.
    pub fn minimal() -> Self {
        Self {
            scan: ScanConfig {
                root: PathBuf::from("."),
                extension: default_extension(),
                exclude_globs: Vec::new(),
            },
            registry: RegistryConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.scan.extension.is_empty() || config.scan.extension.starts_with('.') {
        anyhow::bail!("scan.extension must be a bare extension like \"jar\"");
    }

    if config.registry.timeout_secs == 0 {
        anyhow::bail!("registry.timeout_secs must be > 0");
    }

    if config.registry.base_url.is_empty() {
        anyhow::bail!("registry.base_url must not be empty");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn minimal_toml_applies_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("jarinv.toml");
        fs::write(&path, "[scan]\nroot = \"/opt/app\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.scan.extension, "jar");
        assert!(config.registry.enabled);
        assert!(config
            .registry
            .preferred_groups
            .iter()
            .any(|g| g == "commons-codec"));
        assert_eq!(config.report.output, PathBuf::from("./jar-report.csv"));
    }

    #[test]
    fn dotted_extension_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("jarinv.toml");
        fs::write(&path, "[scan]\nroot = \"/opt/app\"\nextension = \".jar\"\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("jarinv.toml");
        fs::write(
            &path,
            "[scan]\nroot = \"/opt/app\"\n[registry]\ntimeout_secs = 0\n",
        )
        .unwrap();
        assert!(load_config(&path).is_err());
    }
}
