use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::list::ListConfig;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Fixed RNG seed for reproducible mock data
    pub seed: Option<u64>,
    /// Simulated page fetch delay
    pub latency_ms: u64,
    /// Rows left below the cursor that trigger the next page
    pub scroll_threshold: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            seed: None,
            latency_ms: 500,
            scroll_threshold: 3,
        }
    }
}

/// Overrides for one list. Unset fields keep the list's built-in values;
/// `cap = 0` turns the cap off.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    pub batch_size: Option<usize>,
    pub cap: Option<usize>,
}

impl PagingConfig {
    pub fn list_config(&self, base: ListConfig, threshold: usize) -> ListConfig {
        let cap = match self.cap {
            None => base.cap,
            Some(0) => None,
            Some(cap) => Some(cap),
        };
        ListConfig {
            batch_size: self.batch_size.unwrap_or(base.batch_size).max(1),
            cap,
            threshold,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub prompt_delay_ms: u64,
    pub latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            prompt_delay_ms: 1000,
            latency_ms: 1000,
        }
    }
}

impl AuthConfig {
    pub fn prompt_delay(&self) -> Duration {
        Duration::from_millis(self.prompt_delay_ms)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub leads: PagingConfig,
    pub campaigns: PagingConfig,
    pub auth: AuthConfig,
}

fn config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("linkbird").join("config.toml"))
}

impl Config {
    /// Load from `path`, or the default location. Missing or invalid files
    /// fall back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(config_path) else {
            return Config::default();
        };

        let Ok(content) = std::fs::read_to_string(&path) else {
            return Config::default();
        };

        match Self::parse(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
                Config::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.general.latency_ms)
    }

    pub fn lead_list(&self) -> ListConfig {
        self.leads.list_config(ListConfig::leads(), self.general.scroll_threshold)
    }

    pub fn campaign_list(&self) -> ListConfig {
        self.campaigns
            .list_config(ListConfig::campaigns(), self.general.scroll_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[general]
seed = 42
latency_ms = 100
scroll_threshold = 5

[leads]
batch_size = 50
cap = 500

[campaigns]
batch_size = 10

[auth]
prompt_delay_ms = 0
latency_ms = 250
"#;
        let config = Config::parse(toml_str).unwrap();
        assert_eq!(config.general.seed, Some(42));
        assert_eq!(config.latency(), Duration::from_millis(100));
        assert_eq!(
            config.lead_list(),
            ListConfig {
                batch_size: 50,
                cap: Some(500),
                threshold: 5
            }
        );
        assert_eq!(config.campaign_list().batch_size, 10);
        assert_eq!(config.campaign_list().cap, Some(135));
        assert_eq!(config.auth.prompt_delay(), Duration::ZERO);
        assert_eq!(config.auth.latency(), Duration::from_millis(250));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.lead_list(), ListConfig::leads());
        assert_eq!(config.campaign_list(), ListConfig::campaigns());
        assert_eq!(config.auth.prompt_delay(), Duration::from_secs(1));
        assert_eq!(config.latency(), Duration::from_millis(500));
        assert_eq!(config.general.seed, None);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = Config::parse("[general]\nseed = 7\n").unwrap();
        assert_eq!(config.general.seed, Some(7));
        assert_eq!(config.general.latency_ms, 500);
    }

    #[test]
    fn batch_size_alone_keeps_cap() {
        let config = Config::parse("[campaigns]\nbatch_size = 10\n").unwrap();
        assert_eq!(config.campaign_list().cap, Some(135));
        assert_eq!(config.campaign_list().batch_size, 10);
    }

    #[test]
    fn cap_alone_keeps_batch_size_and_other_sections() {
        let config = Config::parse("[general]\nseed = 3\n\n[leads]\ncap = 100\n").unwrap();
        assert_eq!(config.lead_list().cap, Some(100));
        assert_eq!(config.lead_list().batch_size, 20);
        assert_eq!(config.general.seed, Some(3));
    }

    #[test]
    fn zero_cap_disables_limit() {
        let config = Config::parse("[leads]\ncap = 0\n").unwrap();
        assert_eq!(config.lead_list().cap, None);
    }

    #[test]
    fn invalid_config_is_an_error() {
        assert!(Config::parse("[leads]\nbatch_size = \"many\"\n").is_err());
    }

    #[test]
    fn zero_batch_size_is_clamped() {
        let config = Config::parse("[leads]\nbatch_size = 0\n").unwrap();
        assert_eq!(config.lead_list().batch_size, 1);
    }

    #[test]
    fn missing_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("absent.toml").as_path()));
        assert_eq!(config.lead_list(), ListConfig::leads());
    }

    #[test]
    fn load_reads_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[campaigns]\nbatch_size = 5\ncap = 20\n").unwrap();
        let config = Config::load(Some(path.as_path()));
        assert_eq!(config.campaign_list().batch_size, 5);
        assert_eq!(config.campaign_list().cap, Some(20));
    }
}
