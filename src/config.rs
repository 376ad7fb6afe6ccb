use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::ethereum::units::DEFAULT_PRECISION;
use crate::etherscan::client::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_CHAIN_ID, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE,
};

const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub explorer: ExplorerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub chain_id: u64,
    pub page_size: u32,
    /// 0 disables the bound
    pub max_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimals shown for ether amounts
    pub precision: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ExplorerConfig {
    /// Settings handed to [`EtherscanClient::new`](crate::etherscan::EtherscanClient::new)
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_key: self
                .api_key
                .clone()
                .filter(|key| key.as_str() != API_KEY_PLACEHOLDER),
            base_url: Some(self.base_url.clone()),
            chain_id: self.chain_id,
            page_size: self.page_size,
            max_pages: (self.max_pages > 0).then_some(self.max_pages),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {:?}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path, e))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    anyhow!("Failed to create config directory {:?}: {}", parent, e)
                })?;
            }
        }

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {:?}: {}", path, e))?;

        Ok(())
    }

    /// Load configuration with fallback to default
    ///
    /// An explicit path must exist and parse. Without one the default config
    /// location is tried, and a missing or unreadable file there is not an
    /// error.
    pub async fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let config = Self::load_from_file(path).await?;
                tracing::info!("Loaded configuration from file");
                config
            }
            None => match Self::default_config_path() {
                Ok(default_path) if default_path.exists() => {
                    match Self::load_from_file(&default_path).await {
                        Ok(config) => {
                            tracing::info!("Loaded configuration from {:?}", default_path);
                            config
                        }
                        Err(e) => {
                            tracing::warn!("Ignoring unreadable default config: {}", e);
                            Self::default()
                        }
                    }
                }
                _ => Self::default(),
            },
        };

        config.apply_env_vars();
        Ok(config)
    }

    /// Apply environment variable substitutions to configuration
    fn apply_env_vars(&mut self) {
        self.apply_overrides(
            std::env::var("ETHERSCAN_API_KEY").ok(),
            std::env::var("ETHERSCAN_BASE_URL").ok(),
        );
    }

    /// The file wins for the API key; the environment only fills a missing one.
    fn apply_overrides(&mut self, api_key: Option<String>, base_url: Option<String>) {
        let has_key = matches!(
            self.explorer.api_key.as_deref(),
            Some(key) if !key.trim().is_empty() && key != API_KEY_PLACEHOLDER
        );

        if !has_key {
            if let Some(api_key) = api_key.filter(|key| !key.trim().is_empty()) {
                tracing::info!("Using ETHERSCAN_API_KEY environment variable");
                self.explorer.api_key = Some(api_key);
            }
        }

        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            tracing::debug!("Using ETHERSCAN_BASE_URL environment variable: {}", base_url);
            self.explorer.base_url = base_url;
        }
    }

    /// Get default config file path
    pub fn default_config_path() -> Result<std::path::PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("etherscan-gas").join("config.toml"))
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        let sample_config = r#"# etherscan-gas configuration file

[explorer]
# Etherscan API key. ETHERSCAN_API_KEY is used when this is left unset.
api_key = "YOUR_API_KEY_HERE"

# Etherscan v2 endpoint (ETHERSCAN_BASE_URL overrides it)
base_url = "https://api.etherscan.io/v2/api"

# 1 = Ethereum mainnet
chain_id = 1

# Records requested per txlist page (Etherscan caps this at 10000)
page_size = 10000

# Stop paginating after this many pages, 0 for no limit
max_pages = 100

[display]
# Decimal places used when printing ether amounts
precision = 6

# Environment variables that can be used:
# ETHERSCAN_API_KEY - Your Etherscan API key
# ETHERSCAN_BASE_URL - Alternative API endpoint
"#;
        sample_config.to_string()
    }
}
