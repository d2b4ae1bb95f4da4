use anyhow::{anyhow, Result};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub providers: ProvidersConfig,
    pub debug: DebugConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub supports_credentials: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProvidersConfig {
    pub sim: SimConfig,
    pub coingecko: CoinGeckoConfig,
    pub bitquery: BitqueryConfig,
}

/// Wallet-balance provider (Sim API).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SimConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Token metadata/price provider (CoinGecko). The API key is optional:
/// demo endpoints work unauthenticated, just with tighter rate limits.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CoinGeckoConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Transaction-graph provider (Bitquery streaming GraphQL).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BitqueryConfig {
    pub streaming_url: String,
    pub api_key: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DebugConfig {
    pub save_debug_files: bool,
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 4000,
                log_level: "info".to_string(),
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:5173".to_string()],
                allowed_methods: vec![
                    "GET".to_string(),
                    "POST".to_string(),
                    "PUT".to_string(),
                    "DELETE".to_string(),
                ],
                allowed_headers: vec![
                    "Authorization".to_string(),
                    "Accept".to_string(),
                    "Content-Type".to_string(),
                ],
                supports_credentials: true,
            },
            providers: ProvidersConfig {
                sim: SimConfig {
                    base_url: "https://api.sim.dune.com/v1/svm".to_string(),
                    api_key: String::new(),
                },
                coingecko: CoinGeckoConfig {
                    base_url: "https://api.coingecko.com/api/v3".to_string(),
                    api_key: None,
                },
                bitquery: BitqueryConfig {
                    streaming_url: "https://streaming.bitquery.io/eap".to_string(),
                    api_key: String::new(),
                },
            },
            debug: DebugConfig {
                save_debug_files: false,
                output_dir: "temp".to_string(),
            },
        }
    }
}

impl ProvidersConfig {
    /// Validate provider credentials. The balances and transaction
    /// providers reject unauthenticated requests, so an empty key there is
    /// a fatal configuration error rather than a per-request 502.
    pub fn validate(&self) -> Result<()> {
        if self.sim.api_key.is_empty() {
            return Err(anyhow!("Sim API key not configured (SIM_API_KEY)"));
        }

        if self.bitquery.api_key.is_empty() {
            return Err(anyhow!(
                "Bitquery API key not configured (BITQUERY_API_KEY)"
            ));
        }

        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!("Loading config from file");
        match Self::load_from_file("config/config.toml") {
            Ok(config) => {
                info!("Config loaded from file");
                Ok(config)
            }
            Err(e) => {
                error!("Failed to load config from file: {}", e);
                info!("Falling back to environment variables or defaults");
                Ok(Self::from_env())
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("SERVER_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                config.server.port = port_num;
            }
        }

        if let Ok(log_level) = std::env::var("RUST_LOG") {
            config.server.log_level = log_level;
        }

        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.cors.allowed_origins =
                origins.split(',').map(|s| s.trim().to_string()).collect();
        }

        if let Ok(url) = std::env::var("SIM_API_URL") {
            config.providers.sim.base_url = url;
        }

        if let Ok(key) = std::env::var("SIM_API_KEY") {
            config.providers.sim.api_key = key;
        }

        if let Ok(url) = std::env::var("COINGECKO_API_BASE_URL") {
            config.providers.coingecko.base_url = url;
        }

        if let Ok(key) = std::env::var("COINGECKO_API_KEY") {
            config.providers.coingecko.api_key = Some(key);
        }

        if let Ok(url) = std::env::var("BITQUERY_STREAM_API_ENDPOINT") {
            config.providers.bitquery.streaming_url = url;
        }

        if let Ok(key) = std::env::var("BITQUERY_API_KEY") {
            config.providers.bitquery.api_key = key;
        }

        if let Ok(flag) = std::env::var("SAVE_DEBUG_FILES") {
            config.debug.save_debug_files = flag == "true" || flag == "1";
        }

        if let Ok(dir) = std::env::var("DEBUG_OUTPUT_DIR") {
            config.debug.output_dir = dir;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(
            config.providers.coingecko.base_url,
            "https://api.coingecko.com/api/v3"
        );
        assert!(!config.debug.save_debug_files);
    }

    #[test]
    fn test_validate_rejects_missing_required_keys() {
        let mut providers = Config::default().providers;
        assert!(providers.validate().is_err());

        providers.sim.api_key = "sim-key".to_string();
        assert!(providers.validate().is_err());

        providers.bitquery.api_key = "bq-key".to_string();
        assert!(providers.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(toml_string.contains("127.0.0.1"));
        assert!(toml_string.contains("4000"));
        assert!(toml_string.contains("api.coingecko.com"));
    }
}
