use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DoctransError, Result};

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5002
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_data_dir() -> String {
    ".doctrans".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Explicit base URL override; wins over host/port resolution
    #[serde(default)]
    pub base_url: Option<String>,
    /// Backend host used when no explicit base URL is set
    #[serde(default = "default_host")]
    pub host: String,
    /// Backend API port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Optional plain-text key=value resource merged onto this config at startup
    #[serde(default)]
    pub env_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Environment label reported by the env resource, if any
    #[serde(default)]
    pub app_env: Option<String>,
    /// Backend version reported by the env resource, if any
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Directory for preferences and logs
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: None,
                host: default_host(),
                port: default_port(),
                env_url: None,
                timeout_secs: default_timeout_secs(),
                app_env: None,
                version: None,
            },
            client: ClientConfig {
                data_dir: default_data_dir(),
            },
        }
    }
}

impl ApiConfig {
    /// Resolve the backend base URL. An explicit `base_url` wins; otherwise
    /// loopback hosts map to the local development URL and anything else to
    /// `http://<host>:<port>/api`. Always usable synchronously; the env
    /// resource refinement may adjust it later.
    pub fn resolve_base_url(&self) -> String {
        if let Some(url) = &self.base_url {
            return url.trim_end_matches('/').to_string();
        }
        if self.host == "localhost" || self.host == "127.0.0.1" {
            format!("http://localhost:{}/api", self.port)
        } else {
            format!("http://{}:{}/api", self.host, self.port)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DoctransError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| DoctransError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DoctransError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| DoctransError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Best-effort refinement from a remote key=value resource. The
    /// synchronous defaults stay in force when the resource is absent or
    /// malformed; recognized keys overwrite the corresponding fields.
    /// Returns whether anything was merged.
    pub async fn refine_from_env_resource(&mut self) -> bool {
        let Some(url) = self.api.env_url.clone() else {
            return false;
        };

        let client = match reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                debug!("Env resource client unavailable: {}", e);
                return false;
            }
        };

        let response = match client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!("Env resource not available: HTTP {}", response.status());
                return false;
            }
            Err(e) => {
                debug!("Env resource fetch failed: {}", e);
                return false;
            }
        };

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                debug!("Env resource body unreadable: {}", e);
                return false;
            }
        };

        let pairs = parse_env_text(&text);
        let merged = self.merge_env_pairs(&pairs);
        if merged > 0 {
            info!("Merged {} entries from env resource", merged);
        }
        merged > 0
    }

    /// Merge recognized key=value pairs onto the configuration; unknown
    /// keys are ignored. Returns the number of keys applied.
    pub fn merge_env_pairs(&mut self, pairs: &[(String, String)]) -> usize {
        let mut merged = 0;
        for (key, value) in pairs {
            match key.as_str() {
                "API_BASE_URL" => {
                    self.api.base_url = Some(value.clone());
                    merged += 1;
                }
                "APP_ENV" => {
                    self.api.app_env = Some(value.clone());
                    merged += 1;
                }
                "VERSION" => {
                    self.api.version = Some(value.clone());
                    merged += 1;
                }
                _ => {}
            }
        }
        merged
    }
}

/// Parse a `.env`-style text body: one `KEY=VALUE` per line, `#` comments
/// and blank lines skipped, surrounding single or double quotes stripped.
/// Values may contain `=`.
pub fn parse_env_text(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string();
        if !key.is_empty() && !value.is_empty() {
            pairs.push((key.to_string(), value));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_is_local_development() {
        let config = Config::default();
        assert_eq!(config.api.resolve_base_url(), "http://localhost:5002/api");
    }

    #[test]
    fn test_loopback_ip_maps_to_localhost_url() {
        let mut config = Config::default();
        config.api.host = "127.0.0.1".to_string();
        assert_eq!(config.api.resolve_base_url(), "http://localhost:5002/api");
    }

    #[test]
    fn test_remote_host_maps_to_host_port_api() {
        let mut config = Config::default();
        config.api.host = "translate.example.com".to_string();
        assert_eq!(
            config.api.resolve_base_url(),
            "http://translate.example.com:5002/api"
        );
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let mut config = Config::default();
        config.api.host = "translate.example.com".to_string();
        config.api.base_url = Some("https://api.example.org/api/".to_string());
        assert_eq!(config.api.resolve_base_url(), "https://api.example.org/api");
    }

    #[test]
    fn test_parse_env_text_skips_comments_and_strips_quotes() {
        let text = "# comment\n\nAPI_BASE_URL=\"http://10.0.0.5:5002/api\"\nAPP_ENV='production'\nBROKEN\nEMPTY=\n";
        let pairs = parse_env_text(text);
        assert_eq!(
            pairs,
            vec![
                (
                    "API_BASE_URL".to_string(),
                    "http://10.0.0.5:5002/api".to_string()
                ),
                ("APP_ENV".to_string(), "production".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_env_text_keeps_equals_in_value() {
        let pairs = parse_env_text("API_BASE_URL=http://h:5002/api?x=1");
        assert_eq!(pairs[0].1, "http://h:5002/api?x=1");
    }

    #[test]
    fn test_merge_env_pairs_applies_recognized_keys_only() {
        let mut config = Config::default();
        let pairs = vec![
            ("API_BASE_URL".to_string(), "http://10.0.0.5:5002/api".to_string()),
            ("VERSION".to_string(), "3.0.0".to_string()),
            ("UNRELATED".to_string(), "x".to_string()),
        ];
        assert_eq!(config.merge_env_pairs(&pairs), 2);
        assert_eq!(
            config.api.resolve_base_url(),
            "http://10.0.0.5:5002/api"
        );
        assert_eq!(config.api.version.as_deref(), Some("3.0.0"));
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.api.host = "translate.example.com".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.api.host, "translate.example.com");
        assert_eq!(loaded.api.port, 5002);
    }
}
