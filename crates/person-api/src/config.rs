//! API configuration.

use std::env;

use domain::DEFAULT_PERSON_IDS;

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 3000;

/// Default upload body limit (2 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Person ids the detail lookup treats as existing
    pub known_person_ids: Vec<i64>,
    /// Largest accepted upload request body in bytes
    pub max_upload_bytes: usize,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("API_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            known_person_ids: env::var("KNOWN_PERSON_IDS")
                .ok()
                .map(|ids| parse_person_ids(&ids))
                .filter(|ids| !ids.is_empty())
                .unwrap_or_else(|| DEFAULT_PERSON_IDS.to_vec()),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            known_person_ids: DEFAULT_PERSON_IDS.to_vec(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Parse a comma separated id list, skipping entries that are not integers.
fn parse_person_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|id| id.trim().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        assert_eq!(parse_person_ids("1, 2,3 ,x,,10"), vec![1, 2, 3, 10]);
        assert!(parse_person_ids("a,b").is_empty());
    }

    #[test]
    fn default_config() {
        let config = ApiConfig::default();

        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.known_person_ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(config.max_upload_bytes, 2 * 1024 * 1024);
    }
}
