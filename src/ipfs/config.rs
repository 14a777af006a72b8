use serde::{Deserialize, Serialize};

/// Configuration for talking to the IPFS daemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpfsConfig {
    /// API endpoint of the IPFS daemon
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Whether to pin uploaded content on the daemon
    #[serde(default = "default_pin_uploads")]
    pub pin_uploads: bool,

    /// CID version requested for uploads
    #[serde(default = "default_cid_version")]
    pub cid_version: i32,
}

fn default_api_url() -> String {
    "http://127.0.0.1:5001".to_string()
}

fn default_pin_uploads() -> bool {
    true
}

fn default_cid_version() -> i32 {
    1
}

impl Default for IpfsConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            pin_uploads: default_pin_uploads(),
            cid_version: default_cid_version(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_yields_defaults() {
        let config: IpfsConfig = toml::from_str("").unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:5001");
        assert!(config.pin_uploads);
        assert_eq!(config.cid_version, 1);
    }

    #[test]
    fn overrides_survive_round_trip() {
        let config = IpfsConfig {
            api_url: "http://ipfs.internal:5001".to_string(),
            pin_uploads: false,
            cid_version: 0,
        };
        let serialized = toml::to_string(&config).unwrap();
        let parsed: IpfsConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.api_url, config.api_url);
        assert_eq!(parsed.pin_uploads, config.pin_uploads);
        assert_eq!(parsed.cid_version, config.cid_version);
    }
}
