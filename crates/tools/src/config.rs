//! Configuration for AisSim tools

use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use aissim_frame::encoder::EncoderConfig;

/// Sentence bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[serde(default)]
#[command(name = "ais-bridge")]
#[command(about = "Single-client TCP bridge feeding the AIS frame encoder")]
pub struct BridgeConfig {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    pub bind_addr: String,

    /// TCP port accepting the sentence client
    #[arg(long, default_value_t = 52002)]
    pub port: u16,

    /// Disable NRZI line coding of the assembled frame
    #[arg(long)]
    pub no_nrzi: bool,

    /// Write packed frames to this file instead of hex lines on stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (JSON or TOML), replacing the command line
    #[arg(long)]
    #[serde(skip)]
    pub config: Option<PathBuf>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 52002,
            no_nrzi: false,
            output: None,
            config: None,
        }
    }
}

impl BridgeConfig {
    /// Load the configuration file if one was given, otherwise keep the
    /// command-line values.
    pub fn resolve(self) -> Result<Self> {
        match &self.config {
            Some(path) => load_config(path),
            None => Ok(self),
        }
    }

    /// Encoder configuration implied by these settings.
    pub fn encoder_config(&self) -> EncoderConfig {
        EncoderConfig {
            enable_nrzi: !self.no_nrzi,
        }
    }
}

/// Load configuration from a JSON or TOML file
pub fn load_config<T: for<'a> Deserialize<'a>>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;

    if let Ok(config) = serde_json::from_str(&content) {
        return Ok(config);
    }

    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("failed to parse config file: {}", e),
    }
}

/// Save configuration to a JSON or TOML file, picked by extension
pub fn save_config<T: Serialize>(config: &T, path: &Path) -> Result<()> {
    let content = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };

    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.port, 52002);
        assert!(config.encoder_config().enable_nrzi);
    }

    #[test]
    fn no_nrzi_flag_disables_line_coding() {
        let config = BridgeConfig {
            no_nrzi: true,
            ..Default::default()
        };
        assert!(!config.encoder_config().enable_nrzi);
    }

    #[test]
    fn toml_roundtrip() {
        let dir = std::env::temp_dir().join("aissim-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bridge.toml");

        let config = BridgeConfig {
            port: 4242,
            ..Default::default()
        };
        save_config(&config, &path).unwrap();
        let loaded: BridgeConfig = load_config(&path).unwrap();
        assert_eq!(loaded.port, 4242);
        assert_eq!(loaded.bind_addr, config.bind_addr);
    }
}
