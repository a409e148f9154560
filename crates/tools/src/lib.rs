//! AisSim Tools library

pub mod bridge;
pub mod config;

pub use bridge::SentenceBridge;
pub use config::{load_config, save_config, BridgeConfig};
