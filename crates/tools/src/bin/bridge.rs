//! ais-bridge - TCP sentence bridge in front of the frame encoder
//!
//! Listens for a single text client, encodes every received sentence and
//! writes the resulting frames to stdout as hex lines or to a file as raw
//! packed bytes.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;

use aissim_frame::encoder::FrameEncoder;
use aissim_frame::frame::Frame;
use aissim_tools::{BridgeConfig, SentenceBridge};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let config = BridgeConfig::parse().resolve()?;
    let encoder = Arc::new(FrameEncoder::new(config.encoder_config()));

    let bridge = SentenceBridge::bind(&config.bind_addr, config.port).await?;
    let (tx, mut rx) = mpsc::channel::<Frame>(16);
    tokio::spawn(bridge.serve(encoder, tx));

    let mut output = config
        .output
        .as_ref()
        .map(std::fs::File::create)
        .transpose()?;

    while let Some(frame) = rx.recv().await {
        info!(bits = frame.bit_len(), "frame ready");
        match output.as_mut() {
            Some(file) => {
                file.write_all(frame.as_bytes())?;
                file.flush()?;
            }
            None => {
                let line: String = frame
                    .as_bytes()
                    .iter()
                    .map(|b| format!("{b:02x}"))
                    .collect();
                println!("{line}");
            }
        }
    }

    Ok(())
}
