//! Single-client TCP sentence bridge
//!
//! Accepts one text client at a time and forwards each received line,
//! whole, into the streamed-mode encoder. A new connection closes and
//! replaces the live session. Transport errors are logged and the bridge
//! waits for the next client; they never reach the encoder.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use aissim_frame::encoder::FrameEncoder;
use aissim_frame::frame::Frame;

/// TCP listener feeding sentences into a [`FrameEncoder`].
pub struct SentenceBridge {
    listener: TcpListener,
}

impl SentenceBridge {
    /// Bind the bridge to an address and port. Port 0 picks an ephemeral
    /// port, readable back through [`SentenceBridge::local_addr`].
    pub async fn bind(addr: &str, port: u16) -> Result<Self> {
        let listener = TcpListener::bind((addr, port)).await?;
        info!(addr = %listener.local_addr()?, "bridge listening");
        Ok(Self { listener })
    }

    /// Address the bridge is listening on.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept clients forever, encoding every received sentence and
    /// sending the resulting frames into `frames`. At most one session is
    /// live at a time.
    pub async fn serve(self, encoder: Arc<FrameEncoder>, frames: mpsc::Sender<Frame>) {
        let mut session: Option<JoinHandle<()>> = None;
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    if let Some(prev) = session.take() {
                        info!("new client, closing live session");
                        prev.abort();
                    }
                    info!(%peer, "client connected");
                    session = Some(tokio::spawn(run_session(
                        stream,
                        Arc::clone(&encoder),
                        frames.clone(),
                    )));
                }
                Err(e) => warn!(error = %e, "accept failed"),
            }
        }
    }
}

async fn run_session(stream: TcpStream, encoder: Arc<FrameEncoder>, frames: mpsc::Sender<Frame>) {
    let mut lines = BufReader::new(stream).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match encoder.encode(line.as_bytes()) {
                Ok(Some(frame)) => {
                    debug!(bits = frame.bit_len(), "frame encoded");
                    if frames.send(frame).await.is_err() {
                        return; // frame consumer is gone
                    }
                }
                Ok(None) => debug!("empty sentence, nothing to transmit"),
                Err(e) => error!(error = %e, "encode failed"),
            },
            Ok(None) => {
                info!("client disconnected");
                return;
            }
            Err(e) => {
                warn!(error = %e, "read failed");
                return;
            }
        }
    }
}
