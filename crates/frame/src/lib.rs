//! AisSim Frame - HDLC-style physical-layer framing for AIS
//!
//! This crate turns a sentence of ASCII '0'/'1' payload bits into an
//! on-air frame: CRC-16/X-25 checksum, per-byte bit-order reversal,
//! zero-bit stuffing, preamble/flag framing and NRZI line coding, packed
//! into bytes for a GMSK modulator.

pub mod crc;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod nrzi;
pub mod stuff;

pub use error::{FrameError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        crc::{crc16, crc_wire_bits},
        encoder::{EncoderConfig, FrameEncoder},
        error::{FrameError, Result},
        frame::{Frame, END_FLAG, PREAMBLE, START_FLAG},
        nrzi::{nrz_to_nrzi, nrzi_to_nrz},
        stuff::{destuff, stuff},
    };
}
