//! AisSim Core - bit-level primitives
//!
//! This crate provides the bit-buffer type and the bit/byte conversion
//! routines shared by the AIS frame encoder: ASCII digit ingestion,
//! byte-boundary padding, MSB-first packing, and per-byte bit reversal.

pub mod bits;
pub mod error;

pub use error::{CoreError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        bits::{
            ascii_to_bits, bytes_to_bits, pack_bits_to_bytes, reverse_bit_order_per_byte, BitBuf,
        },
        error::{CoreError, Result},
    };
}
