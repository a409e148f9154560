//! Bit buffer and bit/byte conversions
//!
//! Bits are carried as byte-sized 0/1 cells; that is the unit of exchange
//! between the encoder stages. [`BitBuf`] is a fixed-capacity buffer sized
//! for a maximally stuffed and framed payload, so the encoder never
//! allocates scratch storage per call.

use crate::{CoreError, Result};
use tracing::trace;

/// Capacity of a [`BitBuf`] in bits.
///
/// A clipped payload plus CRC is at most 4064 bits; bit stuffing can grow
/// that to 4876, and preamble, flags and byte-boundary padding add at most
/// 47 more. 5120 leaves slack on top of that worst case.
pub const MAX_BITS: usize = 5120;

/// Fixed-capacity buffer of unpacked bits (one `u8` cell per bit).
#[derive(Clone)]
pub struct BitBuf {
    bits: [u8; MAX_BITS],
    len: usize,
}

impl BitBuf {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            bits: [0u8; MAX_BITS],
            len: 0,
        }
    }

    /// Number of bits currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the buffer holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a single bit. Capacity is an invariant of the encoder's
    /// clipping logic; exceeding it is a defect.
    pub fn push(&mut self, bit: u8) {
        assert!(self.len < MAX_BITS, "bit buffer overflow");
        self.bits[self.len] = bit & 1;
        self.len += 1;
    }

    /// Append a slice of bits.
    pub fn extend_from_slice(&mut self, bits: &[u8]) {
        assert!(self.len + bits.len() <= MAX_BITS, "bit buffer overflow");
        for (dst, src) in self.bits[self.len..self.len + bits.len()]
            .iter_mut()
            .zip(bits)
        {
            *dst = src & 1;
        }
        self.len += bits.len();
    }

    /// Drop all bits past `len`. No-op if the buffer is already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// Append zero bits until the length is a multiple of 8.
    pub fn pad_to_byte_multiple(&mut self) {
        let rem = self.len % 8;
        if rem != 0 {
            let padding = 8 - rem;
            trace!(len = self.len, padding, "padding bits to byte boundary");
            for _ in 0..padding {
                self.push(0);
            }
        }
    }

    /// View the held bits.
    pub fn as_slice(&self) -> &[u8] {
        &self.bits[..self.len]
    }

    /// Mutable view of the held bits.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bits[..self.len]
    }

    /// Pack the held bits into bytes, MSB-first. See [`pack_bits_to_bytes`].
    pub fn pack_bytes(&self) -> Result<Vec<u8>> {
        pack_bits_to_bytes(self.as_slice())
    }
}

impl Default for BitBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BitBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitBuf")
            .field("len", &self.len)
            .field("bits", &self.as_slice())
            .finish()
    }
}

/// Convert a sentence of ASCII '0'/'1' characters into bits.
///
/// Scanning stops at the first newline or NUL within `max_len`. Characters
/// are taken relative to the ASCII code of '0' and masked to a single bit.
/// Returns [`CoreError::EmptyInput`] if no bits remain after trimming.
pub fn ascii_to_bits(sentence: &[u8], max_len: usize) -> Result<BitBuf> {
    let limit = sentence.len().min(max_len).min(MAX_BITS);
    let mut buf = BitBuf::new();
    for &ch in &sentence[..limit] {
        if ch == b'\n' || ch == b'\0' {
            trace!(len = buf.len(), "sentence terminated early");
            break;
        }
        buf.push(ch.wrapping_sub(b'0'));
    }
    if buf.is_empty() {
        return Err(CoreError::EmptyInput);
    }
    Ok(buf)
}

/// Pack unpacked bits into bytes, 8 at a time, MSB-first.
///
/// `bits[0]` becomes the most significant bit of the first byte. Fails with
/// [`CoreError::Alignment`] if the bit count is not a multiple of 8.
pub fn pack_bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(CoreError::Alignment { len: bits.len() });
    }
    Ok(bits
        .chunks_exact(8)
        .map(|group| group.iter().fold(0u8, |acc, &b| (acc << 1) | (b & 1)))
        .collect())
}

/// Unpack bytes into bits, MSB-first. Inverse of [`pack_bits_to_bytes`].
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Reverse the bit order within every 8-bit group in place.
///
/// Swaps positions 0↔7, 1↔6, 2↔5 and 3↔4 of each group, mirroring the
/// LSB-first on-air transmission order of each byte. A trailing group of
/// fewer than 8 bits is left untouched.
pub fn reverse_bit_order_per_byte(bits: &mut [u8]) {
    for group in bits.chunks_exact_mut(8) {
        group.reverse();
    }
}
