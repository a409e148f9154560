//! Frame constants and the encoded output type

/// Training sequence preceding every frame: 24 alternating bits.
pub const PREAMBLE: [u8; 24] = [
    1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0,
];

/// HDLC opening flag `01111110`.
pub const START_FLAG: [u8; 8] = [0, 1, 1, 1, 1, 1, 1, 0];

/// HDLC closing flag, same pattern as the opening one.
pub const END_FLAG: [u8; 8] = START_FLAG;

/// Preamble length in bits.
pub const LEN_PREAMBLE: usize = PREAMBLE.len();

/// Flag length in bits.
pub const LEN_FLAG: usize = START_FLAG.len();

/// CRC field length in bits.
pub const LEN_CRC: usize = 16;

/// Short frames are padded to this fixed size, which is what the
/// downstream modulator expects for ordinary AIS position reports.
pub const FRAME_FIXED_BITS: usize = 256;

/// Upper bound on `preamble + start flag + payload + CRC` in bits.
/// Longer payloads are clipped, never rejected.
pub const MAX_CAPACITY_BITS: usize = 4096;

/// A fully assembled, line-coded frame packed into bytes.
///
/// `bit_len` is the true on-air length; it is always a multiple of 8, so
/// every byte of `bytes` is fully significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl Frame {
    pub(crate) fn new(bytes: Vec<u8>, bit_len: usize) -> Self {
        debug_assert_eq!(bit_len % 8, 0);
        debug_assert_eq!(bytes.len() * 8, bit_len);
        Self { bytes, bit_len }
    }

    /// Packed frame bytes, MSB transmitted first within each byte's
    /// unpacked form.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// True frame length in bits.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Frame length in bytes.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Consume the frame, yielding its packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
