//! CRC-16 engine (CRC-16/X-25, reflected polynomial 0x8408)
//!
//! The checksum itself is the standard X-25 variant. What is not standard
//! is the bit layout of the transmitted field: the AIS air interface
//! expects the low CRC byte first, and the per-byte bit-order reversal
//! applied to the payload later in the pipeline covers the CRC field too.
//! [`crc_wire_bits`] produces exactly the field an external AIS decoder
//! will accept; treat its layout as a wire contract, not a derivable fact.

const POLY: u16 = 0x8408;

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u16;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ POLY } else { crc >> 1 };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Reflected CRC-16/X-25 lookup table, one entry per input byte value.
static CRC_TABLE: [u16; 256] = build_table();

/// Compute CRC-16/X-25 over `data`.
///
/// Initial value 0xFFFF, final XOR 0xFFFF.
pub fn crc16(data: &[u8]) -> u16 {
    let mut acc: u16 = 0xFFFF;
    for &byte in data {
        acc = (acc >> 8) ^ CRC_TABLE[usize::from((acc ^ u16::from(byte)) & 0xFF)];
    }
    acc ^ 0xFFFF
}

/// Render a CRC as the 16-bit field appended to the payload.
///
/// The two bytes are swapped (low byte first) and each is rendered
/// MSB-first. The encoder's later per-byte bit reversal over payload+CRC
/// turns this into the LSB-first order the air interface requires.
pub fn crc_wire_bits(crc: u16) -> [u8; 16] {
    let swapped = crc.swap_bytes();
    let mut bits = [0u8; 16];
    for (i, cell) in bits.iter_mut().enumerate() {
        *cell = ((swapped >> (15 - i)) & 1) as u8;
    }
    bits
}
