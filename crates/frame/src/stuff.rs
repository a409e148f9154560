//! HDLC zero-bit stuffing
//!
//! The flag pattern contains six consecutive ones; stuffing inserts a zero
//! after every run of five ones so the pattern can never occur inside the
//! payload region of a frame.

use aissim_core::bits::BitBuf;

/// Stuff `input` into `out`, inserting a zero bit after every run of five
/// consecutive one-bits. Zero bits reset the run counter, as does the
/// insertion itself.
pub fn stuff(input: &[u8], out: &mut BitBuf) {
    let mut ones = 0u8;
    for &cell in input {
        let bit = cell & 1;
        if bit == 1 {
            ones += 1;
        } else {
            ones = 0;
        }
        out.push(bit);
        if ones == 5 {
            out.push(0);
            ones = 0;
        }
    }
}

/// Remove the zero bits inserted by [`stuff`]. Exact inverse for any
/// stuffed stream.
pub fn destuff(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut ones = 0u8;
    let mut i = 0;
    while i < input.len() {
        let bit = input[i] & 1;
        out.push(bit);
        if bit == 1 {
            ones += 1;
        } else {
            ones = 0;
        }
        if ones == 5 {
            // the bit that follows five ones is the inserted zero
            i += 1;
            ones = 0;
        }
        i += 1;
    }
    out
}
