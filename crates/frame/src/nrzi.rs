//! NRZI line coding
//!
//! Differential coding over the whole assembled frame: a data zero toggles
//! the output level, a data one holds it. The previous-level state starts
//! at 0 for every frame and is never carried across frames.

/// NRZI-encode `bits` in place.
pub fn nrz_to_nrzi(bits: &mut [u8]) {
    let mut prev = 0u8;
    for cell in bits {
        let out = if *cell & 1 == 0 { prev ^ 1 } else { prev };
        *cell = out;
        prev = out;
    }
}

/// Decode an NRZI stream in place. Inverse of [`nrz_to_nrzi`] for the
/// same initial level.
pub fn nrzi_to_nrz(bits: &mut [u8]) {
    let mut prev = 0u8;
    for cell in bits {
        let level = *cell & 1;
        *cell = u8::from(level == prev);
        prev = level;
    }
}
