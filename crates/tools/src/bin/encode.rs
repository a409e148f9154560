//! ais-encode - one-shot AIS frame encoder
//!
//! Encodes a sentence of ASCII '0'/'1' payload bits into a packed,
//! NRZI-coded frame and prints it as hex (or unpacked bits) on stdout.

use std::io::Read;

use anyhow::Result;
use clap::Parser;

use aissim_core::bits::bytes_to_bits;
use aissim_frame::encoder::{EncoderConfig, FrameEncoder};

#[derive(Debug, Parser)]
#[command(name = "ais-encode")]
#[command(about = "Encode an AIS bit sentence into a physical-layer frame")]
struct EncodeArgs {
    /// Sentence of '0'/'1' characters; read from stdin when omitted
    sentence: Option<String>,

    /// Disable NRZI line coding of the assembled frame
    #[arg(long)]
    no_nrzi: bool,

    /// Print unpacked 0/1 bits instead of hex bytes
    #[arg(long)]
    bits: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let args = EncodeArgs::parse();

    let sentence = match args.sentence {
        Some(s) => s,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let encoder = FrameEncoder::with_sentence(
        EncoderConfig {
            enable_nrzi: !args.no_nrzi,
        },
        &sentence,
    );

    match encoder.encode_current()? {
        Some(frame) => {
            if args.bits {
                let line: String = bytes_to_bits(frame.as_bytes())
                    .iter()
                    .map(|&b| char::from(b'0' + b))
                    .collect();
                println!("{line}");
            } else {
                let line: String = frame
                    .as_bytes()
                    .iter()
                    .map(|b| format!("{b:02x}"))
                    .collect();
                println!("{line}");
            }
            eprintln!("{} bits", frame.bit_len());
        }
        None => eprintln!("empty sentence, no frame produced"),
    }

    Ok(())
}
