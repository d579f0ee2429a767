// Resolve hex-encoded basic NFC envelopes given on the command line.
//
// Each argument is `family(2) + code(1) + payload` in hex, as handed over by
// the outer framer. Arguments are resolved as responses unless `--commands`
// comes first. `--legacy` enables the lenient decode options.
//
//   RUST_LOG=debug cargo run --example resolve_frames -- 0001040205 000103
//   cargo run --example resolve_frames -- --commands 000106010154455354

use anyhow::{Context, Result, bail};
use tappy_basicnfc::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut commands = false;
    let mut legacy = false;
    let mut frames = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--commands" => commands = true,
            "--legacy" => legacy = true,
            _ => frames.push(arg),
        }
    }
    if frames.is_empty() {
        bail!("usage: resolve_frames [--commands] [--legacy] <hex>...");
    }

    let resolver = if legacy {
        Resolver::builder().legacy().build()
    } else {
        Resolver::new()
    };

    for frame in &frames {
        let bytes = parse_hex(frame)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("bad hex '{}'", frame))?;

        let outcome = if commands {
            resolver
                .resolve_command_bytes(&bytes)
                .map(|c| c.map(|c| format!("{:?}", c)))
        } else {
            resolver
                .resolve_response_bytes(&bytes)
                .map(|r| r.map(|r| format!("{:?}", r)))
        };

        match outcome {
            Ok(Some(text)) => println!("{} => {}", frame, text),
            Ok(None) => println!("{} => not a basic nfc message", frame),
            Err(e) => println!("{} => error: {}", frame, e),
        }
    }

    Ok(())
}
