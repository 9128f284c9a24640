//! webpfit - convert an image to WebP under a size budget
//!
//! ```text
//! webpfit banner4.png output.webp 30
//! ```
//!
//! Prints a single outcome line on stdout. Diagnostics go to stderr and are
//! controlled by `RUST_LOG` (default `warn`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use webpfit_core::{encode_to_budget, BudgetConfig};

#[derive(Parser, Debug)]
#[command(name = "webpfit", version, about = "Encode an image to WebP under a target file size")]
struct Args {
    /// Image to convert (any format the decoder recognizes)
    source: PathBuf,
    /// WebP file to write; overwritten by every attempt
    destination: PathBuf,
    /// Largest acceptable output size in kilobytes
    #[arg(default_value_t = BudgetConfig::DEFAULT_TARGET_SIZE_KB)]
    target_size_kb: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let outcome = encode_to_budget(&args.source, &args.destination, args.target_size_kb)
        .with_context(|| {
            format!(
                "converting {} to {}",
                args.source.display(),
                args.destination.display()
            )
        })?;

    println!("{outcome}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        let args = Args::try_parse_from(["webpfit", "banner4.png", "output.webp"]).unwrap();
        assert_eq!(args.source, PathBuf::from("banner4.png"));
        assert_eq!(args.destination, PathBuf::from("output.webp"));
        assert_eq!(args.target_size_kb, 30.0);
    }

    #[test]
    fn test_explicit_target() {
        let args = Args::try_parse_from(["webpfit", "in.png", "out.webp", "12.5"]).unwrap();
        assert_eq!(args.target_size_kb, 12.5);
    }

    #[test]
    fn test_missing_destination() {
        assert!(Args::try_parse_from(["webpfit", "in.png"]).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_target() {
        assert!(Args::try_parse_from(["webpfit", "in.png", "out.webp", "small"]).is_err());
    }
}
