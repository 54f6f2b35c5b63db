use clap::{Parser, Subcommand};
use endpack::{Endianness, PackConfig, Packer, Rational, ScalarKind};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "endpack", about = "Fixed-width scalar packing with explicit byte order")]
struct Cli {
    /// JSON file with packing defaults, e.g. {"endianness": "little"}
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a value and print it as hex
    Pack {
        /// Kind: int32, int64, float, double
        #[arg(short, long)]
        kind: String,
        /// Byte order: big (default), little, native
        #[arg(short, long)]
        endian: Option<String>,
        /// Integer, decimal, or for float/double a rational `num/den`
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Decode a hex buffer
    Unpack {
        #[arg(short, long)]
        kind: String,
        #[arg(short, long)]
        endian: Option<String>,
        /// Hex bytes, optionally prefixed with 0x
        data: String,
    },
    /// Print the host's native byte order
    Detect,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => PackConfig::from_json_file(path)?,
        None       => PackConfig::default(),
    };
    let packer = Packer::standard()?;

    match cli.command {

        // ── Pack ─────────────────────────────────────────────────────────────
        Commands::Pack { kind, endian, value } => {
            let kind = parse_kind(&kind)?;
            let e    = resolve_endian(endian.as_deref(), &config)?;
            let bytes: Vec<u8> = match kind {
                ScalarKind::Int32 => packer.pack_int32(value.parse()?, e).to_vec(),
                ScalarKind::Int64 => packer.pack_int64(value.parse()?, e).to_vec(),
                ScalarKind::Float => match parse_ratio(&value)? {
                    Some(r) => packer.pack_float_rat(r.numerator, r.denominator, e).to_vec(),
                    None    => packer.pack_float(value.parse()?, e).to_vec(),
                },
                ScalarKind::Double => match parse_ratio(&value)? {
                    Some(r) => packer.pack_double_rat(r.numerator, r.denominator, e).to_vec(),
                    None    => packer.pack_double(value.parse()?, e).to_vec(),
                },
            };
            tracing::debug!(kind = %kind, endianness = %e, "packed {}", value);
            println!("{}", hex::encode(bytes));
        }

        // ── Unpack ───────────────────────────────────────────────────────────
        Commands::Unpack { kind, endian, data } => {
            let kind = parse_kind(&kind)?;
            let e    = resolve_endian(endian.as_deref(), &config)?;
            let buf  = hex::decode(data.trim_start_matches("0x"))?;
            match kind {
                ScalarKind::Int32  => println!("{}", packer.unpack_int32(&buf, e)?),
                ScalarKind::Int64  => println!("{}", packer.unpack_int64(&buf, e)?),
                ScalarKind::Float  => println!("{:?}", packer.unpack_float(&buf, e)?),
                ScalarKind::Double => println!("{:?}", packer.unpack_double(&buf, e)?),
            }
        }

        // ── Detect ───────────────────────────────────────────────────────────
        Commands::Detect => {
            println!("{}", packer.native_order());
        }
    }

    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn parse_kind(s: &str) -> Result<ScalarKind, Box<dyn std::error::Error>> {
    ScalarKind::from_name(s).ok_or_else(|| format!("Unknown kind '{}' (int32, int64, float, double)", s).into())
}

fn resolve_endian(flag: Option<&str>, config: &PackConfig) -> Result<Endianness, Box<dyn std::error::Error>> {
    Ok(match flag {
        Some(s) => s.parse()?,
        None    => config.endianness,
    })
}

/// `Some` for `num/den` input, `None` for anything else.
fn parse_ratio(s: &str) -> Result<Option<Rational>, Box<dyn std::error::Error>> {
    match s.split_once('/') {
        Some((num, den)) => Ok(Some(Rational::new(num.trim().parse()?, den.trim().parse()?))),
        None             => Ok(None),
    }
}
