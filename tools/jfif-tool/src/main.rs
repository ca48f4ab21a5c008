// Command-line front end for the JFIF header codec

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jfif::{EncoderOptions, JfifDecoder, JfifEncoder, JfifError};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sample JFIF 1.01 header, 72x72 with no units and no thumbnail
const DEMO_HEADER: [u8; 20] = [
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00, 0x48,
    0x00, 0x48, 0x00, 0x00,
];

#[derive(Parser)]
#[command(name = "jfif-tool")]
#[command(about = "Inspect and rewrite JFIF (JPEG APP0) headers", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the JFIF header of a file
    Inspect {
        file: PathBuf,

        /// Print the header as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a file and write its header and remaining bytes to another file
    Rewrite {
        input: PathBuf,
        output: PathBuf,

        /// Write through a temporary file and rename into place
        #[arg(long)]
        atomic: bool,
    },
    /// Write the built-in sample header to a file
    Demo {
        #[arg(default_value = "output.jpg")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Inspect { file, json } => inspect(&file, json),
        Commands::Rewrite {
            input,
            output,
            atomic,
        } => rewrite(&input, &output, atomic),
        Commands::Demo { output } => demo(&output),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "jfif_tool=debug" } else { "jfif_tool=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Wrap a decode error, telling rejected headers apart from I/O failures
fn decode_failure(path: &Path, err: JfifError) -> anyhow::Error {
    let context = if err.is_validation() {
        tracing::warn!(file = %path.display(), error = %err, "Header rejected");
        format!("{} is not a JFIF file", path.display())
    } else {
        format!("failed to read {}", path.display())
    };
    anyhow::Error::new(err).context(context)
}

fn inspect(file: &Path, json: bool) -> Result<()> {
    let mut decoder = JfifDecoder::new();
    let header = decoder
        .decode_file(file)
        .map_err(|e| decode_failure(file, e))?;

    tracing::debug!(
        file = %file.display(),
        length = header.length,
        units = header.units,
        "Header decoded"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&header)?);
    } else {
        println!("{}", header);
    }

    Ok(())
}

fn rewrite(input: &Path, output: &Path, atomic: bool) -> Result<()> {
    let data =
        std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;

    let mut decoder = JfifDecoder::new();
    let (header, trailing) = decoder
        .decode_with_trailing(&data)
        .map_err(|e| decode_failure(input, e))?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        trailing_bytes = trailing.len(),
        atomic,
        "Rewriting"
    );

    let encoder = JfifEncoder::new(EncoderOptions::new().atomic(atomic));
    encoder
        .encode_file(&header, trailing, output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(())
}

fn demo(output: &Path) -> Result<()> {
    let mut decoder = JfifDecoder::new();
    let header = decoder.decode(&DEMO_HEADER).context("sample header rejected")?;
    tracing::debug!(%header, "Sample header decoded");

    JfifEncoder::default()
        .encode_file(&header, &[], output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("JPEG file written successfully");
    Ok(())
}
