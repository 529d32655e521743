use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serial_code::{CodeConfig, generate_batch, verify_code};

mod config;
mod export;

use config::FileConfig;

/// Exit status when any code fails its checksum.
const EXIT_INVALID: u8 = 1;
/// Exit status for malformed input or configuration.
const EXIT_USAGE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "serial-keys",
    version,
    about = "Generate and verify offline serial codes"
)]
struct Cli {
    /// Path to a YAML file overriding the code layout or key.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate new serial codes, one per line.
    Generate {
        /// Number of codes to generate.
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
        /// Also save the codes to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Check serial codes against their checksum.
    Verify {
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

enum Outcome {
    Valid,
    Invalid,
    Malformed,
}

fn main() -> ExitCode {
    // Enable basic logging; set RUST_LOG=info for visibility.
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => FileConfig::load(path)?.into_code_config()?,
        None => CodeConfig::default(),
    };

    match cli.cmd {
        Commands::Generate { count, csv } => {
            let codes = generate_batch(&config, count as usize)?;
            let mut out = io::stdout().lock();
            for code in &codes {
                writeln!(out, "{code}")?;
            }
            if let Some(path) = csv {
                export::write_csv(&path, &codes)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Verify { codes } => {
            let mut out = io::stdout().lock();
            let mut worst = Outcome::Valid;
            for code in &codes {
                match verify_code(code, &config.key) {
                    Ok(true) => writeln!(out, "{code}: valid")?,
                    Ok(false) => {
                        writeln!(out, "{code}: invalid")?;
                        if matches!(worst, Outcome::Valid) {
                            worst = Outcome::Invalid;
                        }
                    }
                    Err(e) if e.is_input_error() => {
                        writeln!(out, "{code}: malformed ({e})")?;
                        worst = Outcome::Malformed;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Ok(match worst {
                Outcome::Valid => ExitCode::SUCCESS,
                Outcome::Invalid => ExitCode::from(EXIT_INVALID),
                Outcome::Malformed => ExitCode::from(EXIT_USAGE),
            })
        }
    }
}
