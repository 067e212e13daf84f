//! Merkle proof test vector generator
//!
//! Writes the valid and the invalid vectors of one proof kind to two JSON
//! files. Argument errors and write errors are both logged and exit with a
//! failure status; `--help` and `--version` print and exit successfully.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use merkle_vectors::sink;
use merkle_vectors::{ConsistencyRecord, InclusionRecord, TestVector};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "merkle-vectors")]
#[command(about = "Generate RFC 6962 inclusion and consistency proof test vectors")]
#[command(version)]
struct Cli {
    /// Which proof vectors to generate
    #[arg(value_enum)]
    kind: Kind,

    /// File name to store valid JSON test vectors
    #[arg(long, value_parser = non_empty_path)]
    valid_file: PathBuf,

    /// File name to store invalid JSON test vectors
    #[arg(long, value_parser = non_empty_path)]
    invalid_file: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Inclusion,
    Consistency,
}

fn non_empty_path(s: &str) -> Result<PathBuf, String> {
    if s.is_empty() {
        return Err("path must not be empty".to_string());
    }
    Ok(PathBuf::from(s))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match try_main(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            e.print()?;
            return Ok(());
        }
        Err(e) => anyhow::bail!("{}", e.render().to_string().trim_end()),
    };
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    match cli.kind {
        Kind::Inclusion => generate::<InclusionRecord>(&cli.valid_file, &cli.invalid_file),
        Kind::Consistency => generate::<ConsistencyRecord>(&cli.valid_file, &cli.invalid_file),
    }
}

fn generate<T: TestVector>(valid_file: &Path, invalid_file: &Path) -> Result<()> {
    write_vectors(valid_file, T::valid(), T::KIND, "valid")?;
    write_vectors(invalid_file, &T::invalid(), T::KIND, "invalid")
}

fn write_vectors<T: TestVector>(path: &Path, records: &[T], kind: &str, set: &str) -> Result<()> {
    sink::save(path, records)
        .with_context(|| format!("failed to write {} {} vectors to {}", set, kind, path.display()))?;
    tracing::info!(path = %path.display(), records = records.len(), kind, set, "Wrote test vectors");
    Ok(())
}
