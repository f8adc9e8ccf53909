//! Replay CLI: renders stored payload files as a search response on stdout.
//!
//! ```text
//! replay <format> [--fl=<field list>] <store-file>...
//! ```
//!
//! Each file becomes one matched document (score 1.0) whose store field holds
//! the file contents. Settings come from `REPLAY_*` environment variables.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use mimalloc::MiMalloc;

use replay::config::Config;
use replay::document::{MatchedDocument, QueryResponse};
use replay::writer::WriterRegistry;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: replay <format> [--fl=<field list>] <store-file>...";

struct Args {
    format: String,
    fl: Option<String>,
    files: Vec<PathBuf>,
}

fn parse_args(args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut format = None;
    let mut fl = None;
    let mut files = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--fl=") {
            fl = Some(value.to_string());
        } else if arg == "--help" || arg == "-h" {
            bail!(USAGE);
        } else if format.is_none() {
            format = Some(arg);
        } else {
            files.push(PathBuf::from(arg));
        }
    }

    let Some(format) = format else {
        bail!(USAGE);
    };

    Ok(Args { format, fl, files })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        core = %config.core_name,
        format = %args.format,
        files = args.files.len(),
        "Replaying stored payloads"
    );

    let documents = args
        .files
        .iter()
        .map(|path| {
            MatchedDocument::from_store_file(path, &config.store_field)
                .with_context(|| format!("failed to read {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let registry = WriterRegistry::with_defaults(&config);
    let fields = config.field_list(args.fl.as_deref());
    let response = QueryResponse::new(documents);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    registry.write(&args.format, &response, &fields, &mut out)?;
    out.flush()?;

    Ok(())
}
