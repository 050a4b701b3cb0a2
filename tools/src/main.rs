use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::CodecLimits;
use glob::Pattern;
use tracing_subscriber::EnvFilter;
use typeio_tools::{
    decode_stream, encode_json, format_decode_pretty, format_inspect_report, inspect_stream,
};

#[derive(Parser)]
#[command(
    name = "typeio-tools",
    version,
    about = "typeio object stream inspection and conversion tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk a stream and print each object with its offset and size.
    Inspect {
        /// Path to the stream bytes, or a directory of streams.
        stream_path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected streams.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected streams (after sorting).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Decode a stream into JSON or a readable listing.
    Decode {
        /// Path to the stream bytes.
        stream_file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
    },
    /// Encode a JSON array of objects into a stream.
    Encode {
        /// Path to the JSON input.
        json_file: PathBuf,
        /// Where to write the encoded bytes.
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let limits = CodecLimits::default();
    match cli.command {
        Command::Inspect {
            stream_path,
            glob,
            sort,
            limit,
        } => {
            if stream_path.is_dir() {
                let entries = collect_stream_entries(&stream_path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in entries {
                    let bytes = fs::read(&entry.path)
                        .with_context(|| format!("read stream {}", entry.path.display()))?;
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    print!("{}", format_inspect_report(&inspect_stream(&bytes, &limits)));
                }
            } else {
                let bytes = fs::read(&stream_path)
                    .with_context(|| format!("read stream {}", stream_path.display()))?;
                print!("{}", format_inspect_report(&inspect_stream(&bytes, &limits)));
            }
        }
        Command::Decode {
            stream_file,
            format,
        } => {
            let bytes = fs::read(&stream_file)
                .with_context(|| format!("read stream {}", stream_file.display()))?;
            let values = decode_stream(&bytes, &limits)?;
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&values).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => {
                    print!("{}", format_decode_pretty(&values));
                }
            }
        }
        Command::Encode { json_file, out } => {
            let json = fs::read_to_string(&json_file)
                .with_context(|| format!("read json {}", json_file.display()))?;
            let bytes = encode_json(&json)?;
            fs::write(&out, &bytes).with_context(|| format!("write stream {}", out.display()))?;
            tracing::info!(path = %out.display(), bytes = bytes.len(), "stream written");
        }
    }
    Ok(())
}

struct StreamEntry {
    path: PathBuf,
    size: u64,
}

fn collect_stream_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<StreamEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(StreamEntry { path, size });
    }
    Ok(entries)
}

fn maybe_sort_entries(
    mut entries: Vec<StreamEntry>,
    sort: Option<InspectSort>,
) -> Vec<StreamEntry> {
    match sort {
        Some(InspectSort::Size) => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        }
        None => {}
    }
    entries
}
