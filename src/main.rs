//! `vocalsplit` - per-vocalist line and word shares for song lyrics.
//!
//! Usage: vocalsplit [--json] [--sanitize] [--album] [--out DIR] <PATH>

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use vocalsplit::config::{Config, ReportFormat};
use vocalsplit::pipeline::{album_summary, analyze_all};
use vocalsplit::report::{render_album_text, render_json, render_text, write_report};
use vocalsplit::source::source_for;

const USAGE: &str = "Usage: vocalsplit [--json] [--sanitize] [--album] [--out DIR] <PATH>";

/// Command-line options, layered over [`Config`].
struct Args {
    path: PathBuf,
    json: bool,
    sanitize: bool,
    album: bool,
    out: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut path = None;
    let mut json = false;
    let mut sanitize = false;
    let mut album = false;
    let mut out = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--sanitize" => sanitize = true,
            "--album" => album = true,
            "--out" => {
                let dir = args.next().context("--out requires a directory")?;
                out = Some(PathBuf::from(dir));
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other if other.starts_with("--") => bail!("Unknown option {other}\n{USAGE}"),
            other => path = Some(PathBuf::from(other)),
        }
    }

    let path = path.with_context(|| format!("Missing lyrics path\n{USAGE}"))?;
    Ok(Args { path, json, sanitize, album, out })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let config = Config::load().context("Failed to load configuration")?;
    let format = if args.json { ReportFormat::Json } else { config.format };
    let output_dir = args.out.unwrap_or_else(|| config.output_dir.clone());

    let source = source_for(&args.path);
    tracing::info!("Reading lyrics with {}", source.name());
    let songs = source
        .load()
        .with_context(|| format!("Failed to load lyrics from {}", args.path.display()))?;
    if songs.is_empty() {
        bail!("No lyric files found at {}", args.path.display());
    }

    let reports = analyze_all(&songs, args.sanitize || config.sanitize);

    match format {
        ReportFormat::Text => {
            if args.album {
                let title = args
                    .path
                    .file_name()
                    .map_or_else(|| "Album".to_string(), |n| n.to_string_lossy().into_owned());
                print!("{}", render_album_text(&title, &album_summary(&reports)));
            } else {
                for report in &reports {
                    println!("{}", render_text(&report.title, &report.summary));
                }
            }
        }
        ReportFormat::Json => {
            for report in &reports {
                write_report(&output_dir, &report.title, format, &render_json(report)?)?;
            }
            if args.album {
                write_report(&output_dir, "album", format, &render_json(&album_summary(&reports))?)?;
            }
            println!("Reports written to {}", output_dir.display());
        }
    }

    Ok(())
}
