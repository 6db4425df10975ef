//! # tallyloc
//!
//! A CLI tool for counting source lines in a directory tree, split into
//! blank, comment and code lines.
//!
//! ## Usage
//!
//! ```bash
//! # Count Java sources under a project
//! tallyloc ./my-project
//!
//! # Count Rust sources, skipping generated code
//! tallyloc . --ext .rs --exclude "**/target/**"
//!
//! # Python-style comments
//! tallyloc scripts --ext .py --comment-marker "#"
//!
//! # Limit the worker pool and log every file
//! tallyloc . --jobs 2 --verbose
//! ```

mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tallyloclib::{scan, CountOptions, FilterConfig, Markers, DEFAULT_SUFFIX};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::render::render_report;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tallyloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count total, blank, comment and code lines of source files in a tree")
        .arg(
            Arg::new("path")
                .help("File or directory to scan")
                .required(true),
        )
        .arg(
            Arg::new("ext")
                .short('x')
                .long("ext")
                .default_value(DEFAULT_SUFFIX)
                .help("File-name suffix to match (case-sensitive)"),
        )
        .arg(
            Arg::new("blank-marker")
                .short('b')
                .long("blank-marker")
                .action(ArgAction::Append)
                .help("Trimmed line treated as blank (can be specified multiple times)"),
        )
        .arg(
            Arg::new("comment-marker")
                .short('c')
                .long("comment-marker")
                .action(ArgAction::Append)
                .help("Prefix marking a comment line (can be specified multiple times)"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("max-depth")
                .short('d')
                .long("max-depth")
                .value_parser(value_parser!(usize))
                .help("Maximum directory depth to descend"),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .value_parser(value_parser!(usize))
                .default_value("0")
                .help("Worker threads for counting (0 = one per CPU)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log every matched and counted file"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new();

    if let Some(suffix) = matches.get_one::<String>("ext") {
        filter = filter.suffix(suffix.as_str());
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    if let Some(depth) = matches.get_one::<usize>("max-depth") {
        filter = filter.max_depth(*depth);
    }

    Ok(filter)
}

/// Build line markers from matches, keeping the defaults for any list not given
fn build_markers(matches: &ArgMatches) -> Markers {
    let mut markers = Markers::default();

    if let Some(blank) = matches.get_many::<String>("blank-marker") {
        markers = markers.with_blank(blank.cloned());
    }

    if let Some(comment) = matches.get_many::<String>("comment-marker") {
        markers = markers.with_comment(comment.cloned());
    }

    markers
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("tallyloc=debug,tallyloclib=debug")
        } else {
            EnvFilter::new("tallyloc=info,tallyloclib=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let path = matches
        .get_one::<String>("path")
        .context("missing path argument")?;

    let options = CountOptions::new()
        .filter(build_filter(matches)?)
        .markers(build_markers(matches))
        .jobs(matches.get_one::<usize>("jobs").copied().unwrap_or(0));

    let report = scan(path, &options)?;

    if report.summary.failed > 0 {
        warn!(
            "{} of {} files could not be read and were counted as empty",
            report.summary.failed, report.summary.file_count
        );
    }
    if report.skipped_entries > 0 {
        warn!(
            "{} entries could not be read and were skipped",
            report.skipped_entries
        );
    }

    print!("{}", render_report(&report));
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    setup_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
