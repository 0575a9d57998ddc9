// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
mod args;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use args::Args;
use build_reporter::build::{BuildResult, OutputConfig};
use build_reporter::report::{
    BuildSummary, ConsoleTheme, GzipEstimate, MetadataResolver, PackageMetadata, PlainTheme,
    RepaintSink, Reporter, StaticMetadata, TermSink, Tool,
};
use build_reporter::watch::{watch, StatsWatcher};

const WATCH_STATUS: &str = "watching for changes...";

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let config = load_output_config(&args)?;
    let mut sink = TermSink::stdout();

    if args.watch {
        let status = args.status.as_deref().unwrap_or(WATCH_STATUS);
        let watcher = StatsWatcher::new(&args.stats);
        let mut last_result: Option<BuildResult> = None;
        return watch(watcher, Duration::from_millis(args.interval_ms), || {
            // Anything logged to the terminal between repaints would be left
            // behind by the next clear, so read failures go into the status line.
            match BuildResult::from_file(&args.stats) {
                Ok(result) => {
                    let reporter = create_reporter(&args, &result);
                    let failed = reporter.render(&result, &config, Some(status), &mut sink)?;
                    debug!(hash = %result.hash, failed, "Rendered build report");
                    last_result = Some(result);
                }
                Err(e) => match &last_result {
                    Some(result) => {
                        let reporter = create_reporter(&args, result);
                        let status = stale_status(status, &e);
                        reporter.render(result, &config, Some(&status), &mut sink)?;
                    }
                    None => warn!("Skipping unreadable stats: {e:#}"),
                },
            }
            Ok(())
        });
    }

    let result = BuildResult::from_file(&args.stats)?;
    let reporter = create_reporter(&args, &result);
    let report = reporter.report(&result, &config, args.status.as_deref())?;
    if let Some(dest) = &args.summary {
        write_summary_to_file(&BuildSummary::new(&result.hash, &report), dest)?;
    }
    sink.write(&report.text)
        .context("Failed to write report to terminal")?;

    if report.failed() {
        bail!("Build failed with {} error(s)", report.totals.errors);
    }
    Ok(())
}

/// Log to stderr so the report on stdout can be repainted cleanly.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Status shown while the previous report stays on screen because the stats
/// file could not be read.
fn stale_status(status: &str, error: &anyhow::Error) -> String {
    format!("{status}\nshowing previous build, stats unreadable: {error:#}")
}

fn load_output_config(args: &Args) -> Result<OutputConfig> {
    match (&args.config, &args.output_path) {
        (Some(config), _) => OutputConfig::from_file(config),
        (None, Some(output_path)) => Ok(OutputConfig::new(output_path)),
        (None, None) => bail!("Either --config or --output-path is required"),
    }
}

fn create_reporter(args: &Args, result: &BuildResult) -> Reporter {
    let metadata: Box<dyn MetadataResolver> = match &args.compiler_package {
        Some(descriptor) => Box::new(PackageMetadata::new(&args.compiler_name, descriptor)),
        None => {
            let version = args
                .compiler_version
                .clone()
                .or_else(|| result.version.clone());
            Box::new(StaticMetadata::new(Tool::new(&args.compiler_name, version)))
        }
    };

    let reporter = Reporter::new(metadata)
        .with_gzip_estimate(GzipEstimate::new(args.gzip_ratio));
    if args.plain {
        reporter.with_theme(PlainTheme)
    } else if args.ascii {
        reporter.with_theme(ConsoleTheme::new().ascii())
    } else {
        reporter
    }
}

/// Write the report summary to a file.
///
/// # Errors
/// Returns an error if the summary cannot be serialized to JSON or if the file cannot be created.
fn write_summary_to_file(summary: &BuildSummary<'_>, dest: &Path) -> Result<()> {
    info!(file = %dest.display(), "Writing summary");
    let file = File::create(dest)
        .with_context(|| format!("Failed to create JSON summary file: {}", dest.display()))?;
    serde_json::to_writer_pretty(file, summary)
        .with_context(|| format!("Failed to serialize summary to JSON: {}", dest.display()))?;
    Ok(())
}
