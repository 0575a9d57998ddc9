// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use build_reporter::report::GzipEstimate;

#[derive(Parser)]
#[command(name = "build_reporter")]
#[command(version)]
#[command(about = "Renders a live build status report from compiler stats output")]
#[command(group(ArgGroup::new("output").args(["config", "output_path"])))]
pub(crate) struct Args {
    /// Path to the compiler's stats JSON file.
    pub stats: PathBuf,

    /// Bundler-style JSON config file providing `output.path`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the build writes its assets to.
    #[arg(long)]
    pub output_path: Option<PathBuf>,

    /// Compiler name shown in the report header.
    #[arg(long, default_value = "webpack")]
    pub compiler_name: String,

    /// Compiler version shown in the report header.
    #[arg(long, conflicts_with = "compiler_package")]
    pub compiler_version: Option<String>,

    #[arg(
        long,
        long_help = "Path to the compiler's package descriptor (package.json).\n\
                The version is re-read on every render. Without this or\n\
                --compiler-version, the stats file's `version` field is used."
    )]
    pub compiler_package: Option<PathBuf>,

    /// Message appended below the closing banner.
    #[arg(long)]
    pub status: Option<String>,

    /// Estimated gzip size as a fraction of the raw asset size.
    #[arg(long, default_value_t = GzipEstimate::DEFAULT_RATIO)]
    pub gzip_ratio: f64,

    /// Write a JSON summary of the report to this file.
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Disable colors.
    #[arg(long)]
    pub plain: bool,

    /// Use ASCII status symbols.
    #[arg(long)]
    pub ascii: bool,

    /// Keep running and re-render whenever the stats file changes.
    #[arg(long)]
    pub watch: bool,

    /// Poll interval for --watch, in milliseconds.
    #[arg(long, default_value_t = 500)]
    pub interval_ms: u64,
}
