// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! A build status reporter that renders compiler results as a live terminal report.
//!
//! This crate provides functionality to:
//! - Load compiler stats output and the build's output configuration
//! - Count errors and warnings and decide whether the build failed
//! - List chunks and the assets actually present in the output directory
//! - Render the status block and repaint it in place on every build

pub mod build;
pub mod report;
pub mod watch;

// Re-export key types for convenience
pub use build::{Asset, BuildResult, Chunk, OutputConfig};
pub use report::{RenderedReport, Reporter};
