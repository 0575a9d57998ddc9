// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Defines error types raised by the reporter's collaborators.
//!
//! Build errors and warnings are report data and never appear here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations.
pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// Infrastructure failures that propagate out of a render.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to check whether {path:?} exists")]
    ProbeFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read package descriptor: {path:?}")]
    ReadDescriptorFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse package descriptor: {path:?}")]
    ParseDescriptorFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to resolve output path: {path:?}")]
    ResolveOutputFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Output path cannot be expressed as a file URI: {path:?}")]
    InvalidOutputPath { path: PathBuf },
    #[error("Failed to write report to terminal")]
    SinkFailed {
        #[source]
        source: std::io::Error,
    },
}
