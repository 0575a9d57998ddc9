// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Utility functions for output formatting.

use std::path::Path;
use url::Url;

use super::errors::{ReportError, ReportResult};

/// Bytes to kilobytes, rounded to two decimals.
#[must_use]
pub(crate) fn bytes_to_kb(bytes: u64) -> f64 {
    round2(bytes as f64 / 1024.0)
}

#[must_use]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a kilobyte value with exactly two decimals.
#[must_use]
pub(crate) fn format_kb(kb: f64) -> String {
    format!("{kb:.2}")
}

/// Build a `file://` URI for an absolute path.
///
/// # Errors
/// Returns an error if the path is not absolute.
pub(crate) fn file_uri(path: &Path) -> ReportResult<String> {
    Url::from_file_path(path)
        .map(String::from)
        .map_err(|()| ReportError::InvalidOutputPath {
            path: path.to_path_buf(),
        })
}
