// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Machine-readable summary of a rendered report.

use serde::Serialize;

use super::manifest::Manifest;
use super::totals::BuildTotals;
use super::RenderedReport;

#[derive(Debug, Serialize)]
pub struct BuildSummary<'a> {
    hash: &'a str,
    #[serde(flatten)]
    totals: BuildTotals,
    /// Absent when the output directory did not exist.
    manifest: Option<&'a Manifest>,
}

impl<'a> BuildSummary<'a> {
    #[must_use]
    pub fn new(hash: &'a str, report: &'a RenderedReport) -> Self {
        Self {
            hash,
            totals: report.totals,
            manifest: report.manifest.as_ref(),
        }
    }
}
