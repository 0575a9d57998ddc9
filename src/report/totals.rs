// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Error and warning totals for a build result.

use serde::Serialize;

use crate::build::BuildResult;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildTotals {
    pub errors: usize,
    pub warnings: usize,
    /// The build failed iff it reported at least one error.
    pub failed: bool,
}

impl BuildTotals {
    #[must_use]
    pub fn count(result: &BuildResult) -> Self {
        let errors = result.errors.len();
        Self {
            errors,
            warnings: result.warnings.len(),
            failed: errors > 0,
        }
    }
}
