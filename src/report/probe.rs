// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Filesystem existence checks used to gate the manifest.

use std::io;
use std::path::Path;

/// Synchronous existence check.
///
/// `Ok(false)` means "not there"; an `Err` is any other failure and is not
/// treated as absence.
pub trait FileProbe {
    /// # Errors
    /// Returns an error if existence cannot be determined.
    fn exists(&self, path: &Path) -> io::Result<bool>;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskProbe;

impl FileProbe for DiskProbe {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }
}
