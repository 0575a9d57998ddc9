// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Output configuration: where the build writes its assets.

use anyhow::{Context, Result};
use path_clean::PathClean;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Output configuration for a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory the assets are expected to reside in.
    pub output_path: PathBuf,
}

// Bundler-style config documents nest the path under `output`.
#[derive(Deserialize)]
struct ConfigDocument {
    output: OutputSection,
}

#[derive(Deserialize)]
struct OutputSection {
    path: PathBuf,
}

impl OutputConfig {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Read the output configuration from a JSON config file of the form
    /// `{ "output": { "path": "..." } }`.
    ///
    /// A relative output path is taken relative to the config file's directory.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or has no `output.path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let document: ConfigDocument = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let output_path = if document.output.path.is_absolute() {
            document.output.path
        } else {
            path.parent()
                .unwrap_or_else(|| Path::new("."))
                .join(document.output.path)
        };
        Ok(Self::new(output_path))
    }

    /// Absolute, lexically cleaned output path.
    ///
    /// # Errors
    /// Returns an error if the path is relative and the current directory is unavailable.
    pub fn resolved_path(&self) -> std::io::Result<PathBuf> {
        if self.output_path.is_absolute() {
            Ok(self.output_path.clean())
        } else {
            Ok(std::env::current_dir()?.join(&self.output_path).clean())
        }
    }
}
