// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Resolves the reporter and compiler tool versions shown in the report header.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::errors::{ReportError, ReportResult};

/// A named tool and its version, if it exposes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    pub version: Option<String>,
}

impl Tool {
    #[must_use]
    pub fn new<N: Into<String>>(name: N, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// This crate, with the version bundled at compile time.
    #[must_use]
    pub fn reporter() -> Self {
        Self::new(
            env!("CARGO_PKG_NAME"),
            Some(env!("CARGO_PKG_VERSION").to_string()),
        )
    }

    /// Version for display; a tool without a version shows as empty.
    #[must_use]
    pub fn display_version(&self) -> &str {
        self.version.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersions {
    pub reporter: Tool,
    pub compiler: Tool,
}

/// Source of the tool versions for the report header.
pub trait MetadataResolver {
    /// # Errors
    /// Returns an error if a version source cannot be read.
    fn resolve(&self) -> ReportResult<ToolVersions>;
}

impl<M: MetadataResolver + ?Sized> MetadataResolver for Box<M> {
    fn resolve(&self) -> ReportResult<ToolVersions> {
        (**self).resolve()
    }
}

/// Versions known up front, e.g. passed on the command line.
#[derive(Debug, Clone)]
pub struct StaticMetadata {
    versions: ToolVersions,
}

impl StaticMetadata {
    #[must_use]
    pub fn new(compiler: Tool) -> Self {
        Self {
            versions: ToolVersions {
                reporter: Tool::reporter(),
                compiler,
            },
        }
    }

    /// Override the reporter entry.
    #[must_use]
    pub fn with_reporter(mut self, reporter: Tool) -> Self {
        self.versions.reporter = reporter;
        self
    }
}

impl MetadataResolver for StaticMetadata {
    fn resolve(&self) -> ReportResult<ToolVersions> {
        Ok(self.versions.clone())
    }
}

/// Reads the compiler version from its installed package descriptor on each resolve.
#[derive(Debug, Clone)]
pub struct PackageMetadata {
    compiler_name: String,
    descriptor: PathBuf,
}

impl PackageMetadata {
    #[must_use]
    pub fn new<N: Into<String>, P: Into<PathBuf>>(compiler_name: N, descriptor: P) -> Self {
        Self {
            compiler_name: compiler_name.into(),
            descriptor: descriptor.into(),
        }
    }
}

impl MetadataResolver for PackageMetadata {
    fn resolve(&self) -> ReportResult<ToolVersions> {
        let version = read_version(&self.descriptor)?;
        Ok(ToolVersions {
            reporter: Tool::reporter(),
            compiler: Tool::new(self.compiler_name.clone(), version),
        })
    }
}

#[derive(Deserialize)]
struct PackageDescriptor {
    version: Option<String>,
}

/// Read the `version` field of a package descriptor JSON file.
///
/// A descriptor without a version yields `None`.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn read_version(path: &Path) -> ReportResult<Option<String>> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::ReadDescriptorFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    let descriptor: PackageDescriptor =
        serde_json::from_str(&content).map_err(|e| ReportError::ParseDescriptorFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    debug!(descriptor = %path.display(), version = ?descriptor.version, "Read package version");
    Ok(descriptor.version)
}
