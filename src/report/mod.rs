// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Reporter and public API for rendering build status reports.

mod columns;
mod console;
mod errors;
mod manifest;
mod metadata;
mod probe;
mod sink;
mod summary;
mod theme;
mod totals;
mod utils;

pub use columns::{ColumnLayout, TableColumns};
pub use errors::{ReportError, ReportResult};
pub use manifest::{AssetEntry, GzipEstimate, Manifest};
pub use metadata::{read_version, MetadataResolver, PackageMetadata, StaticMetadata, Tool, ToolVersions};
pub use probe::{DiskProbe, FileProbe};
pub use sink::{RepaintSink, TermSink};
pub use summary::BuildSummary;
pub use theme::{ConsoleTheme, PlainTheme, Symbol, Theme, Tone};
pub use totals::BuildTotals;

use crate::build::{BuildResult, OutputConfig};
use self::console::{compose, ReportParts};

/// A composed report, before it is handed to a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub text: String,
    pub totals: BuildTotals,
    pub manifest: Option<Manifest>,
}

impl RenderedReport {
    #[must_use]
    pub fn failed(&self) -> bool {
        self.totals.failed
    }
}

/// Renders build results into a status block.
///
/// Holds no state between renders; every call recomputes the report from the
/// given result and configuration.
pub struct Reporter {
    metadata: Box<dyn MetadataResolver>,
    probe: Box<dyn FileProbe>,
    layout: Box<dyn ColumnLayout>,
    theme: Box<dyn Theme>,
    gzip: GzipEstimate,
}

impl Reporter {
    /// Create a reporter that checks the real filesystem and styles for the terminal.
    #[must_use]
    pub fn new<M: MetadataResolver + 'static>(metadata: M) -> Self {
        Self {
            metadata: Box::new(metadata),
            probe: Box::new(DiskProbe),
            layout: Box::new(TableColumns::for_terminal()),
            theme: Box::new(ConsoleTheme::new()),
            gzip: GzipEstimate::default(),
        }
    }

    #[must_use]
    pub fn with_probe<P: FileProbe + 'static>(mut self, probe: P) -> Self {
        self.probe = Box::new(probe);
        self
    }

    #[must_use]
    pub fn with_layout<L: ColumnLayout + 'static>(mut self, layout: L) -> Self {
        self.layout = Box::new(layout);
        self
    }

    #[must_use]
    pub fn with_theme<T: Theme + 'static>(mut self, theme: T) -> Self {
        self.theme = Box::new(theme);
        self
    }

    #[must_use]
    pub fn with_gzip_estimate(mut self, gzip: GzipEstimate) -> Self {
        self.gzip = gzip;
        self
    }

    /// Compose the report without writing it anywhere.
    ///
    /// # Errors
    /// Returns an error if tool metadata cannot be resolved, the output path
    /// cannot be resolved, or the filesystem probe fails.
    pub fn report(
        &self,
        result: &BuildResult,
        config: &OutputConfig,
        status: Option<&str>,
    ) -> ReportResult<RenderedReport> {
        let versions = self.metadata.resolve()?;
        let totals = BuildTotals::count(result);

        let output_dir = config
            .resolved_path()
            .map_err(|e| ReportError::ResolveOutputFailed {
                path: config.output_path.clone(),
                source: e,
            })?;
        let manifest = Manifest::build(result, &output_dir, self.probe.as_ref(), self.gzip)?;
        let output_uri = utils::file_uri(&output_dir)?;

        let text = compose(
            self.theme.as_ref(),
            self.layout.as_ref(),
            &ReportParts {
                versions: &versions,
                result,
                totals,
                manifest: manifest.as_ref(),
                output_uri: &output_uri,
                status,
            },
        );
        Ok(RenderedReport {
            text,
            totals,
            manifest,
        })
    }

    /// Compose the report and push it to `sink` in a single write.
    ///
    /// Returns `true` if the build failed.
    ///
    /// # Errors
    /// Returns an error if composing fails or the sink cannot be written.
    pub fn render(
        &self,
        result: &BuildResult,
        config: &OutputConfig,
        status: Option<&str>,
        sink: &mut dyn RepaintSink,
    ) -> ReportResult<bool> {
        let report = self.report(result, config, status)?;
        sink.write(&report.text)
            .map_err(|e| ReportError::SinkFailed { source: e })?;
        Ok(report.failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{Asset, Chunk};
    use std::io;
    use std::path::Path;

    struct LineLayout;

    impl ColumnLayout for LineLayout {
        fn layout(&self, items: &[String]) -> String {
            items.join("\n")
        }
    }

    struct AlwaysExists;

    impl FileProbe for AlwaysExists {
        fn exists(&self, _path: &Path) -> io::Result<bool> {
            Ok(true)
        }
    }

    struct BrokenSink;

    impl RepaintSink for BrokenSink {
        fn write(&mut self, _text: &str) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn reporter() -> Reporter {
        let metadata = StaticMetadata::new(Tool::new("typescript", Some("1.1.1".to_string())))
            .with_reporter(Tool::new("cli-build-app", Some("9.9.9".to_string())));
        Reporter::new(metadata)
            .with_probe(AlwaysExists)
            .with_layout(LineLayout)
            .with_theme(PlainTheme)
    }

    fn result(errors: &[&str]) -> BuildResult {
        BuildResult {
            hash: "hash".to_string(),
            version: None,
            assets: vec![Asset {
                name: "assetOne.js".to_string(),
                size: 1000,
            }],
            chunks: vec![Chunk {
                names: vec!["chunkOne".to_string()],
            }],
            errors: errors.iter().map(ToString::to_string).collect(),
            warnings: vec![],
        }
    }

    #[test]
    fn test_render_writes_once_and_returns_flag() {
        let mut sink: Vec<String> = Vec::new();
        let failed = reporter()
            .render(&result(&[]), &OutputConfig::new("/dist"), None, &mut sink)
            .unwrap();
        assert!(!failed);
        assert_eq!(sink.len(), 1);
        assert!(sink[0].contains("assetOne.js (0.98kb) / (0.29kb gz)"));
        assert!(sink[0].contains("output at: file:///dist\n"));
    }

    #[test]
    fn test_render_with_errors_returns_true() {
        let mut sink: Vec<String> = Vec::new();
        let failed = reporter()
            .render(&result(&["bad"]), &OutputConfig::new("/dist"), None, &mut sink)
            .unwrap();
        assert!(failed);
        assert!(sink[0].ends_with("The build completed with errors.\n"));
    }

    #[test]
    fn test_sink_failure_propagates() {
        let error = reporter()
            .render(&result(&[]), &OutputConfig::new("/dist"), None, &mut BrokenSink)
            .unwrap_err();
        assert!(matches!(error, ReportError::SinkFailed { .. }));
    }

    #[test]
    fn test_report_keeps_manifest() {
        let report = reporter()
            .report(&result(&[]), &OutputConfig::new("/dist"), None)
            .unwrap();
        let manifest = report.manifest.unwrap();
        assert_eq!(manifest.chunks, vec!["chunkOne"]);
        assert_eq!(manifest.assets.len(), 1);
    }
}
