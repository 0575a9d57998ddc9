// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Repaint sinks: terminal regions that replace their previous contents.

use console::{measure_text_width, Term};
use std::io;

/// Receives each rendered report as one atomic write.
pub trait RepaintSink {
    /// # Errors
    /// Returns an error if the text cannot be written.
    fn write(&mut self, text: &str) -> io::Result<()>;
}

/// Records every write, newest last.
impl RepaintSink for Vec<String> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.push(text.to_string());
        Ok(())
    }
}

/// Redraws the report in place on a terminal.
///
/// Each write first clears the rows drawn by the previous write, including
/// rows produced by soft wrapping at the terminal width.
#[derive(Debug)]
pub struct TermSink {
    term: Term,
    drawn_rows: usize,
}

impl TermSink {
    #[must_use]
    pub fn new(term: Term) -> Self {
        Self {
            term,
            drawn_rows: 0,
        }
    }

    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Term::stdout())
    }

    fn terminal_width(&self) -> usize {
        self.term
            .size_checked()
            .map_or(usize::MAX, |(_, columns)| usize::from(columns).max(1))
    }
}

impl RepaintSink for TermSink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        if self.drawn_rows > 0 {
            self.term.clear_last_lines(self.drawn_rows)?;
        }
        self.term.write_str(text)?;
        self.term.flush()?;
        self.drawn_rows = rows_drawn(text, self.terminal_width());
        Ok(())
    }
}

/// Number of terminal rows the cursor moved down while writing `text`.
fn rows_drawn(text: &str, width: usize) -> usize {
    let mut lines: Vec<&str> = text.split('\n').collect();
    // The segment after the final newline is where the cursor rests.
    lines.pop();
    lines
        .into_iter()
        .map(|line| measure_text_width(line).div_ceil(width).max(1))
        .sum()
}
