// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Symbols and colors used to decorate the report.

use console::style;

/// Status symbols prefixed to header lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Info,
    Success,
    Error,
    Warning,
}

/// Semantic text roles; a theme decides how each one looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section labels such as `errors:` and `output at:`.
    Label,
    Alert,
    Caution,
    Success,
    /// Raw asset size.
    Size,
    /// Estimated compressed asset size.
    Compressed,
    Link,
}

pub trait Theme {
    fn symbol(&self, symbol: Symbol) -> &str;
    fn paint(&self, tone: Tone, text: &str) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Symbols {
    info: &'static str,
    success: &'static str,
    error: &'static str,
    warning: &'static str,
}

const UNICODE_SYMBOLS: Symbols = Symbols {
    info: "ℹ",
    success: "✔",
    error: "✖",
    warning: "⚠",
};

// For terminals without unicode support.
const ASCII_SYMBOLS: Symbols = Symbols {
    info: "i",
    success: "√",
    error: "×",
    warning: "‼",
};

impl Symbols {
    fn get(&self, symbol: Symbol) -> &'static str {
        match symbol {
            Symbol::Info => self.info,
            Symbol::Success => self.success,
            Symbol::Error => self.error,
            Symbol::Warning => self.warning,
        }
    }
}

/// Terminal theme backed by `console` styles.
///
/// Styling is applied only when `console` detects color support, unless forced.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleTheme {
    symbols: Symbols,
    force_styling: bool,
}

impl ConsoleTheme {
    #[must_use]
    pub fn new() -> Self {
        Self {
            symbols: UNICODE_SYMBOLS,
            force_styling: false,
        }
    }

    /// Use the ASCII fallback symbols.
    #[must_use]
    pub fn ascii(mut self) -> Self {
        self.symbols = ASCII_SYMBOLS;
        self
    }

    /// Always emit ANSI styling, even when the output is not a terminal.
    #[must_use]
    pub fn force_styling(mut self, force: bool) -> Self {
        self.force_styling = force;
        self
    }
}

impl Default for ConsoleTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for ConsoleTheme {
    fn symbol(&self, symbol: Symbol) -> &str {
        self.symbols.get(symbol)
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        let mut styled = style(text);
        if self.force_styling {
            styled = styled.force_styling(true);
        }
        let styled = match tone {
            Tone::Label | Tone::Size => styled.yellow(),
            Tone::Alert => styled.red(),
            Tone::Caution => styled.black().bright(),
            Tone::Success => styled.green(),
            Tone::Compressed => styled.blue(),
            Tone::Link => styled.cyan().underlined(),
        };
        styled.to_string()
    }
}

/// Undecorated text with unicode symbols, for logs and redirected output.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn symbol(&self, symbol: Symbol) -> &str {
        UNICODE_SYMBOLS.get(symbol)
    }

    fn paint(&self, _tone: Tone, text: &str) -> String {
        text.to_string()
    }
}
