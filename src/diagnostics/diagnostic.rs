use std::{env, fmt};

use super::span::{Span, line_column};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A fatal lexical, syntax or runtime report.
///
/// Diagnostics carry code-point offsets rather than line/column pairs; the
/// line is only resolved when the diagnostic is rendered against its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub title: String,
    pub code: Option<String>,
    pub message: Option<String>,
    pub file: Option<String>,
    pub span: Option<Span>,
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            code: None,
            message: None,
            file: None,
            span: None,
            hints: Vec::new(),
        }
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(title)
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Offset of the first offending code point, if known.
    pub fn offset(&self) -> Option<usize> {
        self.span.map(|span| span.start)
    }

    pub fn render(&self, source: Option<&str>, default_file: Option<&str>) -> String {
        let mut out = String::new();
        let use_color = env::var_os("NO_COLOR").is_none();
        let yellow = "\u{1b}[33m";
        let reset = "\u{1b}[0m";
        let file = self.file.as_deref().or(default_file).unwrap_or("<unknown>");
        let code = self.code.as_deref().unwrap_or("E000");

        if use_color {
            out.push_str(yellow);
        }
        out.push_str(&format!("-- {} -- {} -- [{}]\n", self.title, file, code));
        if use_color {
            out.push_str(reset);
        }

        if let Some(message) = &self.message {
            out.push('\n');
            out.push_str(message);
            out.push('\n');
        }

        if let (Some(span), Some(source)) = (self.span, source) {
            let (line, column) = line_column(source, span.start);
            if let Some(line_text) = source.lines().nth(line - 1) {
                let gutter_width = line.to_string().len();
                let caret_indent = column.min(line_text.chars().count());
                let caret_len = span.len().clamp(1, line_text.chars().count().max(1));
                out.push('\n');
                out.push_str(&format!(
                    "{:>width$} | {}\n",
                    line,
                    line_text,
                    width = gutter_width
                ));
                out.push_str(&format!(
                    "{:>width$} | {}",
                    "",
                    " ".repeat(caret_indent),
                    width = gutter_width
                ));
                if use_color {
                    out.push_str(yellow);
                }
                out.push_str(&"^".repeat(caret_len));
                if use_color {
                    out.push_str(reset);
                }
            }
        } else if let Some(span) = self.span {
            out.push_str(&format!("\nat offset {}", span.start));
        }

        if !self.hints.is_empty() {
            out.push('\n');
            for hint in &self.hints {
                out.push_str(&format!("\nHint: {}", hint));
            }
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = &self.code {
            write!(f, "[{}] ", code)?;
        }
        write!(f, "{}", self.title)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(span) = self.span {
            write!(f, " (at offset {})", span.start)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

pub fn render_diagnostics(
    diagnostics: &[Diagnostic],
    source: Option<&str>,
    default_file: Option<&str>,
) -> String {
    diagnostics
        .iter()
        .map(|diag| diag.render(source, default_file))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_offset() {
        let diag = Diagnostic::error("UNEXPECTED TOKEN")
            .with_code("E100")
            .with_message("expected `;`, found `}`")
            .with_span(Span::new(7, 8));
        assert_eq!(
            diag.to_string(),
            "[E100] UNEXPECTED TOKEN: expected `;`, found `}` (at offset 7)"
        );
        assert_eq!(diag.offset(), Some(7));
    }

    #[test]
    fn render_points_at_source_line() {
        let diag = Diagnostic::error("UNEXPECTED CHARACTER")
            .with_code("E002")
            .with_span(Span::new(12, 13));
        let rendered = diag.render(Some("var a = 1;\nb @ 2;"), Some("test.js"));
        assert!(rendered.contains("test.js"), "{}", rendered);
        assert!(rendered.contains("2 | b @ 2;"), "{}", rendered);
        assert!(rendered.contains("[E002]"), "{}", rendered);
    }
}
