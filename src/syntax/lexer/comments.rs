//! Whitespace and comment skipping

use crate::diagnostics::{Diagnostic, Span, UNTERMINATED_COMMENT};

use super::{Lexer, is_line_terminator};

impl Lexer {
    /// Skips whitespace, `// line` and `/* block */` comments.
    /// Returns whether a line terminator was crossed.
    pub(super) fn skip_ignorable(&mut self) -> Result<bool, Diagnostic> {
        let mut newline = false;
        loop {
            match self.current_char() {
                Some(ch) if is_line_terminator(ch) => {
                    newline = true;
                    self.index += 1;
                }
                Some(ch) if ch.is_whitespace() => self.index += 1,
                Some('/') if self.peek_char(1) == Some('/') => self.skip_line_comment(),
                Some('/') if self.peek_char(1) == Some('*') => {
                    newline |= self.skip_block_comment()?;
                }
                _ => return Ok(newline),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while self.current_char().is_some_and(|ch| !is_line_terminator(ch)) {
            self.index += 1;
        }
    }

    /// Entry: current char is '/' and the next is '*'.
    /// Block comments do not nest.
    fn skip_block_comment(&mut self) -> Result<bool, Diagnostic> {
        let start = self.index;
        let mut newline = false;
        self.index += 2;

        loop {
            match self.current_char() {
                Some('*') if self.peek_char(1) == Some('/') => {
                    self.index += 2;
                    return Ok(newline);
                }
                Some(ch) => {
                    newline |= is_line_terminator(ch);
                    self.index += 1;
                }
                None => {
                    return Err(Diagnostic::error("UNTERMINATED COMMENT")
                        .with_code(UNTERMINATED_COMMENT)
                        .with_span(Span::new(start, start + 2))
                        .with_message("block comment is never closed")
                        .with_hint("Add `*/` to close the comment."));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::UNTERMINATED_COMMENT;
    use crate::syntax::lexer::Lexer;

    #[test]
    fn comments_are_skipped() {
        let tokens = Lexer::new("a // one\n/* two\n */ b").tokenize().unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].newline_before);
        assert_eq!(tokens[1].start, 20);
    }

    #[test]
    fn unterminated_block_comment_is_fatal() {
        let err = Lexer::new("a /* open").tokenize().unwrap_err();
        assert_eq!(err.code.as_deref(), Some(UNTERMINATED_COMMENT));
        assert_eq!(err.offset(), Some(2));
    }
}
