use std::fmt;

use serde::Serialize;

/// Kind of a lexed token. The token's payload carries the kind-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    EndOfSource,
    Keyword,
    Identifier,
    BooleanLiteral,
    NullLiteral,
    NumericLiteral,
    StringLiteral,
    Punctuator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::EndOfSource => "EOS",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENT",
            TokenKind::BooleanLiteral => "BOOLEAN",
            TokenKind::NullLiteral => "NULL",
            TokenKind::NumericLiteral => "NUMBER",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Punctuator => "PUNCT",
        };
        write!(f, "{}", s)
    }
}

macro_rules! define_tokens {
    (
        punctuators { $($p_name:ident => $p_str:literal),* $(,)? }
        keywords { $($kw_name:ident => $kw_str:literal),* $(,)? }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum Punctuator {
            $($p_name,)*
        }

        impl Punctuator {
            pub const ALL: &'static [Punctuator] = &[$(Punctuator::$p_name,)*];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Punctuator::$p_name => $p_str,)*
                }
            }
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum Keyword {
            $($kw_name,)*
        }

        impl Keyword {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$kw_name => $kw_str,)*
                }
            }
        }

        /// Called by the lexer to check if a word is a reserved keyword
        pub fn lookup_keyword(word: &str) -> Option<Keyword> {
            match word {
                $($kw_str => Some(Keyword::$kw_name),)*
                _ => None,
            }
        }
    };
}

// ════════════════════════════════════════════════════════════════════════════
//  TOKEN DEFINITIONS
// ════════════════════════════════════════════════════════════════════════════

define_tokens! {
    punctuators {
        // Delimiters
        LBrace    => "{",
        RBrace    => "}",
        LParen    => "(",
        RParen    => ")",
        LBracket  => "[",
        RBracket  => "]",
        Semicolon => ";",
        Comma     => ",",
        Dot       => ".",
        Colon     => ":",

        // Relational and equality
        Lt          => "<",
        Gt          => ">",
        LtEq        => "<=",
        GtEq        => ">=",
        EqEq        => "==",
        NotEq       => "!=",
        StrictEq    => "===",
        StrictNotEq => "!==",

        // Arithmetic
        Plus    => "+",
        Minus   => "-",
        Star    => "*",
        Slash   => "/",
        Percent => "%",

        // Bitwise and logical
        Amp      => "&",
        Pipe     => "|",
        Caret    => "^",
        Bang     => "!",
        Tilde    => "~",
        AmpAmp   => "&&",
        PipePipe => "||",
        Shl      => "<<",
        Shr      => ">>",
        UShr     => ">>>",

        // Assignment
        Assign        => "=",
        PlusAssign    => "+=",
        MinusAssign   => "-=",
        StarAssign    => "*=",
        SlashAssign   => "/=",
        PercentAssign => "%=",
    }

    keywords {
        Var      => "var",
        Let      => "let",
        Const    => "const",
        If       => "if",
        Else     => "else",
        While    => "while",
        Function => "function",
        This     => "this",

        // Reserved, rejected by the parser
        Return     => "return",
        For        => "for",
        Do         => "do",
        Break      => "break",
        Continue   => "continue",
        New        => "new",
        Delete     => "delete",
        In         => "in",
        Instanceof => "instanceof",
        Switch     => "switch",
        Case       => "case",
        Default    => "default",
        Throw      => "throw",
        Try        => "try",
        Catch      => "catch",
        Finally    => "finally",
        Class      => "class",
        Void       => "void",
        With       => "with",
    }
}

impl Punctuator {
    /// Longest punctuator spelled at the start of `input`, with its length.
    pub fn longest_match(input: &[char]) -> Option<(Punctuator, usize)> {
        let mut best: Option<(Punctuator, usize)> = None;
        for &punctuator in Punctuator::ALL {
            let text = punctuator.as_str();
            let len = text.chars().count();
            if len > input.len() || best.is_some_and(|(_, best_len)| best_len >= len) {
                continue;
            }
            if text.chars().zip(input).all(|(a, &b)| a == b) {
                best = Some((punctuator, len));
            }
        }
        best
    }
}

impl fmt::Display for Punctuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn longest_match_prefers_longer_operator() {
        assert_eq!(
            Punctuator::longest_match(&chars("!== b")),
            Some((Punctuator::StrictNotEq, 3))
        );
        assert_eq!(
            Punctuator::longest_match(&chars(">>>=")),
            Some((Punctuator::UShr, 3))
        );
        assert_eq!(
            Punctuator::longest_match(&chars("<x")),
            Some((Punctuator::Lt, 1))
        );
        assert_eq!(Punctuator::longest_match(&chars("@")), None);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(lookup_keyword("while"), Some(Keyword::While));
        assert_eq!(lookup_keyword("While"), None);
        assert_eq!(lookup_keyword("true"), None);
    }
}
