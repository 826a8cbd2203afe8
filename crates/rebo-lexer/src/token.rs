use std::fmt;

use serde::Serialize;

use crate::location::Location;

/// Lexical categories of Rebo source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Identifiers
    UpperIdentifier,
    LowerIdentifier,

    // Literals
    /// Reserved for the char literal lexer; never produced yet.
    LiteralChar,
    /// Reserved for the string literal lexer; never produced yet.
    LiteralString,
    LiteralInt,

    // Keywords
    KeywordTrue,
    KeywordFalse,
    KeywordAs,

    // Punctuation
    Comma,
    Minus,

    // End of input
    EndOfStream,

    /// A single character no rule recognises.
    Error,
}

impl TokenKind {
    /// Stable human-readable name, used by diagnostics and the CLI.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::UpperIdentifier => "UpperIdentifier",
            TokenKind::LowerIdentifier => "LowerIdentifier",
            TokenKind::LiteralChar => "LiteralChar",
            TokenKind::LiteralString => "LiteralString",
            TokenKind::LiteralInt => "LiteralInt",
            TokenKind::KeywordTrue => "True",
            TokenKind::KeywordFalse => "False",
            TokenKind::KeywordAs => "As",
            TokenKind::Comma => "Comma",
            TokenKind::Minus => "Minus",
            TokenKind::EndOfStream => "EndOfStream",
            TokenKind::Error => "Error",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::KeywordTrue | TokenKind::KeywordFalse | TokenKind::KeywordAs
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Look up a fully scanned identifier in the keyword table.
///
/// Matching is exact and case-sensitive: `True` is a keyword, `true` is not.
pub fn keyword(lexeme: &str) -> Option<TokenKind> {
    match lexeme {
        "as" => Some(TokenKind::KeywordAs),
        "True" => Some(TokenKind::KeywordTrue),
        "False" => Some(TokenKind::KeywordFalse),
        _ => None,
    }
}

/// A token produced by the Rebo scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: impl Into<Location>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.lexeme, self.location)
    }
}
