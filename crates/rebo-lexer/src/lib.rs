//! Rebo Lexer
//!
//! Turns Rebo source text into a stream of classified tokens, each tagged
//! with its source location. The scanner is pull-based: it holds one current
//! token and produces the next on demand, and it never fails. Unrecognised
//! characters come out as `Error` tokens and scanning carries on.
//!
//! # Example
//!
//! ```
//! use rebo_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("Pair as, -1");
//! assert_eq!(scanner.current_token().kind, TokenKind::UpperIdentifier);
//! scanner.advance();
//! assert_eq!(scanner.current_token().kind, TokenKind::KeywordAs);
//! ```

pub mod location;
pub mod scanner;
pub mod token;

pub use location::{Location, Position, Range};
pub use scanner::Scanner;
pub use token::{keyword, Token, TokenKind};

/// Lexer error with position information, built from an `Error` token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Lexer error at line {line}, column {column}: {message}")]
pub struct LexerError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl LexerError {
    /// Describe an unrecognised character at the token's start.
    pub fn unexpected_character(token: &Token) -> Self {
        let start = token.location.start();
        Self {
            message: format!("Unexpected character: '{}'", token.lexeme),
            line: start.line,
            column: start.column,
            offset: start.offset,
        }
    }

    /// Every `Error` token in `tokens`, as lexer errors in source order.
    pub fn collect(tokens: &[Token]) -> Vec<LexerError> {
        tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Error)
            .map(Self::unexpected_character)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        let token = Token::new(TokenKind::Error, "@", Position::new(3, 7, 20));
        let err = LexerError::unexpected_character(&token);
        assert_eq!(
            err.to_string(),
            "Lexer error at line 3, column 7: Unexpected character: '@'"
        );
        assert_eq!(err.offset, 20);
    }

    #[test]
    fn test_collect_errors_in_order() {
        let errors = LexerError::collect(&Scanner::tokenize("a ! b\n?"));
        assert_eq!(errors.len(), 2);
        assert_eq!((errors[0].line, errors[0].column), (1, 3));
        assert_eq!((errors[1].line, errors[1].column), (2, 1));
        assert!(errors[1].message.contains("'?'"));
    }

    #[test]
    fn test_collect_clean_input() {
        assert!(LexerError::collect(&Scanner::tokenize("Foo, bar")).is_empty());
    }
}
