use tracing::{debug, trace};

use crate::location::{Position, Range};
use crate::token::{keyword, Token, TokenKind};
use crate::LexerError;

/// Rebo source scanner.
///
/// A pull-based tokenizer: the scanner always holds one current token and
/// replaces it on every [`Scanner::advance`]. Construction already positions
/// the scanner on the first token.
///
/// - `Vec<char>` source for index-based navigation, so offsets count characters
/// - Line/column tracking shared by every consumed character
/// - Never fails: unrecognised characters become single-character `Error` tokens
/// - `EndOfStream` is terminal and stable under further `advance` calls
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    offset: usize,
    line: usize,
    column: usize,
    token: Token,
}

impl Scanner {
    /// Create a scanner positioned on the first token of `input`.
    pub fn new(input: &str) -> Self {
        let mut scanner = Self {
            chars: input.chars().collect(),
            offset: 0,
            line: 1,
            column: 1,
            token: Token::new(TokenKind::EndOfStream, "", Position::new(1, 1, 0)),
        };
        scanner.advance();
        scanner
    }

    /// Tokenize the entire input, ending with exactly one `EndOfStream` token.
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(input);
        let mut tokens = Vec::new();

        loop {
            let token = scanner.current_token().clone();
            let done = token.kind == TokenKind::EndOfStream;
            tokens.push(token);
            if done {
                break;
            }
            scanner.advance();
        }

        debug!(
            tokens = tokens.len(),
            errors = tokens.iter().filter(|t| t.kind == TokenKind::Error).count(),
            "tokenized input"
        );
        tokens
    }

    /// Tokenize the entire input, failing on the first unrecognised character.
    pub fn tokenize_strict(input: &str) -> Result<Vec<Token>, LexerError> {
        let tokens = Self::tokenize(input);
        match tokens.iter().find(|t| t.kind == TokenKind::Error) {
            Some(bad) => Err(LexerError::unexpected_character(bad)),
            None => Ok(tokens),
        }
    }

    /// The most recently scanned token.
    pub fn current_token(&self) -> &Token {
        &self.token
    }

    /// Whether the scanner has reached its terminal `EndOfStream` state.
    pub fn is_at_end(&self) -> bool {
        self.token.kind == TokenKind::EndOfStream
    }

    /// Scan the next token, replacing the current one.
    pub fn advance(&mut self) {
        self.skip_whitespace();
        self.token = self.scan_token();
        trace!(
            kind = %self.token.kind,
            lexeme = %self.token.lexeme,
            offset = self.token.location.start().offset,
            line = self.token.location.start().line,
            column = self.token.location.start().column,
            "advance"
        );
    }

    fn scan_token(&mut self) -> Token {
        let start = self.position();

        if self.at_end() {
            return Token::new(TokenKind::EndOfStream, "", start);
        }

        match self.peek() {
            ',' => {
                self.bump();
                Token::new(TokenKind::Comma, ",", start)
            }

            // Sign only binds to an immediately following digit
            '-' if self.peek_next().is_ascii_digit() => {
                self.bump();
                self.scan_digits(start)
            }
            '-' => {
                self.bump();
                Token::new(TokenKind::Minus, "-", start)
            }

            c if c.is_ascii_digit() => self.scan_digits(start),

            c if c.is_ascii_lowercase() => self.scan_identifier(start, TokenKind::LowerIdentifier),
            c if c.is_ascii_uppercase() => self.scan_identifier(start, TokenKind::UpperIdentifier),

            c => {
                self.bump();
                Token::new(TokenKind::Error, c, start)
            }
        }
    }

    // --- Scanners ---

    /// Scan a maximal run of digits into an integer literal. Any sign has
    /// already been consumed and is part of the lexeme.
    fn scan_digits(&mut self, start: Position) -> Token {
        while self.peek().is_ascii_digit() {
            self.bump();
        }
        self.span_token(TokenKind::LiteralInt, start)
    }

    /// Scan an identifier-shaped run, then classify it through the keyword
    /// table. Keywords only match whole runs, so `asx` stays an identifier.
    fn scan_identifier(&mut self, start: Position, fallback: TokenKind) -> Token {
        self.bump();
        while self.peek().is_ascii_alphanumeric() {
            self.bump();
        }

        let mut token = self.span_token(fallback, start);
        if let Some(kind) = keyword(&token.lexeme) {
            token.kind = kind;
        }
        token
    }

    // --- Helpers ---

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), ' ' | '\t' | '\r' | '\n') {
            self.bump();
        }
    }

    /// Token covering everything consumed since `start`.
    fn span_token(&self, kind: TokenKind, start: Position) -> Token {
        let lexeme: String = self.chars[start.offset..self.offset].iter().collect();
        Token::new(kind, lexeme, Range::new(start, self.position()))
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    fn peek(&self) -> char {
        if self.at_end() {
            '\0'
        } else {
            self.chars[self.offset]
        }
    }

    fn peek_next(&self) -> char {
        if self.offset + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.offset + 1]
        }
    }

    /// Consume one character, keeping line and column in step with the offset.
    fn bump(&mut self) {
        if self.at_end() {
            return;
        }
        if self.chars[self.offset] == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += 1;
    }

    fn at_end(&self) -> bool {
        self.offset >= self.chars.len()
    }
}
