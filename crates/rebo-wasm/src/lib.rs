//! WASM bindings for the Rebo tokenizer.
//!
//! Exposes `tokenize()` and `check()` to JavaScript via wasm-bindgen.

use rebo_lexer::{LexerError, Scanner};
use wasm_bindgen::prelude::*;

/// Tokenize Rebo source.
///
/// Returns a JS array of `{ kind, lexeme, location }` objects, ending with
/// an `EndOfStream` token. Unrecognised characters appear as `Error` tokens.
#[wasm_bindgen]
pub fn tokenize(source: &str) -> Result<JsValue, JsError> {
    let tokens = Scanner::tokenize(source);
    serde_wasm_bindgen::to_value(&tokens).map_err(|e| JsError::new(&e.to_string()))
}

/// Check Rebo source for lexical errors.
///
/// Throws a JS error describing the first unrecognised character.
#[wasm_bindgen]
pub fn check(source: &str) -> Result<(), JsError> {
    native_check(source).map_err(|e| JsError::new(&e.to_string()))
}

fn native_check(source: &str) -> Result<(), LexerError> {
    Scanner::tokenize_strict(source).map(|_| ())
}

/// Get the tokenizer version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
