use clap::{Parser, Subcommand};
use rebo_lexer::{LexerError, Scanner, Token};
use std::io::Read;
use std::path::Path;
use std::sync::Once;

#[derive(Parser)]
#[command(name = "rebo")]
#[command(about = "Rebo language tokenizer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a source file
    Tokens {
        /// Input file, or `-` for standard input
        path: String,

        /// Emit tokens as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Check a source file for lexical errors
    Check {
        /// Input file, or `-` for standard input
        path: String,
    },
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber when `RUST_LOG` is set,
/// e.g. `RUST_LOG=rebo_lexer=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Tokens { path, json } => cmd_tokens(&path, json),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut source) {
            eprintln!("Error reading standard input: {e}");
            std::process::exit(1);
        }
        return source;
    }

    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_tokens(path: &str, json: bool) {
    let source = read_source(path);
    tracing::debug!(path, bytes = source.len(), "tokenizing");
    let tokens = Scanner::tokenize(&source);

    if json {
        match render_json(&tokens) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error encoding tokens: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_tokens(&tokens));
    }
}

fn cmd_check(path: &str) {
    let source = read_source(path);
    let errors = LexerError::collect(&Scanner::tokenize(&source));

    if errors.is_empty() {
        eprintln!("OK: {path}");
        return;
    }

    for e in &errors {
        eprintln!("{path}: {e}");
    }
    std::process::exit(1);
}

/// One token per line: location, kind, quoted lexeme.
fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{:<12} {:<16} {:?}\n",
            token.location.to_string(),
            token.kind.display_name(),
            token.lexeme
        ));
    }
    out
}

fn render_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}
