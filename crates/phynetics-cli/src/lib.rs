// phynetics-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};

use anyhow::Context;
use clap::Args;
use phynetics_core::enums::TokenKind;
use tracing_subscriber::EnvFilter;

/// Verbosity flags shared by every tool.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LogArgs {
    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl LogArgs {
    /// Log level selected by the flags.
    pub fn level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Install the tracing subscriber on stderr. `RUST_LOG` overrides the flags.
pub fn init_logging(args: &LogArgs) {
    let level = args.level();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("phynetics_cs={level},phynetics_cli={level},warn"))
        }))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Read stdin to the end, one entry per line, keeping empty lines.
pub fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("failed to read stdin")
}

/// Upper-case label of a token kind, as printed by the tokenizer tool.
pub fn kind_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Word => "WORD",
        TokenKind::Punctuation => "PUNCTUATION",
        TokenKind::Whitespace => "WHITESPACE",
    }
}

/// Make control whitespace visible in single-line output.
pub fn escape_whitespace(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_from_flags() {
        assert_eq!(LogArgs::default().level(), "warn");
        assert_eq!(
            LogArgs {
                verbose: 1,
                quiet: false
            }
            .level(),
            "debug"
        );
        assert_eq!(
            LogArgs {
                verbose: 3,
                quiet: false
            }
            .level(),
            "trace"
        );
        assert_eq!(
            LogArgs {
                verbose: 0,
                quiet: true
            }
            .level(),
            "error"
        );
    }

    #[test]
    fn kind_labels() {
        assert_eq!(kind_label(TokenKind::Word), "WORD");
        assert_eq!(kind_label(TokenKind::Whitespace), "WHITESPACE");
    }

    #[test]
    fn escapes_control_whitespace() {
        assert_eq!(escape_whitespace("a\tb\r\n"), "a\\tb\\r\\n");
        assert_eq!(escape_whitespace("  "), "  ");
    }
}
