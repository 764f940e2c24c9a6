// phynetics-tokenize: Tokenize text from stdin.
//
// Reads text from stdin and prints tokens with their kinds and character
// spans. With --graphemes, word tokens are followed by their normalized
// graphemes.
//
// Usage:
//   phynetics-tokenize [OPTIONS]

use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;
use phynetics_cli::{LogArgs, escape_whitespace, init_logging, kind_label};
use phynetics_cs::Normalizer;
use phynetics_cs::tokenizer::tokenize;

#[derive(Debug, Parser)]
#[command(name = "phynetics-tokenize", version, about = "Tokenize Czech text")]
struct Cli {
    /// Also print the normalized graphemes of every word
    #[arg(long)]
    graphemes: bool,

    /// Print tokens as a JSON array
    #[arg(long, conflicts_with = "graphemes")]
    json: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log);

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let tokens = tokenize(&input);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &tokens).context("failed to serialize tokens")?;
        writeln!(out)?;
        return out.flush().context("failed to write output");
    }

    let normalizer = Normalizer::default();
    for token in &tokens {
        writeln!(
            out,
            "{:13} [{:>4}..{:>4}]: {}",
            kind_label(token.kind),
            token.span.start,
            token.span.end,
            escape_whitespace(&token.text)
        )?;
        if cli.graphemes && token.is_word() {
            let graphemes: Vec<String> = normalizer
                .normalize(&token.text)
                .iter()
                .map(|g| g.surface())
                .collect();
            writeln!(out, "{:13}   {}", "", graphemes.join(" "))?;
        }
    }
    out.flush().context("failed to write output")
}
