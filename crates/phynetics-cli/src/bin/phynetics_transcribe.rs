// phynetics-transcribe: Transcribe Czech sentences phonetically.
//
// Transcribes each SENTENCE argument, or every line of stdin when no
// argument is given, and prints one transcription per line.
//
// Usage:
//   phynetics-transcribe [OPTIONS] [SENTENCE]...
//
// Options:
//   --cross-word    Assimilate voicing across word boundaries
//   --hard-y        Never palatalize before y/ý
//   --no-lexicon    Skip the lexical exception list
//   --json          Print each transcription as a JSON object
//   -v, -vv         Log rule applications to stderr
//   -q              Errors only

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use phynetics_cli::{LogArgs, init_logging, read_stdin_lines};
use phynetics_cs::{Transcriber, TranscriberOptions};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "phynetics-transcribe", version, about = "Transcribe Czech sentences phonetically")]
struct Cli {
    /// Sentences to transcribe; reads stdin line by line when omitted
    sentences: Vec<String>,

    /// Let word-final consonants assimilate to the next word's voicing
    #[arg(long)]
    cross_word: bool,

    /// Treat y/ý as hard vowels that never palatalize d, t, n
    #[arg(long)]
    hard_y: bool,

    /// Do not apply the lexical exception list
    #[arg(long)]
    no_lexicon: bool,

    /// Print one JSON object per transcription
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    log: LogArgs,
}

impl Cli {
    fn options(&self) -> TranscriberOptions {
        TranscriberOptions {
            cross_word_assimilation: self.cross_word,
            hard_y: self.hard_y,
            use_lexicon: !self.no_lexicon,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log);

    let options = cli.options();
    debug!(?options, "transcriber options");
    let transcriber = Transcriber::new(options);

    let sentences = if cli.sentences.is_empty() {
        read_stdin_lines()?
    } else {
        cli.sentences.clone()
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for sentence in &sentences {
        let transcription = transcriber.transcribe(sentence);
        if cli.json {
            serde_json::to_writer(&mut out, &transcription)
                .context("failed to serialize transcription")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{transcription}")?;
        }
    }
    out.flush().context("failed to write output")?;
    Ok(())
}
