//! Command-line front end: argument parsing and the stdin→stdout driver.
//!
//! All scanning lives in the `utfscrub` crate; this binary resolves the
//! command line into an immutable [`Operation`], then runs a blocking
//! read-process-write loop over one reused scratch buffer, one physical line
//! at a time. Backpressure comes from the underlying streams.

use std::io::{self, BufWriter, Write};

use anyhow::Context as _;
use bstr::io::BufReadExt as _;
use clap::{Parser, Subcommand, ValueEnum};
use utfscrub::{ConfigError, CountMode, FilterOptions, Operation, StreamFilter};

/// Initial scratch reservation; lines grow past it without limit.
const SCRATCH_CAPACITY: usize = 4096;

#[derive(Debug, Parser)]
#[command(
    name = "utfscrub",
    version,
    about = "Find, strip, substitute, or tally UTF-8 multi-byte sequences in a byte stream",
    long_about = "Reads standard input line by line and scans for UTF-8 multi-byte \
                  sequences. Without a command, behaves like `search`: each affected \
                  line is reported with a marker line pointing at every sequence."
)]
struct Cli {
    /// Label end-of-stream summaries; for search, emit the total at all
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report each line containing multi-byte sequences, with a marker line (default)
    Search,
    /// Strip multi-byte sequences from the stream
    Delete,
    /// Substitute a single byte for each multi-byte sequence
    Replace {
        /// The byte written in place of each sequence; exactly one ASCII byte
        #[arg(value_parser = substitute_byte)]
        substitute: u8,
    },
    /// Tally multi-byte sequences and report totals at end of stream
    Count {
        /// Which totals to report
        #[arg(value_enum, default_value_t)]
        mode: CountModeArg,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum CountModeArg {
    /// Number of multi-byte sequences
    #[default]
    Chars,
    /// Number of bytes those sequences occupy
    Bytes,
    /// Both totals, bytes first
    Both,
}

impl From<CountModeArg> for CountMode {
    fn from(arg: CountModeArg) -> Self {
        match arg {
            CountModeArg::Chars => Self::Characters,
            CountModeArg::Bytes => Self::Bytes,
            CountModeArg::Both => Self::Both,
        }
    }
}

impl Cli {
    fn operation(&self) -> Operation {
        match self.command {
            None | Some(Command::Search) => Operation::Search,
            Some(Command::Delete) => Operation::Delete,
            Some(Command::Replace { substitute }) => Operation::Replace { substitute },
            Some(Command::Count { mode }) => Operation::Count { mode: mode.into() },
        }
    }
}

/// Validates the substitute spelling through the core so a bad value is a
/// plain argument error (usage printed, non-zero exit).
fn substitute_byte(spec: &str) -> Result<u8, ConfigError> {
    match Operation::replace(spec.as_bytes())? {
        Operation::Replace { substitute } => Ok(substitute),
        _ => unreachable!("replace() only builds Operation::Replace"),
    }
}

/// The read-process-write loop: every physical line through the filter, then
/// the end-of-stream summary.
fn scrub<R, W>(filter: &mut StreamFilter, mut input: R, output: W) -> io::Result<()>
where
    R: io::BufRead,
    W: Write,
{
    let mut writer = BufWriter::new(output);
    let mut scratch = Vec::with_capacity(SCRATCH_CAPACITY);
    input.for_byte_line_with_terminator(|line| {
        scratch.clear();
        filter.feed_line(line, &mut scratch);
        writer.write_all(&scratch)?;
        Ok(true)
    })?;
    scratch.clear();
    filter.finish(&mut scratch);
    writer.write_all(&scratch)?;
    writer.flush()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut filter = StreamFilter::new(cli.operation(), FilterOptions { verbose: cli.verbose });
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    scrub(&mut filter, stdin, stdout).context("filtering standard input")
}
