//! Line transform layer: the four operations over one line at a time.
//!
//! [`StreamFilter`] is fed physical lines (terminator included when present)
//! and appends any output for that line to a caller-owned scratch buffer.
//! The four per-operation routines share the same scanning skeleton: walk the
//! line content byte by byte, hand every high-bit byte to the recognizer,
//! advance by the consumed length, and abandon the remainder of the line when
//! the recognizer reports truncation, leaving whatever was already written
//! in place and carrying on with the next line.

mod count;
mod delete;
mod mark;
mod replace;

use alloc::{format, vec::Vec};

use crate::config::{CountMode, FilterOptions, Operation};

/// Running totals across the whole stream.
///
/// Accumulated by the counting operations ([`Operation::Search`] tallies
/// sequences, [`Operation::Count`] tallies both), read once at end of
/// stream. Truncated partial sequences contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Multi-byte sequences recognized.
    pub sequences: u64,
    /// Bytes those sequences occupied.
    pub bytes: u64,
}

/// One configured pass over a byte stream, one line at a time.
///
/// Feed every physical line through [`feed_line`](Self::feed_line), then call
/// [`finish`](Self::finish) once for the end-of-stream summary:
///
/// ```
/// use utfscrub::{CountMode, FilterOptions, Operation, StreamFilter};
///
/// let mut filter = StreamFilter::new(
///     Operation::Count { mode: CountMode::Characters },
///     FilterOptions::default(),
/// );
/// let mut out = Vec::new();
/// filter.feed_line("h\u{e9}llo\n".as_bytes(), &mut out);
/// assert!(out.is_empty());
/// filter.finish(&mut out);
/// assert_eq!(out, b"1\n");
/// ```
#[derive(Debug)]
pub struct StreamFilter {
    operation: Operation,
    options: FilterOptions,
    line_no: u64,
    totals: Totals,
    // Marker scratch for the search operation, reused across lines.
    marker: Vec<u8>,
}

impl StreamFilter {
    /// Creates a filter for `operation`. Configuration is immutable from
    /// here on.
    #[must_use]
    pub fn new(operation: Operation, options: FilterOptions) -> Self {
        Self {
            operation,
            options,
            line_no: 0,
            totals: Totals::default(),
            marker: Vec::new(),
        }
    }

    /// Processes one physical line and appends its output to `out`.
    ///
    /// `raw` is the line as read, trailing line feed included when the input
    /// had one. The caller owns `out` and decides when to clear it; the
    /// filter only appends.
    pub fn feed_line(&mut self, raw: &[u8], out: &mut Vec<u8>) {
        self.line_no += 1;
        let (content, terminated) = match raw.split_last() {
            Some((&b'\n', head)) => (head, true),
            _ => (raw, false),
        };
        match self.operation {
            Operation::Search => {
                let found = mark::mark_line(self.line_no, content, &mut self.marker, out);
                self.totals.sequences += found;
            }
            Operation::Delete => delete::delete_line(content, terminated, out),
            Operation::Replace { substitute } => {
                replace::replace_line(content, substitute, terminated, out);
            }
            Operation::Count { .. } => count::count_line(content, &mut self.totals),
        }
    }

    /// Appends the end-of-stream summary to `out`.
    ///
    /// Search emits its total only when verbose; count emits one line per
    /// configured tally (bare numbers unless verbose); the sanitizing
    /// operations emit nothing.
    pub fn finish(&mut self, out: &mut Vec<u8>) {
        match self.operation {
            Operation::Search if self.options.verbose => {
                out.extend_from_slice(
                    format!("UTF-8 characters found: {}\n", self.totals.sequences).as_bytes(),
                );
            }
            Operation::Count { mode } => {
                if matches!(mode, CountMode::Bytes | CountMode::Both) {
                    self.summary_line("UTF-8 Bytes", self.totals.bytes, out);
                }
                if matches!(mode, CountMode::Characters | CountMode::Both) {
                    self.summary_line("UTF-8 Characters", self.totals.sequences, out);
                }
            }
            _ => {}
        }
    }

    fn summary_line(&self, label: &str, n: u64, out: &mut Vec<u8>) {
        let line = if self.options.verbose {
            format!("{label}: {n}\n")
        } else {
            format!("{n}\n")
        };
        out.extend_from_slice(line.as_bytes());
    }

    /// The totals accumulated so far.
    #[must_use]
    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Physical lines fed so far.
    #[must_use]
    pub fn lines_fed(&self) -> u64 {
        self.line_no
    }
}
