//! Line-oriented filtering of UTF-8 multi-byte sequences in byte streams.
//!
//! Input is expected to be plain ASCII but may carry stray multi-byte
//! encoded characters (mojibake, legacy exports). [`StreamFilter`] consumes
//! one physical line at a time and either reports the sequences it finds
//! ([`Operation::Search`]), strips them ([`Operation::Delete`]), substitutes
//! a single byte for each ([`Operation::Replace`]), or tallies them
//! ([`Operation::Count`]).
//!
//! Only the leading byte's length class is trusted; sequences are not
//! validated against the Unicode standard (overlong forms, surrogates and
//! codepoint ranges pass through unquestioned).
//!
//! ```
//! use utfscrub::{FilterOptions, Operation, StreamFilter};
//!
//! let mut filter = StreamFilter::new(Operation::Delete, FilterOptions::default());
//! let mut out = Vec::new();
//! filter.feed_line("h\u{e9}llo\n".as_bytes(), &mut out);
//! assert_eq!(out, b"hllo\n");
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod config;
mod filter;
mod scanner;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, CountMode, FilterOptions, Operation};
pub use filter::{StreamFilter, Totals};
pub use scanner::{Scan, consume_sequence, sequence_len};
