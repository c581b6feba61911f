//! Resolved configuration for one pass over a stream.
//!
//! Built once, before the first line is read, and never mutated afterwards.
//! The command-line front end resolves its arguments into these types;
//! library callers construct them directly.

use alloc::string::String;

use thiserror::Error;

/// Errors detected while resolving configuration, before any input is read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `replace` was given an empty substitute.
    #[error("replacement must be exactly one byte, got an empty value")]
    EmptyReplacement,
    /// The substitute spelled more than one byte (for example a multi-byte
    /// character).
    #[error("replacement must be exactly one byte, got {0} bytes")]
    ReplacementTooLong(usize),
    /// The substitute byte has its high bit set.
    #[error("replacement byte must be ASCII")]
    ReplacementNotAscii,
    /// The count sub-mode token is not one of `chars`, `bytes`, `both`.
    #[error("unknown count mode {0:?}")]
    UnknownCountMode(String),
}

/// Which end-of-stream tallies [`Operation::Count`] emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountMode {
    /// The number of multi-byte sequences seen.
    #[default]
    Characters,
    /// The number of bytes those sequences occupied.
    Bytes,
    /// Both tallies, bytes first.
    Both,
}

impl core::str::FromStr for CountMode {
    type Err = ConfigError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "chars" => Ok(Self::Characters),
            "bytes" => Ok(Self::Bytes),
            "both" => Ok(Self::Both),
            _ => Err(ConfigError::UnknownCountMode(String::from(token))),
        }
    }
}

/// The selected line transform.
///
/// One case per command, each carrying only its own data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Report each line containing multi-byte sequences, with a marker line
    /// pointing at each sequence's leading byte.
    Search,
    /// Copy the stream through with every multi-byte sequence removed.
    Delete,
    /// Copy the stream through with every multi-byte sequence replaced by
    /// one `substitute` byte, regardless of the sequence's length.
    Replace {
        /// The byte written in place of each sequence. [`Operation::replace`]
        /// enforces that it is ASCII.
        substitute: u8,
    },
    /// Tally sequences and their byte lengths; emit totals at end of stream.
    Count {
        /// Which totals to emit.
        mode: CountMode,
    },
}

impl Operation {
    /// Builds [`Operation::Replace`] from the spelled-out substitute,
    /// rejecting anything but a single ASCII byte.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyReplacement`] for an empty spelling,
    /// [`ConfigError::ReplacementTooLong`] for more than one byte, and
    /// [`ConfigError::ReplacementNotAscii`] for a single high-bit byte.
    pub fn replace(substitute: &[u8]) -> Result<Self, ConfigError> {
        match *substitute {
            [] => Err(ConfigError::EmptyReplacement),
            [byte] if byte.is_ascii() => Ok(Self::Replace { substitute: byte }),
            [_] => Err(ConfigError::ReplacementNotAscii),
            _ => Err(ConfigError::ReplacementTooLong(substitute.len())),
        }
    }
}

/// Options orthogonal to the selected operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions {
    /// Label the end-of-stream summary numbers instead of printing them
    /// bare. For [`Operation::Search`] this also decides whether the final
    /// total line is emitted at all.
    ///
    /// # Default
    ///
    /// `false`
    pub verbose: bool,
}
