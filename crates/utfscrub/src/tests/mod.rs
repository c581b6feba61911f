
use alloc::vec::Vec;

use crate::{FilterOptions, Operation, StreamFilter};

/// Runs a whole stream through a fresh filter: every physical line through
/// `feed_line`, then `finish`, collecting all output.
pub(crate) fn run_stream(operation: Operation, verbose: bool, input: &[u8]) -> Vec<u8> {
    let mut filter = StreamFilter::new(operation, FilterOptions { verbose });
    let mut out = Vec::new();
    let mut scratch = Vec::new();
    for line in input.split_inclusive(|&b| b == b'\n') {
        scratch.clear();
        filter.feed_line(line, &mut scratch);
        out.extend_from_slice(&scratch);
    }
    scratch.clear();
    filter.finish(&mut scratch);
    out.extend_from_slice(&scratch);
    out
}
