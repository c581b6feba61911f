//! Count: tally multi-byte sequences without producing per-line output.

use crate::filter::Totals;
use crate::scanner::{Scan, consume_sequence};

/// Scans one line, adding one sequence and its consumed byte length to the
/// running totals per recognized sequence. A truncated sequence at line end
/// contributes nothing; tallies from earlier in the line stand.
pub(crate) fn count_line(content: &[u8], totals: &mut Totals) {
    let mut pos = 0;
    while pos < content.len() {
        let byte = content[pos];
        if byte >= 0x80 {
            match consume_sequence(content, pos) {
                Scan::Consumed(len) => {
                    totals.sequences += 1;
                    totals.bytes += len as u64;
                    pos += len;
                }
                Scan::Truncated => return,
            }
        } else {
            pos += 1;
        }
    }
}
