//! Delete: copy a line through with every multi-byte sequence removed.

use alloc::vec::Vec;

use crate::scanner::{Scan, consume_sequence};

/// Appends `content` to `out` with every recognized sequence skipped,
/// re-appending the line feed when the input line had one. Truncation at
/// line end abandons the line, leaving the partial output as written; no
/// terminator is appended for an abandoned line.
pub(crate) fn delete_line(content: &[u8], terminated: bool, out: &mut Vec<u8>) {
    let mut pos = 0;
    while pos < content.len() {
        let byte = content[pos];
        if byte >= 0x80 {
            match consume_sequence(content, pos) {
                Scan::Consumed(len) => pos += len,
                Scan::Truncated => return,
            }
        } else {
            out.push(byte);
            pos += 1;
        }
    }
    if terminated {
        out.push(b'\n');
    }
}
