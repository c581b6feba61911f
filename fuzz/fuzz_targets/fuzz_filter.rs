#![no_main]
use libfuzzer_sys::fuzz_target;
use utfscrub::{CountMode, FilterOptions, Operation, StreamFilter};

/// One flag byte steers the operation and verbosity; the rest of the input
/// is the stream. Every line goes through the filter, and the structural
/// invariants of each operation are asserted as it runs.
fn filter(data: &[u8]) {
    let Some((&flags, stream)) = data.split_first() else {
        return;
    };
    let operation = match flags & 0x07 {
        0 | 1 => Operation::Search,
        2 => Operation::Delete,
        3 => Operation::Replace { substitute: b'?' },
        4 => Operation::Count { mode: CountMode::Characters },
        5 => Operation::Count { mode: CountMode::Bytes },
        _ => Operation::Count { mode: CountMode::Both },
    };
    let options = FilterOptions {
        verbose: flags & 0x08 != 0,
    };

    let mut filter = StreamFilter::new(operation, options);
    let mut out = Vec::new();
    for line in stream.split_inclusive(|&b| b == b'\n') {
        out.clear();
        filter.feed_line(line, &mut out);
        match operation {
            Operation::Delete | Operation::Replace { .. } => {
                assert!(out.iter().all(u8::is_ascii), "sanitized output must be ASCII");
            }
            Operation::Count { .. } => {
                assert!(out.is_empty(), "count must not emit per-line output");
            }
            Operation::Search => {}
        }
    }

    out.clear();
    filter.finish(&mut out);
    if let Operation::Count { .. } = operation {
        let totals = filter.totals();
        assert!(totals.sequences <= totals.bytes, "each sequence spans at least one byte");
    }
}

fuzz_target!(|data: &[u8]| filter(data));
