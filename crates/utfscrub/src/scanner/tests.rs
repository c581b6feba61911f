use rstest::rstest;

use super::*;

#[rstest]
#[case(0x00, 1)]
#[case(0x41, 1)]
#[case(0x7F, 1)]
// A continuation byte in leading position degrades to one byte.
#[case(0x80, 1)]
#[case(0xBF, 1)]
#[case(0xC0, 2)]
#[case(0xC3, 2)]
#[case(0xDF, 2)]
#[case(0xE0, 3)]
#[case(0xE4, 3)]
#[case(0xEF, 3)]
#[case(0xF0, 4)]
#[case(0xF7, 4)]
#[case(0xF8, 5)]
#[case(0xFB, 5)]
#[case(0xFC, 6)]
#[case(0xFF, 6)]
fn leading_byte_classification(#[case] lead: u8, #[case] expected: usize) {
    assert_eq!(sequence_len(lead), expected);
}

#[test]
fn consumes_complete_two_byte_sequence() {
    // é
    let content = [0xC3, 0xA9, b'x'];
    assert_eq!(consume_sequence(&content, 0), Scan::Consumed(2));
}

#[test]
fn consumes_complete_three_byte_sequence() {
    // 中
    let content = [b'a', 0xE4, 0xB8, 0xAD, b'b'];
    assert_eq!(consume_sequence(&content, 1), Scan::Consumed(3));
}

#[test]
fn consumes_complete_four_byte_sequence() {
    // 😀
    let content = [0xF0, 0x9F, 0x98, 0x80];
    assert_eq!(consume_sequence(&content, 0), Scan::Consumed(4));
}

#[rstest]
#[case(0xF8, 5)]
#[case(0xFC, 6)]
fn consumes_legacy_five_and_six_byte_classes(#[case] lead: u8, #[case] declared: usize) {
    let mut content = [0x80u8; 8];
    content[0] = lead;
    assert_eq!(consume_sequence(&content, 0), Scan::Consumed(declared));
}

#[test]
fn ascii_byte_ends_sequence_early() {
    // Declared 3, but an ASCII byte follows the first continuation byte.
    let content = [0xE4, 0xB8, b'x'];
    assert_eq!(consume_sequence(&content, 0), Scan::Consumed(2));
}

#[test]
fn ascii_byte_directly_after_lead_leaves_a_lone_lead() {
    let content = [0xC3, b'h'];
    assert_eq!(consume_sequence(&content, 0), Scan::Consumed(1));
}

#[test]
fn lone_continuation_byte_is_a_one_byte_sequence() {
    let content = [0x80, b'x'];
    assert_eq!(consume_sequence(&content, 0), Scan::Consumed(1));
}

#[test]
fn lone_continuation_byte_at_end_of_line_still_completes() {
    // Declared length 1 is satisfied by the byte itself.
    let content = [b'x', 0xBF];
    assert_eq!(consume_sequence(&content, 1), Scan::Consumed(1));
}

#[rstest]
// Lead alone at end of line, for every multi-byte class.
#[case(&[0xC3], 0)]
#[case(&[0xE4], 0)]
#[case(&[0xF0], 0)]
#[case(&[0xF8], 0)]
#[case(&[0xFC], 0)]
// Partially present continuation bytes.
#[case(&[0xE4, 0xB8], 0)]
#[case(&[0xF0, 0x9F, 0x98], 0)]
#[case(&[b'a', 0xC3], 1)]
fn line_end_before_declared_length_truncates(#[case] content: &[u8], #[case] at: usize) {
    assert_eq!(consume_sequence(content, at), Scan::Truncated);
}

#[test]
fn continuation_accepts_any_high_bit_byte() {
    // 0xC3 is not a valid continuation byte in real UTF-8, but only the
    // leading byte's class is checked.
    let content = [0xE4, 0xC3, 0xC3];
    assert_eq!(consume_sequence(&content, 0), Scan::Consumed(3));
}

#[test]
fn sequence_in_the_middle_of_a_line() {
    let content = *b"ab\xC3\xA9cd";
    assert_eq!(consume_sequence(&content, 2), Scan::Consumed(2));
}
