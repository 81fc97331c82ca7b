#[cfg(test)]
mod tests {
    use crate::Tally;
    use crate::wc_default_test::tests::counts;
    use crate::wc_utf8::{Carry, decode_one, decode_run, incomplete_suffix_len, sequence_len};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::ascii(b'a', 1)]
    #[case::nul(0x00, 1)]
    #[case::continuation(0x80, 0)]
    #[case::last_continuation(0xBF, 0)]
    #[case::two_byte(0xC3, 2)]
    #[case::overlong_two_byte_lead(0xC0, 2)]
    #[case::three_byte(0xE2, 3)]
    #[case::four_byte(0xF0, 4)]
    #[case::four_byte_out_of_range(0xF7, 4)]
    #[case::five_byte_pattern(0xF8, 0)]
    #[case::ff(0xFF, 0)]
    fn test_sequence_len(#[case] lead: u8, #[case] expected: usize) {
        assert_eq!(sequence_len(lead), expected, "lead: {:#04x}", lead);
    }

    #[rstest]
    #[case::ascii(b"a", Some(('a', 1)))]
    #[case::ascii_followed(b"ab", Some(('a', 1)))]
    #[case::two_byte(b"\xC3\xA9", Some(('\u{e9}', 2)))]
    #[case::three_byte(b"\xE2\x9C\x93", Some(('\u{2713}', 3)))]
    #[case::four_byte(b"\xF0\x9F\x92\xAF", Some(('\u{1F4AF}', 4)))]
    #[case::max_codepoint(b"\xF4\x8F\xBF\xBF", Some(('\u{10FFFF}', 4)))]
    #[case::smallest_two_byte(b"\xC2\x80", Some(('\u{80}', 2)))]
    #[case::smallest_three_byte(b"\xE0\xA0\x80", Some(('\u{800}', 3)))]
    #[case::smallest_four_byte(b"\xF0\x90\x80\x80", Some(('\u{10000}', 4)))]
    #[case::empty(b"", None)]
    #[case::lone_continuation(b"\x80", None)]
    #[case::invalid_lead(b"\xFF", None)]
    #[case::truncated_two_byte(b"\xC3", None)]
    #[case::truncated_four_byte(b"\xF0\x9F\x92", None)]
    #[case::bad_continuation(b"\xE2\x28\xA1", None)]
    #[case::overlong_two_byte(b"\xC1\xBF", None)]
    #[case::overlong_three_byte(b"\xE0\x9F\xBF", None)]
    #[case::overlong_four_byte(b"\xF0\x8F\xBF\xBF", None)]
    #[case::surrogate_low(b"\xED\xA0\x80", None)]
    #[case::surrogate_high(b"\xED\xBF\xBF", None)]
    #[case::above_max(b"\xF4\x90\x80\x80", None)]
    fn test_decode_one(#[case] input: &[u8], #[case] expected: Option<(char, usize)>) {
        assert_eq!(decode_one(input), expected, "input: {:?}", input);
    }

    #[rstest]
    // Empty and ASCII cases
    #[case::empty_buffer(&[], 0)]
    #[case::ascii_only_complete(b"hello", 0)]
    #[case::ascii_with_space_and_numbers(b"test 123", 0)]
    // 2-byte UTF-8 sequences (110xxxxx 10xxxxxx)
    #[case::utf8_2byte_complete(&[0xC3, 0xA9], 0)]
    #[case::ascii_plus_utf8_2byte_complete(b"hello\xC3\xA9", 0)]
    #[case::utf8_2byte_incomplete_start_only(&[0xC3], 1)]
    #[case::ascii_plus_utf8_2byte_incomplete(b"hello\xC3", 1)]
    // 3-byte UTF-8 sequences (1110xxxx 10xxxxxx 10xxxxxx)
    #[case::utf8_3byte_complete(&[0xE2, 0x9C, 0x93], 0)]
    #[case::utf8_3byte_incomplete_1_byte(&[0xE2], 1)]
    #[case::utf8_3byte_incomplete_2_bytes(&[0xE2, 0x9C], 2)]
    #[case::ascii_plus_utf8_3byte_incomplete_2_bytes(b"hello\xE2\x9C", 2)]
    // 4-byte UTF-8 sequences (11110xxx 10xxxxxx 10xxxxxx 10xxxxxx)
    #[case::utf8_4byte_complete(&[0xF0, 0x9F, 0x92, 0xAF], 0)]
    #[case::utf8_4byte_incomplete_1_byte(&[0xF0], 1)]
    #[case::utf8_4byte_incomplete_2_bytes(&[0xF0, 0x9F], 2)]
    #[case::utf8_4byte_incomplete_3_bytes(&[0xF0, 0x9F, 0x92], 3)]
    #[case::ascii_plus_utf8_4byte_incomplete_3_bytes(b"hi\xF0\x9F\x92", 3)]
    // Continuation bytes with no lead in reach are not deferred
    #[case::single_continuation_byte(&[0x80], 0)]
    #[case::three_continuation_bytes(&[0x80, 0x80, 0x80], 0)]
    #[case::four_continuation_bytes(&[0x80, 0x80, 0x80, 0x80], 0)]
    // Lead declares fewer bytes than follow it
    #[case::two_byte_lead_with_extra_continuation(&[0xC3, 0xA9, 0xA9], 0)]
    // Invalid UTF-8 start bytes never wait for more input
    #[case::invalid_utf8_byte_0xff(&[0xFF], 0)]
    #[case::invalid_utf8_byte_0xf8(&[0xF8, 0x80], 0)]
    #[case::ascii_plus_invalid_utf8(b"test\xFF", 0)]
    // Only the last lead counts
    #[case::complete_then_incomplete(b"\xE2\x9C\x93\xE2", 1)]
    #[case::checkmark_split_at_chunk_end(b"hello world   \xE2\x9C", 2)]
    fn test_incomplete_suffix_len(#[case] input: &[u8], #[case] expected: usize) {
        assert_eq!(incomplete_suffix_len(input), expected, "input: {:?}", input);
    }

    fn run(input: &[u8]) -> (Tally, bool) {
        let mut tally = Tally::default();
        let mut seen_space = true;
        decode_run(input, &mut tally, &mut seen_space);
        (tally, seen_space)
    }

    #[rstest]
    #[case::word(b"ab", counts(0, 1, 2, 0), false)]
    #[case::word_space(b"ab ", counts(0, 1, 3, 0), true)]
    #[case::nbsp_ends_word(b"ab\xC2\xA0", counts(0, 1, 3, 0), true)]
    #[case::invalid_keeps_open_boundary(b" \xFF", counts(0, 0, 1, 0), true)]
    #[case::invalid_keeps_closed_boundary(b"a\xFF", counts(0, 1, 1, 0), false)]
    #[case::truncated_tail(b"a\xF0\x9F\x92", counts(0, 1, 1, 0), false)]
    fn test_decode_run(
        #[case] input: &[u8],
        #[case] expected: Tally,
        #[case] expected_seen_space: bool,
    ) {
        assert_eq!(run(input), (expected, expected_seen_space));
    }

    #[test]
    fn test_carry_emoji_split_across_chunks() {
        let emoji = "\u{1F4AF}".as_bytes();
        for split in 1..emoji.len() {
            let mut carry = Carry::default();
            let mut tally = Tally::default();
            let mut seen_space = true;

            let mut first = b"x ".to_vec();
            first.extend_from_slice(&emoji[..split]);
            carry.decode_chunk(&first, &mut tally, &mut seen_space);
            assert_eq!(carry.as_slice(), &emoji[..split]);
            assert_eq!(tally, counts(0, 1, 2, 0));

            let mut second = emoji[split..].to_vec();
            second.extend_from_slice(b" y");
            carry.decode_chunk(&second, &mut tally, &mut seen_space);
            assert!(carry.is_empty());

            carry.flush(&mut tally, &mut seen_space);
            assert_eq!(tally, counts(0, 3, 5, 0), "split at {}", split);
        }
    }

    #[test]
    fn test_carry_grows_one_byte_at_a_time() {
        let mut carry = Carry::default();
        let mut tally = Tally::default();
        let mut seen_space = true;

        for &byte in &[0xF0, 0x9F, 0x92] {
            carry.decode_chunk(&[byte], &mut tally, &mut seen_space);
            assert_eq!(tally, Tally::default());
        }
        assert_eq!(carry.as_slice(), &[0xF0, 0x9F, 0x92]);

        carry.decode_chunk(&[0xAF], &mut tally, &mut seen_space);
        assert!(carry.is_empty());
        assert_eq!(tally, counts(0, 1, 1, 0));
        assert!(!seen_space);
    }

    #[test]
    fn test_carry_held_lead_followed_by_ascii_is_invalid() {
        let mut carry = Carry::default();
        let mut tally = Tally::default();
        let mut seen_space = true;

        carry.decode_chunk(b"ab\xE2", &mut tally, &mut seen_space);
        assert_eq!(carry.as_slice(), b"\xE2");

        carry.decode_chunk(b"cd ", &mut tally, &mut seen_space);
        assert!(carry.is_empty());
        assert_eq!(tally, counts(0, 1, 5, 0));
        assert!(seen_space);
    }

    #[test]
    fn test_flush_truncated_sequence_counts_nothing() {
        let mut carry = Carry::default();
        let mut tally = Tally::default();
        let mut seen_space = true;

        carry.decode_chunk(b"\xE2\x9C", &mut tally, &mut seen_space);
        assert_eq!(carry.as_slice(), b"\xE2\x9C");
        assert_eq!(tally, Tally::default());

        carry.flush(&mut tally, &mut seen_space);
        assert!(carry.is_empty());
        assert_eq!(tally, Tally::default());
        assert!(seen_space);
    }

    #[test]
    fn test_flush_empty_carry_is_noop() {
        let mut carry = Carry::default();
        let mut tally = Tally::default();
        let mut seen_space = false;

        carry.flush(&mut tally, &mut seen_space);
        assert_eq!(tally, Tally::default());
        assert!(!seen_space);
    }
}
