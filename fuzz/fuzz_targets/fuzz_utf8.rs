#![no_main]

use libfuzzer_sys::fuzz_target;
use wc_sve::{CountMode, CountingBackend};

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 must be skipped byte by byte; valid UTF-8 must match std
    let result = CountingBackend::detect().count_text(data, CountMode::CodepointOriented);

    assert!(result.chars <= result.bytes, "chars cannot exceed bytes");
    assert!(result.lines <= result.bytes, "lines cannot exceed bytes");

    if let Ok(s) = std::str::from_utf8(data) {
        assert_eq!(result.chars, s.chars().count(), "valid UTF-8 char count should match std");
        assert_eq!(result.words, s.split_whitespace().count(), "valid UTF-8 word count should match std");
        assert_eq!(result.lines, s.matches('\n').count(), "valid UTF-8 line count should match std");
    }
});
