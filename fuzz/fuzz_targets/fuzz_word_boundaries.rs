#![no_main]

use libfuzzer_sys::fuzz_target;
use wc_sve::{CountMode, CountingBackend, VectorWidth, count_with_width};

fuzz_target!(|data: &[u8]| {
    // Word boundary detection on inputs built to confuse it
    if data.is_empty() {
        return;
    }

    let scalar = unsafe { CountingBackend::new_scalar_unchecked() };
    let mut test_cases = vec![data.to_vec()];

    // 1. Multiple consecutive whitespace
    test_cases.push(vec![b' '; data.len().min(100)]);
    test_cases.push(vec![b'\n'; data.len().min(100)]);
    test_cases.push(vec![b'\t'; data.len().min(100)]);

    // 2. Whitespace interleaved with the input
    let mut mixed = Vec::new();
    for &byte in data.iter().take(50) {
        mixed.push(byte);
        mixed.push(b' ');
    }
    test_cases.push(mixed);

    // 3. Input wrapped in Unicode spaces, which only split words when decoding
    let mut unicode_spaces = "\u{3000}".as_bytes().to_vec();
    unicode_spaces.extend_from_slice(data);
    unicode_spaces.extend_from_slice("\u{00A0}\u{2003}\u{200B}".as_bytes());
    test_cases.push(unicode_spaces);

    // 4. Input behind a cut lead byte, so the carry is live at every boundary
    let mut cut_lead = vec![0xF0];
    cut_lead.extend_from_slice(data);
    test_cases.push(cut_lead);

    for test_case in &test_cases {
        for mode in [CountMode::ByteOriented, CountMode::CodepointOriented] {
            let expected = scalar.count_text(test_case, mode);
            assert!(expected.words <= expected.bytes, "{:?}: words cannot exceed bytes", mode);

            for bytes in [1, 3, 16, 64] {
                let Ok(width) = VectorWidth::new(bytes) else {
                    continue;
                };
                assert_eq!(
                    count_with_width(test_case, mode, width),
                    expected,
                    "{:?} word boundary mismatch at width {}",
                    mode,
                    bytes
                );
            }
        }
    }
});
