#![no_main]

use libfuzzer_sys::fuzz_target;
use wc_sve::{CountMode, CountingBackend};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes in both modes: no panics, and the basic bounds hold
    let backend = CountingBackend::detect();

    for mode in [CountMode::ByteOriented, CountMode::CodepointOriented] {
        let result = backend.count_text(data, mode);

        assert_eq!(result.bytes, data.len(), "{:?}: bytes must equal input length", mode);
        assert!(result.chars <= result.bytes, "{:?}: chars cannot exceed bytes", mode);
        assert!(result.lines <= result.chars, "{:?}: lines cannot exceed chars", mode);
        assert!(result.words <= result.chars, "{:?}: words cannot exceed chars", mode);

        if mode == CountMode::ByteOriented {
            assert_eq!(result.chars, result.bytes, "ByteOriented: chars != bytes");
        }
    }
});
