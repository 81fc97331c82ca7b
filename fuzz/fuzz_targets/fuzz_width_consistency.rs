#![no_main]

use libfuzzer_sys::fuzz_target;
use wc_sve::{CountMode, CountingBackend, MAX_VECTOR_BYTES, VectorWidth, count_with_width};

fuzz_target!(|data: &[u8]| {
    // Every vector width must agree with the whole-buffer scalar count.
    // Catches carry and word-boundary bugs at chunk edges.
    let scalar = unsafe { CountingBackend::new_scalar_unchecked() };

    for mode in [CountMode::ByteOriented, CountMode::CodepointOriented] {
        let expected = scalar.count_text(data, mode);

        for bytes in (1..=8).chain((16..=MAX_VECTOR_BYTES).step_by(16)) {
            let Ok(width) = VectorWidth::new(bytes) else {
                continue;
            };
            assert_eq!(
                count_with_width(data, mode, width),
                expected,
                "{:?} mismatch at width {}",
                mode,
                bytes
            );
        }

        let detected = CountingBackend::detect();
        assert_eq!(detected.count_text(data, mode), expected, "{} {:?} mismatch", detected, mode);
    }
});
