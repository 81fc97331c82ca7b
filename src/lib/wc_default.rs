use crate::wc_utf8::decode_run;
use crate::wc_whitespace::is_ascii_whitespace;
use crate::{CountMode, Tally};

/// Whole-buffer scalar count, no chunking.
///
/// Produces exactly what the chunked engine produces at any vector width.
pub fn word_count_scalar(content: &[u8], mode: CountMode) -> Tally {
    let mut res = Tally {
        bytes: content.len(),
        ..Tally::default()
    };
    let mut seen_space = true;

    match mode {
        CountMode::ByteOriented => {
            res.chars = content.len();
            for &byte in content {
                if byte == b'\n' {
                    res.lines += 1;
                }
                if is_ascii_whitespace(byte) {
                    seen_space = true;
                } else if seen_space {
                    res.words += 1;
                    seen_space = false;
                }
            }
        }
        CountMode::CodepointOriented => decode_run(content, &mut res, &mut seen_space),
    }
    res
}
