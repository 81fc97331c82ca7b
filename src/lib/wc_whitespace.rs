// Whitespace classification shared by the vector and scalar tracks

/// ASCII whitespace: space (0x20) or range [0x09-0x0D]
#[inline]
pub(crate) fn is_ascii_whitespace(byte: u8) -> bool {
    byte == b' ' || (0x09..=0x0D).contains(&byte)
}

/// Unicode whitespace, matching `char::is_whitespace` for every scalar value.
///
/// The table is closed and static: the ASCII fast path first, then the
/// `White_Space` separators outside ASCII.
#[inline]
pub(crate) fn is_unicode_whitespace(codepoint: u32) -> bool {
    match codepoint {
        0x09..=0x0D | 0x20 => true,
        cp if cp < 0x80 => false,
        0x85 // NEL
        | 0xA0 // NBSP
        | 0x1680 // Ogham space mark
        | 0x2000..=0x200A
        | 0x2028 // line separator
        | 0x2029 // paragraph separator
        | 0x202F // narrow NBSP
        | 0x205F // medium mathematical space
        | 0x3000 => true, // ideographic space
        _ => false,
    }
}
