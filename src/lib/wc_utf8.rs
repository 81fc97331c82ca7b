//! Scalar UTF-8 decoding for chunks the vector track cannot classify.
//!
//! Decoding is strict: overlong forms, surrogates and values above U+10FFFF
//! are invalid. An invalid byte is skipped on its own and leaves the word state
//! untouched, so corrupt input costs at most one miscounted unit per byte.
//!
//! A sequence cut by a chunk boundary is held in a [`Carry`] of at most three
//! bytes and decoded together with the next chunk.

use crate::Tally;
use crate::wc_lanes::MAX_VECTOR_BYTES;
use crate::wc_whitespace::is_unicode_whitespace;

/// Longest UTF-8 sequence in bytes
pub(crate) const MAX_SEQUENCE_LEN: usize = 4;

/// Bytes a truncated sequence can leave behind
pub(crate) const MAX_CARRY: usize = MAX_SEQUENCE_LEN - 1;

// Smallest codepoint that needs a sequence of the indexed length
const MIN_CODEPOINT: [u32; MAX_SEQUENCE_LEN + 1] = [0, 0, 0x80, 0x800, 0x1_0000];
const MAX_CODEPOINT: u32 = 0x10_FFFF;
const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// Continuation bytes match pattern 10xxxxxx
#[inline]
pub(crate) fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Sequence length declared by a lead byte, 0 if it cannot start one
#[inline]
pub(crate) fn sequence_len(lead: u8) -> usize {
    match lead {
        0b0000_0000..=0b0111_1111 => 1,
        0b1100_0000..=0b1101_1111 => 2,
        0b1110_0000..=0b1110_1111 => 3,
        0b1111_0000..=0b1111_0111 => 4,
        _ => 0,
    }
}

/// Decode the codepoint at the start of `bytes`.
///
/// Returns the character and the number of bytes it occupies, or `None` when
/// the bytes do not start a valid, complete sequence.
pub(crate) fn decode_one(bytes: &[u8]) -> Option<(char, usize)> {
    let &lead = bytes.first()?;
    let len = sequence_len(lead);
    if len == 0 || bytes.len() < len {
        return None;
    }

    let mut codepoint = match len {
        1 => return Some((char::from(lead), 1)),
        2 => u32::from(lead & 0b0001_1111),
        3 => u32::from(lead & 0b0000_1111),
        _ => u32::from(lead & 0b0000_0111),
    };
    for &byte in &bytes[1..len] {
        if !is_continuation(byte) {
            return None;
        }
        codepoint = (codepoint << 6) | u32::from(byte & 0b0011_1111);
    }

    if codepoint < MIN_CODEPOINT[len] || codepoint > MAX_CODEPOINT || SURROGATES.contains(&codepoint)
    {
        return None;
    }
    char::from_u32(codepoint).map(|ch| (ch, len))
}

/// Number of trailing bytes (0-3) that start a sequence the input ends too early to finish.
///
/// Only the most recent lead byte within the last four bytes is considered.
pub(crate) fn incomplete_suffix_len(bytes: &[u8]) -> usize {
    let Some(available) = bytes
        .iter()
        .rev()
        .take(MAX_SEQUENCE_LEN)
        .position(|&byte| !is_continuation(byte))
        .map(|back| back + 1)
    else {
        return 0;
    };

    let lead = bytes[bytes.len() - available];
    if sequence_len(lead) > available {
        available
    } else {
        0
    }
}

/// Decode every byte of `bytes`, skipping invalid ones one at a time.
///
/// `seen_space` is true when the unit before `bytes` was whitespace.
pub(crate) fn decode_run(bytes: &[u8], counts: &mut Tally, seen_space: &mut bool) {
    let mut pos = 0;
    while pos < bytes.len() {
        match decode_one(&bytes[pos..]) {
            Some((ch, len)) => {
                counts.chars += 1;
                if ch == '\n' {
                    counts.lines += 1;
                }
                if is_unicode_whitespace(u32::from(ch)) {
                    *seen_space = true;
                } else if *seen_space {
                    counts.words += 1;
                    *seen_space = false;
                }
                pos += len;
            }
            None => pos += 1,
        }
    }
}

/// Bytes of a sequence cut off at the end of the previous chunk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Carry {
    buf: [u8; MAX_CARRY],
    len: usize,
}

impl Carry {
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn replace(&mut self, pending: &[u8]) {
        debug_assert!(pending.len() <= MAX_CARRY);
        self.buf[..pending.len()].copy_from_slice(pending);
        self.len = pending.len();
    }

    /// Decode `chunk` behind the held-over bytes, holding back any new incomplete suffix.
    ///
    /// `chunk` is at most [`MAX_VECTOR_BYTES`] long.
    pub(crate) fn decode_chunk(&mut self, chunk: &[u8], counts: &mut Tally, seen_space: &mut bool) {
        debug_assert!(chunk.len() <= MAX_VECTOR_BYTES);

        let mut scratch = [0u8; MAX_CARRY + MAX_VECTOR_BYTES];
        let held = self.len;
        let total = held + chunk.len();
        scratch[..held].copy_from_slice(self.as_slice());
        scratch[held..total].copy_from_slice(chunk);

        let combined = &scratch[..total];
        let (complete, pending) = combined.split_at(total - incomplete_suffix_len(combined));
        decode_run(complete, counts, seen_space);
        self.replace(pending);
    }

    /// End of input: held bytes can no longer complete and decode as invalid.
    pub(crate) fn flush(&mut self, counts: &mut Tally, seen_space: &mut bool) {
        let pending = std::mem::take(self);
        decode_run(pending.as_slice(), counts, seen_space);
    }
}
