//! Per-chunk lane classification.
//!
//! A chunk is one vector of a width only known at runtime, plus a predicate
//! of active lanes (all of them for interior chunks, a prefix for the tail).
//! Every predicate is a flat loop over the active lanes so the compiler can
//! vectorize it at whatever width the target offers.
//!
//! Word starts carry a lane-to-lane dependency: the whitespace mask is stored
//! to a scratch array and walked serially, seeded with the flag carried in
//! from the previous chunk.

use crate::wc_utf8::is_continuation;
use crate::wc_whitespace::is_ascii_whitespace;
use crate::{CountMode, Tally};

/// Largest architectural SVE register, 2048 bits
pub const MAX_VECTOR_BYTES: usize = 256;

/// Active-lane mask: lanes `0..active` are live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Predicate {
    active: usize,
}

impl Predicate {
    /// Every lane of a `width`-byte vector
    pub(crate) fn all(width: usize) -> Self {
        Self { active: width }
    }

    /// Lanes below `remaining`, capped at `width`
    pub(crate) fn while_lt(remaining: usize, width: usize) -> Self {
        Self {
            active: remaining.min(width),
        }
    }

    pub(crate) fn count(self) -> usize {
        self.active
    }
}

/// Bytes under the active lanes of one chunk
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lanes<'a> {
    bytes: &'a [u8],
}

/// Per-chunk contribution to the running tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ChunkTally {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

impl ChunkTally {
    pub(crate) fn accumulate(self, counts: &mut Tally) {
        counts.lines += self.lines;
        counts.words += self.words;
        counts.chars += self.chars;
    }
}

impl<'a> Lanes<'a> {
    /// Predicated load. Lanes past the end of `src` stay inactive.
    #[inline]
    pub(crate) fn load(pg: Predicate, src: &'a [u8]) -> Self {
        let active = pg.count().min(src.len()).min(MAX_VECTOR_BYTES);
        Self {
            bytes: &src[..active],
        }
    }

    #[inline]
    pub(crate) fn active(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Lanes equal to 0x0A
    #[inline]
    pub(crate) fn count_newlines(&self) -> usize {
        self.bytes.iter().filter(|&&byte| byte == b'\n').count()
    }

    /// Any active lane >= 0x80
    #[inline]
    pub(crate) fn has_non_ascii(&self) -> bool {
        self.bytes.iter().fold(0u8, |acc, &byte| acc | byte) >= 0x80
    }

    /// Lanes whose top two bits are not 10
    #[inline]
    pub(crate) fn count_utf8_leads(&self) -> usize {
        self.bytes
            .iter()
            .filter(|&&byte| !is_continuation(byte))
            .count()
    }

    /// Store the ASCII whitespace mask of the active lanes into `mask`
    #[inline]
    pub(crate) fn store_whitespace<'m>(&self, mask: &'m mut [bool; MAX_VECTOR_BYTES]) -> &'m [bool] {
        let out = &mut mask[..self.bytes.len()];
        for (slot, &byte) in out.iter_mut().zip(self.bytes) {
            *slot = is_ascii_whitespace(byte);
        }
        out
    }

    /// Count lanes that are non-whitespace right after whitespace.
    ///
    /// `seen_space` stands in for the lane before index 0 and is left holding
    /// the whitespace-ness of the last active lane.
    pub(crate) fn count_word_starts(&self, seen_space: &mut bool) -> usize {
        let mut scratch = [false; MAX_VECTOR_BYTES];
        let mask = self.store_whitespace(&mut scratch);

        let mut prev_was_ws = *seen_space;
        let mut starts = 0;
        for &is_ws in mask {
            if !is_ws && prev_was_ws {
                starts += 1;
            }
            prev_was_ws = is_ws;
        }

        *seen_space = prev_was_ws;
        starts
    }

    /// Full vector-track classification of this chunk.
    ///
    /// Only valid when `mode` is ByteOriented or the chunk is all ASCII.
    pub(crate) fn tally(&self, mode: CountMode, seen_space: &mut bool) -> ChunkTally {
        ChunkTally {
            lines: self.count_newlines(),
            words: self.count_word_starts(seen_space),
            chars: match mode {
                CountMode::ByteOriented => self.active(),
                CountMode::CodepointOriented => self.count_utf8_leads(),
            },
        }
    }
}
