//! Chunked traversal of one buffer.
//!
//! Chunk boundaries depend only on the vector width and the remaining length.
//! Content decides which track classifies a chunk, never where it ends.
//! Word-boundary state and the UTF-8 carry are threaded from chunk to chunk
//! and dropped once the buffer is done.

use log::debug;
use thiserror::Error;

use crate::wc_lanes::{Lanes, MAX_VECTOR_BYTES, Predicate};
use crate::wc_probe::native_vector_bytes;
use crate::wc_utf8::Carry;
use crate::{CountMode, Tally};

/// Rejected vector width
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WidthError {
    #[error("vector width must be at least one byte")]
    Zero,
    #[error("vector width of {requested} bytes exceeds the {max}-byte maximum")]
    TooWide { requested: usize, max: usize },
}

/// Chunk stride in bytes, between 1 and [`MAX_VECTOR_BYTES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorWidth(usize);

impl VectorWidth {
    /// Architectural minimum SVE vector length (128 bits)
    pub const MIN_SVE: VectorWidth = VectorWidth(16);

    pub fn new(bytes: usize) -> Result<Self, WidthError> {
        match bytes {
            0 => Err(WidthError::Zero),
            b if b > MAX_VECTOR_BYTES => Err(WidthError::TooWide {
                requested: b,
                max: MAX_VECTOR_BYTES,
            }),
            b => Ok(VectorWidth(b)),
        }
    }

    /// Width reported by the hardware, or [`VectorWidth::MIN_SVE`] if it cannot be queried
    pub fn native() -> Self {
        match native_vector_bytes().map(VectorWidth::new) {
            Some(Ok(width)) => {
                debug!("native vector length: {} bytes", width.0);
                width
            }
            Some(Err(e)) => {
                debug!("ignoring reported vector length: {e}");
                VectorWidth::MIN_SVE
            }
            None => VectorWidth::MIN_SVE,
        }
    }

    pub fn bytes(self) -> usize {
        self.0
    }
}

/// Path that classifies one chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Track {
    VectorFast,
    ScalarSlow,
}

/// State threaded across chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScanState {
    /// Previous unit was whitespace, or nothing has been seen yet
    pub seen_space: bool,
    pub carry: Carry,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            seen_space: true,
            carry: Carry::default(),
        }
    }
}

pub(crate) struct Scanner {
    mode: CountMode,
    width: usize,
    state: ScanState,
    counts: Tally,
}

impl Scanner {
    /// Byte total is fixed up front; it never depends on content
    pub(crate) fn new(len: usize, mode: CountMode, width: VectorWidth) -> Self {
        Self {
            mode,
            width: width.bytes(),
            state: ScanState::default(),
            counts: Tally {
                bytes: len,
                ..Tally::default()
            },
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &ScanState {
        &self.state
    }

    pub(crate) fn route(&self, lanes: &Lanes<'_>) -> Track {
        match self.mode {
            CountMode::ByteOriented => Track::VectorFast,
            // A pending carry must be drained in order, even into ASCII
            CountMode::CodepointOriented if lanes.has_non_ascii() || !self.state.carry.is_empty() => {
                Track::ScalarSlow
            }
            CountMode::CodepointOriented => Track::VectorFast,
        }
    }

    /// Classify one chunk and fold it into the running totals
    pub(crate) fn step(&mut self, lanes: Lanes<'_>) -> Track {
        let track = self.route(&lanes);
        match track {
            Track::VectorFast => lanes
                .tally(self.mode, &mut self.state.seen_space)
                .accumulate(&mut self.counts),
            Track::ScalarSlow => self.state.carry.decode_chunk(
                lanes.as_bytes(),
                &mut self.counts,
                &mut self.state.seen_space,
            ),
        }
        track
    }

    /// Drain the carry and return the totals
    pub(crate) fn finish(mut self) -> Tally {
        if !self.state.carry.is_empty() {
            self.state
                .carry
                .flush(&mut self.counts, &mut self.state.seen_space);
        }
        self.counts
    }

    pub(crate) fn run(mut self, content: &[u8]) -> Tally {
        let mut chunks = content.chunks_exact(self.width);

        for chunk in chunks.by_ref() {
            self.step(Lanes::load(Predicate::all(self.width), chunk));
        }

        let remainder = chunks.remainder();
        if !remainder.is_empty() {
            let pg = Predicate::while_lt(remainder.len(), self.width);
            self.step(Lanes::load(pg, remainder));
        }

        self.finish()
    }
}

/// Count `content` in chunks of `width` bytes
pub(crate) fn scan(content: &[u8], mode: CountMode, width: VectorWidth) -> Tally {
    if content.is_empty() {
        return Tally::default();
    }
    Scanner::new(content.len(), mode, width).run(content)
}
