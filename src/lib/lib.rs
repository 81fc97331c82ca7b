// Library interface for wc-sve
// Exposes the scalable-vector counting engine for fuzz targets and external crates

pub mod wc_default;
mod wc_lanes;
mod wc_probe;
mod wc_scan;
mod wc_utf8;
#[cfg(test)]
mod wc_utf8_test;
mod wc_whitespace;

use std::ops::{Add, AddAssign};

pub use wc_lanes::MAX_VECTOR_BYTES;
pub use wc_probe::probe_capability;
pub use wc_scan::{VectorWidth, WidthError};

/// Line, word, byte and character totals for one buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub lines: usize,
    pub words: usize,
    pub bytes: usize,
    pub chars: usize,
}

impl Add for Tally {
    type Output = Tally;

    fn add(mut self, rhs: Tally) -> Tally {
        self += rhs;
        self
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Tally) {
        self.lines += rhs.lines;
        self.words += rhs.words;
        self.bytes += rhs.bytes;
        self.chars += rhs.chars;
    }
}

/// How bytes map to characters and which whitespace is recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMode {
    /// Every byte is one character, ASCII whitespace only
    ByteOriented,
    /// UTF-8 decoded, Unicode whitespace
    CodepointOriented,
}

/// Result of [`count_checked`].
///
/// `supported == false` always carries a zeroed tally: the buffer was never read.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckedCount {
    pub tally: Tally,
    pub supported: bool,
}

/// Count `content` after confirming the CPU has scalable vectors.
///
/// # Example
/// ```
/// use wc_sve::{count_checked, probe_capability, CountMode, Tally};
///
/// let result = count_checked(b"foo\nbar baz", CountMode::ByteOriented);
/// assert_eq!(result.supported, probe_capability());
/// if result.supported {
///     assert_eq!(result.tally, Tally { lines: 1, words: 3, bytes: 11, chars: 11 });
/// } else {
///     assert_eq!(result.tally, Tally::default());
/// }
/// ```
pub fn count_checked(content: &[u8], mode: CountMode) -> CheckedCount {
    if !probe_capability() {
        return CheckedCount {
            tally: Tally::default(),
            supported: false,
        };
    }

    CheckedCount {
        // SAFETY: the probe above confirmed SVE support
        tally: unsafe { count_unchecked(content, mode) },
        supported: true,
    }
}

/// Count `content` at the native scalable vector width, skipping the probe.
///
/// # Safety
///
/// The caller MUST have confirmed SVE support (for example through
/// [`probe_capability`]) before calling. Calling this on hardware without
/// scalable vectors is undefined behavior; it is never reported as an error.
pub unsafe fn count_unchecked(content: &[u8], mode: CountMode) -> Tally {
    if content.is_empty() {
        return Tally::default();
    }
    wc_scan::scan(content, mode, VectorWidth::native())
}

/// Count `content` with the chunk stride fixed to `width`.
///
/// The result never depends on the width; this is how the engine is exercised
/// at vector lengths the current CPU does not have.
///
/// # Example
/// ```
/// use wc_sve::{count_with_width, CountMode, VectorWidth};
///
/// let width = VectorWidth::new(16).unwrap();
/// let result = count_with_width("caf\u{e9} \u{1F4AF}\n".as_bytes(), CountMode::CodepointOriented, width);
/// assert_eq!(result.lines, 1);
/// assert_eq!(result.words, 2);
/// assert_eq!(result.chars, 7);
/// assert_eq!(result.bytes, 11);
/// ```
pub fn count_with_width(content: &[u8], mode: CountMode, width: VectorWidth) -> Tally {
    wc_scan::scan(content, mode, width)
}

// Private marker to prevent external construction of CountingBackend variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Private;

/// Implementation path used for counting.
///
/// Variants cannot be constructed from outside this crate. Use
/// [`CountingBackend::detect`] to obtain one the current CPU supports.
#[allow(private_interfaces)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountingBackend {
    /// Scalable vectors at the native width (aarch64 SVE)
    Sve(Private),
    /// Whole-buffer scalar fallback
    Scalar(Private),
}

impl std::fmt::Display for CountingBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountingBackend::Sve(_) => write!(f, "SVE"),
            CountingBackend::Scalar(_) => write!(f, "Scalar"),
        }
    }
}

impl CountingBackend {
    /// Pick the fastest backend the current CPU supports.
    ///
    /// # Example
    /// ```
    /// use wc_sve::{CountingBackend, CountMode};
    ///
    /// let backend = CountingBackend::detect();
    /// let result = backend.count_text(b"hello world", CountMode::CodepointOriented);
    /// assert_eq!(result.words, 2);
    /// assert_eq!(result.chars, 11);
    /// ```
    pub fn detect() -> Self {
        let backend = if probe_capability() {
            CountingBackend::Sve(Private)
        } else {
            CountingBackend::Scalar(Private)
        };
        log::debug!("selected {backend} counting backend");
        backend
    }

    /// Construct the Scalar backend.
    ///
    /// # Safety
    ///
    /// Always sound: the scalar backend runs on every CPU. The function is
    /// `unsafe` only to mirror [`CountingBackend::new_unchecked`].
    pub unsafe fn new_scalar_unchecked() -> Self {
        CountingBackend::Scalar(Private)
    }

    /// Construct a backend by name (`"sve"` or `"scalar"`).
    ///
    /// # Safety
    ///
    /// The caller MUST confirm SVE support before calling `count_text()` on
    /// the `"sve"` backend.
    ///
    /// # Returns
    /// - `Some(backend)` if the name is known
    /// - `None` otherwise
    pub unsafe fn new_unchecked(backend_type: &str) -> Option<Self> {
        match backend_type {
            "sve" => Some(CountingBackend::Sve(Private)),
            "scalar" => Some(CountingBackend::Scalar(Private)),
            _ => None,
        }
    }

    /// Count text statistics using this backend.
    pub fn count_text(&self, content: &[u8], mode: CountMode) -> Tally {
        match self {
            // SAFETY: Sve is only handed out by detect() or by new_unchecked(),
            // whose caller took over the support obligation
            CountingBackend::Sve(_) => unsafe { count_unchecked(content, mode) },
            CountingBackend::Scalar(_) => wc_default::word_count_scalar(content, mode),
        }
    }
}
