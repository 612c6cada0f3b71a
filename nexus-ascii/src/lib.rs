//! Compile-time ASCII byte classes.
//!
//! Each class is a 128-entry lookup table built by `const fn`, so a
//! membership test is one bounds check and one load. Bytes outside the
//! ASCII range are never members of any class.
//!
//! # Example
//!
//! ```
//! use nexus_ascii::{Class, is_masked, trim, WHITESPACE};
//!
//! assert!(is_masked(&WHITESPACE, b'\t'));
//! assert!(!is_masked(&WHITESPACE, 0xA0)); // not ASCII
//!
//! assert_eq!(trim(b"\r\n  value \t", Class::Whitespace), b"value");
//! ```

#![warn(missing_docs)]

/// Lookup table indexed by ASCII byte value.
pub type AsciiMask = [bool; 128];

/// Named byte classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// `\f`, `\t`, `\r`, `\n` and space.
    Whitespace,
    /// `\r` and `\n`.
    Crlf,
    /// `\r`, `\n` and `\t`.
    CrlfTab,
    /// `0` through `9`.
    ZeroToNine,
}

impl Class {
    /// Returns the lookup table for this class.
    #[inline]
    pub const fn mask(self) -> &'static AsciiMask {
        match self {
            Class::Whitespace => &WHITESPACE,
            Class::Crlf => &CRLF,
            Class::CrlfTab => &CRLF_TAB,
            Class::ZeroToNine => &ZERO_TO_NINE,
        }
    }

    /// Returns `true` if `byte` belongs to this class.
    #[inline]
    pub const fn contains(self, byte: u8) -> bool {
        is_masked(self.mask(), byte)
    }

    const fn test(self, c: u8) -> bool {
        match self {
            Class::Whitespace => matches!(c, b'\x0C' | b'\t' | b'\r' | b'\n' | b' '),
            Class::Crlf => matches!(c, b'\r' | b'\n'),
            Class::CrlfTab => matches!(c, b'\r' | b'\n' | b'\t'),
            Class::ZeroToNine => c.is_ascii_digit(),
        }
    }
}

const fn build(class: Class) -> AsciiMask {
    let mut mask = [false; 128];
    let mut c = 0;
    while c < 128 {
        mask[c] = class.test(c as u8);
        c += 1;
    }
    mask
}

/// Whitespace: `\f`, `\t`, `\r`, `\n`, space.
pub static WHITESPACE: AsciiMask = build(Class::Whitespace);

/// Line endings: `\r`, `\n`.
pub static CRLF: AsciiMask = build(Class::Crlf);

/// Line endings and tab: `\r`, `\n`, `\t`.
pub static CRLF_TAB: AsciiMask = build(Class::CrlfTab);

/// Decimal digits.
pub static ZERO_TO_NINE: AsciiMask = build(Class::ZeroToNine);

/// Returns `true` if `byte` is ASCII and set in `mask`.
#[inline(always)]
pub const fn is_masked(mask: &AsciiMask, byte: u8) -> bool {
    byte < 128 && mask[byte as usize]
}

/// Strips leading bytes of `class`.
pub fn trim_start(bytes: &[u8], class: Class) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !class.contains(b))
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// Strips trailing bytes of `class`.
pub fn trim_end(bytes: &[u8], class: Class) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| !class.contains(b))
        .map_or(0, |i| i + 1);
    &bytes[..end]
}

/// Strips leading and trailing bytes of `class`.
pub fn trim(bytes: &[u8], class: Class) -> &[u8] {
    trim_end(trim_start(bytes, class), class)
}

/// [`trim`] for string slices.
///
/// Every class is pure ASCII, so the cut points are always on character
/// boundaries.
pub fn trim_str(s: &str, class: Class) -> &str {
    s.trim_matches(|c: char| c.is_ascii() && class.contains(c as u8))
}

/// Returns a copy of `bytes` with every byte of `class` removed.
pub fn strip(bytes: &[u8], class: Class) -> Vec<u8> {
    bytes.iter().copied().filter(|&b| !class.contains(b)).collect()
}

const _: () = {
    assert!(core::mem::size_of::<AsciiMask>() == 128);
    assert!(build(Class::Whitespace)[b'\x0C' as usize]);
    assert!(!build(Class::Crlf)[b' ' as usize]);
    assert!(build(Class::CrlfTab)[b'\t' as usize]);
    assert!(build(Class::ZeroToNine)[b'9' as usize]);
};
