//! ASCII case-folding tables
//!
//! Two 256-entry byte maps built at compile time. Only `A-Z` and `a-z` are
//! remapped; every other byte (including everything with the high bit set)
//! maps to itself, so the tables are safe to apply to arbitrary UTF-8.

/// Number of distinct byte values covered by a table
const TABLE_SIZE: usize = u8::MAX as usize + 1;

/// Distance between an ASCII uppercase letter and its lowercase pair
const CASE_OFFSET: u8 = b'a' - b'A';

/// Build a table that is the identity except for `first..=last`, which is
/// shifted by `offset` (wrapping, so a negative shift is `256 - n`).
const fn build_table(first: u8, last: u8, offset: u8) -> [u8; TABLE_SIZE] {
    let mut buf = [0u8; TABLE_SIZE];
    let mut i = 0;
    while i < TABLE_SIZE {
        buf[i] = i as u8;
        i += 1;
    }

    let mut ch = first;
    while ch <= last {
        buf[ch as usize] = ch.wrapping_add(offset);
        ch += 1;
    }

    buf
}

/// Byte-to-byte lowercase mapping (`A-Z` to `a-z`)
pub const TO_LOWER: [u8; TABLE_SIZE] = build_table(b'A', b'Z', CASE_OFFSET);

/// Byte-to-byte uppercase mapping (`a-z` to `A-Z`)
pub const TO_UPPER: [u8; TABLE_SIZE] = build_table(b'a', b'z', CASE_OFFSET.wrapping_neg());

/// Fold a byte to ASCII lowercase.
///
/// Total over all 256 values and usable in const context:
///
/// ```
/// use cistring::fold_to_lower;
///
/// const A: u8 = fold_to_lower(b'A');
/// assert_eq!(A, b'a');
/// assert_eq!(fold_to_lower(0xC9), 0xC9);
/// ```
#[inline]
pub const fn fold_to_lower(byte: u8) -> u8 {
    TO_LOWER[byte as usize]
}

/// Fold a byte to ASCII uppercase.
#[inline]
pub const fn fold_to_upper(byte: u8) -> u8 {
    TO_UPPER[byte as usize]
}

/// Lowercase a caller-owned buffer in place.
///
/// Used to fold a needle once up front when only the haystack is viewed
/// through [`crate::Folded`].
pub fn fold_lower_in_place(bytes: &mut [u8]) {
    for b in bytes.iter_mut() {
        *b = fold_to_lower(*b);
    }
}

/// Uppercase a caller-owned buffer in place.
pub fn fold_upper_in_place(bytes: &mut [u8]) {
    for b in bytes.iter_mut() {
        *b = fold_to_upper(*b);
    }
}

/// Owned lowercase copy of `bytes`
pub fn to_lower_vec(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| fold_to_lower(b)).collect()
}

/// Owned uppercase copy of `bytes`
pub fn to_upper_vec(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| fold_to_upper(b)).collect()
}
