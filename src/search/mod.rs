//! Case-insensitive search and comparison over borrowed bytes
//!
//! Everything here works by running an ordinary exact-match algorithm over
//! [`Folded`] views, so the haystack is never copied or lowercased into a new
//! buffer.

mod kmp;

use std::cmp::Ordering;

pub use kmp::{KnuthMorrisPratt, Matches};

use crate::iter::{CaseFold, Folded};
use crate::table::fold_to_lower;

/// A byte sequence with O(1) length and indexed reads.
///
/// This is the seam between the search algorithms and the data they run
/// over: plain slices read their bytes as stored, [`Folded`] reads them
/// lowercased.
pub trait RandomAccess {
    fn len(&self) -> usize;

    /// Byte at `index`; callers keep `index < len()`
    fn at(&self, index: usize) -> u8;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RandomAccess for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl<const N: usize> RandomAccess for [u8; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl RandomAccess for Vec<u8> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl RandomAccess for str {
    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        self.as_bytes()[index]
    }
}

impl<T: RandomAccess + ?Sized> RandomAccess for &T {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        (**self).at(index)
    }
}

impl RandomAccess for Folded<'_> {
    #[inline]
    fn len(&self) -> usize {
        Folded::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        fold_to_lower(self.source()[index])
    }
}

/// Case-insensitive find: byte offset of the first occurrence of `needle`
/// in `haystack`.
///
/// ```
/// use cistring::find_ci;
///
/// assert_eq!(find_ci("a NEEDLE here", "NeedLE"), Some(2));
/// assert_eq!(find_ci("abc", ""), Some(0));
/// ```
pub fn find_ci<H, N>(haystack: &H, needle: &N) -> Option<usize>
where
    H: AsRef<[u8]> + ?Sized,
    N: AsRef<[u8]> + ?Sized,
{
    KnuthMorrisPratt::new(needle.as_ref().folded()).find_first(&haystack.as_ref().folded())
}

/// Case-insensitive find of every non-overlapping occurrence
pub fn find_all_ci<H, N>(haystack: &H, needle: &N) -> Vec<usize>
where
    H: AsRef<[u8]> + ?Sized,
    N: AsRef<[u8]> + ?Sized,
{
    let searcher = KnuthMorrisPratt::new(needle.as_ref().folded());
    let haystack = haystack.as_ref().folded();
    searcher.find_iter(&haystack).collect()
}

/// Case-insensitive substring search without allocating a lowercase copy.
#[inline]
pub fn contains_ci<H, N>(haystack: &H, needle: &N) -> bool
where
    H: AsRef<[u8]> + ?Sized,
    N: AsRef<[u8]> + ?Sized,
{
    find_ci(haystack, needle).is_some()
}

/// Case-insensitive starts_with check without allocating.
#[inline]
pub fn starts_with_ci<H, N>(haystack: &H, needle: &N) -> bool
where
    H: AsRef<[u8]> + ?Sized,
    N: AsRef<[u8]> + ?Sized,
{
    let (haystack, needle) = (haystack.as_ref(), needle.as_ref());
    haystack.len() >= needle.len() && eq_ci(&haystack[..needle.len()], needle)
}

/// Case-insensitive ends_with check without allocating.
#[inline]
pub fn ends_with_ci<H, N>(haystack: &H, needle: &N) -> bool
where
    H: AsRef<[u8]> + ?Sized,
    N: AsRef<[u8]> + ?Sized,
{
    let (haystack, needle) = (haystack.as_ref(), needle.as_ref());
    haystack.len() >= needle.len() && eq_ci(&haystack[haystack.len() - needle.len()..], needle)
}

/// Case-insensitive equality
#[inline]
pub fn eq_ci<A, B>(a: &A, b: &B) -> bool
where
    A: AsRef<[u8]> + ?Sized,
    B: AsRef<[u8]> + ?Sized,
{
    let (a, b) = (a.as_ref(), b.as_ref());
    a.len() == b.len() && a.folded().eq(b.folded())
}

/// Case-insensitive lexicographic ordering (byte order after lowercasing)
pub fn cmp_ci<A, B>(a: &A, b: &B) -> Ordering
where
    A: AsRef<[u8]> + ?Sized,
    B: AsRef<[u8]> + ?Sized,
{
    a.as_ref().folded().cmp(b.as_ref().folded())
}
