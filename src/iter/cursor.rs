//! Random-access cursor over a borrowed byte sequence that reads folded bytes

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::table::fold_to_lower;

/// A position inside a borrowed byte slice whose reads are lowercased.
///
/// The cursor never owns or copies the bytes it points at; it only folds the
/// byte under it when read. Equality and distance are defined on the address
/// of the position (the same notion a raw pointer has), never on the folded
/// value, so two cursors over different non-empty buffers are not equal even
/// when the bytes they would read are. Empty buffers may share a dangling
/// address, so their cursors can compare equal to one another.
///
/// `FoldCursor::default()` is the sentinel: it has no sequence, is not
/// readable, and equals only another sentinel.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldCursor<'a> {
    base: Option<&'a [u8]>,
    pos: usize,
}

impl<'a> FoldCursor<'a> {
    /// Cursor at `pos` in `base`. `pos == base.len()` is the one-past-the-end
    /// position.
    pub fn new(base: &'a [u8], pos: usize) -> Self {
        debug_assert!(
            pos <= base.len(),
            "cursor position {} past end of {}-byte sequence",
            pos,
            base.len()
        );
        Self {
            base: Some(base),
            pos,
        }
    }

    /// Cursor at the first byte of `base`
    pub fn begin(base: &'a [u8]) -> Self {
        Self::new(base, 0)
    }

    /// Cursor one past the last byte of `base`
    pub fn end(base: &'a [u8]) -> Self {
        Self::new(base, base.len())
    }

    pub fn is_sentinel(&self) -> bool {
        self.base.is_none()
    }

    /// Index of the cursor inside the sequence it was created from
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The borrowed sequence, `None` for the sentinel
    pub fn sequence(&self) -> Option<&'a [u8]> {
        self.base
    }

    /// Folded byte under the cursor, or `None` for the sentinel and the
    /// one-past-the-end position.
    pub fn get(&self) -> Option<u8> {
        self.base?.get(self.pos).map(|&b| fold_to_lower(b))
    }

    /// Folded byte under the cursor.
    ///
    /// # Panics
    ///
    /// Panics when called on the sentinel or on a position outside the
    /// sequence.
    pub fn read(&self) -> u8 {
        match self.base {
            Some(bytes) => fold_to_lower(bytes[self.pos]),
            None => panic!("read through a sentinel FoldCursor"),
        }
    }

    /// Step forward by one
    pub fn inc(&mut self) {
        self.advance(1);
    }

    /// Step back by one
    pub fn dec(&mut self) {
        self.advance(-1);
    }

    /// Move by `n` positions in either direction.
    ///
    /// Leaving `[0, len]` is a caller error: debug builds assert, release
    /// builds keep the cursor memory safe and fail on the next read.
    pub fn advance(&mut self, n: isize) {
        let pos = self.pos.wrapping_add_signed(n);
        debug_assert!(
            pos <= self.base.map_or(0, <[u8]>::len),
            "cursor moved outside its sequence (position {} by {})",
            self.pos,
            n
        );
        self.pos = pos;
    }

    /// Signed number of positions from `self` to `other`.
    ///
    /// Both cursors must point into the same buffer.
    pub fn distance_to(&self, other: &FoldCursor<'a>) -> isize {
        debug_assert!(
            self.is_sentinel() == other.is_sentinel(),
            "distance between a sentinel and a live cursor"
        );
        other.address().wrapping_sub(self.address()) as isize
    }

    fn address(&self) -> usize {
        self.base.map_or(0, |bytes| bytes.as_ptr() as usize + self.pos)
    }
}

impl PartialEq for FoldCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.base, other.base) {
            (None, None) => true,
            (Some(_), Some(_)) => self.address() == other.address(),
            _ => false,
        }
    }
}

impl Eq for FoldCursor<'_> {}

impl PartialOrd for FoldCursor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.base, other.base) {
            (None, None) => Some(Ordering::Equal),
            (Some(_), Some(_)) => Some(self.address().cmp(&other.address())),
            _ => None,
        }
    }
}

impl Add<isize> for FoldCursor<'_> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self.advance(n);
        self
    }
}

impl Sub<isize> for FoldCursor<'_> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self.advance(n.wrapping_neg());
        self
    }
}

impl AddAssign<isize> for FoldCursor<'_> {
    fn add_assign(&mut self, n: isize) {
        self.advance(n);
    }
}

impl SubAssign<isize> for FoldCursor<'_> {
    fn sub_assign(&mut self, n: isize) {
        self.advance(n.wrapping_neg());
    }
}

/// `a - b` is the distance from `b` to `a`
impl<'a> Sub for FoldCursor<'a> {
    type Output = isize;

    fn sub(self, rhs: FoldCursor<'a>) -> isize {
        rhs.distance_to(&self)
    }
}
