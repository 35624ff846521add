//! Lazily folded view over a borrowed byte range

use std::convert::Infallible;
use std::iter::FusedIterator;

use super::cursor::FoldCursor;
use crate::table::fold_to_lower;

/// Size of the stack buffer used by [`Folded::try_for_each_chunk`]
const CHUNK_SIZE: usize = 512;

/// The bytes of `[begin, end)` as they read after lowercasing.
///
/// Iterating yields each folded byte by value; nothing is allocated and the
/// underlying slice is never written. Because the range keeps random access
/// (`get`, `nth`, `nth_back` and `len` are all O(1)) it can be handed to
/// [`crate::KnuthMorrisPratt`] or any other algorithm over
/// [`crate::RandomAccess`] as well as to ordinary iterator adaptors.
#[derive(Debug, Clone, Default)]
pub struct Folded<'a> {
    bytes: &'a [u8],
    front: usize,
    back: usize,
}

impl<'a> Folded<'a> {
    /// Range between two cursors over the same sequence.
    ///
    /// Two sentinels produce an empty range.
    pub fn new(begin: FoldCursor<'a>, end: FoldCursor<'a>) -> Self {
        let Some(bytes) = begin.sequence() else {
            debug_assert!(end.is_sentinel(), "range from a sentinel to a live cursor");
            return Self::default();
        };

        let len = begin.distance_to(&end);
        debug_assert!(len >= 0, "range end precedes its begin");
        let front = begin.position();
        let back = front + len.max(0) as usize;
        debug_assert!(back <= bytes.len(), "range end outside the sequence");

        Self { bytes, front, back }
    }

    /// The whole of `bytes`
    pub fn of(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            front: 0,
            back: bytes.len(),
        }
    }

    /// Number of positions left in the range
    pub fn len(&self) -> usize {
        self.back - self.front
    }

    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }

    /// Folded byte at offset `k` from the front of the range
    pub fn get(&self, k: usize) -> Option<u8> {
        if k < self.len() {
            Some(fold_to_lower(self.bytes[self.front + k]))
        } else {
            None
        }
    }

    /// Cursor at the front of the range
    pub fn begin(&self) -> FoldCursor<'a> {
        FoldCursor::new(self.bytes, self.front)
    }

    /// Cursor one past the back of the range
    pub fn end(&self) -> FoldCursor<'a> {
        FoldCursor::new(self.bytes, self.back)
    }

    /// The unfolded bytes the range is viewing
    pub fn source(&self) -> &'a [u8] {
        &self.bytes[self.front..self.back]
    }

    /// Hand the folded bytes to `f` in bounded pieces taken from a stack
    /// buffer, stopping at the first error.
    ///
    /// Every caller folding the same bytes sees the same chunk boundaries,
    /// which keeps streaming hashers deterministic.
    pub fn try_for_each_chunk<E, F>(self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&[u8]) -> Result<(), E>,
    {
        let mut buf = [0u8; CHUNK_SIZE];
        for piece in self.source().chunks(CHUNK_SIZE) {
            let out = &mut buf[..piece.len()];
            for (dst, &src) in out.iter_mut().zip(piece) {
                *dst = fold_to_lower(src);
            }
            f(out)?;
        }
        Ok(())
    }

    /// Infallible form of [`Folded::try_for_each_chunk`]
    pub fn for_each_chunk<F>(self, mut f: F)
    where
        F: FnMut(&[u8]),
    {
        let result = self.try_for_each_chunk(|chunk| {
            f(chunk);
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl Iterator for Folded<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.front == self.back {
            return None;
        }
        let b = self.bytes[self.front];
        self.front += 1;
        Some(fold_to_lower(b))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<u8> {
        if n >= self.len() {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }

    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<u8> {
        self.next_back()
    }
}

impl DoubleEndedIterator for Folded<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<u8> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(fold_to_lower(self.bytes[self.back]))
    }

    fn nth_back(&mut self, n: usize) -> Option<u8> {
        if n >= self.len() {
            self.back = self.front;
            return None;
        }
        self.back -= n;
        self.next_back()
    }
}

impl ExactSizeIterator for Folded<'_> {}

impl FusedIterator for Folded<'_> {}
