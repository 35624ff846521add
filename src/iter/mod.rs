//! Case-folding views over borrowed bytes
//!
//! [`FoldCursor`] is a copyable position with the full random-access
//! contract (read, step, jump, signed distance). [`Folded`] is the range
//! between two cursors and is what generic code consumes: it implements
//! `Iterator<Item = u8>` for adaptor chains and [`crate::RandomAccess`] for
//! the searcher.
//!
//! ```
//! use cistring::CaseFold;
//!
//! let haystack = "a NEEDLE here";
//! assert!(haystack.folded().eq("a needle here".bytes()));
//! ```

mod cursor;
mod range;

pub use cursor::FoldCursor;
pub use range::Folded;

/// Borrow anything byte-like as a lowercased [`Folded`] view.
pub trait CaseFold {
    fn folded(&self) -> Folded<'_>;
}

impl CaseFold for [u8] {
    fn folded(&self) -> Folded<'_> {
        Folded::of(self)
    }
}

impl CaseFold for str {
    fn folded(&self) -> Folded<'_> {
        Folded::of(self.as_bytes())
    }
}
