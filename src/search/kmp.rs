//! Knuth-Morris-Pratt exact-match search over random-access byte sources

use super::RandomAccess;

/// Exact-match substring searcher with a precomputed failure table.
///
/// The pattern and the haystack are any [`RandomAccess`] sources, so a
/// case-insensitive search is just this searcher run over folded views (or a
/// pre-folded owned needle against a folded haystack). Search is linear in
/// the haystack length and never backs up.
///
/// An empty pattern matches at the search start position.
#[derive(Debug, Clone)]
pub struct KnuthMorrisPratt<P> {
    pattern: P,
    /// `failure[i]` is the length of the longest proper border of
    /// `pattern[..=i]`
    failure: Vec<usize>,
}

impl<P: RandomAccess> KnuthMorrisPratt<P> {
    pub fn new(pattern: P) -> Self {
        let m = pattern.len();
        let mut failure = vec![0usize; m];

        let mut k = 0;
        for i in 1..m {
            let c = pattern.at(i);
            while k > 0 && pattern.at(k) != c {
                k = failure[k - 1];
            }
            if pattern.at(k) == c {
                k += 1;
            }
            failure[i] = k;
        }

        Self { pattern, failure }
    }

    pub fn pattern(&self) -> &P {
        &self.pattern
    }

    pub fn pattern_len(&self) -> usize {
        self.failure.len()
    }

    /// Offset of the first match in `haystack`
    pub fn find_first<H>(&self, haystack: &H) -> Option<usize>
    where
        H: RandomAccess + ?Sized,
    {
        self.find_from(haystack, 0)
    }

    /// Offset of the first match starting at or after `start`
    pub fn find_from<H>(&self, haystack: &H, start: usize) -> Option<usize>
    where
        H: RandomAccess + ?Sized,
    {
        let m = self.pattern_len();
        let n = haystack.len();
        if start > n {
            return None;
        }
        if m == 0 {
            return Some(start);
        }
        if n - start < m {
            return None;
        }

        let mut k = 0;
        for i in start..n {
            let c = haystack.at(i);
            while k > 0 && self.pattern.at(k) != c {
                k = self.failure[k - 1];
            }
            if self.pattern.at(k) == c {
                k += 1;
            }
            if k == m {
                return Some(i + 1 - m);
            }
        }
        None
    }

    /// All non-overlapping matches, left to right
    pub fn find_iter<'s, 'h, H>(&'s self, haystack: &'h H) -> Matches<'s, 'h, P, H>
    where
        H: RandomAccess + ?Sized,
    {
        Matches {
            searcher: self,
            haystack,
            next_start: Some(0),
        }
    }
}

/// Iterator returned by [`KnuthMorrisPratt::find_iter`]
#[derive(Debug)]
pub struct Matches<'s, 'h, P, H: ?Sized> {
    searcher: &'s KnuthMorrisPratt<P>,
    haystack: &'h H,
    next_start: Option<usize>,
}

impl<P, H> Iterator for Matches<'_, '_, P, H>
where
    P: RandomAccess,
    H: RandomAccess + ?Sized,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let start = self.next_start?;
        let found = self.searcher.find_from(self.haystack, start);
        let m = self.searcher.pattern_len();
        self.next_start = match found {
            // The empty pattern matches once
            Some(_) if m == 0 => None,
            Some(pos) => Some(pos + m),
            None => None,
        };
        found
    }
}
