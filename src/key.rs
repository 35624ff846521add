//! Case-insensitive hashing and map keys

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::iter::CaseFold;
use crate::search::{cmp_ci, eq_ci};

/// Feed the lowercased form of `bytes` to `state`.
///
/// Consistent with [`eq_ci`]: inputs that compare equal case-insensitively
/// hash identically. The folded bytes are followed by the length.
pub fn hash_ci<H: Hasher>(bytes: &[u8], state: &mut H) {
    bytes.folded().for_each_chunk(|chunk| state.write(chunk));
    state.write_usize(bytes.len());
}

/// A key whose equality, ordering and hash ignore ASCII case.
///
/// Wraps any byte-like value, owned (`CiKey<String>`) or borrowed
/// (`CiKey<&str>`). Lookups go through a key of the same type:
///
/// ```
/// use std::collections::HashMap;
/// use cistring::CiKey;
///
/// let mut tables = HashMap::new();
/// tables.insert(CiKey::new("Customers".to_string()), 1);
/// assert_eq!(tables.get(&CiKey::new("CUSTOMERS".to_string())), Some(&1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CiKey<T>(T);

impl<T> CiKey<T> {
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    pub fn as_inner(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: AsRef<[u8]>> PartialEq for CiKey<T> {
    fn eq(&self, other: &Self) -> bool {
        eq_ci(self.0.as_ref(), other.0.as_ref())
    }
}

impl<T: AsRef<[u8]>> Eq for CiKey<T> {}

impl<T: AsRef<[u8]>> PartialOrd for CiKey<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: AsRef<[u8]>> Ord for CiKey<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ci(self.0.as_ref(), other.0.as_ref())
    }
}

impl<T: AsRef<[u8]>> Hash for CiKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ci(self.0.as_ref(), state);
    }
}

impl<T: AsRef<[u8]>> fmt::Display for CiKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.0.as_ref()))
    }
}

impl<T> From<T> for CiKey<T> {
    fn from(inner: T) -> Self {
        Self(inner)
    }
}
