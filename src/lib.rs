//! cistring: ASCII case-insensitive views over borrowed bytes
//!
//! The crate presents existing byte data as if every ASCII letter had been
//! lowercased, without allocating a folded copy. Generic algorithms (exact
//! substring search, comparison, hashing) run over the folded view and
//! become case-insensitive for free.
//!
//! ```
//! use cistring::{CaseFold, KnuthMorrisPratt};
//!
//! let haystack = "a NEEDLE here";
//! let searcher = KnuthMorrisPratt::new("NeedLE".folded());
//! assert_eq!(searcher.find_first(&haystack.folded()), Some(2));
//! ```

pub mod digest;
pub mod error;
pub mod iter;
pub mod key;
pub mod scan;
pub mod search;
pub mod table;
pub mod view;

use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;

pub use digest::{ci_sha256, ci_sha256_hex, CiSha256};
pub use error::CiStringError;
pub use iter::{CaseFold, FoldCursor, Folded};
pub use key::{hash_ci, CiKey};
pub use scan::Match;
pub use search::{
    cmp_ci, contains_ci, ends_with_ci, eq_ci, find_all_ci, find_ci, starts_with_ci,
    KnuthMorrisPratt, RandomAccess,
};
pub use table::{fold_to_lower, fold_to_upper};
pub use view::{safe_cstr, safe_string};

/// Minimum number of files to benefit from parallel search.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

/// Options for a case-insensitive search over files
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Text to look for; compared ignoring ASCII case
    pub needle: String,
    /// Files and directories to search
    pub paths: Vec<PathBuf>,
    /// Glob patterns a file must match (any of) to be searched
    pub include: Vec<String>,
    /// Glob patterns that exclude a file
    pub exclude: Vec<String>,
    /// Enable verbose output
    pub verbose: bool,
}

/// Outcome of [`find_in_paths`]
#[derive(Debug, Clone, Default)]
pub struct FindReport {
    /// Every file that was searched, in search order
    pub files: Vec<PathBuf>,
    /// Matches grouped by file, in the same order as `files`
    pub matches: Vec<Match>,
}

impl FindReport {
    /// Number of matches per searched file, including files with none
    pub fn counts(&self) -> Vec<(PathBuf, usize)> {
        self.files
            .iter()
            .map(|file| {
                let count = self.matches.iter().filter(|m| &m.path == file).count();
                (file.clone(), count)
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Search every file under `options.paths` for `options.needle`
pub fn find_in_paths(options: &FindOptions) -> Result<FindReport> {
    // Step 1: Collect input files
    let files = scan::collect_files(&options.paths, &options.include, &options.exclude)?;

    if options.verbose {
        println!("Searching {} files", files.len());
    }

    // Step 2: Fold the needle once
    let searcher = scan::needle_searcher(options.needle.as_bytes());

    // Step 3: Search each file
    let results: Vec<Result<Vec<Match>>> = if files.len() >= PARALLEL_THRESHOLD {
        // Search files in parallel using rayon for larger inputs
        files
            .par_iter()
            .map(|file| scan::search_file(file, &searcher))
            .collect()
    } else {
        // Sequential processing for small inputs (avoids rayon overhead)
        files
            .iter()
            .map(|file| scan::search_file(file, &searcher))
            .collect()
    };

    // Combine results, propagating the first error if any
    let mut matches = Vec::new();
    for result in results {
        matches.extend(result?);
    }

    if options.verbose {
        println!("Found {} matches", matches.len());
    }

    Ok(FindReport { files, matches })
}
