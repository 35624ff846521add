//! Input discovery and per-file case-insensitive search
//!
//! Paths given on the command line are expanded into a sorted file list
//! (directories are walked recursively), each file is read into memory, and
//! the folded needle is searched for in a [`Folded`](crate::Folded) view of
//! its bytes.

use std::path::{Path, PathBuf};

use anyhow::Result;
use encoding_rs::{Encoding, UTF_8};

use crate::error::CiStringError;
use crate::iter::CaseFold;
use crate::search::KnuthMorrisPratt;

/// Directory names never descended into
const SKIPPED_DIRS: &[&str] = &[".git", ".hg", ".svn", "target"];

/// A single occurrence of the needle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub path: PathBuf,
    /// Byte offset from the start of the (decoded) input
    pub offset: usize,
    /// 1-based line number
    pub line: usize,
    /// 1-based byte column within the line
    pub column: usize,
    /// The matching line without its terminator
    pub text: String,
}

/// Searcher for a needle folded once into an owned buffer
pub type NeedleSearcher = KnuthMorrisPratt<Vec<u8>>;

/// Build the searcher used for every input file
pub fn needle_searcher(needle: &[u8]) -> NeedleSearcher {
    KnuthMorrisPratt::new(needle.folded().collect())
}

/// Expand `paths` into the list of files to search.
///
/// Files are taken as given; directories are walked recursively. When
/// `include` is non-empty a file must match one of its globs, and it must
/// match none of `exclude`. The result is sorted and de-duplicated.
pub fn collect_files(
    paths: &[PathBuf],
    include: &[String],
    exclude: &[String],
) -> Result<Vec<PathBuf>> {
    let include = compile_patterns(include)?;
    let exclude = compile_patterns(exclude)?;

    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            walk_dir(path, &mut files);
        } else {
            return Err(CiStringError::MissingPath { path: path.clone() }.into());
        }
    }

    files.retain(|file| {
        (include.is_empty() || include.iter().any(|p| p.matches_path(file)))
            && !exclude.iter().any(|p| p.matches_path(file))
    });
    files.sort();
    files.dedup();

    Ok(files)
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<glob::Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            glob::Pattern::new(pattern).map_err(|source| {
                anyhow::Error::from(CiStringError::InvalidGlob {
                    pattern: pattern.clone(),
                    source,
                })
            })
        })
        .collect()
}

fn walk_dir(root: &Path, files: &mut Vec<PathBuf>) {
    let walker = walkdir::WalkDir::new(root).into_iter().filter_entry(|entry| {
        entry.depth() == 0
            || !entry
                .file_name()
                .to_str()
                .is_some_and(|name| SKIPPED_DIRS.contains(&name))
    });

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => eprintln!(
                "Warning: skipping unreadable entry under {}: {}",
                root.display(),
                err
            ),
        }
    }
}

/// Read an input file as bytes.
///
/// A UTF-8 BOM is dropped. UTF-16 input (detected by its BOM) is transcoded
/// to UTF-8 first, since an ASCII needle cannot match interleaved NUL bytes.
/// Anything else is searched exactly as stored.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|e| CiStringError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(decode_source(path, bytes)?)
}

/// Decode raw input bytes the way [`read_source`] does; `path` only labels
/// errors
pub fn decode_source(path: &Path, mut bytes: Vec<u8>) -> Result<Vec<u8>, CiStringError> {
    match Encoding::for_bom(&bytes) {
        Some((encoding, bom_len)) if encoding == UTF_8 => {
            bytes.drain(..bom_len);
            Ok(bytes)
        }
        Some((encoding, bom_len)) => {
            let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
            if had_errors {
                Err(CiStringError::TranscodeError {
                    path: path.to_path_buf(),
                    encoding: encoding.name(),
                })
            } else {
                Ok(decoded.into_owned().into_bytes())
            }
        }
        None => Ok(bytes),
    }
}

/// Find every non-overlapping occurrence in `haystack`, with line and column
pub fn search_bytes(path: &Path, haystack: &[u8], searcher: &NeedleSearcher) -> Vec<Match> {
    let folded = haystack.folded();
    let mut matches = Vec::new();

    // Offsets arrive in ascending order, so line tracking only moves forward
    let mut line = 1;
    let mut line_start = 0;
    let mut scanned = 0;

    for offset in searcher.find_iter(&folded) {
        for (i, &b) in haystack[scanned..offset].iter().enumerate() {
            if b == b'\n' {
                line += 1;
                line_start = scanned + i + 1;
            }
        }
        scanned = offset;

        let line_end = haystack[line_start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(haystack.len(), |n| line_start + n);
        let text = &haystack[line_start..line_end];
        let text = text.strip_suffix(b"\r").unwrap_or(text);

        matches.push(Match {
            path: path.to_path_buf(),
            offset,
            line,
            column: offset - line_start + 1,
            text: String::from_utf8_lossy(text).into_owned(),
        });
    }

    matches
}

/// Read `path` and search it
pub fn search_file(path: &Path, searcher: &NeedleSearcher) -> Result<Vec<Match>> {
    let haystack = read_source(path)?;
    Ok(search_bytes(path, &haystack, searcher))
}
