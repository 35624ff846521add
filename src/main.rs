use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cistring::scan::{self, Match};
use cistring::table::{fold_lower_in_place, fold_upper_in_place};
use cistring::{find_in_paths, CiStringError, FindOptions, FindReport};

#[derive(Parser)]
#[command(name = "cistring")]
#[command(author, version, about = "ASCII case-insensitive search, folding and hashing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find occurrences of a needle, ignoring ASCII case
    Find {
        /// Text to search for
        needle: String,

        /// Files or directories to search (reads stdin when omitted)
        paths: Vec<PathBuf>,

        /// Only search files matching this glob (repeatable)
        #[arg(short, long)]
        include: Vec<String>,

        /// Skip files matching this glob (repeatable)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Print the number of matches per file instead of the matches
        #[arg(short, long)]
        count: bool,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write the input with ASCII letters folded to one case
    Fold {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Fold to uppercase instead of lowercase
        #[arg(short, long)]
        upper: bool,
    },

    /// Print the case-insensitive SHA-256 of each input
    Hash {
        /// Input files (reads stdin when omitted)
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            needle,
            paths,
            include,
            exclude,
            count,
            verbose,
        } => {
            let report = if paths.is_empty() {
                find_in_stdin(&needle)?
            } else {
                let options = FindOptions {
                    needle,
                    paths,
                    include,
                    exclude,
                    verbose,
                };
                find_in_paths(&options)?
            };

            print_report(&report, count)?;

            Ok(if report.is_empty() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Fold { file, upper } => {
            let mut bytes = read_input(file.as_deref())?;
            if upper {
                fold_upper_in_place(&mut bytes);
            } else {
                fold_lower_in_place(&mut bytes);
            }
            io::stdout()
                .lock()
                .write_all(&bytes)
                .map_err(output_error)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Hash { files } => {
            let mut out = BufWriter::new(io::stdout().lock());
            if files.is_empty() {
                let digest = cistring::ci_sha256_hex(&read_input(None)?);
                writeln!(out, "{}  -", digest).map_err(output_error)?;
            }
            for file in &files {
                let bytes = scan::read_source(file)?;
                let digest = cistring::ci_sha256_hex(&bytes);
                writeln!(out, "{}  {}", digest, file.display()).map_err(output_error)?;
            }
            out.flush().map_err(output_error)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn find_in_stdin(needle: &str) -> Result<FindReport> {
    let label = PathBuf::from("<stdin>");
    let haystack = read_input(None)?;
    let searcher = scan::needle_searcher(needle.as_bytes());
    let matches = scan::search_bytes(&label, &haystack, &searcher);
    Ok(FindReport {
        files: vec![label],
        matches,
    })
}

fn print_report(report: &FindReport, count_only: bool) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());

    if count_only {
        for (path, count) in report.counts() {
            writeln!(out, "{}:{}", path.display(), count).map_err(output_error)?;
        }
    } else {
        for Match {
            path,
            line,
            column,
            text,
            ..
        } in &report.matches
        {
            writeln!(out, "{}:{}:{}:{}", path.display(), line, column, text)
                .map_err(output_error)?;
        }
    }

    out.flush().map_err(output_error)?;
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => scan::read_source(path),
        None => {
            let label = Path::new("<stdin>");
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(|e| CiStringError::FileReadError {
                    path: label.to_path_buf(),
                    source: e,
                })?;
            // Same BOM handling as files
            Ok(scan::decode_source(label, bytes)?)
        }
    }
}

/// Errors writing to stdout
fn output_error(source: io::Error) -> CiStringError {
    CiStringError::OutputError { source }
}
