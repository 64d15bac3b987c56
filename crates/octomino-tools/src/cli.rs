//! Argument types, input loading and output writing shared by the binaries.

use std::{
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use octomino_catalog::{BucketThresholds, Catalog, CatalogEntry, CatalogError, PuzzleNumberError};
use octomino_game::GameError;
use octomino_ranking::OrderingError;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

/// Errors reported by the tools before exiting with status 1.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ToolError {
    /// The input file does not exist.
    #[display("input file not found: {}", path.display())]
    InputNotFound {
        /// The missing path.
        path: PathBuf,
    },
    /// The input could not be read or parsed.
    #[display("{_0}")]
    Catalog(#[from] CatalogError),
    /// The ranked input cannot be ordered.
    #[display("{_0}")]
    Ordering(#[from] OrderingError),
    /// The requested puzzle number is invalid.
    #[display("{_0}")]
    PuzzleNumber(#[from] PuzzleNumberError),
    /// The requested puzzle cannot be started.
    #[display("{_0}")]
    Game(#[from] GameError),
    /// The output file could not be written.
    #[display("failed to write {}: {source}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Which difficulty thresholds to bucket rankings by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThresholdsArg {
    /// Easy from 14, medium from 7.
    #[default]
    Offline,
    /// Easy from 12, medium from 6.
    Live,
}

impl From<ThresholdsArg> for BucketThresholds {
    fn from(arg: ThresholdsArg) -> Self {
        match arg {
            ThresholdsArg::Offline => Self::OFFLINE,
            ThresholdsArg::Live => Self::LIVE,
        }
    }
}

/// Returns a generator seeded with `seed`, or from the thread-local generator.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> Pcg64 {
    match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_rng(&mut rand::rng()),
    }
}

/// Reads every entry of the catalog file at `path`.
///
/// # Errors
///
/// Returns [`ToolError::InputNotFound`] if `path` does not exist, and
/// [`ToolError::Catalog`] if it cannot be read or a line is malformed.
pub fn load_entries(path: &Path) -> Result<Vec<CatalogEntry>, ToolError> {
    if !path.exists() {
        return Err(ToolError::InputNotFound {
            path: path.to_owned(),
        });
    }
    let catalog = Catalog::open(path);
    Ok(catalog.entries()?.to_vec())
}

/// Writes one line per item to `path`, replacing the file.
///
/// # Errors
///
/// Returns [`ToolError::Write`] if the file cannot be created or written.
pub fn write_lines<I>(path: &Path, lines: I) -> Result<(), ToolError>
where
    I: IntoIterator,
    I::Item: Display,
{
    let write = || -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        for line in lines {
            writeln!(out, "{line}")?;
        }
        out.flush()
    };
    write().map_err(|source| ToolError::Write {
        path: path.to_owned(),
        source,
    })
}
