//! The load-once catalog repository and puzzle selection.

use std::{io, path::PathBuf, sync::OnceLock};

use octomino_core::{PALETTE, Shape, ShapeError};
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

use crate::{
    difficulty::{BucketThresholds, Difficulty},
    entry::{CatalogEntry, EntryParseError},
    source::{CatalogSource, FileSource, TextSource},
};

/// Errors that can occur when loading a catalog or selecting a puzzle from it.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A catalog line is malformed.
    #[display("line {line}: {source}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What is wrong with the line.
        source: EntryParseError,
    },
    /// A catalog entry could not be turned into shapes.
    #[display("invalid shape: {_0}")]
    Shape(#[from] ShapeError),
    /// The catalog has no lines.
    #[display("the catalog is empty")]
    Empty,
    /// No entry has a ranking inside the requested bucket.
    #[display("no puzzles found for difficulty {difficulty}")]
    NoMatchingPuzzle {
        /// The requested bucket.
        difficulty: Difficulty,
    },
    /// A 1-based puzzle index is outside the catalog.
    #[display("invalid puzzle index {index}: must be between 1 and {len}")]
    PuzzleIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of puzzles in the catalog.
        len: usize,
    },
}

/// A puzzle picked from the catalog, decoded and colored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSelection {
    /// 1-based line number of the entry in the catalog.
    pub puzzle_index: usize,
    /// The eight shapes of the solved board, each with its own palette color.
    pub solution: Vec<Shape>,
    /// The entry's ranking, if it has one.
    pub ranking: Option<u32>,
}

/// Parses catalog text, one entry per line.
///
/// Leading and trailing whitespace of the whole text is ignored, so line `n`
/// of the trimmed text is puzzle index `n`.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for the first malformed line.
pub fn parse_catalog(text: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    text.trim()
        .lines()
        .enumerate()
        .map(|(i, line)| {
            line.parse()
                .map_err(|source| CatalogError::Parse { line: i + 1, source })
        })
        .collect()
}

/// A catalog that is loaded from its source on first use and cached afterwards.
///
/// The cache is never invalidated. A failed load is not cached, so a later
/// call tries the source again.
///
/// # Examples
///
/// ```
/// use octomino_catalog::{Catalog, CatalogError};
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let line: Vec<String> = (0..64).map(|i| i.to_string()).collect();
/// let catalog = Catalog::from_text(line.join(" "));
/// let mut rng = Pcg64::seed_from_u64(1);
///
/// assert_eq!(catalog.len().unwrap(), 1);
/// assert!(catalog.select_by_index(1, &mut rng).is_ok());
/// assert!(matches!(
///     catalog.select_by_index(2, &mut rng),
///     Err(CatalogError::PuzzleIndexOutOfRange { index: 2, len: 1 })
/// ));
/// ```
#[derive(Debug)]
pub struct Catalog<S = FileSource> {
    source: S,
    entries: OnceLock<Vec<CatalogEntry>>,
}

impl Catalog<FileSource> {
    /// Creates a catalog backed by the file at `path`. Nothing is read yet.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileSource::new(path))
    }
}

impl Catalog<TextSource> {
    /// Creates a catalog backed by in-memory text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(TextSource::new(text))
    }
}

impl<S> Catalog<S>
where
    S: CatalogSource,
{
    /// Creates a catalog backed by `source`. Nothing is read yet.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: OnceLock::new(),
        }
    }

    /// Returns all entries, loading and parsing the source on first use.
    ///
    /// # Errors
    ///
    /// Returns the source's error, [`CatalogError::Parse`] for a malformed
    /// line, or [`CatalogError::Empty`] if the catalog has no entries.
    pub fn entries(&self) -> Result<&[CatalogEntry], CatalogError> {
        if let Some(entries) = self.entries.get() {
            return Ok(entries);
        }
        let text = self.source.load()?;
        let entries = parse_catalog(&text)?;
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        log::debug!(
            "loaded {} catalog entries from {}",
            entries.len(),
            self.source.describe()
        );
        Ok(self.entries.get_or_init(|| entries))
    }

    /// Returns the number of puzzles.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded. See [`Catalog::entries`].
    pub fn len(&self) -> Result<usize, CatalogError> {
        self.entries().map(<[_]>::len)
    }

    /// Returns the entry with the given 1-based index.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PuzzleIndexOutOfRange`] if `index` is not in
    /// `1..=len`, or an error if the catalog cannot be loaded.
    pub fn entry(&self, index: usize) -> Result<&CatalogEntry, CatalogError> {
        let entries = self.entries()?;
        index
            .checked_sub(1)
            .and_then(|i| entries.get(i))
            .ok_or(CatalogError::PuzzleIndexOutOfRange {
                index,
                len: entries.len(),
            })
    }

    /// Picks a random puzzle whose ranking falls into `difficulty`.
    ///
    /// Entries without a ranking never match.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NoMatchingPuzzle`] if no entry matches, or an
    /// error if the catalog cannot be loaded.
    pub fn select_by_difficulty<R>(
        &self,
        difficulty: Difficulty,
        thresholds: BucketThresholds,
        rng: &mut R,
    ) -> Result<PuzzleSelection, CatalogError>
    where
        R: Rng + ?Sized,
    {
        let entries = self.entries()?;
        let matches: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                entry
                    .ranking()
                    .is_some_and(|ranking| thresholds.contains(difficulty, ranking))
            })
            .map(|(i, _)| i)
            .collect();
        if matches.is_empty() {
            return Err(CatalogError::NoMatchingPuzzle { difficulty });
        }
        let i = matches[rng.random_range(0..matches.len())];
        log::debug!(
            "selected puzzle {} out of {} {difficulty} candidates",
            i + 1,
            matches.len()
        );
        decode_selection(&entries[i], i + 1, rng)
    }

    /// Decodes the puzzle with the given 1-based index.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PuzzleIndexOutOfRange`] if `index` is not in
    /// `1..=len`, or an error if the catalog cannot be loaded.
    pub fn select_by_index<R>(
        &self,
        index: usize,
        rng: &mut R,
    ) -> Result<PuzzleSelection, CatalogError>
    where
        R: Rng + ?Sized,
    {
        let entry = self.entry(index)?;
        decode_selection(entry, index, rng)
    }
}

fn decode_selection<R>(
    entry: &CatalogEntry,
    puzzle_index: usize,
    rng: &mut R,
) -> Result<PuzzleSelection, CatalogError>
where
    R: Rng + ?Sized,
{
    let mut colors = PALETTE;
    colors.shuffle(rng);
    Ok(PuzzleSelection {
        puzzle_index,
        solution: entry.decode(&colors)?,
        ranking: entry.ranking(),
    })
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::HashSet};

    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn line(ranking: u32) -> String {
        let cells: Vec<String> = (0..64).map(|i| i.to_string()).collect();
        format!("{} {ranking}", cells.join(" "))
    }

    fn transposed_line(ranking: u32) -> String {
        let cells: Vec<String> = (0..64).map(|i| ((i % 8) * 8 + i / 8).to_string()).collect();
        format!("{} {ranking}", cells.join(" "))
    }

    /// Counts how often the catalog text is read.
    struct CountingSource {
        text: String,
        loads: Cell<usize>,
    }

    impl CatalogSource for CountingSource {
        fn load(&self) -> Result<String, CatalogError> {
            self.loads.set(self.loads.get() + 1);
            Ok(self.text.clone())
        }

        fn describe(&self) -> String {
            "counting".to_owned()
        }
    }

    #[test]
    fn test_source_is_loaded_once() {
        let catalog = Catalog::new(CountingSource {
            text: format!("{}\n{}\n", line(20), line(1)),
            loads: Cell::new(0),
        });
        assert_eq!(catalog.len().unwrap(), 2);
        assert_eq!(catalog.len().unwrap(), 2);
        catalog.entry(2).unwrap();
        assert_eq!(catalog.source.loads.get(), 1);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let catalog = Catalog::open("/nonexistent/octomino/catalog.txt");
        assert!(matches!(catalog.len(), Err(CatalogError::Io { .. })));
        assert!(matches!(catalog.len(), Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_parse_errors_report_line_numbers() {
        let catalog = Catalog::from_text(format!("{}\n1 2 3\n", line(5)));
        assert!(matches!(
            catalog.entries(),
            Err(CatalogError::Parse {
                line: 2,
                source: EntryParseError::InvalidLength { len: 3 }
            })
        ));
        assert!(matches!(
            Catalog::from_text("\n \n").entries(),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_select_by_index_bounds() {
        let catalog = Catalog::from_text(format!("{}\n{}", line(20), transposed_line(3)));
        let mut rng = Pcg64::seed_from_u64(0);

        for index in [0, 3] {
            assert!(matches!(
                catalog.select_by_index(index, &mut rng),
                Err(CatalogError::PuzzleIndexOutOfRange { len: 2, .. })
            ));
        }

        let selection = catalog.select_by_index(2, &mut rng).unwrap();
        assert_eq!(selection.puzzle_index, 2);
        assert_eq!(selection.ranking, Some(3));
        // Shape 0 of the transposed tiling is the first column.
        assert!((0..8).all(|y| selection.solution[0].has_tile_at(0, y)));
    }

    #[test]
    fn test_select_by_difficulty_filters_by_bucket() {
        let catalog = Catalog::from_text(format!(
            "{}\n{}\n{}",
            line(20),
            transposed_line(8),
            line(2)
        ));
        let mut rng = Pcg64::seed_from_u64(42);

        for _ in 0..20 {
            let easy = catalog
                .select_by_difficulty(Difficulty::Easy, BucketThresholds::LIVE, &mut rng)
                .unwrap();
            assert_eq!(easy.puzzle_index, 1);

            let medium = catalog
                .select_by_difficulty(Difficulty::Medium, BucketThresholds::LIVE, &mut rng)
                .unwrap();
            assert_eq!(medium.puzzle_index, 2);

            let hard = catalog
                .select_by_difficulty(Difficulty::Hard, BucketThresholds::LIVE, &mut rng)
                .unwrap();
            assert_eq!(hard.puzzle_index, 3);
        }
    }

    #[test]
    fn test_select_by_difficulty_without_match() {
        let catalog = Catalog::from_text(line(20));
        let mut rng = Pcg64::seed_from_u64(0);
        assert!(matches!(
            catalog.select_by_difficulty(Difficulty::Hard, BucketThresholds::OFFLINE, &mut rng),
            Err(CatalogError::NoMatchingPuzzle {
                difficulty: Difficulty::Hard
            })
        ));

        let unranked: Vec<String> = (0..64).map(|i| i.to_string()).collect();
        let catalog = Catalog::from_text(unranked.join(" "));
        assert!(matches!(
            catalog.select_by_difficulty(Difficulty::Easy, BucketThresholds::LIVE, &mut rng),
            Err(CatalogError::NoMatchingPuzzle { .. })
        ));
    }

    #[test]
    fn test_selection_uses_every_palette_color_once() {
        let catalog = Catalog::from_text(line(15));
        let mut rng = Pcg64::seed_from_u64(9);
        let selection = catalog.select_by_index(1, &mut rng).unwrap();
        let colors: HashSet<_> = selection.solution.iter().map(Shape::color).collect();
        assert_eq!(colors, PALETTE.into_iter().collect());
    }
}
