//! Campaign ordering of ranked puzzles.

use std::fmt::{self, Display};

use octomino_catalog::{BucketThresholds, CatalogEntry, Difficulty};
use rand::{Rng, seq::SliceRandom as _};

/// Error returned by [`order_puzzles`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum OrderingError {
    /// An input line has no ranking to bucket it by.
    #[display("line {line} has no ranking")]
    MissingRanking {
        /// 1-based line number.
        line: usize,
    },
    /// A difficulty has puzzles but the pattern never takes any.
    #[display("ordering pattern never takes {difficulty} puzzles")]
    IncompletePattern {
        /// The difficulty that would never drain.
        difficulty: Difficulty,
    },
}

/// Repeating sequence of runs, such as three easy, two medium, two hard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingPattern {
    steps: Vec<(Difficulty, usize)>,
}

impl OrderingPattern {
    /// Creates a pattern from `(difficulty, run length)` steps.
    #[must_use]
    pub fn new(steps: Vec<(Difficulty, usize)>) -> Self {
        Self { steps }
    }

    /// Returns the steps of one cycle.
    #[must_use]
    pub fn steps(&self) -> &[(Difficulty, usize)] {
        &self.steps
    }

    fn takes(&self, difficulty: Difficulty) -> bool {
        self.steps.iter().any(|&(d, n)| d == difficulty && n > 0)
    }
}

impl Default for OrderingPattern {
    fn default() -> Self {
        Self::new(vec![
            (Difficulty::Easy, 3),
            (Difficulty::Medium, 2),
            (Difficulty::Hard, 2),
        ])
    }
}

impl Display for OrderingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (difficulty, count)) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{count} {difficulty}")?;
        }
        Ok(())
    }
}

/// A ranked puzzle placed in campaign order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedPuzzle {
    /// The ranked entry, unchanged.
    pub entry: CatalogEntry,
    /// 1-based line number in the ranked input.
    pub original_index: usize,
    /// Bucket the entry was drawn from.
    pub difficulty: Difficulty,
}

impl Display for OrderedPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.entry, self.original_index)
    }
}

/// Ranked puzzles split by difficulty, each bucket in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DifficultyBuckets {
    easy: Vec<OrderedPuzzle>,
    medium: Vec<OrderedPuzzle>,
    hard: Vec<OrderedPuzzle>,
}

impl DifficultyBuckets {
    /// Buckets `entries` by their ranking.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::MissingRanking`] for the first entry without
    /// a ranking.
    pub fn new(
        entries: &[CatalogEntry],
        thresholds: BucketThresholds,
    ) -> Result<Self, OrderingError> {
        let mut buckets = Self::default();
        for (i, entry) in entries.iter().enumerate() {
            let line = i + 1;
            let ranking = entry
                .ranking()
                .ok_or(OrderingError::MissingRanking { line })?;
            let difficulty = thresholds.classify(ranking);
            buckets.get_mut(difficulty).push(OrderedPuzzle {
                entry: entry.clone(),
                original_index: line,
                difficulty,
            });
        }
        Ok(buckets)
    }

    /// Returns the puzzles in `difficulty`'s bucket.
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> &[OrderedPuzzle] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn get_mut(&mut self, difficulty: Difficulty) -> &mut Vec<OrderedPuzzle> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Total number of puzzles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    /// Returns `true` if every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shuffles each bucket and interleaves them following `pattern`.
///
/// The pattern repeats until every bucket is drained. A step whose bucket is
/// already empty is skipped, and a step takes fewer puzzles when its bucket
/// runs short, so once a bucket is exhausted the others continue on their own.
///
/// # Errors
///
/// Returns [`OrderingError::MissingRanking`] if an entry has no ranking, and
/// [`OrderingError::IncompletePattern`] if a non-empty bucket has no step in
/// `pattern`.
///
/// # Examples
///
/// ```
/// use octomino_catalog::{BucketThresholds, CatalogEntry, Difficulty};
/// use octomino_ranking::{OrderingPattern, order_puzzles};
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let cells: Vec<String> = (0..64).map(|i| i.to_string()).collect();
/// let entry = |ranking: u32| -> CatalogEntry {
///     format!("{} {ranking}", cells.join(" ")).parse().unwrap()
/// };
/// let entries = [entry(1), entry(20), entry(10), entry(19)];
///
/// let mut rng = Pcg64::seed_from_u64(7);
/// let ordered = order_puzzles(
///     &entries,
///     BucketThresholds::OFFLINE,
///     &OrderingPattern::default(),
///     &mut rng,
/// )
/// .unwrap();
///
/// let difficulties: Vec<_> = ordered.iter().map(|p| p.difficulty).collect();
/// assert_eq!(
///     difficulties,
///     [Difficulty::Easy, Difficulty::Easy, Difficulty::Medium, Difficulty::Hard],
/// );
/// ```
pub fn order_puzzles<R>(
    entries: &[CatalogEntry],
    thresholds: BucketThresholds,
    pattern: &OrderingPattern,
    rng: &mut R,
) -> Result<Vec<OrderedPuzzle>, OrderingError>
where
    R: Rng + ?Sized,
{
    let mut buckets = DifficultyBuckets::new(entries, thresholds)?;
    for difficulty in Difficulty::ALL {
        if !buckets.get(difficulty).is_empty() && !pattern.takes(difficulty) {
            return Err(OrderingError::IncompletePattern { difficulty });
        }
    }

    let total = buckets.len();
    let mut queues = Difficulty::ALL.map(|difficulty| {
        let bucket = buckets.get_mut(difficulty);
        bucket.shuffle(rng);
        log::debug!("{difficulty}: {} puzzles", bucket.len());
        std::mem::take(bucket).into_iter()
    });

    let mut ordered = Vec::with_capacity(total);
    while ordered.len() < total {
        for &(difficulty, count) in pattern.steps() {
            let queue = &mut queues[difficulty as usize];
            ordered.extend(queue.by_ref().take(count));
        }
    }
    Ok(ordered)
}
