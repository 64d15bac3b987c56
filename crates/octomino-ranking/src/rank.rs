//! Catalog-wide ranking.

use std::collections::BTreeMap;

use octomino_catalog::CatalogEntry;
use octomino_core::round_half_up;
use rayon::prelude::*;

use crate::score::{ScoreBreakdown, Scorer};

/// A catalog entry with its freshly assigned ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPuzzle {
    /// The entry, carrying the new ranking.
    pub entry: CatalogEntry,
    /// The score the ranking was derived from.
    pub score: ScoreBreakdown,
    /// 1-based line number of the entry in the input.
    pub original_index: usize,
}

/// Maps the 0-based position in score order onto a ranking.
///
/// Position `0` gets `max`, position `count - 1` gets `min`, and positions in
/// between are spread linearly and rounded half-up. A single puzzle gets `max`.
///
/// # Examples
///
/// ```
/// use octomino_ranking::ranking_for_position;
///
/// assert_eq!(ranking_for_position(0, 3, 1, 20), 20);
/// assert_eq!(ranking_for_position(1, 3, 1, 20), 11);
/// assert_eq!(ranking_for_position(2, 3, 1, 20), 1);
/// assert_eq!(ranking_for_position(0, 1, 1, 20), 20);
/// ```
#[must_use]
pub fn ranking_for_position(position: usize, count: usize, min: u32, max: u32) -> u32 {
    if count <= 1 {
        return max;
    }
    #[expect(clippy::cast_precision_loss)]
    let fraction = 1.0 - position as f64 / (count - 1) as f64;
    let ranking = round_half_up(f64::from(min) + fraction * f64::from(max - min));
    u32::try_from(ranking).map_or(min, |r| r.clamp(min, max))
}

/// Scores every entry and ranks them, best score first.
///
/// Scoring runs in parallel. Ties keep their input order. The returned list
/// is in score order; [`RankedPuzzle::original_index`] maps back to the input.
#[must_use]
pub fn assign_rankings(scorer: &Scorer, entries: &[CatalogEntry]) -> Vec<RankedPuzzle> {
    let mut scored: Vec<(usize, ScoreBreakdown)> = entries
        .par_iter()
        .enumerate()
        .map(|(i, entry)| (i, scorer.score_entry(entry)))
        .collect();
    scored.sort_by(|a, b| b.1.total.total_cmp(&a.1.total));

    let count = scored.len();
    let config = scorer.config();
    let ranked: Vec<RankedPuzzle> = scored
        .into_iter()
        .enumerate()
        .map(|(position, (i, score))| {
            let ranking =
                ranking_for_position(position, count, config.min_ranking, config.max_ranking);
            RankedPuzzle {
                entry: entries[i].with_ranking(Some(ranking)),
                score,
                original_index: i + 1,
            }
        })
        .collect();

    log::info!("ranked {count} puzzles");
    ranked
}

/// Counts puzzles per ranking.
#[must_use]
pub fn ranking_histogram<'a, I>(entries: I) -> BTreeMap<u32, usize>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let mut histogram = BTreeMap::new();
    for ranking in entries.into_iter().filter_map(CatalogEntry::ranking) {
        *histogram.entry(ranking).or_insert(0) += 1;
    }
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_primary(primary: [u8; 8]) -> CatalogEntry {
        let mut cells: Vec<u8> = primary.to_vec();
        cells.extend((0..64).filter(|c| !primary.contains(c)));
        CatalogEntry::new(cells.try_into().unwrap(), None).unwrap()
    }

    #[test]
    fn test_ranking_for_position_bounds() {
        assert_eq!(ranking_for_position(0, 100, 1, 20), 20);
        assert_eq!(ranking_for_position(99, 100, 1, 20), 1);
        for pos in 0..100 {
            let r = ranking_for_position(pos, 100, 1, 20);
            assert!((1..=20).contains(&r));
        }
        assert_eq!(ranking_for_position(0, 0, 1, 20), 20);
    }

    #[test]
    fn test_three_puzzles() {
        let row = entry_with_primary([0, 1, 2, 3, 4, 5, 6, 7]);
        let cluster = entry_with_primary([0, 1, 2, 8, 9, 10, 63, 55]);
        let diagonal = entry_with_primary([0, 9, 18, 27, 36, 45, 54, 63]);
        // Input order differs from score order.
        let entries = [diagonal.clone(), row.clone(), cluster.clone()];

        let ranked = assign_rankings(&Scorer::default(), &entries);
        let summary: Vec<_> = ranked
            .iter()
            .map(|r| (r.original_index, r.entry.ranking()))
            .collect();
        assert_eq!(summary, [(2, Some(20)), (3, Some(11)), (1, Some(1))]);
        assert_eq!(ranked[0].entry.cells(), row.cells());
        assert_eq!(ranked[2].entry.cells(), diagonal.cells());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let a = entry_with_primary([0, 1, 2, 3, 4, 5, 6, 7]);
        let b = entry_with_primary([8, 9, 10, 11, 12, 13, 14, 15]);
        let ranked = assign_rankings(&Scorer::default(), &[a, b]);
        assert_eq!(ranked[0].original_index, 1);
        assert_eq!(ranked[1].original_index, 2);
        assert_eq!(ranked[0].entry.ranking(), Some(20));
        assert_eq!(ranked[1].entry.ranking(), Some(1));
    }

    #[test]
    fn test_histogram() {
        let ranked = assign_rankings(
            &Scorer::default(),
            &[
                entry_with_primary([0, 1, 2, 3, 4, 5, 6, 7]),
                entry_with_primary([8, 9, 10, 11, 12, 13, 14, 15]),
                entry_with_primary([0, 9, 18, 27, 36, 45, 54, 63]),
            ],
        );
        let histogram = ranking_histogram(ranked.iter().map(|r| &r.entry));
        assert_eq!(histogram, BTreeMap::from([(1, 1), (11, 1), (20, 1)]));
        assert!(ranking_histogram(&[entry_with_primary([0, 1, 2, 3, 4, 5, 6, 7])]).is_empty());
    }
}
