//! Deletion ordering for snapshots
//!
//! Each step scores every adjacent pair of remaining candidates by
//! `value(later) - value(earlier)` and removes the later member of the
//! cheapest pair. Because the time value grows exponentially, closely
//! spaced old snapshots are cheap to lose while closely spaced recent ones
//! are not, so repeated removal leaves gaps that widen with age.
//!
//! The newest snapshot is never a candidate.

use snapbtr_core::SnapshotName;
use std::cmp::Ordering;

/// A snapshot still eligible for removal
#[derive(Debug, Clone)]
struct Candidate {
    value: f64,
    identifier: String,
}

/// Lazily produced deletion order, most disposable first
///
/// Built fresh from the current snapshot set; it holds no state beyond the
/// candidates it has not yielded yet.
#[derive(Debug, Clone)]
pub struct Ranking {
    /// Ascending by value, then identifier
    candidates: Vec<Candidate>,
}

/// Rank identifiers for deletion. Names that do not parse as snapshots are
/// ignored; the newest snapshot is held out.
pub fn rank<I, S>(identifiers: I) -> Ranking
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names: Vec<SnapshotName> = identifiers
        .into_iter()
        .filter_map(|id| SnapshotName::parse(id.as_ref()))
        .collect();
    names.sort();
    names.dedup_by(|a, b| a.as_str() == b.as_str());

    // Newest is exempt
    names.pop();

    let candidates = names
        .into_iter()
        .map(|name| Candidate {
            value: name.value(),
            identifier: name.into_string(),
        })
        .collect();

    Ranking { candidates }
}

/// The single most disposable snapshot, if any
pub fn next_victim<I, S>(identifiers: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rank(identifiers).next()
}

impl Iterator for Ranking {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.candidates.len() {
            0 => None,
            // Last resort: nothing left to compare against
            1 => self.candidates.pop().map(|c| c.identifier),
            _ => {
                let victim = select_victim(&self.candidates)?;
                Some(self.candidates.remove(victim).identifier)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.candidates.len(), Some(self.candidates.len()))
    }
}

impl ExactSizeIterator for Ranking {}

/// Index of the later member of the cheapest adjacent pair.
///
/// Pairs compare by loss, then by the earlier identifier, then by the later
/// one, so equal losses resolve toward the lexically first pair.
fn select_victim(sorted: &[Candidate]) -> Option<usize> {
    sorted
        .windows(2)
        .enumerate()
        .min_by(|(_, a), (_, b)| compare_pairs(a, b))
        .map(|(i, _)| i + 1)
}

fn compare_pairs(a: &[Candidate], b: &[Candidate]) -> Ordering {
    loss(a)
        .total_cmp(&loss(b))
        .then_with(|| a[0].identifier.cmp(&b[0].identifier))
        .then_with(|| a[1].identifier.cmp(&b[1].identifier))
}

fn loss(pair: &[Candidate]) -> f64 {
    pair[1].value - pair[0].value
}
