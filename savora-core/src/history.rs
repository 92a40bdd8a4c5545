//! Historical cuisine choices for a registered user.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How often a user chose each cuisine in past recommendations.
///
/// The history is owned by the preference store and read-only to scorers.
/// Absent cuisines count as zero.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use savora_core::CuisineHistory;
///
/// let history = CuisineHistory::new(BTreeMap::from([
///     ("italian".to_owned(), 3),
///     ("sushi".to_owned(), 1),
/// ]));
/// assert_eq!(history.total(), 4);
/// assert_eq!(history.count("italian"), 3);
/// assert_eq!(history.count("tapas"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CuisineHistory {
    counts: BTreeMap<String, u64>,
}

impl CuisineHistory {
    /// Wrap a pre-computed count map.
    #[must_use]
    pub const fn new(counts: BTreeMap<String, u64>) -> Self {
        Self { counts }
    }

    /// Return the choice count for a cuisine, zero when absent.
    #[must_use]
    pub fn count(&self, cuisine: &str) -> u64 {
        self.counts.get(cuisine).copied().unwrap_or(0)
    }

    /// Return the largest count among the given cuisines.
    ///
    /// Cuisines absent from the history count as zero, so a place whose
    /// cuisines never appear in the history yields zero.
    #[must_use]
    pub fn best_count<S: AsRef<str>>(&self, cuisines: &[S]) -> u64 {
        cuisines
            .iter()
            .map(|cuisine| self.count(cuisine.as_ref()))
            .max()
            .unwrap_or(0)
    }

    /// Return the sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Report whether the user has any recorded history.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Return the number of distinct cuisines recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Consume the wrapper and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, u64> {
        self.counts
    }
}

impl FromIterator<(String, u64)> for CuisineHistory {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
