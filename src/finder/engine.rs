use std::path::Path;

use super::error::{LoadError, LookupError};
use super::loader::load_numbers;
use super::types::{LookupResult, NumberSequence};

/// The single lookup capability the request layer depends on.
///
/// Implementations must be pure reads: the same arguments against the same
/// instance always produce the same answer.
pub trait NumberFinder: Send + Sync {
    fn find(&self, target: i64, threshold_percentage: f64) -> Result<LookupResult, LookupError>;
}

/// Bounds left behind by a binary search that did not hit the target.
///
/// `left` is the insertion point (first index whose value exceeds the target) and
/// `right == left - 1` is the last index below it. Either may be out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InsertionPoint {
    left: isize,
    right: isize,
}

/// Read-only lookup engine over a loaded `NumberSequence`.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    numbers: NumberSequence,
}

impl SearchEngine {
    pub fn new(numbers: NumberSequence) -> Self {
        Self { numbers }
    }

    /// Loads `path` and builds an engine over it. No engine exists if loading fails.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        load_numbers(path).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn numbers(&self) -> &NumberSequence {
        &self.numbers
    }

    /// Closed-interval binary search.
    ///
    /// The midpoint is `left + (right - left) / 2`, i.e. `floor((left + right) / 2)`
    /// for the non-negative bounds used here, so on an even-length range the lower
    /// of the two middle elements is checked first.
    fn find_exact(&self, target: i64) -> Result<LookupResult, InsertionPoint> {
        let numbers = self.numbers.as_slice();
        let mut left: isize = 0;
        let mut right: isize = numbers.len() as isize - 1;

        while left <= right {
            let mid = left + (right - left) / 2;
            let value = numbers[mid as usize];

            if value == target {
                return Ok(LookupResult {
                    index: mid as usize,
                    value,
                    is_approximate: false,
                });
            }

            if value < target {
                left = mid + 1;
            } else {
                right = mid - 1;
            }
        }

        Err(InsertionPoint { left, right })
    }

    /// Checks the right neighbour, then the left one. The first whose distance is
    /// strictly below `|target| * threshold_percentage` wins.
    fn find_adjacent_within_threshold(
        &self,
        target: i64,
        threshold_percentage: f64,
        bounds: InsertionPoint,
    ) -> Option<LookupResult> {
        let threshold = target.unsigned_abs() as f64 * threshold_percentage;

        [bounds.left, bounds.right]
            .into_iter()
            .filter_map(|index| {
                let index = usize::try_from(index).ok()?;
                self.numbers.get(index).map(|value| (index, value))
            })
            .find(|(_, value)| (value.abs_diff(target) as f64) < threshold)
            .map(|(index, value)| LookupResult {
                index,
                value,
                is_approximate: true,
            })
    }
}

impl NumberFinder for SearchEngine {
    fn find(&self, target: i64, threshold_percentage: f64) -> Result<LookupResult, LookupError> {
        let bounds = match self.find_exact(target) {
            Ok(exact) => return Ok(exact),
            Err(bounds) => bounds,
        };

        if threshold_percentage == 0.0 {
            return Err(LookupError::NotFound);
        }

        self.find_adjacent_within_threshold(target, threshold_percentage, bounds)
            .ok_or(LookupError::OutOfThreshold)
    }
}
