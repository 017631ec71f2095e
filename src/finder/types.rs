use serde::{Deserialize, Serialize};

use super::error::LookupError;

/// Ordered, 0-indexed list of integers, assumed ascending.
///
/// The order is never verified. Once built the sequence is never mutated, so an
/// index keeps referring to the same value for the sequence's whole lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberSequence(Vec<i64>);

impl NumberSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for NumberSequence {
    fn from(numbers: Vec<i64>) -> Self {
        Self(numbers)
    }
}

/// A single validated lookup request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookupQuery {
    pub target: i64,
    pub threshold_percentage: f64,
}

impl LookupQuery {
    /// Builds a query, rejecting thresholds that are negative, NaN or infinite.
    pub fn new(target: i64, threshold_percentage: f64) -> Result<Self, LookupError> {
        if !threshold_percentage.is_finite() || threshold_percentage < 0.0 {
            return Err(LookupError::InvalidThreshold(threshold_percentage));
        }

        Ok(Self {
            target,
            threshold_percentage,
        })
    }
}

/// Snapshot answer to a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Position of `value` in the sequence.
    pub index: usize,
    pub value: i64,
    /// `true` when `value` is a neighbour within the threshold rather than the target itself.
    pub is_approximate: bool,
}
