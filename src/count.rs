//! Snippet 5: Predicate Counting and Three-Way Comparison
//!
//! `filter().count()` answers "how many match", and `Ord::cmp` is the
//! single comparison that yields less, equal or greater in one call.

use crate::config::CountConfig;
use std::cmp::Ordering;

pub fn count_greater_than(nums: &[i32], threshold: i32) -> usize {
    nums.iter().filter(|&&n| n > threshold).count()
}

/// Three-way comparison of two values.
pub fn three_way<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Sort ascending using only the three-way comparison.
pub fn sort_by_three_way<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by(three_way);
    items
}

pub fn render(config: &CountConfig) -> Vec<String> {
    let count = count_greater_than(&config.numbers, config.threshold);
    tracing::debug!(count, threshold = config.threshold, "counted matches");
    vec![format!(
        "Number of elements greater than {}: {}",
        config.threshold, count
    )]
}
