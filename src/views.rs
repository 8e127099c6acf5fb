//! Snippet 4: Lazy Piped Views
//!
//! `filter -> map -> rev -> take` built as one adapter chain. Building the chain
//! does no work; elements are pulled from the back of the slice one at a time
//! and the chain stops as soon as `take` is satisfied.
//!
//! The map step yields `Result` so an overflowing product surfaces as an error
//! item instead of a panic.

use crate::config::ViewsConfig;
use crate::error::{Result, SnippetError};
use std::cell::Cell;

fn scale(n: i32, factor: i32) -> Result<i32> {
    n.checked_mul(factor)
        .ok_or(SnippetError::Overflow("view pipeline multiply"))
}

/// Keep values above `threshold`, multiply by `factor`, reverse, take `take`.
pub fn pipeline(
    nums: &[i32],
    threshold: i32,
    factor: i32,
    take: usize,
) -> impl Iterator<Item = Result<i32>> + '_ {
    nums.iter()
        .filter(move |&&n| n > threshold)
        .map(move |&n| scale(n, factor))
        .rev()
        .take(take)
}

/// Same chain as [`pipeline`], counting how many times the predicate runs.
pub fn pipeline_with_probe<'a>(
    nums: &'a [i32],
    threshold: i32,
    factor: i32,
    take: usize,
    probe: &'a Cell<usize>,
) -> impl Iterator<Item = Result<i32>> + 'a {
    nums.iter()
        .filter(move |&&n| {
            probe.set(probe.get() + 1);
            tracing::trace!(n, "filter");
            n > threshold
        })
        .map(move |&n| scale(n, factor))
        .rev()
        .take(take)
}

pub fn render(config: &ViewsConfig) -> Result<Vec<String>> {
    let result = pipeline(
        &config.numbers,
        config.threshold,
        config.factor,
        config.take,
    )
    .collect::<Result<Vec<i32>>>()?;
    tracing::debug!(?result, "view pipeline drained");

    let line: String = result.iter().map(|val| format!("{} ", val)).collect();
    Ok(vec![line, "----------------".to_string()])
}
