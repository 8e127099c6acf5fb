//! Snippet 3: Fused Transform-Reduce
//!
//! Filter, map and accumulate in one traversal with no intermediate `Vec`.
//! Odd values are mapped to the additive identity instead of being dropped,
//! which is what lets the filter fuse into the map.

use crate::config::ReduceConfig;
use crate::error::{Result, SnippetError};
use rayon::prelude::*;

/// Sum of the squares of the even values.
///
/// Every square and partial sum is checked; `None` flows through the fold once
/// any step leaves the `i32` range.
pub fn sum_even_squares(numbers: &[i32]) -> Result<i32> {
    transform_reduce(
        numbers,
        Some(0i32),
        |acc, x| acc.zip(x).and_then(|(a, b)| a.checked_add(b)),
        |&n| if n % 2 == 0 { n.checked_mul(n) } else { Some(0) },
    )
    .ok_or(SnippetError::Overflow("sum of even squares"))
}

/// Sequential transform-reduce: map each item, fold the results into `init`.
pub fn transform_reduce<T, R, M, F>(items: &[T], init: R, reduce: F, transform: M) -> R
where
    M: Fn(&T) -> R,
    F: Fn(R, R) -> R,
{
    items.iter().map(transform).fold(init, reduce)
}

/// Parallel transform-reduce.
/// `reduce` must be associative and `identity` its neutral element, since
/// chunks are combined in an unspecified grouping.
pub fn par_transform_reduce<T, R, I, M, F>(items: &[T], identity: I, reduce: F, transform: M) -> R
where
    T: Sync,
    R: Send,
    I: Fn() -> R + Sync + Send,
    M: Fn(&T) -> R + Sync + Send,
    F: Fn(R, R) -> R + Sync + Send,
{
    items.par_iter().map(transform).reduce(identity, reduce)
}

pub fn render(config: &ReduceConfig) -> Result<Vec<String>> {
    let result = sum_even_squares(&config.numbers)?;
    tracing::debug!(result, len = config.numbers.len(), "sum of even squares");
    Ok(vec![result.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sum_even_squares_one_to_ten() {
        let numbers: Vec<i32> = (1..=10).collect();
        assert_eq!(sum_even_squares(&numbers).unwrap(), 220);
    }

    #[test]
    fn test_sum_even_squares_edge_cases() {
        assert_eq!(sum_even_squares(&[]).unwrap(), 0);
        assert_eq!(sum_even_squares(&[1, 3, 5]).unwrap(), 0);
        assert_eq!(sum_even_squares(&[-2, 0, 2]).unwrap(), 8);
    }

    #[test]
    fn test_square_overflow_is_an_error() {
        // 100000^2 does not fit in an i32
        let err = sum_even_squares(&[100_000]).unwrap_err();
        assert!(matches!(err, SnippetError::Overflow(_)));
    }

    #[test]
    fn test_sum_overflow_is_an_error() {
        // each square fits, their sum does not
        assert!(sum_even_squares(&[46_340, 46_340]).is_err());
        assert_eq!(sum_even_squares(&[46_340]).unwrap(), 2_147_395_600);
    }

    #[test]
    fn test_render_reports_overflow_from_config() {
        let config = ReduceConfig {
            numbers: vec![100_000],
        };
        assert!(render(&config).is_err());
    }

    #[test]
    fn test_transform_reduce_other_types() {
        let words = ["a", "bb", "ccc"];
        let total_len = transform_reduce(&words, 0usize, |a, b| a + b, |w| w.len());
        assert_eq!(total_len, 6);

        let joined = transform_reduce(&[1, 2, 3], String::new(), |a, b| a + &b, |n| n.to_string());
        assert_eq!(joined, "123");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let numbers: Vec<i64> = (1..=10_000).collect();
        let square_even = |&n: &i64| if n % 2 == 0 { n * n } else { 0 };
        let seq = transform_reduce(&numbers, 0, |a, b| a + b, square_even);
        let par = par_transform_reduce(&numbers, || 0, |a, b| a + b, square_even);
        assert_eq!(seq, par);
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&ReduceConfig::default()).unwrap(), vec!["220"]);
    }

    proptest! {
        #[test]
        fn test_fused_equals_filter_then_map(numbers in prop::collection::vec(-1000i32..1000, 0..100)) {
            let unfused: i32 = numbers.iter().filter(|&&n| n % 2 == 0).map(|&n| n * n).sum();
            prop_assert_eq!(sum_even_squares(&numbers).unwrap(), unfused);
        }

        #[test]
        fn test_parallel_sum_matches(numbers in prop::collection::vec(-1000i64..1000, 0..500)) {
            let seq = transform_reduce(&numbers, 0, |a, b| a + b, |&n| n * 3);
            let par = par_transform_reduce(&numbers, || 0, |a, b| a + b, |&n| n * 3);
            prop_assert_eq!(seq, par);
        }
    }
}
