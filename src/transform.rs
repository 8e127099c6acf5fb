//! Snippet 2: Element-wise Transform
//!
//! Mapping into a new collection, mutating in place (`make_ascii_uppercase`,
//! `iter_mut().for_each`), and the binary form that walks two ranges in lockstep.

use crate::config::TransformConfig;
use crate::error::{Result, SnippetError};
use itertools::Itertools;

// =============================================================================
// Character mapping
// =============================================================================

/// Upper-case by mapping every character into a fresh `String`.
pub fn to_upper_mapped(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_uppercase()).collect()
}

/// Upper-case by mutating each ASCII byte where it sits; the buffer is reused.
pub fn to_upper_in_place(s: &mut String) {
    s.make_ascii_uppercase();
}

/// Ordinal of every byte, so a multi-byte character yields one entry per byte.
pub fn ordinals(s: &str) -> Vec<usize> {
    s.bytes().map(usize::from).collect()
}

/// Binary transform of a sequence with itself, written back into the same slots.
pub fn add_elementwise(values: &mut [usize]) {
    values.iter_mut().for_each(|v| *v += *v);
}

pub fn render_ordinals(ordinals: &[usize]) -> String {
    let mut line = String::from("ordinals: ");
    for ord in ordinals {
        line.push_str(&format!("{:>3} ", ord));
    }
    line
}

/// Wrap in double quotes, escaping embedded quotes and backslashes.
pub fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

// =============================================================================
// Numeric transforms
// =============================================================================

/// Erase-remove: keep only the odd numbers.
pub fn remove_evens(mut numbers: Vec<i32>) -> Vec<i32> {
    numbers.retain(|n| n % 2 != 0);
    numbers
}

/// Unary transform into a new vector.
pub fn double_all(values: &[i32]) -> Result<Vec<i32>> {
    values
        .iter()
        .map(|&n| n.checked_mul(2).ok_or(SnippetError::Overflow("unary double")))
        .collect()
}

/// Binary transform over `first` and the matching prefix of `second`.
///
/// The first range drives the iteration, so `second` must be at least as long.
/// Extra elements at the end of `second` are ignored.
pub fn transform_binary<A, B, R, F>(first: &[A], second: &[B], mut op: F) -> Result<Vec<R>>
where
    F: FnMut(&A, &B) -> R,
{
    if second.len() < first.len() {
        return Err(SnippetError::LengthMismatch {
            first: first.len(),
            second: second.len(),
        });
    }
    Ok(first.iter().zip(second).map(|(a, b)| op(a, b)).collect())
}

/// Single-precision sum rendered with six decimals.
pub fn render_float_sum(number: i32, other: f32) -> String {
    format!("{:.6}", number as f32 + other)
}

pub fn render(config: &TransformConfig) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    let s = to_upper_mapped(&config.word);
    lines.push(format!("s = {}", quoted(&s)));

    let mut g = config.word.clone();
    to_upper_in_place(&mut g);
    lines.push(format!("g = {}", quoted(&g)));

    let mut ords = ordinals(&s);
    lines.push(render_ordinals(&ords));
    add_elementwise(&mut ords);
    lines.push(render_ordinals(&ords));

    lines.push("===============".to_string());
    let odds = remove_evens(config.numbers.clone());
    lines.push(odds.iter().map(|n| format!("{} ", n)).collect());

    lines.push("=====Unary Transform==========".to_string());
    lines.extend(double_all(&config.values)?.iter().map(|n| n.to_string()));

    lines.push(String::new());
    lines.push("====Binary Transform===========".to_string());
    let results = transform_binary(&config.values, &config.other_values, |&n, &o| {
        render_float_sum(n, o)
    })?;
    tracing::debug!(count = results.len(), "binary transform finished");
    lines.push(results.iter().join(" - "));

    Ok(lines)
}
