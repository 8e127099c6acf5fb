//! Snippet 1: Closure Capture Semantics
//!
//! A closure copies `x` when it is created and holds a live alias to `y`.
//! Writes made to `x` afterwards are invisible to the closure; writes to `y`
//! flow both ways. The alias is a `Cell` so the closure stays `Fn` while the
//! outer scope keeps writing through the same shared borrow.

use crate::config::CaptureConfig;
use crate::error::{Result, SnippetError};
use std::cell::Cell;

/// What the capture scenario printed, plus the outer state it left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOutcome {
    pub lines: Vec<String>,
    pub outer_x: i64,
    pub final_y: i64,
}

/// Capture `x` by value and `y` by alias, reassign both, then call the closure `calls` times.
///
/// Fails with [`SnippetError::Overflow`] if incrementing `y` leaves the `i64` range.
pub fn capture_by_value_and_alias(
    x: i64,
    y: i64,
    reassign: i64,
    calls: usize,
) -> Result<CaptureOutcome> {
    let mut x = x;
    let y = Cell::new(y);

    let inside = {
        let x = x;
        let y = &y;
        move || -> Result<String> {
            let line = format!("inside Lambda x: {} y: {}", x, y.get());
            let next = y
                .get()
                .checked_add(1)
                .ok_or(SnippetError::Overflow("captured increment"))?;
            y.set(next);
            Ok(line)
        }
    };

    x = reassign;
    y.set(reassign);

    let mut lines = (0..calls).map(|_| inside()).collect::<Result<Vec<String>>>()?;
    lines.push(format!("final y: {}", y.get()));
    tracing::debug!(outer_x = x, final_y = y.get(), calls, "capture scenario finished");

    Ok(CaptureOutcome {
        lines,
        outer_x: x,
        final_y: y.get(),
    })
}

/// A closure that owns its running total and updates it on every call.
pub fn make_accumulator(start: i64) -> impl FnMut(i64) -> i64 {
    let mut total = start;
    move |step| {
        total += step;
        total
    }
}

pub fn render(config: &CaptureConfig) -> Result<Vec<String>> {
    let outcome = capture_by_value_and_alias(config.x, config.y, config.reassign, config.calls)?;
    Ok(outcome.lines)
}
