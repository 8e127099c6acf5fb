//! Snippet 1: Closure Capture
//! Example: `x` copied into the closure, `y` shared with it
//!
//! Run with: cargo run --bin p1_lambda_capture

use anyhow::Context;
use lambda_algorithms::capture;
use lambda_algorithms::config::CaptureConfig;

fn main() -> anyhow::Result<()> {
    let lines = capture::render(&CaptureConfig::default()).context("capture snippet failed")?;
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
