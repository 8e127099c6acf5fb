//! Snippet 2: Transform
//! Example: Upper-casing, ordinals, unary and binary transforms
//!
//! Run with: cargo run --bin p2_transform

use anyhow::Context;
use lambda_algorithms::config::TransformConfig;
use lambda_algorithms::transform;

fn main() -> anyhow::Result<()> {
    let lines = transform::render(&TransformConfig::default())
        .context("transform snippet failed")?;
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
