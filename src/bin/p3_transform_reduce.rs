//! Snippet 3: Transform-Reduce
//! Example: Sum of the squares of the even numbers in 1..=10
//!
//! Run with: cargo run --bin p3_transform_reduce

use anyhow::Context;
use lambda_algorithms::config::ReduceConfig;
use lambda_algorithms::reduce;

fn main() -> anyhow::Result<()> {
    let lines = reduce::render(&ReduceConfig::default()).context("transform-reduce failed")?;
    for line in lines {
        println!("{}", line); // 220
    }
    Ok(())
}
