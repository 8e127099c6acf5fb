//! Snippet 4: Piped Views
//! Example: filter -> map -> rev -> take, evaluated lazily
//!
//! Run with: cargo run --bin p4_piped_views

use anyhow::Context;
use lambda_algorithms::config::ViewsConfig;
use lambda_algorithms::views;

fn main() -> anyhow::Result<()> {
    let lines = views::render(&ViewsConfig::default()).context("view pipeline failed")?;
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
