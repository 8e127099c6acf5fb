//! Snippet 5: Count-If
//! Example: Counting the elements that satisfy a predicate
//!
//! Run with: cargo run --bin p5_count_if

use lambda_algorithms::config::CountConfig;
use lambda_algorithms::count;

fn main() {
    for line in count::render(&CountConfig::default()) {
        println!("{}", line);
    }
}
