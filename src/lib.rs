//! # Lambda Algorithms
//!
//! Runnable snippets for closures and sequence algorithms:
//!
//! ## Snippet 1: Closure Capture
//! - Capture by value vs. by alias
//! - Closures that own and mutate their state across calls
//!
//! ## Snippet 2: Transform
//! - Mapping into a new collection and mutating in place
//! - Unary and binary transforms
//!
//! ## Snippet 3: Transform-Reduce
//! - Fused filter + map + reduce, sequential and parallel
//!
//! ## Snippet 4: Piped Views
//! - Lazy filter / map / reverse / take
//!
//! ## Snippet 5: Count-If
//! - Predicate counting and three-way comparison
//!
//! Run a snippet with: `cargo run --bin p1_lambda_capture`
//! or all of them with: `cargo run --bin snippets -- run --all`

pub mod capture;
pub mod config;
pub mod count;
pub mod error;
pub mod reduce;
pub mod snippet;
pub mod transform;
pub mod views;

pub use config::SnippetConfig;
pub use error::{Result, SnippetError};
pub use snippet::Snippet;
