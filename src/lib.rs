#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

pub mod cli;

pub mod errors;
pub use errors::Error;

pub mod framework;

/// The puzzle itself: words, scoring, boards and requests.
pub mod games;
