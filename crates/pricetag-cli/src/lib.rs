//! Command-line front end for the price-tag generator.

pub mod cli;
mod run;

pub use run::run_with_args;
