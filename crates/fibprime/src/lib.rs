//! fibprime library: application logic for the Fibonacci / primality CLI.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
