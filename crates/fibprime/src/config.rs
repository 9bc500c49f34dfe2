//! Application configuration from CLI flags and environment.

use std::borrow::Cow;

use clap::Parser;

use fibprime_cli::OutputFormat;
use fibprime_core::calculator::FibError;
use fibprime_core::constants::{DEFAULT_MAX_N, DEFAULT_TOP_N};
use fibprime_core::index::parse_index;
use fibprime_core::primes::PrimeTable;

/// fibprime: exact Fibonacci numbers with a bounded primality check.
#[derive(Parser, Debug)]
#[command(name = "fibprime", version, about)]
pub struct AppConfig {
    /// Fibonacci indices to compute, processed in order.
    #[arg(value_name = "INDEX", allow_negative_numbers = true)]
    pub indices: Vec<String>,

    /// Also run the bounded trial-division primality check on each F(n).
    #[arg(short, long)]
    pub prime_check: bool,

    /// Prime table bound: primes strictly below this are precomputed.
    #[arg(long, default_value_t = DEFAULT_TOP_N, env = "FIBPRIME_TOP_N")]
    pub top_n: u64,

    /// Sweep bound: no divisor at or above this is ever tried.
    #[arg(long, default_value_t = DEFAULT_MAX_N, env = "FIBPRIME_MAX_N")]
    pub max_n: u64,

    /// Emit one JSON record per line.
    #[arg(long)]
    pub json: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validate every index before any computation starts.
    pub fn parse_indices(&self) -> Result<Vec<u64>, FibError> {
        self.indices.iter().map(|s| parse_index(s)).collect()
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// The prime table for the configured bounds.
    ///
    /// Default bounds reuse the process-wide table; anything else builds a
    /// private one.
    pub fn prime_table(&self) -> Result<Cow<'static, PrimeTable>, FibError> {
        if self.top_n == DEFAULT_TOP_N && self.max_n == DEFAULT_MAX_N {
            Ok(Cow::Borrowed(PrimeTable::shared()))
        } else {
            PrimeTable::build(self.top_n, self.max_n).map(Cow::Owned)
        }
    }
}
