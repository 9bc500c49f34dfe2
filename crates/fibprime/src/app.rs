//! Application entry point and dispatch.

use std::io;

use anyhow::Result;
use tracing::{debug, info};

use fibprime_cli::presenter::{CLIResultPresenter, ResultPresenter};
use fibprime_core::calculator::{Calculator, FibCalculator};
use fibprime_core::primality::PrimalityChecker;

use crate::config::AppConfig;
use crate::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibprime_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    debug!(version = %version::full_version(), "starting");

    let stdout = io::stdout();
    let mut presenter = CLIResultPresenter::new(stdout.lock(), config.output_format());
    let calculator = FibCalculator::default();
    run_with(config, &calculator, &mut presenter)
}

/// Compute and present every configured index with the given calculator.
///
/// All indices are validated up front; an invalid one aborts the run before
/// anything is printed.
pub fn run_with(
    config: &AppConfig,
    calculator: &dyn Calculator,
    presenter: &mut dyn ResultPresenter,
) -> Result<()> {
    let indices = config.parse_indices()?;
    if indices.is_empty() {
        debug!("no indices supplied");
        return Ok(());
    }

    if !config.prime_check {
        for n in indices {
            let value = calculator.calculate(n)?;
            debug!(n, bits = value.bits(), "computed");
            presenter.present_value(n, &value)?;
        }
        return Ok(());
    }

    let table = config.prime_table()?;
    let checker = PrimalityChecker::new(&table);
    info!(
        primes = table.len(),
        top_n = table.top_n(),
        max_n = table.max_n(),
        "prime check enabled"
    );

    for n in indices {
        let value = calculator.calculate(n)?;
        let primality = checker.check(&value);
        debug!(n, primality = primality.label(), factor = ?primality.factor(), "checked");
        presenter.present_prime_check(n, &value, primality)?;
    }
    Ok(())
}
