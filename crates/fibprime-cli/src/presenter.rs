//! CLI result presenter.

use std::io::{self, Write};

use num_bigint::BigUint;

use fibprime_core::primality::Primality;

use crate::output::{format_prime_line, OutputFormat, ResultRecord};

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present F(n).
    fn present_value(&mut self, n: u64, value: &BigUint) -> io::Result<()>;

    /// Present F(n) together with its primality check.
    fn present_prime_check(
        &mut self,
        n: u64,
        value: &BigUint,
        primality: Primality,
    ) -> io::Result<()>;
}

/// Presenter writing text or JSON lines to any writer (stdout in the binary).
pub struct CLIResultPresenter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> CLIResultPresenter<W> {
    #[must_use]
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &ResultRecord) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)
    }
}

impl<W: Write> ResultPresenter for CLIResultPresenter<W> {
    fn present_value(&mut self, n: u64, value: &BigUint) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{value}"),
            OutputFormat::Json => self.write_record(&ResultRecord::new(n, value, None)),
        }
    }

    fn present_prime_check(
        &mut self,
        n: u64,
        value: &BigUint,
        primality: Primality,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", format_prime_line(value, primality)),
            OutputFormat::Json => {
                self.write_record(&ResultRecord::new(n, value, Some(primality)))
            }
        }
    }
}
