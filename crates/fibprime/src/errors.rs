//! Error handling and exit codes.

use fibprime_core::calculator::FibError;
use fibprime_core::constants::exit_codes;

/// Map a calculation error to its exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::InvalidInput(_) => exit_codes::ERROR_INPUT,
        FibError::Calculation(_) => exit_codes::ERROR_GENERIC,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for an application error; anything that is not a
/// [`FibError`] (e.g. a failed write to stdout) is generic.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FibError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
