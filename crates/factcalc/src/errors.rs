//! Error handling and exit codes.

use factcalc_core::constants::exit_codes;
use factcalc_core::FactorialError;

/// Map a calculation error to the appropriate exit code.
pub fn handle_error(err: &FactorialError) -> i32 {
    match err {
        FactorialError::InvalidArgument(_) | FactorialError::Config(_) => exit_codes::ERROR_CONFIG,
        FactorialError::ComputationFailure(_) => exit_codes::ERROR_COMPUTATION,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FactorialError>()
        .map_or(exit_codes::ERROR_COMPUTATION, handle_error)
}
