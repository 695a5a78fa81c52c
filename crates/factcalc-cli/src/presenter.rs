//! Result presenters: human-readable text and JSON.

use std::time::Duration;

use serde::Serialize;

use factcalc_core::{Approximation, FactorialValue};

use crate::output::{format_duration, format_number, format_result};

/// Result of a successful calculation.
///
/// Failures never reach a presenter as a result; they go through
/// [`ResultPresenter::present_error`].
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Calculator name.
    pub algorithm: String,
    /// Input.
    pub n: u64,
    /// The computed value.
    pub value: FactorialValue,
    /// Computation duration.
    pub duration: Duration,
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a calculation result.
    fn present_result(&self, result: &CalculationResult, details: bool);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Plain-text presenter for the terminal.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Render a successful result as the lines printed to stdout.
    #[must_use]
    pub fn render(
        &self,
        algorithm: &str,
        n: u64,
        value: &FactorialValue,
        duration: Duration,
        details: bool,
    ) -> String {
        if self.quiet {
            return value.to_string();
        }

        let mut lines = vec![
            format!("Algorithm: {algorithm}"),
            format!("N: {}", format_number(n)),
            format!("Duration: {}", format_duration(duration)),
        ];

        if details {
            match value {
                FactorialValue::Exact(v) => {
                    lines.push(format!("Result bits: {}", v.bits()));
                    lines.push(format!("Result digits: {}", value.digits()));
                }
                FactorialValue::Approximate(a) => {
                    lines.push(format!("Estimated digits: {}", value.digits()));
                    lines.push(format!("Mantissa precision: {} digits", a.precision));
                }
            }
        }

        let relation = if value.is_exact() { "=" } else { "≈" };
        lines.push(format!(
            "{}! {relation} {}",
            format_number(n),
            format_result(value, self.verbose)
        ));
        lines.join("\n")
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &CalculationResult, details: bool) {
        println!(
            "{}",
            self.render(&result.algorithm, result.n, &result.value, result.duration, details)
        );
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}

/// JSON record printed by [`JsonResultPresenter`].
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub algorithm: &'a str,
    pub n: u64,
    pub exact: bool,
    pub result: String,
    pub digits: u128,
    pub duration_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximation: Option<&'a Approximation>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    error: &'a str,
}

/// Presenter emitting one JSON object per result.
pub struct JsonResultPresenter;

impl JsonResultPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render a successful result as a JSON string.
    pub fn render(
        &self,
        algorithm: &str,
        n: u64,
        value: &FactorialValue,
        duration: Duration,
    ) -> serde_json::Result<String> {
        let report = JsonReport {
            algorithm,
            n,
            exact: value.is_exact(),
            result: value.to_string(),
            digits: value.digits(),
            duration_ms: duration.as_secs_f64() * 1000.0,
            approximation: value.as_approximation(),
        };
        serde_json::to_string(&report)
    }
}

impl Default for JsonResultPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_result(&self, result: &CalculationResult, _details: bool) {
        match self.render(&result.algorithm, result.n, &result.value, result.duration) {
            Ok(json) => println!("{json}"),
            Err(e) => self.present_error(&e.to_string()),
        }
    }

    fn present_error(&self, error: &str) {
        match serde_json::to_string(&JsonError { error }) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => tracing::error!("failed to encode error report: {e}"),
        }
    }
}
