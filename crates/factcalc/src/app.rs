//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use factcalc_cli::output::write_to_file;
use factcalc_cli::presenter::{
    CLIResultPresenter, CalculationResult, JsonResultPresenter, ResultPresenter,
};
use factcalc_core::registry::{CalculatorFactory, DefaultFactory};
use factcalc_core::{validate, Calculator, FactorialError};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        factcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let raw = config
        .n
        .ok_or_else(|| FactorialError::Config("no input: pass -n <N> or set FACTCALC_N".into()))?;
    let n = validate(raw)?;
    let opts = config.options();

    let factory = DefaultFactory::with_executor(config.executor.into());
    let calculator = factory.get(config.algo.name())?;
    info!(n, calculator = calculator.name(), ?opts, "starting calculation");

    let start = Instant::now();
    let value = calculator.calculate(n, &opts)?;
    let result = CalculationResult {
        algorithm: calculator.name().to_string(),
        n,
        value,
        duration: start.elapsed(),
    };
    info!(n, duration = ?result.duration, "calculation complete");

    presenter(config).present_result(&result, config.details);

    if let Some(ref path) = config.output {
        write_to_file(path, &result.value)
            .with_context(|| format!("failed to write result to {}", path.display()))?;
    }

    Ok(())
}

/// Present a failure through the configured presenter.
pub fn report_error(config: &AppConfig, err: &anyhow::Error) {
    presenter(config).present_error(&format!("{err:#}"));
}

fn presenter(config: &AppConfig) -> Box<dyn ResultPresenter> {
    if config.json {
        Box::new(JsonResultPresenter::new())
    } else {
        Box::new(CLIResultPresenter::new(config.verbose, config.quiet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("factcalc").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn run_exact() {
        assert!(run(&config(&["-n", "12", "-q"])).is_ok());
    }

    #[test]
    fn run_rejects_negative() {
        let err = run(&config(&["-n", "-2", "-q"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FactorialError>(),
            Some(FactorialError::InvalidArgument(_))
        ));
    }

    #[test]
    fn run_json_past_u64_exponent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.txt");
        let path_str = path.to_str().unwrap();
        let n = i64::MAX.to_string();
        run(&config(&["-n", &n, "--json", "-o", path_str])).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let (_, exponent) = written.trim().split_once("e+").unwrap();
        assert!(exponent.parse::<u128>().unwrap() > u128::from(u64::MAX));
    }

    #[test]
    fn run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let path_str = path.to_str().unwrap();
        run(&config(&["-n", "25", "--algo", "exact", "-q", "-o", path_str])).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap().trim(),
            "15511210043330985984000000"
        );
    }
}
