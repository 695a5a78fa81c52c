//! Property-based tests for the dispatcher.

use std::sync::Arc;

use proptest::prelude::*;

use factcalc_core::calculator::{Calculator, Dispatcher, FactorialError};
use factcalc_core::executor::SequentialExecutor;
use factcalc_core::options::Options;
use factcalc_core::reducer::RangeProductReducer;
use factcalc_core::stirling::StirlingEstimator;

fn dispatcher() -> Dispatcher {
    Dispatcher::new(
        Arc::new(RangeProductReducer::with_executor(SequentialExecutor::new())),
        Arc::new(StirlingEstimator::new()),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Every negative input is rejected.
    #[test]
    fn negative_inputs_rejected(n in i64::MIN..0) {
        let result = dispatcher().compute(n, &Options::default());
        prop_assert!(matches!(result, Err(FactorialError::InvalidArgument(_))));
    }

    /// Exact results for 0..=20 match the u64 product.
    #[test]
    fn exact_range_matches_u64(n in 0u64..=20, workers in 1usize..24) {
        let opts = Options { workers, ..Default::default() };
        let expected: u64 = (1..=n).product();
        let value = dispatcher().calculate(n, &opts).unwrap();
        prop_assert!(value.is_exact());
        prop_assert_eq!(value.to_string(), expected.to_string());
    }

    /// Above the threshold the output is `<m>.<15 digits>e+<exp>` with m in 1..=9.
    #[test]
    fn approximate_format(n in 21u64..10_000_000) {
        let s = dispatcher().compute(n as i64, &Options::default()).unwrap();
        let (mantissa, exponent) = s.split_once("e+").unwrap();
        let (int_part, frac) = mantissa.split_once('.').unwrap();
        prop_assert_eq!(int_part.len(), 1);
        prop_assert!(int_part != "0");
        prop_assert_eq!(frac.len(), 15);
        prop_assert!(exponent.parse::<u128>().unwrap() >= 19);
    }

    /// Same input, same output.
    #[test]
    fn idempotent(n in 0i64..5000) {
        let d = dispatcher();
        let opts = Options::default();
        prop_assert_eq!(d.compute(n, &opts).unwrap(), d.compute(n, &opts).unwrap());
    }
}
