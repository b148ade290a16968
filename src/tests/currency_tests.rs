use crate::currency::{CurrencyConverter, FixedRates, RateProvider};
use crate::error::SplitbookError;
use std::cell::Cell;

struct CountingRates {
    inner: FixedRates,
    calls: Cell<usize>,
}

impl RateProvider for CountingRates {
    fn rate(&self, from: &str, to: &str) -> Result<f64, SplitbookError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.rate(from, to)
    }
}

#[test]
fn converts_through_the_provider_rate() {
    let provider = FixedRates::new().with_rate("USD", "EUR", 0.9);
    let mut converter = CurrencyConverter::new(provider);

    let converted = converter.convert(100.0, "USD", "EUR").unwrap();
    assert!((converted - 90.0).abs() < 1e-9);
}

#[test]
fn identical_currencies_skip_the_provider() {
    let provider = CountingRates {
        inner: FixedRates::new(),
        calls: Cell::new(0),
    };
    let mut converter = CurrencyConverter::new(provider);

    assert_eq!(converter.convert(42.0, "USD", "USD").unwrap(), 42.0);
}

#[test]
fn rates_are_fetched_once_per_pair() {
    let provider = CountingRates {
        inner: FixedRates::new().with_rate("USD", "EUR", 0.9),
        calls: Cell::new(0),
    };
    let mut converter = CurrencyConverter::new(provider);

    converter.convert(10.0, "USD", "EUR").unwrap();
    converter.convert(20.0, "USD", "EUR").unwrap();
    converter.convert(30.0, "USD", "EUR").unwrap();

    assert_eq!(converter.provider().calls.get(), 1);
}

#[test]
fn missing_and_bogus_rates_are_errors() {
    let mut converter = CurrencyConverter::new(FixedRates::new());
    assert!(matches!(
        converter.convert(10.0, "USD", "EUR"),
        Err(SplitbookError::RateUnavailable(_, _))
    ));

    let mut converter = CurrencyConverter::new(FixedRates::new().with_rate("USD", "EUR", 0.0));
    assert!(matches!(
        converter.convert(10.0, "USD", "EUR"),
        Err(SplitbookError::InvalidRate(_))
    ));
}
