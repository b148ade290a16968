//! Currency conversion seam.
//!
//! Rate lookup itself is a black-box collaborator (a web service, a fixed
//! table, whatever the application wires in); this module only defines the
//! trait and a caching converter so a rate is fetched at most once per
//! currency pair per session. All core amounts stay in one common unit —
//! conversion happens before amounts reach the balance aggregator, or at
//! display time.

use crate::error::SplitbookError;
use log::debug;
use std::collections::HashMap;

pub trait RateProvider {
    /// Units of `to` per one unit of `from`.
    fn rate(&self, from: &str, to: &str) -> Result<f64, SplitbookError>;
}

pub struct CurrencyConverter<P: RateProvider> {
    provider: P,
    cache: HashMap<(String, String), f64>,
}

impl<P: RateProvider> CurrencyConverter<P> {
    pub fn new(provider: P) -> Self {
        CurrencyConverter {
            provider,
            cache: HashMap::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn convert(&mut self, amount: f64, from: &str, to: &str) -> Result<f64, SplitbookError> {
        if from == to {
            return Ok(amount);
        }
        let key = (from.to_string(), to.to_string());
        let rate = match self.cache.get(&key) {
            Some(rate) => *rate,
            None => {
                let rate = self.provider.rate(from, to)?;
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(SplitbookError::InvalidRate(rate));
                }
                debug!("Caching rate {} -> {}: {}", from, to, rate);
                self.cache.insert(key, rate);
                rate
            }
        };
        Ok(amount * rate)
    }
}

/// Fixed rate table, handy for tests and offline use.
pub struct FixedRates {
    rates: HashMap<(String, String), f64>,
}

impl FixedRates {
    pub fn new() -> Self {
        FixedRates {
            rates: HashMap::new(),
        }
    }

    pub fn with_rate(mut self, from: &str, to: &str, rate: f64) -> Self {
        self.rates.insert((from.to_string(), to.to_string()), rate);
        self
    }
}

impl Default for FixedRates {
    fn default() -> Self {
        Self::new()
    }
}

impl RateProvider for FixedRates {
    fn rate(&self, from: &str, to: &str) -> Result<f64, SplitbookError> {
        self.rates
            .get(&(from.to_string(), to.to_string()))
            .copied()
            .ok_or_else(|| SplitbookError::RateUnavailable(from.to_string(), to.to_string()))
    }
}
