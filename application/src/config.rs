//! [`Config`]-related definitions.

use common::{money::Currency, Percent};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error};
use rust_decimal::Decimal;
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Pricing configuration.
    #[serde(default)]
    pub pricing: Pricing,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Pricing configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Pricing {
    /// Currency of all the prices.
    #[default(Currency::Php)]
    pub currency: Currency,

    /// Fixed fee charged for any priced booking.
    #[default(Decimal::from(50))]
    pub booking_fee: Decimal,

    /// Percentage of the room price charged for non-cash payments.
    #[default(Decimal::from(3))]
    pub transaction_fee_rate: Decimal,

    /// Percentage of the total payable due upfront for a partial payment.
    #[default(Decimal::from(50))]
    pub partial_payment_rate: Decimal,
}

impl TryFrom<Pricing> for service::Config {
    type Error = InvalidPricing;

    fn try_from(value: Pricing) -> Result<Self, Self::Error> {
        let Pricing {
            currency,
            booking_fee,
            transaction_fee_rate,
            partial_payment_rate,
        } = value;

        if booking_fee.is_sign_negative() {
            return Err(InvalidPricing::BookingFee(booking_fee));
        }
        Ok(Self {
            currency,
            booking_fee,
            transaction_fee_rate: Percent::new(transaction_fee_rate)
                .ok_or(InvalidPricing::TransactionFeeRate(transaction_fee_rate))?,
            partial_payment_rate: Percent::new(partial_payment_rate)
                .ok_or(InvalidPricing::PartialPaymentRate(partial_payment_rate))?,
        })
    }
}

/// Error of converting [`Pricing`] into a [`service::Config`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum InvalidPricing {
    /// Negative booking fee.
    #[display("`pricing.booking_fee` cannot be negative: {_0}")]
    BookingFee(#[error(not(source))] Decimal),

    /// Transaction fee rate is not a percentage.
    #[display("`pricing.transaction_fee_rate` is not within `0..=100`: {_0}")]
    TransactionFeeRate(#[error(not(source))] Decimal),

    /// Partial payment rate is not a percentage.
    #[display("`pricing.partial_payment_rate` is not within `0..=100`: {_0}")]
    PartialPaymentRate(#[error(not(source))] Decimal),
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::money::Currency;
    use rust_decimal::Decimal;

    use super::{InvalidPricing, Pricing};

    #[test]
    fn defaults_to_business_rules() {
        let config = service::Config::try_from(Pricing::default()).unwrap();

        assert_eq!(config.currency, Currency::Php);
        assert_eq!(config.booking_fee, Decimal::from(50));
        assert_eq!(config.transaction_fee_rate.value(), Decimal::from(3));
        assert_eq!(config.partial_payment_rate.value(), Decimal::from(50));
    }

    #[test]
    fn rejects_invalid_rates() {
        let res = service::Config::try_from(Pricing {
            partial_payment_rate: Decimal::from(150),
            ..Pricing::default()
        });
        assert!(matches!(res, Err(InvalidPricing::PartialPaymentRate(_))));

        let res = service::Config::try_from(Pricing {
            booking_fee: Decimal::from(-1),
            ..Pricing::default()
        });
        assert!(matches!(res, Err(InvalidPricing::BookingFee(_))));
    }
}
