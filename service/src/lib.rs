//! Service contains the booking pricing logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod pricing;
pub mod query;

use common::{money::Currency, Percent};
use rust_decimal::Decimal;

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// [`Currency`] every price is calculated in.
    pub currency: Currency,

    /// Fixed fee charged for any booking with a non-zero room price.
    pub booking_fee: Decimal,

    /// Share of the room price charged as a transaction fee for non-cash
    /// payments.
    pub transaction_fee_rate: Percent,

    /// Share of the total payable due upfront for a partial payment.
    pub partial_payment_rate: Percent,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service {
    /// Configuration of this [`Service`].
    config: Config,
}

impl Service {
    /// Creates a new [`Service`] with the provided [`Config`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
