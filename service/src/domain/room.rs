//! [`Room`] definitions.

use common::calendar::Date;
use rust_decimal::Decimal;

/// Pricing-related data of a bookable room.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Room {
    /// [`Rate`] of this [`Room`].
    ///
    /// [`None`] means the rate is not known (yet), so the room is priced at
    /// zero.
    pub rate: Option<Rate>,

    /// [`SeasonalBand`]s overriding the nightly [`Rate`] of this [`Room`].
    pub seasonal_pricing: Vec<SeasonalBand>,
}

impl Room {
    /// Returns the nightly price of this [`Room`] on the provided `day`
    /// according to its [`SeasonalBand`]s.
    ///
    /// The first [`SeasonalBand`] covering the `day` wins. [`None`] is
    /// returned if no [`SeasonalBand`] covers it.
    #[must_use]
    pub fn seasonal_price_on(&self, day: Date) -> Option<Decimal> {
        self.seasonal_pricing
            .iter()
            .find(|band| band.covers(day))
            .map(|band| band.price)
    }
}

/// Flat rates of a [`Room`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rate {
    /// Price of a single night.
    nightly: Decimal,

    /// Price of a single hour of a short stay, if the [`Room`] has one.
    hourly: Option<Decimal>,
}

impl Rate {
    /// Creates a new [`Rate`] if the provided prices are non-negative.
    #[must_use]
    pub fn new(nightly: Decimal, hourly: Option<Decimal>) -> Option<Self> {
        let valid = !nightly.is_sign_negative()
            && hourly.map_or(true, |h| !h.is_sign_negative());
        valid.then_some(Self { nightly, hourly })
    }

    /// Returns the nightly price of this [`Rate`].
    #[must_use]
    pub fn nightly(&self) -> Decimal {
        self.nightly
    }

    /// Returns the hourly price of this [`Rate`], if it's set and positive.
    #[must_use]
    pub fn hourly(&self) -> Option<Decimal> {
        self.hourly.filter(|h| *h > Decimal::ZERO)
    }
}

/// Date range with a nightly price overriding the flat [`Rate`] of a
/// [`Room`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SeasonalBand {
    /// First day of this [`SeasonalBand`].
    start: Date,

    /// Last day of this [`SeasonalBand`] (inclusive).
    end: Date,

    /// Nightly price within this [`SeasonalBand`].
    price: Decimal,
}

impl SeasonalBand {
    /// Creates a new [`SeasonalBand`] if the provided range is not reversed
    /// and the `price` is non-negative.
    #[must_use]
    pub fn new(start: Date, end: Date, price: Decimal) -> Option<Self> {
        (start <= end && !price.is_sign_negative())
            .then_some(Self { start, end, price })
    }

    /// Indicates whether this [`SeasonalBand`] covers the provided `day`.
    #[must_use]
    pub fn covers(&self, day: Date) -> bool {
        (self.start..=self.end).contains(&day)
    }
}
