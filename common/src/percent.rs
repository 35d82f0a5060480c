//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Floating-point percentage.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "Decimal", into = "Decimal")
)]
pub struct Percent(Decimal);

impl Percent {
    /// Zero [`Percent`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Percent`] by checking the provided values is
    /// greater than `0` and less than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            Some(Self(val))
        }
    }

    /// Returns the raw value of this [`Percent`] (`0..=100`).
    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Indicates whether this [`Percent`] is greater than `0`.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns this [`Percent`] of the provided `amount`.
    ///
    /// Never overflows, as the result never exceeds the `amount`.
    #[must_use]
    pub fn of(self, amount: Decimal) -> Decimal {
        amount.checked_mul(self.0).map_or_else(
            || amount / Decimal::ONE_HUNDRED * self.0,
            |v| v / Decimal::ONE_HUNDRED,
        )
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

impl TryFrom<Decimal> for Percent {
    type Error = &'static str;

    fn try_from(val: Decimal) -> Result<Self, Self::Error> {
        Self::new(val).ok_or("percent value must be in `0..=100` range")
    }
}

impl From<Percent> for Decimal {
    fn from(p: Percent) -> Self {
        p.0
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::Percent;

    #[test]
    fn rejects_out_of_range() {
        assert!(Percent::new(Decimal::from(-1)).is_none());
        assert!(Percent::new(Decimal::from(101)).is_none());
        assert!(Percent::new(Decimal::ZERO).is_some());
        assert!(Percent::new(Decimal::ONE_HUNDRED).is_some());

        assert!("12.5".parse::<Percent>().is_ok());
        assert!("abc".parse::<Percent>().is_err());
        assert!("150".parse::<Percent>().is_err());
    }

    #[test]
    fn of() {
        let ten = Percent::new(Decimal::from(10)).unwrap();
        assert_eq!(ten.of(Decimal::from(3000)), Decimal::from(300));

        let three = Percent::new(Decimal::from(3)).unwrap();
        assert_eq!(three.of(Decimal::from(1234)), Decimal::new(3702, 2));

        assert_eq!(Percent::ZERO.of(Decimal::from(3000)), Decimal::ZERO);
        assert!(!Percent::ZERO.is_positive());
    }

    #[test]
    fn of_huge_amount_does_not_overflow() {
        let half = Percent::new(Decimal::from(50)).unwrap();
        let v = half.of(Decimal::MAX);
        assert!(v > Decimal::ZERO);
        assert!(v < Decimal::MAX);

        let full = Percent::new(Decimal::ONE_HUNDRED).unwrap();
        assert_eq!(full.of(Decimal::MAX), Decimal::MAX);
    }
}
