//! Booking definitions.

use std::str::FromStr;

use common::calendar::PrimitiveDateTime;
use derive_more::Display;

/// Type of a booking.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum Type {
    /// Booking charged by the night.
    #[default]
    #[display("overnight")]
    Overnight,

    /// Booking charged by the hour.
    #[display("short-stay")]
    ShortStay,
}

impl FromStr for Type {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_ascii_lowercase()
            .replace(|c: char| c == '_' || c == ' ', "-");
        match normalized.as_str() {
            "overnight" | "over-night" | "nightly" => Ok(Self::Overnight),
            "short-stay" | "shortstay" | "hourly" => Ok(Self::ShortStay),
            _ => Err("invalid booking type"),
        }
    }
}

/// Stay as entered in a booking form.
///
/// Nothing is validated here: an unparseable [`Stay`] simply has no price
/// yet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Stay {
    /// [`Type`] of the booking.
    pub kind: Type,

    /// Check-in date.
    pub check_in_date: String,

    /// Check-out date.
    pub check_out_date: String,

    /// Check-in time, required for a [`Type::ShortStay`].
    pub check_in_time: Option<String>,

    /// Check-out time, required for a [`Type::ShortStay`].
    pub check_out_time: Option<String>,
}

/// Validated check-in and check-out moments of a booking.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Window {
    /// Moment of the check-in.
    check_in: PrimitiveDateTime,

    /// Moment of the check-out, always after the [`Window::check_in()`].
    check_out: PrimitiveDateTime,

    /// Indicator whether this [`Window`] is a [`Type::ShortStay`] one.
    is_short_stay: bool,
}

impl Window {
    /// Creates a new [`Window`] if the `check_out` is after the `check_in`.
    #[must_use]
    pub fn new(
        check_in: PrimitiveDateTime,
        check_out: PrimitiveDateTime,
        is_short_stay: bool,
    ) -> Option<Self> {
        (check_out > check_in).then_some(Self {
            check_in,
            check_out,
            is_short_stay,
        })
    }

    /// Returns the check-in moment of this [`Window`].
    #[must_use]
    pub fn check_in(&self) -> PrimitiveDateTime {
        self.check_in
    }

    /// Returns the check-out moment of this [`Window`].
    #[must_use]
    pub fn check_out(&self) -> PrimitiveDateTime {
        self.check_out
    }

    /// Indicates whether this [`Window`] is a [`Type::ShortStay`] one.
    #[must_use]
    pub fn is_short_stay(&self) -> bool {
        self.is_short_stay
    }
}
