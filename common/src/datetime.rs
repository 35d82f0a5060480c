//! Date and time utilities.

use std::{cmp::Ordering, fmt, marker::PhantomData};

use derive_more::{Debug, Display, Error};
use time::{
    format_description::well_known::Rfc3339, macros::format_description,
    UtcOffset,
};

use crate::calendar;

/// Untyped date and time.
pub type DateTime = DateTimeOf;

/// UTC date and time.
#[derive(Debug)]
pub struct DateTimeOf<Of: ?Sized = ()> {
    /// Inner representation of the date and time.
    inner: time::OffsetDateTime,

    /// Type parameter describing the kind of date and time.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateTimeOf<Of> {
    /// Creates a new [`DateTime`] representing the current date and time.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn now() -> Self {
        let inner = time::OffsetDateTime::now_utc();
        Self {
            _of: PhantomData,
            inner: inner
                .replace_microsecond(inner.microsecond())
                .expect("infallible"),
        }
    }

    /// Creates a new [`DateTime`] representing the midnight (UTC) of the
    /// provided [`calendar::Date`].
    #[must_use]
    pub fn from_date(date: calendar::Date) -> Self {
        Self {
            inner: date.midnight().assume_utc(),
            _of: PhantomData,
        }
    }

    /// Creates a new [`DateTime`] from the provided [RFC 3339] string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid [RFC 3339] date and time.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    pub fn from_rfc3339(input: &str) -> Result<Self, ParseError> {
        use ParseError as E;

        time::OffsetDateTime::parse(input, &Rfc3339)
            .map_err(E::Parse)?
            .try_into()
            .map_err(E::ComponentRange)
    }

    /// Parses a [`DateTime`] from the provided `input` in one of the formats:
    /// - [RFC 3339];
    /// - `YYYY-MM-DD HH:MM:SS`, taken as UTC;
    /// - any [`calendar::parse_date()`] one, taken as the UTC midnight.
    ///
    /// [`None`] is returned if the `input` matches none of them.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::from_rfc3339(input)
            .ok()
            .or_else(|| {
                time::PrimitiveDateTime::parse(
                    input,
                    format_description!(
                        "[year]-[month]-[day] [hour]:[minute]:[second]"
                    ),
                )
                .ok()
                .and_then(|dt| dt.assume_utc().try_into().ok())
            })
            .or_else(|| calendar::parse_date(input).map(Self::from_date))
    }

    /// Returns the [RFC 3339] representation of this [`DateTime`].
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.inner.format(&Rfc3339).unwrap_or_else(|e| {
            panic!("cannot format `DateTime` as RFC 3339: {e}")
        })
    }

    /// Returns the UTC [`calendar::Date`] of this [`DateTime`].
    #[must_use]
    pub fn date(&self) -> calendar::Date {
        self.inner.date()
    }

    /// Coerces one kind of [`DateTime`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateTimeOf<NewOf> {
        DateTimeOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> fmt::Display for DateTimeOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// Error of parsing [`DateTime`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Failed to parse the string into an [`DateTime`].
    Parse(time::error::Parse),

    /// Parsed [`DateTime`] has an out of range component.
    ComponentRange(time::error::ComponentRange),
}

impl<Of: ?Sized> Copy for DateTimeOf<Of> {}
impl<Of: ?Sized> Clone for DateTimeOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateTimeOf<Of> {}
impl<Of: ?Sized> PartialEq for DateTimeOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateTimeOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateTimeOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> TryFrom<time::OffsetDateTime> for DateTimeOf<Of> {
    type Error = time::error::ComponentRange;

    fn try_from(dt: time::OffsetDateTime) -> Result<Self, Self::Error> {
        dt.to_offset(UtcOffset::UTC)
            .replace_microsecond(dt.microsecond())
            .map(|inner| Self {
                inner,
                _of: PhantomData,
            })
    }
}

#[cfg(test)]
mod spec {
    use time::macros::date;

    use super::DateTime;

    #[test]
    fn parses_rfc3339_and_dates() {
        let dt = DateTime::parse("2024-06-01T10:00:00+08:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-06-01T02:00:00Z");

        let dt = DateTime::parse("2024-06-01").unwrap();
        assert_eq!(dt, DateTime::from_date(date!(2024 - 06 - 01)));
        assert_eq!(dt.to_string(), "2024-06-01T00:00:00Z");

        assert!(DateTime::parse("yesterday").is_none());
    }

    #[test]
    fn keeps_time_of_sql_datetimes() {
        let dt = DateTime::parse("2024-05-20 23:59:59").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-05-20T23:59:59Z");

        let dt = DateTime::parse(" 2024-05-20 08:30:00 ").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-05-20T08:30:00Z");

        assert!(DateTime::parse("2024-05-20 25:00:00").is_none());
    }

    #[test]
    fn orders_chronologically() {
        let earlier = DateTime::parse("2024-06-01").unwrap();
        let later = DateTime::parse("2024-06-01T00:00:01Z").unwrap();
        assert!(earlier < later);
        assert_eq!(later.date(), date!(2024 - 06 - 01));
    }
}
