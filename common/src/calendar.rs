//! Calendar date and wall-clock time parsing.
//!
//! Inputs are the strings a booking form produces, so parsing is lenient
//! about the shape but never guesses: anything unrecognized is [`None`].

use time::{
    format_description::well_known::Rfc3339, macros::format_description,
    OffsetDateTime,
};

pub use time::{Date, PrimitiveDateTime, Time};

/// Parses a calendar [`Date`] from the provided `input`.
///
/// Accepted formats:
/// - `YYYY-MM-DD`;
/// - `YYYY-MM-DD HH:MM:SS`, with the time of day dropped;
/// - [RFC 3339] date and time, with the time of day dropped in the offset it
///   was written in.
///
/// [RFC 3339]: https://tools.ietf.org/html/rfc3339
#[must_use]
pub fn parse_date(input: &str) -> Option<Date> {
    let input = input.trim();
    Date::parse(input, format_description!("[year]-[month]-[day]"))
        .or_else(|_| {
            PrimitiveDateTime::parse(
                input,
                format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second]"
                ),
            )
            .map(PrimitiveDateTime::date)
        })
        .or_else(|_| {
            OffsetDateTime::parse(input, &Rfc3339).map(OffsetDateTime::date)
        })
        .ok()
}

/// Parses a wall-clock [`Time`] from the provided `input`.
///
/// Accepted formats are `HH:MM`, `HH:MM:SS` and their 12-hour variants
/// suffixed with `AM`/`PM` (case-insensitive, e.g. `2:30 pm`).
#[must_use]
pub fn parse_time(input: &str) -> Option<Time> {
    let input = input.trim().to_ascii_uppercase();

    let (clock, is_pm) = if let Some(c) = input.strip_suffix("AM") {
        (c.trim_end(), Some(false))
    } else if let Some(c) = input.strip_suffix("PM") {
        (c.trim_end(), Some(true))
    } else {
        (input.as_str(), None)
    };

    let mut parts = clock.split(':');
    let hour = number(parts.next()?)?;
    let minute = number(parts.next()?)?;
    let second = parts.next().map_or(Some(0), number)?;
    if parts.next().is_some() {
        return None;
    }

    let hour = match is_pm {
        None => hour,
        Some(_) if !(1..=12).contains(&hour) => return None,
        Some(pm) => hour % 12 + if pm { 12 } else { 0 },
    };

    Time::from_hms(hour, minute, second).ok()
}

/// Combines the provided [`Date`] and [`Time`] into a single timestamp.
#[must_use]
pub fn at(date: Date, time: Time) -> PrimitiveDateTime {
    PrimitiveDateTime::new(date, time)
}

/// Parses a one or two digits clock component.
fn number(s: &str) -> Option<u8> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod spec {
    use time::macros::{date, time};

    use super::{parse_date, parse_time};

    #[test]
    fn parses_dates() {
        assert_eq!(parse_date("2024-06-01"), Some(date!(2024 - 06 - 01)));
        assert_eq!(parse_date(" 2024-06-04 "), Some(date!(2024 - 06 - 04)));
        assert_eq!(
            parse_date("2024-06-01 23:30:00"),
            Some(date!(2024 - 06 - 01)),
        );
        assert_eq!(
            parse_date("2024-06-01T23:30:00+08:00"),
            Some(date!(2024 - 06 - 01)),
        );
        assert_eq!(
            parse_date("2024-06-01T00:15:00Z"),
            Some(date!(2024 - 06 - 01)),
        );

        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("06/01/2024"), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn parses_times() {
        assert_eq!(parse_time("14:00"), Some(time!(14:00)));
        assert_eq!(parse_time("16:30:15"), Some(time!(16:30:15)));
        assert_eq!(parse_time("9:05"), Some(time!(9:05)));
        assert_eq!(parse_time("2:30 PM"), Some(time!(14:30)));
        assert_eq!(parse_time("2:30pm"), Some(time!(14:30)));
        assert_eq!(parse_time("12:00 AM"), Some(time!(0:00)));
        assert_eq!(parse_time("12:00 PM"), Some(time!(12:00)));

        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("13:00 PM"), None);
        assert_eq!(parse_time("14"), None);
        assert_eq!(parse_time("14:00:00:00"), None);
        assert_eq!(parse_time("+1:00"), None);
    }
}
