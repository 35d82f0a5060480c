//! Resolution of a booking [`Duration`].

use common::calendar;
use tracing as log;

use crate::domain::booking::{self, Stay, Window};

/// Charged duration of a booking.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Duration {
    /// [`booking::Type::Overnight`] duration.
    Overnight {
        /// Number of charged days.
        days: u32,

        /// Number of nights, one less than the `days`.
        nights: u32,
    },

    /// [`booking::Type::ShortStay`] duration.
    ShortStay {
        /// Number of charged hours, at least one.
        hours: u32,
    },
}

/// [`Duration`] resolved along with the [`Window`] it spans.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Resolved {
    /// Validated [`Window`] of the booking.
    pub window: Window,

    /// Charged [`Duration`] of the booking.
    pub duration: Duration,
}

/// Resolves the charged [`Duration`] of the provided [`Stay`].
///
/// [`None`] is returned when the [`Stay`] cannot be priced yet: dates or
/// times are missing or unparseable, or the check-out is not after the
/// check-in.
#[must_use]
pub fn resolve(stay: &Stay) -> Option<Resolved> {
    let resolved = match stay.kind {
        booking::Type::Overnight => overnight(stay),
        booking::Type::ShortStay => short_stay(stay),
    };
    match &resolved {
        Some(r) => log::debug!(
            check_in = %r.window.check_in(),
            check_out = %r.window.check_out(),
            short_stay = r.window.is_short_stay(),
            duration = ?r.duration,
            "resolved stay",
        ),
        None => log::debug!(kind = %stay.kind, "stay cannot be priced yet"),
    }
    resolved
}

/// Resolves an [`Duration::Overnight`] out of the [`Stay`] dates, ignoring
/// any time of day.
fn overnight(stay: &Stay) -> Option<Resolved> {
    let check_in = calendar::parse_date(&stay.check_in_date)?;
    let check_out = calendar::parse_date(&stay.check_out_date)?;

    let window =
        Window::new(check_in.midnight(), check_out.midnight(), false)?;
    let days = u32::try_from((check_out - check_in).whole_days()).ok()?;

    Some(Resolved {
        window,
        duration: Duration::Overnight {
            days,
            nights: days.saturating_sub(1),
        },
    })
}

/// Resolves a [`Duration::ShortStay`] out of the [`Stay`] dates and times,
/// rounding the elapsed time to the nearest hour.
fn short_stay(stay: &Stay) -> Option<Resolved> {
    let check_in = calendar::at(
        calendar::parse_date(&stay.check_in_date)?,
        calendar::parse_time(stay.check_in_time.as_deref()?)?,
    );
    let check_out = calendar::at(
        calendar::parse_date(&stay.check_out_date)?,
        calendar::parse_time(stay.check_out_time.as_deref()?)?,
    );

    let window = Window::new(check_in, check_out, true)?;
    let seconds = (check_out - check_in).whole_seconds();
    let hours = u32::try_from((seconds + 1800) / 3600).ok()?.max(1);

    Some(Resolved {
        window,
        duration: Duration::ShortStay { hours },
    })
}
