//! Base room price of a booking.

use std::iter;

use common::calendar::Date;
use rust_decimal::Decimal;
use tracing as log;

use crate::domain::Room;

use super::duration::{Duration, Resolved};

/// Calculates the base price of the provided [`Room`] for the [`Resolved`]
/// duration.
///
/// Zero is returned if the duration is not resolved, the [`Room`] has no
/// rate, or the price overflows.
#[must_use]
pub fn room_price(room: &Room, resolved: Option<&Resolved>) -> Decimal {
    let (Some(resolved), Some(rate)) = (resolved, room.rate) else {
        return Decimal::ZERO;
    };

    let price = match resolved.duration {
        Duration::ShortStay { hours } => rate.hourly().map_or(
            Some(rate.nightly()),
            |hourly| hourly.checked_mul(Decimal::from(hours)),
        ),
        Duration::Overnight { days, .. } => {
            let first_day = resolved.window.check_in().date();
            let flat = || rate.nightly().checked_mul(Decimal::from(days));
            match seasonal_prices(room, first_day, days) {
                Some(prices) => prices
                    .into_iter()
                    .try_fold(Decimal::ZERO, Decimal::checked_add)
                    .and_then(|sum| {
                        if sum.is_zero() { flat() } else { Some(sum) }
                    }),
                None => flat(),
            }
        }
    };
    price.unwrap_or_else(|| {
        log::warn!(
            duration = ?resolved.duration,
            "room price overflows, treating the stay as unpriceable",
        );
        Decimal::ZERO
    })
}

/// Collects the seasonal prices of the `days` starting at the `first_day`.
///
/// [`None`] is returned if any of these days is not covered by a seasonal
/// band of the [`Room`].
fn seasonal_prices(
    room: &Room,
    first_day: Date,
    days: u32,
) -> Option<Vec<Decimal>> {
    iter::successors(Some(first_day), |day| day.next_day())
        .take(usize::try_from(days).ok()?)
        .map(|day| room.seasonal_price_on(day))
        .collect()
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;
    use time::macros::date;

    use crate::{
        domain::{
            booking::{self, Stay},
            room::{Rate, SeasonalBand},
            Room,
        },
        pricing::duration,
    };

    use super::room_price;

    fn room(nightly: u32, hourly: Option<u32>) -> Room {
        Room {
            rate: Rate::new(Decimal::from(nightly), hourly.map(Decimal::from)),
            seasonal_pricing: vec![],
        }
    }

    fn overnight(check_in: &str, check_out: &str) -> Stay {
        Stay {
            kind: booking::Type::Overnight,
            check_in_date: check_in.into(),
            check_out_date: check_out.into(),
            ..Stay::default()
        }
    }

    fn short_stay(check_in: &str, check_out: &str) -> Stay {
        Stay {
            kind: booking::Type::ShortStay,
            check_in_date: "2024-06-01".into(),
            check_out_date: "2024-06-01".into(),
            check_in_time: Some(check_in.into()),
            check_out_time: Some(check_out.into()),
        }
    }

    fn price(room: &Room, stay: &Stay) -> Decimal {
        room_price(room, duration::resolve(stay).as_ref())
    }

    #[test]
    fn charges_flat_nightly_rate() {
        assert_eq!(
            price(&room(1000, None), &overnight("2024-06-01", "2024-06-04")),
            Decimal::from(3000),
        );
    }

    #[test]
    fn charges_hourly_rate() {
        assert_eq!(
            price(&room(1000, Some(200)), &short_stay("14:00", "16:30")),
            Decimal::from(600),
        );
    }

    #[test]
    fn short_stay_without_hourly_rate_costs_a_night() {
        assert_eq!(
            price(&room(1000, None), &short_stay("14:00", "16:30")),
            Decimal::from(1000),
        );
        assert_eq!(
            price(&room(1000, Some(0)), &short_stay("14:00", "16:30")),
            Decimal::from(1000),
        );
    }

    #[test]
    fn zero_without_rate_or_duration() {
        let no_rate = Room::default();
        assert_eq!(
            price(&no_rate, &overnight("2024-06-01", "2024-06-04")),
            Decimal::ZERO,
        );
        assert_eq!(
            price(&room(1000, None), &overnight("2024-06-04", "2024-06-01")),
            Decimal::ZERO,
        );
    }

    #[test]
    fn sums_seasonal_prices_when_fully_covered() {
        let mut room = room(1000, None);
        room.seasonal_pricing = vec![
            SeasonalBand::new(
                date!(2024 - 06 - 01),
                date!(2024 - 06 - 02),
                Decimal::from(1500),
            )
            .unwrap(),
            SeasonalBand::new(
                date!(2024 - 06 - 03),
                date!(2024 - 06 - 30),
                Decimal::from(1200),
            )
            .unwrap(),
        ];

        // Check-out day itself is not charged.
        assert_eq!(
            price(&room, &overnight("2024-06-01", "2024-06-04")),
            Decimal::from(4200),
        );
    }

    #[test]
    fn falls_back_to_flat_rate_when_partially_covered() {
        let mut room = room(1000, None);
        room.seasonal_pricing = vec![SeasonalBand::new(
            date!(2024 - 06 - 02),
            date!(2024 - 06 - 10),
            Decimal::from(1500),
        )
        .unwrap()];

        assert_eq!(
            price(&room, &overnight("2024-06-01", "2024-06-04")),
            Decimal::from(3000),
        );
    }

    #[test]
    fn falls_back_to_flat_rate_on_zero_seasonal_sum() {
        let mut room = room(1000, None);
        room.seasonal_pricing = vec![SeasonalBand::new(
            date!(2024 - 06 - 01),
            date!(2024 - 06 - 10),
            Decimal::ZERO,
        )
        .unwrap()];

        assert_eq!(
            price(&room, &overnight("2024-06-01", "2024-06-04")),
            Decimal::from(3000),
        );
    }

    #[test]
    fn overflowing_price_is_zero() {
        let huge = Room {
            rate: Rate::new(Decimal::MAX, Some(Decimal::MAX)),
            seasonal_pricing: vec![],
        };
        assert_eq!(
            price(&huge, &overnight("2024-06-01", "2024-06-04")),
            Decimal::ZERO,
        );
        assert_eq!(
            price(&huge, &short_stay("14:00", "16:30")),
            Decimal::ZERO,
        );

        let mut seasonal = room(1000, None);
        seasonal.seasonal_pricing = vec![SeasonalBand::new(
            date!(2024 - 06 - 01),
            date!(2024 - 06 - 10),
            Decimal::MAX,
        )
        .unwrap()];
        assert_eq!(
            price(&seasonal, &overnight("2024-06-01", "2024-06-04")),
            Decimal::ZERO,
        );
    }
}
