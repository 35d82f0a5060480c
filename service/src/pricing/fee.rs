//! Fees charged on top of a room price.

use common::money::round_half_up;
use rust_decimal::Decimal;

use crate::{domain::payment::Method, Config};

/// Fees charged for a booking.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fees {
    /// Fixed booking fee.
    pub booking: Decimal,

    /// Transaction fee of a non-cash payment.
    pub transaction: Decimal,
}

impl Fees {
    /// Calculates [`Fees`] for the provided `room_price` paid with the
    /// provided [`Method`].
    ///
    /// Nothing is charged for a free room. No transaction fee is charged for
    /// [`Method::Cash`] or when no [`Method`] is selected yet.
    #[must_use]
    pub fn calculate(
        config: &Config,
        room_price: Decimal,
        method: Option<Method>,
    ) -> Self {
        let booking = if room_price > Decimal::ZERO {
            config.booking_fee
        } else {
            Decimal::ZERO
        };
        let transaction = match method {
            Some(m) if !m.is_cash() => {
                round_half_up(config.transaction_fee_rate.of(room_price))
            }
            Some(_) | None => Decimal::ZERO,
        };
        Self {
            booking,
            transaction,
        }
    }
}
