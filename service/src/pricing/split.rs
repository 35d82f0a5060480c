//! Split of a booking total between the upfront payment and the balance.

use common::money::round_half_up;
use rust_decimal::Decimal;

use crate::{domain::payment, Config};

use super::fee::Fees;

/// Totals of a booking along with their split between the upfront payment
/// and the remaining balance.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Split {
    /// Room price with all the [`Fees`] added.
    pub subtotal: Decimal,

    /// [`Split::subtotal`] with all the discounts subtracted, never
    /// negative.
    pub total_payable: Decimal,

    /// Amount to be paid upfront.
    pub amount_due: Decimal,

    /// Amount left to be paid later.
    pub balance: Decimal,
}

impl Split {
    /// Calculates a [`Split`] of the provided amounts for the provided
    /// [`payment::Type`].
    ///
    /// [`Split::amount_due`] and [`Split::balance`] always sum up to the
    /// [`Split::total_payable`].
    #[must_use]
    pub fn calculate(
        config: &Config,
        room_price: Decimal,
        fees: Fees,
        discount_total: Decimal,
        kind: payment::Type,
    ) -> Self {
        let subtotal = room_price
            .saturating_add(fees.booking)
            .saturating_add(fees.transaction);
        let total_payable = (subtotal - discount_total).max(Decimal::ZERO);

        let amount_due = if kind.is_partial() {
            round_half_up(config.partial_payment_rate.of(total_payable))
                .min(total_payable)
        } else {
            total_payable
        };
        let balance = (total_payable - amount_due).max(Decimal::ZERO);

        Self {
            subtotal,
            total_payable,
            amount_due,
            balance,
        }
    }
}
