//! Booking pricing pipeline.
//!
//! Every change of a booking form is priced from scratch: [`calculate()`]
//! holds no state between calls and returns the same [`Quote`] for the same
//! [`Request`].

pub mod base;
pub mod discount;
pub mod duration;
pub mod fee;
pub mod split;

use common::{money::Currency, DateTime, Money};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing as log;

use crate::{
    domain::{booking::Stay, payment::Selection, Promotion, Room},
    Config,
};

pub use self::{
    discount::{Discounts, Rejection, RemovalError},
    duration::Duration,
    fee::Fees,
    split::Split,
};

/// Everything a booking is priced by.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    /// [`Stay`] as entered in the booking form.
    pub stay: Stay,

    /// Booked [`Room`].
    pub room: Room,

    /// [`Promotion`]s of the business.
    pub promotions: Vec<Promotion>,

    /// Promo codes entered by the guest, in the order of entering.
    pub codes: Vec<String>,

    /// Selected payment method and type.
    pub payment: Selection,

    /// Moment the [`Promotion`]s are checked at.
    pub now: DateTime,
}

/// Result of pricing a [`Request`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Charged [`Duration`], or [`None`] if the [`Stay`] cannot be priced
    /// yet.
    pub duration: Option<Duration>,

    /// Payment [`Selection`] the [`Quote`] is calculated for.
    pub payment: Selection,

    /// Price [`Breakdown`].
    pub breakdown: Breakdown,

    /// Applied [`Discounts`].
    pub discounts: Discounts,

    /// Entered promo codes that were not applied, along with the reasons.
    pub rejections: Vec<(String, Rejection)>,
}

/// Price breakdown of a booking.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    /// Price of the room for the whole stay.
    pub base_room_price: Money,

    /// Fixed booking fee.
    pub booking_fee: Money,

    /// Fee of a non-cash payment.
    pub transaction_fee: Money,

    /// Sum of the room price and fees.
    pub subtotal: Money,

    /// Sum of all the applied discounts.
    pub discount_total: Money,

    /// Amount to be paid for the booking.
    pub total_payable: Money,

    /// Amount to be paid upfront.
    pub amount_due: Money,

    /// Amount left to be paid later.
    pub balance: Money,
}

impl Breakdown {
    /// Creates a [`Breakdown`] out of the provided amounts.
    fn new(
        currency: Currency,
        room_price: Decimal,
        fees: Fees,
        discount_total: Decimal,
        split: Split,
    ) -> Self {
        let money = |amount| Money::new(amount, currency);
        Self {
            base_room_price: money(room_price),
            booking_fee: money(fees.booking),
            transaction_fee: money(fees.transaction),
            subtotal: money(split.subtotal),
            discount_total: money(discount_total),
            total_payable: money(split.total_payable),
            amount_due: money(split.amount_due),
            balance: money(split.balance),
        }
    }
}

/// Prices the provided [`Request`].
///
/// The best running room discount is applied first, then the entered codes
/// in their order. Codes that cannot be applied are collected into
/// [`Quote::rejections`].
#[must_use]
pub fn calculate(config: &Config, request: &Request) -> Quote {
    let resolved = duration::resolve(&request.stay);
    let room_price = base::room_price(&request.room, resolved.as_ref());
    let fees = Fees::calculate(config, room_price, request.payment.method());

    let mut discounts = Discounts::new();
    _ = discounts.auto_apply_room_discount(
        &request.promotions,
        room_price,
        request.now,
    );
    let mut rejections = vec![];
    for code in &request.codes {
        if let Err(e) = discounts.apply_code(
            code,
            &request.promotions,
            room_price,
            fees.booking,
            request.now,
        ) {
            rejections.push((code.clone(), e));
        }
    }

    let discount_total = discounts.total();
    let split = Split::calculate(
        config,
        room_price,
        fees,
        discount_total,
        request.payment.kind(),
    );
    log::debug!(
        room_price = %room_price,
        discount_total = %discount_total,
        total_payable = %split.total_payable,
        amount_due = %split.amount_due,
        "booking priced",
    );

    Quote {
        duration: resolved.map(|r| r.duration),
        payment: request.payment,
        breakdown: Breakdown::new(
            config.currency,
            room_price,
            fees,
            discount_total,
            split,
        ),
        discounts,
        rejections,
    }
}
