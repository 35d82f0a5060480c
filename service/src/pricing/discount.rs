//! Discounts applied to a booking.

use std::slice;

use common::DateTime;
use derive_more::{Display, Error};
use rust_decimal::Decimal;
use tracing as log;

use crate::domain::{
    promotion::{self, Applied, Code},
    Promotion,
};

/// Discounts applied to a booking, in the order of their application.
///
/// At most one [`promotion::Kind::Coupon`] or [`promotion::Kind::Code`]
/// discount is applied at a time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Discounts(Vec<Applied>);

impl Discounts {
    /// Creates new empty [`Discounts`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over the [`Applied`] discounts.
    pub fn iter(&self) -> slice::Iter<'_, Applied> {
        self.0.iter()
    }

    /// Indicates whether no discount is applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sums up the positive amounts of the [`Applied`] discounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.iter()
            .map(|d| d.amount)
            .filter(|amount| *amount > Decimal::ZERO)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Indicates whether a discount entered by a [`Code`] is applied.
    #[must_use]
    pub fn has_code(&self) -> bool {
        self.iter().any(|d| d.kind.is_code())
    }

    /// Indicates whether a [`promotion::Kind::RoomDiscount`] is applied.
    #[must_use]
    pub fn has_room_discount(&self) -> bool {
        self.iter()
            .any(|d| d.kind == promotion::Kind::RoomDiscount)
    }

    /// Applies the best [`promotion::Kind::RoomDiscount`] running at the
    /// provided moment, unless one is applied already.
    ///
    /// The highest percentage wins, the earliest [`Promotion`] wins a tie.
    /// Discount is taken from the `room_price` only, rounded down.
    pub fn auto_apply_room_discount(
        &mut self,
        promotions: &[Promotion],
        room_price: Decimal,
        now: DateTime,
    ) -> Option<&Applied> {
        if self.has_room_discount() {
            return None;
        }

        let best = promotions
            .iter()
            .filter(|p| {
                p.kind == promotion::Kind::RoomDiscount
                    && p.is_running_at(now)
                    && p.percentage().is_positive()
            })
            .reduce(|best, p| {
                if p.percentage() > best.percentage() {
                    p
                } else {
                    best
                }
            })?;

        let applied = Applied {
            label: best.title.clone(),
            amount: best.percentage().of(room_price).floor(),
            kind: best.kind,
            promotion_id: best.id,
        };
        log::debug!(
            promotion = %applied.promotion_id,
            amount = %applied.amount,
            "room discount applied",
        );
        self.0.push(applied);
        self.0.last()
    }

    /// Applies the [`Promotion`] redeemed by the entered `code`.
    ///
    /// A [`promotion::Kind::Coupon`] discounts its percentage of the
    /// `room_price` along with the `booking_fee`, rounded down. A
    /// [`promotion::Kind::Code`] discounts its fixed amount.
    ///
    /// # Errors
    ///
    /// With a [`Rejection`] if the `code` cannot be applied, leaving these
    /// [`Discounts`] untouched.
    pub fn apply_code(
        &mut self,
        code: &str,
        promotions: &[Promotion],
        room_price: Decimal,
        booking_fee: Decimal,
        now: DateTime,
    ) -> Result<&Applied, Rejection> {
        let applied = self
            .redeem(code, promotions, room_price, booking_fee, now)
            .inspect_err(|e| {
                log::debug!(code, reason = %e, "promo code rejected");
            })?;

        log::debug!(
            code = %applied.label,
            promotion = %applied.promotion_id,
            amount = %applied.amount,
            "promo code applied",
        );
        self.0.push(applied);
        Ok(&self.0[self.0.len() - 1])
    }

    /// Resolves the [`Applied`] discount of the entered `code` without
    /// applying it.
    fn redeem(
        &self,
        code: &str,
        promotions: &[Promotion],
        room_price: Decimal,
        booking_fee: Decimal,
        now: DateTime,
    ) -> Result<Applied, Rejection> {
        let code = Code::new(code).ok_or(Rejection::EmptyCode)?;

        if self.iter().any(|d| d.label == code.as_ref()) {
            return Err(Rejection::AlreadyApplied);
        }
        if self.has_code() {
            return Err(Rejection::AnotherCodeApplied);
        }

        let promo = promotions
            .iter()
            .find(|p| p.is_redeemed_by(&code))
            .filter(|p| p.is_running_at(now))
            .ok_or(Rejection::InvalidOrExpired)?;
        if promo.is_exhausted() {
            return Err(Rejection::UsageLimitReached);
        }

        let amount = match promo.kind {
            promotion::Kind::Coupon => {
                promo
                .percentage()
                .of(room_price.saturating_add(booking_fee))
                .floor()
            }
            promotion::Kind::Code => {
                promo.fixed_amount.unwrap_or(Decimal::ZERO)
            }
            promotion::Kind::RoomDiscount => Decimal::ZERO,
        };
        if amount <= Decimal::ZERO {
            return Err(Rejection::NoDiscount);
        }

        Ok(Applied {
            label: code.to_string(),
            amount,
            kind: promo.kind,
            promotion_id: promo.id,
        })
    }

    /// Removes the discount entered by a code with the provided `label`.
    ///
    /// # Errors
    ///
    /// - [`RemovalError::NotApplied`] if no discount has the `label`.
    /// - [`RemovalError::NotRemovable`] if it's a
    ///   [`promotion::Kind::RoomDiscount`].
    pub fn remove(&mut self, label: &str) -> Result<Applied, RemovalError> {
        let idx = self
            .iter()
            .position(|d| d.label == label)
            .ok_or(RemovalError::NotApplied)?;
        if !self.0[idx].kind.is_code() {
            return Err(RemovalError::NotRemovable);
        }
        Ok(self.0.remove(idx))
    }
}

impl<'a> IntoIterator for &'a Discounts {
    type Item = &'a Applied;
    type IntoIter = slice::Iter<'a, Applied>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reason of a promo code not being applied.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum Rejection {
    /// Nothing is entered.
    #[display("Please enter a promo code")]
    EmptyCode,

    /// Same code is applied already.
    #[display("This promo code is already applied")]
    AlreadyApplied,

    /// Another code is applied already.
    #[display("Another promo code is already applied")]
    AnotherCodeApplied,

    /// No running [`Promotion`] is redeemed by the code.
    #[display("Invalid or expired promo code")]
    InvalidOrExpired,

    /// [`Promotion::usage_limit`] is reached.
    #[display("This promo code has reached its usage limit")]
    UsageLimitReached,

    /// [`Promotion`] gives nothing off this booking.
    #[display("This promo code gives no discount for this booking")]
    NoDiscount,
}

/// Error of removing an [`Applied`] discount.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum RemovalError {
    /// No discount with the label is applied.
    #[display("Discount is not applied")]
    NotApplied,

    /// Discount is applied automatically, so cannot be removed.
    #[display("Room discounts cannot be removed")]
    NotRemovable,
}
