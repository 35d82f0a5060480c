//! [`Command`] definition.

pub mod apply_promo_code;
pub mod remove_discount;
pub mod select_payment_method;
pub mod select_payment_type;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    apply_promo_code::ApplyPromoCode, remove_discount::RemoveDiscount,
    select_payment_method::SelectPaymentMethod,
    select_payment_type::SelectPaymentType,
};
