//! [`Query`] definition.

pub mod calculate_price;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::calculate_price::CalculatePrice;
