//! Domain definitions.

pub mod booking;
pub mod payment;
pub mod promotion;
pub mod room;

pub use self::{promotion::Promotion, room::Room};
