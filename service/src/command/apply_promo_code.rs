//! [`Command`] for applying an entered promo code.

use tracerr::Traced;

use crate::{
    pricing::{base, duration, Discounts, Fees, Rejection, Request},
    Service,
};

use super::Command;

/// [`Command`] for applying an entered promo code to the [`Discounts`] of a
/// booking.
#[derive(Clone, Debug)]
pub struct ApplyPromoCode {
    /// [`Request`] the booking is priced by.
    pub request: Request,

    /// [`Discounts`] applied so far.
    pub discounts: Discounts,

    /// Entered promo code.
    pub code: String,
}

impl Command<ApplyPromoCode> for Service {
    type Ok = Discounts;
    type Err = Traced<Rejection>;

    fn execute(&self, cmd: ApplyPromoCode) -> Result<Self::Ok, Self::Err> {
        let ApplyPromoCode {
            request,
            mut discounts,
            code,
        } = cmd;

        let resolved = duration::resolve(&request.stay);
        let room_price = base::room_price(&request.room, resolved.as_ref());
        let fees =
            Fees::calculate(self.config(), room_price, request.payment.method());

        _ = discounts
            .apply_code(
                &code,
                &request.promotions,
                room_price,
                fees.booking,
                request.now,
            )
            .map_err(tracerr::wrap!())?;

        Ok(discounts)
    }
}
