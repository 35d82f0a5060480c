//! [`Query`] for pricing a booking.

use std::convert::Infallible;

use derive_more::From;

use crate::{
    pricing::{self, Quote, Request},
    Service,
};

use super::Query;

/// [`Query`] for pricing a booking by the provided [`Request`].
#[derive(Clone, Debug, From)]
pub struct CalculatePrice(pub Request);

impl Query<CalculatePrice> for Service {
    type Ok = Quote;
    type Err = Infallible;

    fn execute(
        &self,
        CalculatePrice(request): CalculatePrice,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(pricing::calculate(self.config(), &request))
    }
}
