//! [`Command`] for selecting a payment [`Method`].

use std::convert::Infallible;

use crate::{
    domain::payment::{Method, Selection},
    Service,
};

use super::Command;

/// [`Command`] for selecting a payment [`Method`].
///
/// Selecting [`Method::Cash`] switches the [`Selection`] to a full payment.
#[derive(Clone, Copy, Debug)]
pub struct SelectPaymentMethod {
    /// Current [`Selection`].
    pub selection: Selection,

    /// [`Method`] to select.
    pub method: Option<Method>,
}

impl Command<SelectPaymentMethod> for Service {
    type Ok = Selection;
    type Err = Infallible;

    fn execute(
        &self,
        cmd: SelectPaymentMethod,
    ) -> Result<Self::Ok, Self::Err> {
        let SelectPaymentMethod {
            mut selection,
            method,
        } = cmd;

        selection.select_method(method);

        Ok(selection)
    }
}
