//! [`Command`] for selecting a [`payment::Type`].

use tracerr::Traced;

use crate::{
    domain::payment::{self, Selection, SelectionError},
    Service,
};

use super::Command;

/// [`Command`] for selecting a [`payment::Type`].
#[derive(Clone, Copy, Debug)]
pub struct SelectPaymentType {
    /// Current [`Selection`].
    pub selection: Selection,

    /// [`payment::Type`] to select.
    pub kind: payment::Type,
}

impl Command<SelectPaymentType> for Service {
    type Ok = Selection;
    type Err = Traced<SelectionError>;

    fn execute(&self, cmd: SelectPaymentType) -> Result<Self::Ok, Self::Err> {
        let SelectPaymentType {
            mut selection,
            kind,
        } = cmd;

        selection.select_type(kind).map_err(tracerr::wrap!())?;

        Ok(selection)
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::payment::{self, Method, Selection, SelectionError},
        fixture, Command as _, Service,
    };

    use super::SelectPaymentType;

    #[test]
    fn selects_partial_payment() {
        let service = Service::new(fixture::config());

        let selection = service
            .execute(SelectPaymentType {
                selection: Selection::new(Some(Method::Card), payment::Type::Full),
                kind: payment::Type::Partial,
            })
            .unwrap();

        assert_eq!(selection.kind(), payment::Type::Partial);
    }

    #[test]
    fn refuses_partial_cash() {
        let service = Service::new(fixture::config());

        let err = service
            .execute(SelectPaymentType {
                selection: Selection::new(Some(Method::Cash), payment::Type::Full),
                kind: payment::Type::Partial,
            })
            .unwrap_err();

        assert_eq!(*err.as_ref(), SelectionError::PartialCash);
    }
}
