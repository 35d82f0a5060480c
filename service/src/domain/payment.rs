//! Payment definitions.

use derive_more::{Display, Error};
use strum::EnumString;

/// Method a booking is paid with.
#[derive(
    Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Method {
    /// Cash paid at the property.
    Cash,

    /// GCash e-wallet.
    #[display("GCash")]
    #[strum(serialize = "GCash")]
    Gcash,

    /// Maya e-wallet.
    Maya,

    /// Credit or debit card.
    Card,
}

impl Method {
    /// Indicates whether this [`Method`] is [`Method::Cash`].
    #[must_use]
    pub fn is_cash(self) -> bool {
        matches!(self, Self::Cash)
    }
}

/// Type of a booking payment.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum Type {
    /// Whole total is paid upfront.
    #[default]
    #[display("Full Payment")]
    Full,

    /// Only a share of the total is paid upfront, the rest is a balance.
    #[display("Partial Payment")]
    Partial,
}

impl Type {
    /// Indicates whether this [`Type`] is [`Type::Partial`].
    #[must_use]
    pub fn is_partial(self) -> bool {
        matches!(self, Self::Partial)
    }
}

impl From<&str> for Type {
    /// Any label mentioning `Partial` is a [`Type::Partial`] one, the rest
    /// are [`Type::Full`].
    fn from(label: &str) -> Self {
        if label.contains("Partial") {
            Self::Partial
        } else {
            Self::Full
        }
    }
}

/// Payment [`Method`] and [`Type`] selected for a booking.
///
/// [`Method::Cash`] is always paid in full.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    /// Selected [`Method`], if any.
    method: Option<Method>,

    /// Selected [`Type`].
    kind: Type,
}

impl Selection {
    /// Creates a new [`Selection`] out of the provided values.
    ///
    /// A [`Type::Partial`] for [`Method::Cash`] is replaced with
    /// [`Type::Full`].
    #[must_use]
    pub fn new(method: Option<Method>, kind: Type) -> Self {
        let mut this = Self { method: None, kind };
        this.select_method(method);
        this
    }

    /// Returns the selected [`Method`], if any.
    #[must_use]
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// Returns the selected [`Type`].
    #[must_use]
    pub fn kind(&self) -> Type {
        self.kind
    }

    /// Selects the provided [`Method`].
    ///
    /// Selecting [`Method::Cash`] resets the [`Type`] to [`Type::Full`].
    pub fn select_method(&mut self, method: Option<Method>) {
        self.method = method;
        if method.is_some_and(Method::is_cash) {
            self.kind = Type::Full;
        }
    }

    /// Selects the provided [`Type`].
    ///
    /// # Errors
    ///
    /// With [`SelectionError::PartialCash`] if [`Type::Partial`] is selected
    /// while [`Method::Cash`] is, leaving this [`Selection`] untouched.
    pub fn select_type(&mut self, kind: Type) -> Result<(), SelectionError> {
        if kind.is_partial() && self.method.is_some_and(Method::is_cash) {
            return Err(SelectionError::PartialCash);
        }
        self.kind = kind;
        Ok(())
    }
}

/// Error of changing a [`Selection`].
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum SelectionError {
    /// [`Type::Partial`] is not allowed for [`Method::Cash`].
    #[display("Partial payment is not available for cash")]
    PartialCash,
}

#[cfg(test)]
mod spec {
    use super::{Method, Selection, SelectionError, Type};

    #[test]
    fn parses_method() {
        assert_eq!("Cash".parse(), Ok(Method::Cash));
        assert_eq!("gcash".parse(), Ok(Method::Gcash));
        assert_eq!("GCash".parse(), Ok(Method::Gcash));
        assert_eq!("MAYA".parse(), Ok(Method::Maya));
        assert!("cheque".parse::<Method>().is_err());

        assert_eq!(Method::Gcash.to_string(), "GCash");
    }

    #[test]
    fn partial_by_label() {
        assert_eq!(Type::from("Partial Payment"), Type::Partial);
        assert_eq!(Type::from("Full Payment"), Type::Full);
        assert_eq!(Type::from(""), Type::Full);
        assert_eq!(Type::Partial.to_string(), "Partial Payment");
    }

    #[test]
    fn cash_forces_full_payment() {
        let mut selection =
            Selection::new(Some(Method::Gcash), Type::Partial);
        assert_eq!(selection.kind(), Type::Partial);

        selection.select_method(Some(Method::Cash));
        assert_eq!(selection.kind(), Type::Full);
        assert_eq!(selection.method(), Some(Method::Cash));

        assert_eq!(
            selection.select_type(Type::Partial),
            Err(SelectionError::PartialCash),
        );
        assert_eq!(selection.kind(), Type::Full);

        selection.select_method(Some(Method::Card));
        assert_eq!(selection.select_type(Type::Partial), Ok(()));
        assert_eq!(selection.kind(), Type::Partial);

        selection.select_method(None);
        assert_eq!(selection.kind(), Type::Partial);
    }

    #[test]
    fn new_normalizes_partial_cash() {
        let selection = Selection::new(Some(Method::Cash), Type::Partial);
        assert_eq!(selection.kind(), Type::Full);
    }
}
