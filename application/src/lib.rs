//! Application pricing bookings with the [`Service`] from the command line.
//!
//! [`Service`]: service::Service

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod args;
pub mod config;
pub mod error;
pub mod render;
pub mod request;

use std::{convert::Infallible, fs, path::Path};

use service::{
    command::{SelectPaymentMethod, SelectPaymentType},
    domain::payment::Selection,
    pricing::Quote,
    query::CalculatePrice,
    Command as _, Query as _, Service,
};
use tracing as log;
// Used in binary.
use tracing_subscriber as _;

pub use self::{
    args::{Args, Format},
    config::Config,
    error::Error,
    request::{Form, QuoteRequest},
};

/// Reads a [`QuoteRequest`] from the provided JSON file.
///
/// # Errors
///
/// If the file cannot be read, or contains an invalid [`QuoteRequest`].
pub fn read_form(path: &Path) -> Result<Form, Error> {
    let json = fs::read_to_string(path)
        .map_err(|e| Error::Read(path.to_owned(), e))?;
    let request = serde_json::from_str::<QuoteRequest>(&json)
        .map_err(Error::Decode)?;
    Ok(Form::try_from(request)?)
}

/// Prices the provided [`Form`] with the provided [`Service`].
///
/// The payment selection is made in the same order as in a booking form:
/// the method first, then the type. A partial payment refused for cash is
/// logged and the payment stays full.
#[must_use]
pub fn quote(service: &Service, form: Form) -> Quote {
    let Form {
        mut request,
        payment_method,
        payment_type,
    } = form;

    let with_method = service
        .execute(SelectPaymentMethod {
            selection: Selection::default(),
            method: payment_method,
        })
        .unwrap_or_else(|e: Infallible| match e {});
    request.payment = service
        .execute(SelectPaymentType {
            selection: with_method,
            kind: payment_type,
        })
        .unwrap_or_else(|e| {
            log::warn!("{}", error::traced(&e));
            with_method
        });

    service
        .execute(CalculatePrice(request))
        .unwrap_or_else(|e: Infallible| match e {})
}

/// Renders the provided [`Quote`] in the provided [`Format`].
///
/// # Errors
///
/// If the [`Quote`] cannot be encoded as JSON.
pub fn render(quote: &Quote, format: Format) -> Result<String, Error> {
    match format {
        Format::Text => Ok(render::text(quote)),
        Format::Json => render::json(quote).map_err(Error::Encode),
    }
}

#[cfg(test)]
mod spec {
    use common::DateTime;
    use rust_decimal::Decimal;
    use service::{
        domain::{
            booking::{self, Stay},
            payment::{self, Method, Selection},
            room::Rate,
            Room,
        },
        pricing::Request,
        Service,
    };

    use crate::{config::Pricing, Form};

    use super::quote;

    fn form(method: Method, kind: payment::Type) -> Form {
        Form {
            request: Request {
                stay: Stay {
                    kind: booking::Type::Overnight,
                    check_in_date: "2024-06-01".into(),
                    check_out_date: "2024-06-04".into(),
                    ..Stay::default()
                },
                room: Room {
                    rate: Rate::new(Decimal::from(1000), None),
                    seasonal_pricing: vec![],
                },
                promotions: vec![],
                codes: vec![],
                payment: Selection::default(),
                now: DateTime::parse("2024-05-20").unwrap(),
            },
            payment_method: Some(method),
            payment_type: kind,
        }
    }

    fn service() -> Service {
        Service::new(Pricing::default().try_into().unwrap())
    }

    #[test]
    fn prices_partial_payment() {
        let quote = quote(&service(), form(Method::Gcash, payment::Type::Partial));

        assert_eq!(quote.breakdown.amount_due.amount, Decimal::from(1570));
        assert_eq!(quote.breakdown.balance.amount, Decimal::from(1570));
    }

    #[test]
    fn cash_is_paid_in_full() {
        let quote = quote(&service(), form(Method::Cash, payment::Type::Partial));

        assert_eq!(quote.payment.kind(), payment::Type::Full);
        assert_eq!(quote.breakdown.amount_due.amount, Decimal::from(3050));
        assert_eq!(quote.breakdown.balance.amount, Decimal::ZERO);
    }
}
