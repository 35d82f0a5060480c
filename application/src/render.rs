//! Rendering of a [`Quote`].

use std::fmt::Write as _;

use common::Money;
use itertools::Itertools as _;
use serde::Serialize;
use service::pricing::{Breakdown, Duration, Quote};

/// Placeholder of a price that cannot be calculated yet.
const UNKNOWN: &str = "—";

/// Width of the label column of a text table.
const LABEL_WIDTH: usize = 20;

/// Renders the provided [`Quote`] as an aligned text table.
#[must_use]
pub fn text(quote: &Quote) -> String {
    let priced = quote.duration.is_some();
    let price = |money: Money| {
        if priced {
            money.to_string()
        } else {
            UNKNOWN.to_owned()
        }
    };
    let Breakdown {
        base_room_price,
        booking_fee,
        transaction_fee,
        subtotal,
        discount_total,
        total_payable,
        amount_due,
        balance,
    } = quote.breakdown;

    let mut rows = vec![
        ("Duration", quote.duration.map_or(UNKNOWN.to_owned(), describe)),
        (
            "Payment",
            format!(
                "{} / {}",
                quote
                    .payment
                    .method()
                    .map_or(UNKNOWN.to_owned(), |m| m.to_string()),
                quote.payment.kind(),
            ),
        ),
        ("Room price", price(base_room_price)),
        ("Booking fee", price(booking_fee)),
        ("Transaction fee", price(transaction_fee)),
        ("Subtotal", price(subtotal)),
    ];
    rows.extend(quote.discounts.iter().map(|d| {
        (
            d.label.as_str(),
            price(Money::new(-d.amount, total_payable.currency)),
        )
    }));
    rows.extend([
        ("Discount total", price(discount_total)),
        ("Total payable", price(total_payable)),
        ("Amount due", price(amount_due)),
        ("Balance", price(balance)),
    ]);

    let mut out = rows
        .iter()
        .format_with("\n", |(label, value), f| {
            f(&format_args!("{label:<LABEL_WIDTH$}{value:>14}"))
        })
        .to_string();
    for (code, reason) in &quote.rejections {
        _ = write!(out, "\n{code}: {reason}");
    }
    out
}

/// Describes the provided [`Duration`] in words.
fn describe(duration: Duration) -> String {
    match duration {
        Duration::Overnight { days, nights } => {
            format!("{days} day(s), {nights} night(s)")
        }
        Duration::ShortStay { hours } => format!("{hours} hour(s)"),
    }
}

/// Renders the provided [`Quote`] as a JSON document.
///
/// # Errors
///
/// If [`serde_json`] fails to serialize the [`Quote`].
pub fn json(quote: &Quote) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonQuote::from(quote))
}

/// JSON representation of a [`Quote`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonQuote<'a> {
    /// Charged duration, if resolved.
    duration: Option<JsonDuration>,

    /// Selected payment method.
    payment_method: Option<String>,

    /// Selected payment type.
    payment_type: String,

    /// Price breakdown, omitted until the duration is resolved.
    breakdown: Option<&'a Breakdown>,

    /// Applied discounts.
    applied_discounts: Vec<JsonDiscount<'a>>,

    /// Rejected promo codes.
    rejections: Vec<JsonRejection<'a>>,
}

impl<'a> From<&'a Quote> for JsonQuote<'a> {
    fn from(quote: &'a Quote) -> Self {
        let currency = quote.breakdown.total_payable.currency;
        Self {
            duration: quote.duration.map(JsonDuration::from),
            payment_method: quote.payment.method().map(|m| m.to_string()),
            payment_type: quote.payment.kind().to_string(),
            breakdown: quote.duration.is_some().then_some(&quote.breakdown),
            applied_discounts: quote
                .discounts
                .iter()
                .map(|d| JsonDiscount {
                    label: &d.label,
                    kind: d.kind.to_string(),
                    promotion_id: d.promotion_id.into(),
                    amount: Money::new(d.amount, currency),
                })
                .collect(),
            rejections: quote
                .rejections
                .iter()
                .map(|(code, reason)| JsonRejection {
                    code,
                    reason: reason.to_string(),
                })
                .collect(),
        }
    }
}

/// JSON representation of a [`Duration`].
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
enum JsonDuration {
    /// Overnight stay.
    Overnight {
        /// Charged days.
        days: u32,

        /// Nights spent.
        nights: u32,
    },

    /// Short stay.
    ShortStay {
        /// Charged hours.
        hours: u32,
    },
}

impl From<Duration> for JsonDuration {
    fn from(duration: Duration) -> Self {
        match duration {
            Duration::Overnight { days, nights } => {
                Self::Overnight { days, nights }
            }
            Duration::ShortStay { hours } => Self::ShortStay { hours },
        }
    }
}

/// JSON representation of an applied discount.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDiscount<'a> {
    /// Label of the discount.
    label: &'a str,

    /// Kind of the applied promotion.
    kind: String,

    /// ID of the applied promotion.
    promotion_id: u64,

    /// Discounted amount.
    amount: Money,
}

/// JSON representation of a rejected promo code.
#[derive(Debug, Serialize)]
struct JsonRejection<'a> {
    /// Entered code.
    code: &'a str,

    /// Reason of the rejection.
    reason: String,
}

#[cfg(test)]
mod spec {
    use common::{money::Currency, Money};
    use rust_decimal::Decimal;
    use service::{
        domain::payment::{self, Method, Selection},
        pricing::{Breakdown, Discounts, Duration, Quote, Rejection},
    };

    use super::{json, text};

    fn php(amount: i64) -> Money {
        Money::new(Decimal::from(amount), Currency::Php)
    }

    fn quote(duration: Option<Duration>) -> Quote {
        Quote {
            duration,
            payment: Selection::new(Some(Method::Gcash), payment::Type::Full),
            breakdown: Breakdown {
                base_room_price: php(3000),
                booking_fee: php(50),
                transaction_fee: php(90),
                subtotal: php(3140),
                discount_total: php(0),
                total_payable: php(3140),
                amount_due: php(3140),
                balance: php(0),
            },
            discounts: Discounts::new(),
            rejections: vec![("NOPE".into(), Rejection::InvalidOrExpired)],
        }
    }

    #[test]
    fn renders_aligned_table() {
        let out = text(&quote(Some(Duration::Overnight { days: 3, nights: 2 })));
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], format!("{:<20}{:>14}", "Duration", "3 day(s), 2 night(s)"));
        assert_eq!(lines[1], format!("{:<20}{:>14}", "Payment", "GCash / Full Payment"));
        assert_eq!(lines[2], format!("{:<20}{:>14}", "Room price", "3000PHP"));
        assert!(out.ends_with("NOPE: Invalid or expired promo code"));
    }

    #[test]
    fn renders_placeholder_for_unpriced_stay() {
        let out = text(&quote(None));

        assert!(out.lines().take(8).skip(2).all(|l| l.ends_with('—')));
        assert!(!out.contains("PHP"));
    }

    #[test]
    fn renders_json() {
        let out = json(&quote(Some(Duration::ShortStay { hours: 3 }))).unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&out).unwrap();

        assert_eq!(value["duration"]["type"], "shortStay");
        assert_eq!(value["duration"]["hours"], 3);
        assert_eq!(value["paymentMethod"], "GCash");
        assert_eq!(value["breakdown"]["totalPayable"], "3140PHP");
        assert_eq!(value["rejections"][0]["code"], "NOPE");

        let unpriced = json(&quote(None)).unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&unpriced).unwrap();
        assert!(value["breakdown"].is_null());
    }
}
