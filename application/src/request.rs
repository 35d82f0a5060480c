//! Quote request definitions.
//!
//! Field names follow the booking form and the promotion service payloads
//! the request is assembled from.

use common::{calendar, DateTime, Percent, UnknownKind};
use derive_more::{Display, Error as StdError, From};
use rust_decimal::Decimal;
use serde::Deserialize;
use service::{
    domain::{
        booking::{self, Stay},
        payment::{self, Method},
        promotion::{self, Code},
        room::{Rate, SeasonalBand},
        Promotion, Room,
    },
    pricing,
};

/// Booking to be priced, as submitted by a client.
#[derive(Clone, Debug, Deserialize)]
pub struct QuoteRequest {
    /// Type of the booking: `overnight` or `short-stay`.
    pub booking_type: String,

    /// Check-in date.
    #[serde(default)]
    pub check_in_date: String,

    /// Check-out date.
    #[serde(default)]
    pub check_out_date: String,

    /// Check-in time of a short stay.
    pub check_in_time: Option<String>,

    /// Check-out time of a short stay.
    pub check_out_time: Option<String>,

    /// Rates of the booked room, if known.
    pub room: Option<RoomRates>,

    /// Seasonal pricing bands of the booked room.
    #[serde(default)]
    pub seasonal_pricing: Vec<SeasonalPrice>,

    /// Promotions of the business.
    #[serde(default)]
    pub promotions: Vec<PromotionRecord>,

    /// Entered promo codes, in the order of entering.
    #[serde(default)]
    pub promo_codes: Vec<String>,

    /// Selected payment method.
    pub payment_method: Option<String>,

    /// Selected payment type, `Full Payment` if omitted.
    pub payment_type: Option<String>,

    /// Moment to check the promotions at, the current one if omitted.
    pub now: Option<String>,
}

/// Rates of a room.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct RoomRates {
    /// Flat nightly rate.
    pub price: Decimal,

    /// Hourly rate of a short stay.
    pub hourly_rate: Option<Decimal>,
}

/// Seasonal pricing band of a room.
#[derive(Clone, Debug, Deserialize)]
pub struct SeasonalPrice {
    /// First day of the band.
    pub start_date: String,

    /// Last day of the band (inclusive).
    pub end_date: String,

    /// Nightly price within the band.
    pub price: Decimal,
}

/// Promotion as delivered by the promotion service.
#[derive(Clone, Debug, Deserialize)]
pub struct PromotionRecord {
    /// ID of the promotion.
    pub id: u64,

    /// Title of the promotion.
    #[serde(default)]
    pub title: String,

    /// Code of the [`promotion::Kind`].
    pub promo_type: u8,

    /// Discount percentage of a coupon or a room discount.
    pub discount_percentage: Option<Decimal>,

    /// Discount amount of a fixed code.
    pub fixed_discount_amount: Option<Decimal>,

    /// Maximum number of redemptions.
    pub usage_limit: Option<u32>,

    /// Number of redemptions made so far.
    #[serde(default)]
    pub used_count: u32,

    /// Indicator whether the promotion is switched on.
    pub is_active: bool,

    /// Start of the promotion.
    pub start_date: String,

    /// End of the promotion, if any.
    pub end_date: Option<String>,

    /// Code redeeming the promotion.
    pub promo_code: Option<String>,
}

/// [`QuoteRequest`] converted into domain types.
#[derive(Clone, Debug)]
pub struct Form {
    /// [`pricing::Request`] with the default payment selection.
    pub request: pricing::Request,

    /// Selected payment [`Method`].
    pub payment_method: Option<Method>,

    /// Selected [`payment::Type`].
    pub payment_type: payment::Type,
}

impl TryFrom<QuoteRequest> for Form {
    type Error = Error;

    fn try_from(value: QuoteRequest) -> Result<Self, Self::Error> {
        let QuoteRequest {
            booking_type,
            check_in_date,
            check_out_date,
            check_in_time,
            check_out_time,
            room,
            seasonal_pricing,
            promotions,
            promo_codes,
            payment_method,
            payment_type,
            now,
        } = value;

        let kind = booking_type
            .parse::<booking::Type>()
            .map_err(|_| Error::BookingType(booking_type))?;
        let rate = room
            .map(|r| {
                Rate::new(r.price, r.hourly_rate).ok_or(Error::NegativeRate)
            })
            .transpose()?;
        let seasonal_pricing = seasonal_pricing
            .into_iter()
            .map(SeasonalBand::try_from)
            .collect::<Result<_, _>>()?;
        let promotions = promotions
            .into_iter()
            .map(Promotion::try_from)
            .collect::<Result<_, _>>()?;
        let payment_method = payment_method
            .map(|m| m.parse::<Method>().map_err(|_| Error::PaymentMethod(m)))
            .transpose()?;
        let now = now
            .map(|n| DateTime::parse(&n).ok_or(Error::Now(n)))
            .transpose()?
            .unwrap_or_else(DateTime::now);

        Ok(Self {
            request: pricing::Request {
                stay: Stay {
                    kind,
                    check_in_date,
                    check_out_date,
                    check_in_time,
                    check_out_time,
                },
                room: Room {
                    rate,
                    seasonal_pricing,
                },
                promotions,
                codes: promo_codes,
                payment: payment::Selection::default(),
                now,
            },
            payment_method,
            payment_type: payment_type
                .as_deref()
                .map_or(payment::Type::Full, payment::Type::from),
        })
    }
}

impl TryFrom<SeasonalPrice> for SeasonalBand {
    type Error = Error;

    fn try_from(value: SeasonalPrice) -> Result<Self, Self::Error> {
        let SeasonalPrice {
            start_date,
            end_date,
            price,
        } = value;

        let start = calendar::parse_date(&start_date)
            .ok_or_else(|| Error::SeasonalBand(start_date.clone()))?;
        let end = calendar::parse_date(&end_date)
            .ok_or_else(|| Error::SeasonalBand(end_date.clone()))?;
        Self::new(start, end, price)
            .ok_or_else(|| Error::SeasonalBand(format!("{start_date}..{end_date}")))
    }
}

impl TryFrom<PromotionRecord> for Promotion {
    type Error = Error;

    fn try_from(value: PromotionRecord) -> Result<Self, Self::Error> {
        let PromotionRecord {
            id,
            title,
            promo_type,
            discount_percentage,
            fixed_discount_amount,
            usage_limit,
            used_count,
            is_active,
            start_date,
            end_date,
            promo_code,
        } = value;
        let id = promotion::Id::from(id);

        Ok(Self {
            id,
            title,
            kind: promotion::Kind::try_from(promo_type)?,
            code: promo_code.and_then(Code::new),
            discount_percentage: discount_percentage
                .map(|p| Percent::new(p).ok_or(Error::Percentage(id, p)))
                .transpose()?,
            fixed_amount: fixed_discount_amount,
            usage_limit,
            used_count,
            is_active,
            starts_at: DateTime::parse(&start_date)
                .ok_or(Error::PromotionDate(id))?
                .coerce(),
            ends_at: end_date
                .map(|d| DateTime::parse(&d).ok_or(Error::PromotionDate(id)))
                .transpose()?
                .map(DateTime::coerce),
        })
    }
}

/// Error of converting a [`QuoteRequest`] into a [`Form`].
#[derive(Clone, Debug, Display, From, StdError)]
pub enum Error {
    /// Unknown booking type.
    #[display("unknown booking type: `{_0}`")]
    BookingType(#[error(not(source))] String),

    /// Negative room rate.
    #[display("room rates cannot be negative")]
    NegativeRate,

    /// Invalid seasonal pricing band.
    #[display("invalid seasonal pricing band: `{_0}`")]
    SeasonalBand(#[error(not(source))] String),

    /// Unknown promotion type.
    #[display("{_0}")]
    #[from]
    PromoType(UnknownKind),

    /// Discount percentage out of `0..=100`.
    #[display("promotion `{_0}` has invalid discount percentage: {_1}")]
    Percentage(promotion::Id, Decimal),

    /// Unparseable promotion date.
    #[display("promotion `{_0}` has invalid start or end date")]
    PromotionDate(#[error(not(source))] promotion::Id),

    /// Unknown payment method.
    #[display("unknown payment method: `{_0}`")]
    PaymentMethod(#[error(not(source))] String),

    /// Unparseable moment to check the promotions at.
    #[display("invalid `now` moment: `{_0}`")]
    Now(#[error(not(source))] String),
}
