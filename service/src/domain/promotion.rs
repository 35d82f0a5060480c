//! [`Promotion`] definitions.

use common::{define_kind, unit, DateTime, DateTimeOf, Percent};
use derive_more::{AsRef, Display, From, Into};
use rust_decimal::Decimal;

/// Promotion of a business, managed outside of this [`Service`].
///
/// Read-only for the pricing: redemptions are counted elsewhere.
///
/// [`Service`]: crate::Service
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Promotion {
    /// ID of this [`Promotion`].
    pub id: Id,

    /// Human-readable title of this [`Promotion`].
    pub title: String,

    /// [`Kind`] of this [`Promotion`].
    pub kind: Kind,

    /// [`Code`] to enter for redeeming this [`Promotion`].
    ///
    /// Meaningless for a [`Kind::RoomDiscount`].
    pub code: Option<Code>,

    /// Discount percentage of a [`Kind::Coupon`] or a [`Kind::RoomDiscount`].
    pub discount_percentage: Option<Percent>,

    /// Discount amount of a [`Kind::Code`].
    pub fixed_amount: Option<Decimal>,

    /// Maximum number of redemptions, if limited.
    pub usage_limit: Option<u32>,

    /// Number of redemptions made so far.
    pub used_count: u32,

    /// Indicator whether this [`Promotion`] is switched on.
    pub is_active: bool,

    /// [`DateTime`] this [`Promotion`] starts at.
    pub starts_at: StartDateTime,

    /// [`DateTime`] this [`Promotion`] ends at.
    ///
    /// [`None`] means that this [`Promotion`] runs indefinitely.
    pub ends_at: Option<EndDateTime>,
}

impl Promotion {
    /// Indicates whether this [`Promotion`] is switched on and runs at the
    /// provided moment.
    #[must_use]
    pub fn is_running_at(&self, now: DateTime) -> bool {
        self.is_active
            && self.starts_at.coerce() <= now
            && self.ends_at.map_or(true, |end| end.coerce() >= now)
    }

    /// Indicates whether the [`Promotion::usage_limit`] is reached.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.usage_limit
            .is_some_and(|limit| self.used_count >= limit)
    }

    /// Returns the discount percentage of this [`Promotion`], or zero if it
    /// has none.
    #[must_use]
    pub fn percentage(&self) -> Percent {
        self.discount_percentage.unwrap_or(Percent::ZERO)
    }

    /// Indicates whether this [`Promotion`] is redeemed by the provided
    /// [`Code`].
    #[must_use]
    pub fn is_redeemed_by(&self, code: &Code) -> bool {
        self.kind.is_code() && self.code.as_ref() == Some(code)
    }
}

/// ID of a [`Promotion`].
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, Hash, Into, PartialEq,
)]
pub struct Id(u64);

/// Code of a [`Promotion`], normalized to the trimmed upper case.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Code(String);

impl Code {
    /// Creates a new normalized [`Code`].
    ///
    /// [`None`] is returned if nothing remains after trimming.
    #[must_use]
    pub fn new(code: impl AsRef<str>) -> Option<Self> {
        let code = code.as_ref().trim().to_uppercase();
        (!code.is_empty()).then_some(Self(code))
    }
}

define_kind! {
    #[doc = "Kind of a [`Promotion`]."]
    enum Kind {
        #[doc = "Percentage discount redeemed by entering a [`Code`]."]
        Coupon = 1,

        #[doc = "Percentage discount applied automatically."]
        RoomDiscount = 2,

        #[doc = "Fixed amount discount redeemed by entering a [`Code`]."]
        Code = 3,
    }
}

impl Kind {
    /// Indicates whether this [`Kind`] is redeemed by entering a [`Code`].
    #[must_use]
    pub fn is_code(self) -> bool {
        matches!(self, Self::Coupon | Self::Code)
    }
}

/// Discount of a [`Promotion`] applied to a booking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Applied {
    /// Label of this discount: the [`Promotion::title`] of a
    /// [`Kind::RoomDiscount`] or the entered [`Code`] otherwise.
    pub label: String,

    /// Discounted amount.
    pub amount: Decimal,

    /// [`Kind`] of the applied [`Promotion`].
    pub kind: Kind,

    /// ID of the applied [`Promotion`].
    pub promotion_id: Id,
}

/// [`DateTime`] when a [`Promotion`] starts.
pub type StartDateTime = DateTimeOf<(Promotion, unit::Start)>;

/// [`DateTime`] when a [`Promotion`] ends.
pub type EndDateTime = DateTimeOf<(Promotion, unit::End)>;

#[cfg(test)]
mod spec {
    use common::DateTime;

    use crate::fixture;

    use super::{Code, Kind};

    #[test]
    fn normalizes_code() {
        assert_eq!(Code::new("  save20 ").unwrap().as_ref(), "SAVE20");
        assert!(Code::new("   ").is_none());
        assert!(Code::new("").is_none());
    }

    #[test]
    fn kind_codes() {
        assert_eq!(Kind::try_from(1_u8), Ok(Kind::Coupon));
        assert_eq!(Kind::try_from(2_u8), Ok(Kind::RoomDiscount));
        assert_eq!(Kind::try_from(3_u8), Ok(Kind::Code));
        assert!(Kind::try_from(4_u8).is_err());

        assert!(Kind::Coupon.is_code());
        assert!(Kind::Code.is_code());
        assert!(!Kind::RoomDiscount.is_code());
    }

    #[test]
    fn runs_within_window() {
        let now = fixture::now();
        let mut promo = fixture::room_discount(1, 10);
        assert!(promo.is_running_at(now));

        promo.is_active = false;
        assert!(!promo.is_running_at(now));

        promo.is_active = true;
        promo.starts_at = DateTime::parse("2024-06-01").unwrap().coerce();
        assert!(!promo.is_running_at(now));

        promo.starts_at = DateTime::parse("2024-01-01").unwrap().coerce();
        promo.ends_at = Some(DateTime::parse("2024-05-01").unwrap().coerce());
        assert!(!promo.is_running_at(now));

        promo.ends_at = Some(now.coerce());
        assert!(promo.is_running_at(now));
    }

    #[test]
    fn exhausts_usage_limit() {
        let mut promo = fixture::code(1, "FLAT100", 100);
        promo.used_count = 100;
        assert!(!promo.is_exhausted());

        promo.usage_limit = Some(100);
        assert!(promo.is_exhausted());

        promo.used_count = 99;
        assert!(!promo.is_exhausted());
    }

    #[test]
    fn redeemed_only_by_matching_code() {
        let coupon = fixture::coupon(1, "save20", 20);
        assert!(coupon.is_redeemed_by(&Code::new("SAVE20").unwrap()));
        assert!(!coupon.is_redeemed_by(&Code::new("SAVE21").unwrap()));

        let mut room = fixture::room_discount(2, 10);
        room.code = Code::new("SAVE20");
        assert!(!room.is_redeemed_by(&Code::new("SAVE20").unwrap()));
    }
}
