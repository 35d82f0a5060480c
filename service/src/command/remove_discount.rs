//! [`Command`] for removing an applied discount.

use tracerr::Traced;

use crate::{
    pricing::{Discounts, RemovalError},
    Service,
};

use super::Command;

/// [`Command`] for removing a discount entered by a promo code.
#[derive(Clone, Debug)]
pub struct RemoveDiscount {
    /// [`Discounts`] applied so far.
    pub discounts: Discounts,

    /// Label of the discount to remove.
    pub label: String,
}

impl Command<RemoveDiscount> for Service {
    type Ok = Discounts;
    type Err = Traced<RemovalError>;

    fn execute(&self, cmd: RemoveDiscount) -> Result<Self::Ok, Self::Err> {
        let RemoveDiscount {
            mut discounts,
            label,
        } = cmd;

        _ = discounts.remove(&label).map_err(tracerr::wrap!())?;

        Ok(discounts)
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::{
        fixture,
        pricing::{Discounts, RemovalError},
        Command as _, Service,
    };

    use super::RemoveDiscount;

    fn discounts() -> Discounts {
        let promos = [
            fixture::room_discount(1, 10),
            fixture::coupon(2, "SAVE20", 20),
        ];
        let mut discounts = Discounts::new();
        _ = discounts.auto_apply_room_discount(
            &promos,
            Decimal::from(1000),
            fixture::now(),
        );
        _ = discounts
            .apply_code(
                "SAVE20",
                &promos,
                Decimal::from(1000),
                Decimal::from(50),
                fixture::now(),
            )
            .unwrap();
        discounts
    }

    #[test]
    fn removes_code() {
        let service = Service::new(fixture::config());

        let discounts = service
            .execute(RemoveDiscount {
                discounts: discounts(),
                label: "SAVE20".into(),
            })
            .unwrap();

        assert!(!discounts.has_code());
        assert_eq!(discounts.total(), Decimal::from(100));
    }

    #[test]
    fn keeps_room_discount() {
        let service = Service::new(fixture::config());

        let err = service
            .execute(RemoveDiscount {
                discounts: discounts(),
                label: "10% off".into(),
            })
            .unwrap_err();

        assert_eq!(*err.as_ref(), RemovalError::NotRemovable);
    }
}
