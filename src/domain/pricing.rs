use bigdecimal::{BigDecimal, RoundingMode, Zero};

use super::errors::DomainError;

/// Unit price after an optional percentage discount.
///
/// Discounts outside `[0, 100]` are rejected, never clamped: a negative or
/// >100 percent value would silently corrupt every total computed from it.
/// With no discount the price is returned unchanged; otherwise the result is
/// rounded half-up to two decimal places.
pub fn effective_price(
    unit_price: &BigDecimal,
    discount_percent: Option<&BigDecimal>,
) -> Result<BigDecimal, DomainError> {
    if unit_price < &BigDecimal::zero() {
        return Err(DomainError::InvalidPrice(unit_price.clone()));
    }
    let Some(discount) = discount_percent else {
        return Ok(unit_price.clone());
    };
    if discount < &BigDecimal::zero() || discount > &BigDecimal::from(100) {
        return Err(DomainError::InvalidDiscount(discount.clone()));
    }
    if discount.is_zero() {
        return Ok(unit_price.clone());
    }
    let discounted = unit_price - unit_price * discount / BigDecimal::from(100);
    Ok(discounted.with_scale_round(2, RoundingMode::HalfUp))
}

/// A validated order line. Construction is the single validation point;
/// once a `LineItem` exists its totals cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    unit_price: BigDecimal,
    discount_percent: Option<BigDecimal>,
    effective_unit_price: BigDecimal,
    quantity: i32,
}

impl LineItem {
    pub fn new(
        unit_price: BigDecimal,
        discount_percent: Option<BigDecimal>,
        quantity: i32,
    ) -> Result<Self, DomainError> {
        if quantity < 1 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        let effective_unit_price = effective_price(&unit_price, discount_percent.as_ref())?;
        Ok(Self {
            unit_price,
            discount_percent,
            effective_unit_price,
            quantity,
        })
    }

    pub fn unit_price(&self) -> &BigDecimal {
        &self.unit_price
    }

    pub fn discount_percent(&self) -> Option<&BigDecimal> {
        self.discount_percent.as_ref()
    }

    pub fn effective_unit_price(&self) -> &BigDecimal {
        &self.effective_unit_price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// `effective_unit_price × quantity`.
    pub fn total(&self) -> BigDecimal {
        &self.effective_unit_price * BigDecimal::from(self.quantity)
    }
}

/// Sum of line totals. Empty input yields zero.
///
/// This is the only trusted source of an order's `total_sum`: it is invoked
/// server-side when an order is accepted, and client-submitted totals are
/// never persisted.
pub fn order_total<'a, I>(items: I) -> BigDecimal
where
    I: IntoIterator<Item = &'a LineItem>,
{
    items
        .into_iter()
        .fold(BigDecimal::zero(), |acc, item| acc + item.total())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    #[test]
    fn no_discount_leaves_price_unchanged() {
        let price = dec("12.30");
        assert_eq!(effective_price(&price, None).unwrap(), price);
    }

    #[test]
    fn zero_discount_equals_absent_discount() {
        let price = dec("99.99");
        assert_eq!(
            effective_price(&price, Some(&BigDecimal::zero())).unwrap(),
            effective_price(&price, None).unwrap(),
        );
    }

    #[test]
    fn quarter_discount_on_200() {
        assert_eq!(
            effective_price(&dec("200"), Some(&dec("25"))).unwrap(),
            dec("150.00")
        );
    }

    #[test]
    fn full_discount_yields_zero() {
        assert_eq!(
            effective_price(&dec("37.50"), Some(&dec("100"))).unwrap(),
            dec("0.00")
        );
    }

    #[test]
    fn fractional_discount_rounds_to_two_decimals() {
        // 9.99 * 12.5% = 1.24875 off -> 8.74125 -> 8.74
        assert_eq!(
            effective_price(&dec("9.99"), Some(&dec("12.5"))).unwrap(),
            dec("8.74")
        );
    }

    #[test]
    fn effective_price_stays_within_bounds() {
        let price = dec("149.90");
        for d in 0..=100 {
            let result = effective_price(&price, Some(&BigDecimal::from(d))).unwrap();
            assert!(result >= BigDecimal::zero(), "negative at discount {d}");
            assert!(result <= price, "above base price at discount {d}");
        }
    }

    #[test]
    fn discount_above_100_is_rejected() {
        let err = effective_price(&dec("10"), Some(&dec("150"))).unwrap_err();
        assert_eq!(err, DomainError::InvalidDiscount(dec("150")));
    }

    #[test]
    fn negative_discount_is_rejected() {
        let err = effective_price(&dec("10"), Some(&dec("-5"))).unwrap_err();
        assert_eq!(err, DomainError::InvalidDiscount(dec("-5")));
    }

    #[test]
    fn boundary_discounts_are_accepted() {
        assert!(effective_price(&dec("10"), Some(&dec("0"))).is_ok());
        assert!(effective_price(&dec("10"), Some(&dec("100"))).is_ok());
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = effective_price(&dec("-1"), None).unwrap_err();
        assert_eq!(err, DomainError::InvalidPrice(dec("-1")));
    }

    #[test]
    fn line_total_applies_discount_then_quantity() {
        // 200 - 25% = 150 per unit, times 3
        let item = LineItem::new(dec("200"), Some(dec("25")), 3).unwrap();
        assert_eq!(item.total(), dec("450"));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        assert_eq!(
            LineItem::new(dec("10"), None, 0).unwrap_err(),
            DomainError::InvalidQuantity(0)
        );
    }

    #[test]
    fn negative_quantity_is_rejected() {
        assert_eq!(
            LineItem::new(dec("10"), None, -2).unwrap_err(),
            DomainError::InvalidQuantity(-2)
        );
    }

    #[test]
    fn order_total_of_empty_list_is_zero() {
        let empty: Vec<LineItem> = Vec::new();
        assert_eq!(order_total(&empty), BigDecimal::zero());
    }

    #[test]
    fn order_total_sums_mixed_lines() {
        let lines = vec![
            LineItem::new(dec("100"), None, 2).unwrap(),
            LineItem::new(dec("50"), Some(dec("10")), 1).unwrap(),
        ];
        // 200 + 45
        assert_eq!(order_total(&lines), dec("245.00"));
    }

    #[test]
    fn order_total_is_invariant_under_reordering() {
        let a = LineItem::new(dec("19.90"), Some(dec("15")), 4).unwrap();
        let b = LineItem::new(dec("7.25"), None, 1).unwrap();
        let c = LineItem::new(dec("120"), Some(dec("50")), 2).unwrap();

        let forward = order_total([&a, &b, &c]);
        let reversed = order_total([&c, &a, &b]);
        assert_eq!(forward, reversed);
    }
}
