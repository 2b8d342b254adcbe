//! Policies as strategy objects.

use solid_core::{DomainError, DomainResult, Product};
use tracing::debug;

use crate::{STANDARD_RATE, VIP_RATE};

/// A pricing adjustment policy.
///
/// Returns the discount *amount* for `product`, not the discounted price.
pub trait DiscountRule {
    fn apply_discount(&self, product: &Product) -> f64;
}

impl<R: DiscountRule + ?Sized> DiscountRule for &R {
    fn apply_discount(&self, product: &Product) -> f64 {
        (**self).apply_discount(product)
    }
}

impl<R: DiscountRule + ?Sized> DiscountRule for Box<R> {
    fn apply_discount(&self, product: &Product) -> f64 {
        (**self).apply_discount(product)
    }
}

/// 10% off.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StandardDiscount;

impl DiscountRule for StandardDiscount {
    fn apply_discount(&self, product: &Product) -> f64 {
        product.price * STANDARD_RATE
    }
}

/// 20% off.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct VipDiscount;

impl DiscountRule for VipDiscount {
    fn apply_discount(&self, product: &Product) -> f64 {
        product.price * VIP_RATE
    }
}

/// A rate chosen at runtime (e.g. a seasonal promotion).
///
/// Added without touching [`calculate_price`] or the other rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageDiscount {
    rate: f64,
}

impl PercentageDiscount {
    /// `rate` is a fraction in `[0, 1]`.
    pub fn new(rate: f64) -> DomainResult<Self> {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(DomainError::validation(format!(
                "discount rate must be within [0, 1], got {rate}"
            )));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl DiscountRule for PercentageDiscount {
    fn apply_discount(&self, product: &Product) -> f64 {
        product.price * self.rate
    }
}

/// Final price of `product` after `rule`.
pub fn calculate_price(product: &Product, rule: &dyn DiscountRule) -> f64 {
    let discount = rule.apply_discount(product);
    debug!(product = %product.name, price = product.price, discount, "discount applied");
    product.price - discount
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64) -> Product {
        Product::new("Desk", price)
    }

    #[test]
    fn standard_and_vip_amounts() {
        let desk = product(300.0);
        assert_eq!(StandardDiscount.apply_discount(&desk), 300.0 * 0.10);
        assert_eq!(VipDiscount.apply_discount(&desk), 300.0 * 0.20);
    }

    #[test]
    fn calculate_price_subtracts_the_discount() {
        let desk = product(100.0);
        assert_eq!(calculate_price(&desk, &StandardDiscount), 100.0 - 100.0 * 0.10);
        assert_eq!(calculate_price(&desk, &VipDiscount), 100.0 - 100.0 * 0.20);
    }

    #[test]
    fn new_rules_plug_in_without_changes() {
        let rules: Vec<Box<dyn DiscountRule>> = vec![
            Box::new(StandardDiscount),
            Box::new(VipDiscount),
            Box::new(PercentageDiscount::new(0.5).unwrap()),
        ];
        let desk = product(80.0);

        let prices: Vec<f64> = rules.iter().map(|r| calculate_price(&desk, r)).collect();

        assert_eq!(prices, vec![80.0 - 8.0, 80.0 - 16.0, 40.0]);
    }

    #[test]
    fn percentage_rejects_out_of_range_rates() {
        for rate in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(PercentageDiscount::new(rate), Err(DomainError::Validation(_))),
                "rate {rate} should be rejected"
            );
        }
        assert_eq!(PercentageDiscount::new(1.0).unwrap().rate(), 1.0);
        assert_eq!(PercentageDiscount::new(0.0).unwrap().rate(), 0.0);
    }

    #[test]
    fn matches_the_flag_based_version() {
        let desk = product(59.99);
        assert_eq!(
            VipDiscount.apply_discount(&desk),
            crate::before::apply_discount(&desk, true)
        );
        assert_eq!(
            StandardDiscount.apply_discount(&desk),
            crate::before::apply_discount(&desk, false)
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: VIP discount is exactly 20% of the price.
            #[test]
            fn vip_is_twenty_percent(price in -1.0e9f64..1.0e9) {
                prop_assert_eq!(VipDiscount.apply_discount(&product(price)), price * 0.20);
            }

            /// Property: standard discount is exactly 10% of the price.
            #[test]
            fn standard_is_ten_percent(price in -1.0e9f64..1.0e9) {
                prop_assert_eq!(StandardDiscount.apply_discount(&product(price)), price * 0.10);
            }

            /// Property: price - discount, for any valid rate.
            #[test]
            fn percentage_price_identity(price in 0.0f64..1.0e6, rate in 0.0f64..=1.0) {
                let rule = PercentageDiscount::new(rate).unwrap();
                let p = product(price);
                prop_assert_eq!(calculate_price(&p, &rule), price - price * rate);
            }
        }
    }
}
