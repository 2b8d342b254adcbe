//! Every policy lives in one function.

use solid_core::Product;

use crate::{STANDARD_RATE, VIP_RATE};

/// Discount amount for `product`.
///
/// Adding a third customer tier means changing this signature and every
/// caller of it.
pub fn apply_discount(product: &Product, is_vip: bool) -> f64 {
    if is_vip {
        return product.price * VIP_RATE;
    }

    product.price * STANDARD_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vip_gets_twenty_percent() {
        let product = Product::new("Monitor", 250.0);
        assert_eq!(apply_discount(&product, true), 250.0 * 0.20);
    }

    #[test]
    fn everyone_else_gets_ten_percent() {
        let product = Product::new("Monitor", 250.0);
        assert_eq!(apply_discount(&product, false), 250.0 * 0.10);
    }
}
