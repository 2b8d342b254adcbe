//! A shared trait with an implementation that quietly does nothing.

use serde::{Deserialize, Serialize};

use crate::DISCOUNT_FACTOR;

pub trait Product {
    fn apply_discount(&mut self);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountedProduct {
    pub name: String,
    pub price: f64,
}

impl Product for DiscountedProduct {
    fn apply_discount(&mut self) {
        self.price *= DISCOUNT_FACTOR;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularProduct {
    pub name: String,
    pub price: f64,
}

impl Product for RegularProduct {
    // Regular products are never discounted, yet they still have to answer
    // the call. Nothing in the type tells the caller that.
    fn apply_discount(&mut self) {}
}

pub fn apply_discounts(products: &mut [&mut dyn Product]) {
    for product in products.iter_mut() {
        product.apply_discount();
    }
}
