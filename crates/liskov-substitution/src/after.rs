//! Discount eligibility expressed in the type system.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::DISCOUNT_FACTOR;

/// Something whose price can be reduced.
///
/// Implementors must actually reduce the price; a type that never gets a
/// discount does not implement this trait at all.
pub trait Discountable {
    fn apply_discount(&mut self);
}

impl<D: Discountable + ?Sized> Discountable for Box<D> {
    fn apply_discount(&mut self) {
        (**self).apply_discount();
    }
}

/// A plain catalog entry. Not [`Discountable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub name: String,
    pub price: f64,
}

impl CatalogProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A catalog entry that takes part in promotions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountedProduct {
    product: CatalogProduct,
}

impl DiscountedProduct {
    pub fn new(product: CatalogProduct) -> Self {
        Self { product }
    }

    pub fn product(&self) -> &CatalogProduct {
        &self.product
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn price(&self) -> f64 {
        self.product.price
    }

    pub fn into_inner(self) -> CatalogProduct {
        self.product
    }
}

impl From<CatalogProduct> for DiscountedProduct {
    fn from(product: CatalogProduct) -> Self {
        Self::new(product)
    }
}

impl Discountable for DiscountedProduct {
    fn apply_discount(&mut self) {
        self.product.price *= DISCOUNT_FACTOR;
        trace!(product = %self.product.name, price = self.product.price, "discount applied");
    }
}

/// Apply one discount to every item, in order.
pub fn apply_discounts(products: &mut [Box<dyn Discountable>]) {
    apply_discounts_to(products.iter_mut());
}

/// Same as [`apply_discounts`], for borrowed items of any `Discountable` type.
pub fn apply_discounts_to<'a, I, D>(items: I)
where
    I: IntoIterator<Item = &'a mut D>,
    D: Discountable + ?Sized + 'a,
{
    for item in items {
        item.apply_discount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts calls instead of changing a price.
    #[derive(Default)]
    struct CallCounter {
        calls: usize,
    }

    impl Discountable for CallCounter {
        fn apply_discount(&mut self) {
            self.calls += 1;
        }
    }

    #[test]
    fn discounted_product_wraps_a_catalog_product() {
        let mut lamp = DiscountedProduct::from(CatalogProduct::new("Lamp", 40.0));
        lamp.apply_discount();

        assert_eq!(lamp.name(), "Lamp");
        assert_eq!(lamp.price(), 40.0 * 0.90);
        assert_eq!(lamp.product().price, lamp.price());
    }

    /// Reports calls through a shared cell so boxed copies stay observable.
    struct SharedCounter(Rc<Cell<usize>>);

    impl Discountable for SharedCounter {
        fn apply_discount(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn boxed_list_is_visited_once_per_call() {
        let calls = Rc::new(Cell::new(0));
        let mut products: Vec<Box<dyn Discountable>> = vec![
            Box::new(DiscountedProduct::new(CatalogProduct::new("Lamp", 40.0))),
            Box::new(SharedCounter(Rc::clone(&calls))),
            Box::new(SharedCounter(Rc::clone(&calls))),
        ];

        apply_discounts(&mut products);
        assert_eq!(calls.get(), 2);

        apply_discounts(&mut products);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn borrowed_items_see_each_call() {
        let mut lamp = DiscountedProduct::new(CatalogProduct::new("Lamp", 100.0));
        let mut counter = CallCounter::default();

        apply_discounts_to([
            &mut lamp as &mut dyn Discountable,
            &mut counter as &mut dyn Discountable,
        ]);

        assert_eq!(lamp.price(), 90.0);
        assert_eq!(counter.calls, 1);
    }

    #[test]
    fn empty_input_is_fine() {
        let mut products: Vec<Box<dyn Discountable>> = Vec::new();
        apply_discounts(&mut products);
        assert!(products.is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: one call per element, never more, never fewer.
            #[test]
            fn one_call_per_element(len in 0usize..64) {
                let mut counters: Vec<CallCounter> =
                    (0..len).map(|_| CallCounter::default()).collect();

                apply_discounts_to(counters.iter_mut());

                prop_assert!(counters.iter().all(|c| c.calls == 1));
            }

            /// Property: a discounted price is 90% of the original.
            #[test]
            fn ninety_percent(price in 0.0f64..1.0e9) {
                let mut product = DiscountedProduct::new(CatalogProduct::new("x", price));
                product.apply_discount();
                prop_assert_eq!(product.price(), price * 0.90);
            }
        }
    }
}
