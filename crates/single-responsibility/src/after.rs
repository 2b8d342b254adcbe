//! Order bookkeeping and invoice rendering as separate types.

use solid_core::Order;
use tracing::{debug, info};

use crate::invoice::invoice_line;

/// Responsible only for keeping the order book.
#[derive(Debug, Default, Clone)]
pub struct OrderService {
    orders: Vec<Order>,
}

impl OrderService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `order` to the book. Orders are kept in placement order.
    pub fn place_order(&mut self, order: Order) {
        debug!(order_id = %order.order_id, "order placed");
        self.orders.push(order);
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

/// Responsible only for turning an order into an invoice.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvoiceGenerator;

impl InvoiceGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_invoice(&self, order: &Order) -> String {
        let line = invoice_line(order);
        info!(
            order_id = %order.order_id,
            user_id = %order.user_id,
            total_amount = order.total_amount,
            "invoice generated"
        );
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_core::{OrderId, UserId};
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn order(user: u64, total: f64) -> Order {
        Order::new(OrderId::new(), UserId::new(user), total)
    }

    #[test]
    fn service_keeps_orders_in_placement_order() {
        let mut service = OrderService::new();
        let first = order(1, 10.0);
        let second = order(2, 20.0);

        service.place_order(first.clone());
        service.place_order(second.clone());

        assert_eq!(service.orders(), &[first, second]);
    }

    #[test]
    fn generator_does_not_need_the_service() {
        let order = order(5, 42.25);
        let invoice = InvoiceGenerator::new().generate_invoice(&order);

        assert_eq!(
            invoice,
            format!(
                "Generate Invoice For Order ID: {}, User ID: 5 and Total Amount: 42.250000",
                order.order_id
            )
        );
    }

    /// Collects `name=value` pairs of every event it sees.
    #[derive(Clone, Default)]
    struct FieldRecorder(Arc<Mutex<Vec<Vec<(String, String)>>>>);

    struct FieldVisitor(Vec<(String, String)>);

    impl Visit for FieldVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{value:?}")));
        }
    }

    impl<S: Subscriber> Layer<S> for FieldRecorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor(Vec::new());
            event.record(&mut visitor);
            self.0.lock().unwrap().push(visitor.0);
        }
    }

    #[test]
    fn invoice_event_carries_order_fields() {
        let recorder = FieldRecorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        let order = order(4, 12.5);

        tracing::subscriber::with_default(subscriber, || {
            InvoiceGenerator::new().generate_invoice(&order);
        });

        let events = recorder.0.lock().unwrap();
        assert_eq!(events.len(), 1);
        let fields = &events[0];
        let field = |name: &str| {
            fields
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone())
        };
        assert_eq!(field("message").as_deref(), Some("invoice generated"));
        assert_eq!(field("order_id"), Some(order.order_id.to_string()));
        assert_eq!(field("user_id").as_deref(), Some("4"));
        assert_eq!(field("total_amount").as_deref(), Some("12.5"));
    }

    #[test]
    fn both_variants_render_identical_invoices() {
        let order = order(8, 7.5);
        let before = crate::before::OrderService::new().generate_invoice(&order);
        let after = InvoiceGenerator::new().generate_invoice(&order);
        assert_eq!(before, after);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every placed order is kept, in call order.
            #[test]
            fn place_order_appends(totals in prop::collection::vec(0.0f64..10_000.0, 0..32)) {
                let mut service = OrderService::new();
                let placed: Vec<Order> = totals
                    .iter()
                    .enumerate()
                    .map(|(i, total)| order(i as u64, *total))
                    .collect();

                for o in &placed {
                    service.place_order(o.clone());
                }

                prop_assert_eq!(service.orders(), placed.as_slice());
            }
        }
    }
}
