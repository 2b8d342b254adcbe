//! One type, two reasons to change.

use solid_core::Order;
use tracing::info;

use crate::invoice::invoice_line;

/// Keeps the order book *and* renders invoices.
///
/// Any change to the invoice layout or destination forces a change here,
/// even though order bookkeeping is unaffected.
#[derive(Debug, Default, Clone)]
pub struct OrderService {
    pub orders: Vec<Order>,
}

impl OrderService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn generate_invoice(&self, order: &Order) -> String {
        let line = invoice_line(order);
        info!(order_id = %order.order_id, user_id = %order.user_id, "{line}");
        line
    }
}
