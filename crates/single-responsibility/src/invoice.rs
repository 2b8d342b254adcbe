use solid_core::Order;

/// Render the one-line invoice for `order`.
///
/// The amount is always printed with six decimals.
pub fn invoice_line(order: &Order) -> String {
    format!(
        "Generate Invoice For Order ID: {}, User ID: {} and Total Amount: {:.6}",
        order.order_id, order.user_id, order.total_amount
    )
}
