use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::{OrderId, UserId};

/// A placed order.
///
/// `total_amount` is a plain float; nothing checks that it is non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub total_amount: f64,
}

impl Order {
    pub fn new(order_id: OrderId, user_id: UserId, total_amount: f64) -> Self {
        Self {
            order_id,
            user_id,
            total_amount,
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.order_id
    }
}
