//! Records that are tracked by identity.

/// A record whose identity survives changes to its attributes.
///
/// A `User` who renames themselves is still the same user, and an `Order` is
/// looked up by its id no matter what its total is, so both are entities.
/// `Profile` and `Product` are compared field by field instead and implement
/// [`ValueObject`](crate::ValueObject).
pub trait Entity {
    /// Identifier type; must be usable as a map key.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Display;

    fn id(&self) -> &Self::Id;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Order, OrderId, User, UserId};
    use std::collections::HashSet;

    #[test]
    fn renamed_user_keeps_its_identity() {
        let before = User::new(UserId::new(3), "alice", "pw");
        let after = User {
            username: "alice.doe".into(),
            ..before.clone()
        };
        assert_ne!(before, after);
        assert_eq!(before.id(), after.id());
    }

    #[test]
    fn orders_are_keyed_by_id() {
        let id = OrderId::new();
        let first = Order::new(id, UserId::new(1), 10.0);
        let repriced = Order::new(id, UserId::new(1), 12.0);

        let keys: HashSet<OrderId> = [&first, &repriced].iter().map(|o| *o.id()).collect();
        assert_eq!(keys.len(), 1);
    }
}
