//! One narrow trait per client need.
//!
//! Components depend on the roles they use: a sign-up form takes a
//! [`UserRegistrar`] + [`UserAuthenticator`], an order history page takes a
//! [`UserOrderViewer`], and neither can reach account deletion.

use solid_core::{DomainResult, Order, Profile, User, UserId};

pub trait UserRegistrar {
    fn register(&mut self, username: &str, password: &str) -> DomainResult<()>;
}

pub trait UserAuthenticator {
    fn login(&self, username: &str, password: &str) -> DomainResult<User>;
}

pub trait UserProfileManager {
    fn update_profile(&mut self, user_id: UserId, profile: Profile) -> DomainResult<()>;
}

pub trait UserAccountManager {
    fn delete_account(&mut self, user_id: UserId) -> DomainResult<()>;
}

pub trait UserOrderViewer {
    fn get_user_orders(&self, user_id: UserId) -> DomainResult<Vec<Order>>;
}

/// Register a new account and sign straight in.
pub fn sign_up<S>(service: &mut S, username: &str, password: &str) -> DomainResult<User>
where
    S: UserRegistrar + UserAuthenticator + ?Sized,
{
    service.register(username, password)?;
    service.login(username, password)
}

/// Totals of a user's order history.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistory {
    pub user_id: UserId,
    pub orders: Vec<Order>,
    pub total_spent: f64,
}

pub fn order_history<V>(viewer: &V, user_id: UserId) -> DomainResult<OrderHistory>
where
    V: UserOrderViewer + ?Sized,
{
    let orders = viewer.get_user_orders(user_id)?;
    let total_spent = orders.iter().map(|o| o.total_amount).sum();
    Ok(OrderHistory {
        user_id,
        orders,
        total_spent,
    })
}
