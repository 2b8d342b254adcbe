//! One trait for everything a user can do.

use solid_core::{DomainResult, Order, Profile, User, UserId};

use crate::InMemoryUserDirectory;
use crate::after::{
    UserAccountManager, UserAuthenticator, UserOrderViewer, UserProfileManager, UserRegistrar,
};

/// Every implementor must provide all five operations, and every client sees
/// all five, whether it needs them or not.
pub trait UserManager {
    fn register(&mut self, username: &str, password: &str) -> DomainResult<()>;
    fn login(&self, username: &str, password: &str) -> DomainResult<User>;
    fn update_profile(&mut self, user_id: UserId, profile: Profile) -> DomainResult<()>;
    fn delete_account(&mut self, user_id: UserId) -> DomainResult<()>;
    fn get_user_orders(&self, user_id: UserId) -> DomainResult<Vec<Order>>;
}

impl UserManager for InMemoryUserDirectory {
    fn register(&mut self, username: &str, password: &str) -> DomainResult<()> {
        UserRegistrar::register(self, username, password)
    }

    fn login(&self, username: &str, password: &str) -> DomainResult<User> {
        UserAuthenticator::login(self, username, password)
    }

    fn update_profile(&mut self, user_id: UserId, profile: Profile) -> DomainResult<()> {
        UserProfileManager::update_profile(self, user_id, profile)
    }

    fn delete_account(&mut self, user_id: UserId) -> DomainResult<()> {
        UserAccountManager::delete_account(self, user_id)
    }

    fn get_user_orders(&self, user_id: UserId) -> DomainResult<Vec<Order>> {
        UserOrderViewer::get_user_orders(self, user_id)
    }
}

/// A registration form only needs `register`, but has to take the whole
/// manager.
pub fn register_from_form(
    manager: &mut dyn UserManager,
    username: &str,
    password: &str,
) -> DomainResult<()> {
    manager.register(username, password)
}
