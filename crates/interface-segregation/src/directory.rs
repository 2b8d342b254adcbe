//! In-memory user directory.

use std::collections::BTreeMap;

use solid_core::{DomainError, DomainResult, Order, Profile, User, UserId};
use tracing::{debug, info, warn};

use crate::after::{
    UserAccountManager, UserAuthenticator, UserOrderViewer, UserProfileManager, UserRegistrar,
};

/// Users, profiles and orders kept in process memory.
///
/// User ids are handed out sequentially starting at 1 and are never reused,
/// even after an account is deleted. `u64::MAX` itself is never assigned;
/// registration fails with `Conflict` once the sequence reaches it.
#[derive(Debug)]
pub struct InMemoryUserDirectory {
    users: BTreeMap<UserId, User>,
    profiles: BTreeMap<UserId, Profile>,
    orders: Vec<Order>,
    next_id: UserId,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            profiles: BTreeMap::new(),
            orders: Vec::new(),
            next_id: UserId::new(1),
        }
    }

    pub fn user(&self, user_id: UserId) -> Option<&User> {
        self.users.get(&user_id)
    }

    pub fn profile(&self, user_id: UserId) -> Option<&Profile> {
        self.profiles.get(&user_id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Attach an order to an existing user.
    pub fn record_order(&mut self, order: Order) -> DomainResult<()> {
        self.ensure_exists(order.user_id)?;
        debug!(order_id = %order.order_id, user_id = %order.user_id, "order recorded");
        self.orders.push(order);
        Ok(())
    }

    fn ensure_exists(&self, user_id: UserId) -> DomainResult<()> {
        if self.users.contains_key(&user_id) {
            Ok(())
        } else {
            Err(DomainError::not_found(format!("user {user_id}")))
        }
    }

    fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username == username)
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRegistrar for InMemoryUserDirectory {
    fn register(&mut self, username: &str, password: &str) -> DomainResult<()> {
        if username.trim().is_empty() {
            return Err(DomainError::validation("username must not be empty"));
        }
        if password.is_empty() {
            return Err(DomainError::validation("password must not be empty"));
        }
        if self.find_by_username(username).is_some() {
            return Err(DomainError::conflict(format!(
                "username {username:?} is already taken"
            )));
        }

        let id = self.next_id;
        let next = id
            .next()
            .ok_or_else(|| DomainError::conflict("user id space exhausted"))?;
        self.next_id = next;
        self.users.insert(id, User::new(id, username, password));
        info!(user_id = %id, username, "user registered");
        Ok(())
    }
}

impl UserAuthenticator for InMemoryUserDirectory {
    fn login(&self, username: &str, password: &str) -> DomainResult<User> {
        match self.find_by_username(username) {
            Some(user) if user.password == password => {
                debug!(user_id = %user.id, "login succeeded");
                Ok(user.clone())
            }
            _ => {
                warn!(username, "login rejected");
                Err(DomainError::Unauthorized)
            }
        }
    }
}

impl UserProfileManager for InMemoryUserDirectory {
    fn update_profile(&mut self, user_id: UserId, profile: Profile) -> DomainResult<()> {
        self.ensure_exists(user_id)?;
        let profile = Profile { user_id, ..profile };
        self.profiles.insert(user_id, profile);
        info!(user_id = %user_id, "profile updated");
        Ok(())
    }
}

impl UserAccountManager for InMemoryUserDirectory {
    fn delete_account(&mut self, user_id: UserId) -> DomainResult<()> {
        if self.users.remove(&user_id).is_none() {
            return Err(DomainError::not_found(format!("user {user_id}")));
        }
        self.profiles.remove(&user_id);
        let before = self.orders.len();
        self.orders.retain(|o| o.user_id != user_id);
        info!(
            user_id = %user_id,
            orders_removed = before - self.orders.len(),
            "account deleted"
        );
        Ok(())
    }
}

impl UserOrderViewer for InMemoryUserDirectory {
    fn get_user_orders(&self, user_id: UserId) -> DomainResult<Vec<Order>> {
        self.ensure_exists(user_id)?;
        Ok(self
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }
}
