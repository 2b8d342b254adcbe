use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::UserId;
use crate::value_object::ValueObject;

/// Identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Descriptive attributes of a user, keyed by `user_id`.
///
/// The reference to `User` is by id only and is never checked here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    pub full_name: String,
    pub picture_url: String,
    pub bio: String,
    pub contact_email: String,
}

impl ValueObject for Profile {}
