//! User domain entity and gym roles.
//!
//! The known roles are explicit variants. Any other stored role name is
//! kept as `Other` so the user still loads and simply is not a trainer.

use crate::config::{ROLE_ADMIN, ROLE_MEMBER, ROLE_TRAINER};

/// User roles enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Trainer,
    Member,
    /// Role name outside the known set, as stored
    Other(String),
}

impl UserRole {
    /// Canonical storage name of the role
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Trainer => ROLE_TRAINER,
            UserRole::Member => ROLE_MEMBER,
            UserRole::Other(name) => name,
        }
    }

    /// Check if this role may be assigned to course schedules
    pub fn is_trainer(&self) -> bool {
        matches!(self, UserRole::Trainer)
    }
}

/// Case-insensitive parse of a stored role name.
impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        [UserRole::Admin, UserRole::Trainer, UserRole::Member]
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| UserRole::Other(trimmed.to_string()))
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    /// Check if user can be scheduled as a course trainer
    pub fn is_trainer(&self) -> bool {
        self.role.is_trainer()
    }
}
