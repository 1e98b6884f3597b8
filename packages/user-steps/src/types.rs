//! Core types for the user-flow step layer

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ContextError, Result};

/// Column in the CMS user table that a lookup may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserColumn {
    /// Account name column
    Name,
    /// Mail address column
    Mail,
}

impl FromStr for UserColumn {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "name" => Ok(UserColumn::Name),
            "mail" => Ok(UserColumn::Mail),
            other => Err(ContextError::InvalidColumn(other.to_string())),
        }
    }
}

impl fmt::Display for UserColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserColumn::Name => write!(f, "name"),
            UserColumn::Mail => write!(f, "mail"),
        }
    }
}

/// Operation applied on a user page.
///
/// `visit` is accepted as input but always normalizes to [`UserOperation::View`];
/// the CMS routes only `view` and `edit` pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserOperation {
    /// View the user page (`visit` aliases here)
    View,
    /// Edit the user page
    Edit,
}

impl FromStr for UserOperation {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "visit" | "view" => Ok(UserOperation::View),
            "edit" => Ok(UserOperation::Edit),
            other => Err(ContextError::InvalidOperation(other.to_string())),
        }
    }
}

impl fmt::Display for UserOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserOperation::View => write!(f, "view"),
            UserOperation::Edit => write!(f, "edit"),
        }
    }
}

/// Login credentials pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Build credentials from a field map.
    ///
    /// The map must contain exactly the keys `username` and `password`;
    /// anything missing or extra is rejected.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self> {
        let username = map
            .get("username")
            .ok_or_else(|| ContextError::InvalidCredentials("missing username".to_string()))?;
        let password = map
            .get("password")
            .ok_or_else(|| ContextError::InvalidCredentials("missing password".to_string()))?;

        if map.len() != 2 {
            let extra: Vec<&str> = map
                .keys()
                .filter(|k| *k != "username" && *k != "password")
                .map(String::as_str)
                .collect();
            return Err(ContextError::InvalidCredentials(format!(
                "unexpected keys {:?}",
                extra
            )));
        }

        Ok(Credentials {
            username: username.clone(),
            password: password.clone(),
        })
    }
}

/// A user account as the context knows it.
///
/// `uid` is assigned by the CMS backend on creation; fixture files may
/// leave it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// CMS user id, 0 until the backend assigns one
    #[serde(default)]
    pub uid: u64,
    /// Account name (login name)
    pub name: String,
    /// Mail address
    pub mail: String,
    /// Plain-text password, known only to the test session
    #[serde(default)]
    pub password: String,
    /// Role names attached to the account
    #[serde(default)]
    pub roles: Vec<String>,
    /// Additional entity fields (machine name or label -> value)
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

/// Split a comma-separated role string into role names.
///
/// Segments are trimmed; empty segments are dropped, so `""` yields no roles.
pub fn parse_roles(roles: &str) -> Vec<String> {
    roles
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Build the navigation path for a user page: `user/{uid}/{operation}`.
pub fn user_path(uid: u64, operation: UserOperation) -> String {
    format!("user/{}/{}", uid, operation)
}
