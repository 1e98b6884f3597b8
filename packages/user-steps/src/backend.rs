//! Collaborator seams for the user context
//!
//! The step layer never talks to a CMS directly. It delegates through two
//! traits: [`CmsBackend`] covers entity creation, authentication and user
//! lookup; [`RedirectContext`] covers page navigation. Wire real adapters
//! (HTTP API, web driver) behind these traits, or use the in-memory
//! [`MemoryCms`] and [`PageLog`] doubles that ship with the crate.
//!
//! # Example
//!
//! ```ignore
//! use cms_user_steps::{MemoryCms, PageLog, UserContext};
//!
//! let mut cms = MemoryCms::new();
//! cms.load_fixture("- name: jane\n  mail: jane@example.com\n  password: p4sswd\n")?;
//!
//! let mut context = UserContext::new(cms, PageLog::new());
//! context.visit_user("view", "name", "jane")?;
//! ```

use std::collections::HashMap;

use crate::error::{ContextError, Result};
use crate::types::{UserAccount, UserColumn};

/// CMS operations the user context delegates to.
///
/// Implementations raise the domain failures; the context never recovers
/// from or translates them.
pub trait CmsBackend {
    /// Persist a new user account and return its assigned uid.
    ///
    /// Fails with [`ContextError::EntitySave`] when the entity layer refuses
    /// the account, or [`ContextError::MissingRequiredField`] when a required
    /// field is not filled.
    fn create_user(&mut self, account: &UserAccount) -> Result<u64>;

    /// Submit the login form with the given credentials.
    ///
    /// Fails with [`ContextError::Authorization`] when the CMS rejects them.
    fn login(&mut self, username: &str, password: &str) -> Result<()>;

    /// End the current session. Must be safe to call with no session open.
    fn logout(&mut self);

    /// Look up a user id by column value.
    fn find_user(&self, column: UserColumn, value: &str) -> Option<u64>;
}

/// Page navigation seam (the "redirect context").
pub trait RedirectContext {
    /// Open the page at the given CMS-internal path.
    fn visit_page(&mut self, path: &str);
}

/// In-memory CMS double.
///
/// Holds user accounts keyed by uid, a single login session, and an optional
/// list of required entity fields. Seed it from YAML fixtures with
/// [`MemoryCms::load_fixture`].
#[derive(Debug, Default)]
pub struct MemoryCms {
    users: HashMap<u64, UserAccount>,
    required_fields: Vec<String>,
    session: Option<u64>,
    next_uid: u64,
}

impl MemoryCms {
    /// Create an empty CMS with no users and no required fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an entity field that must be filled on every created user.
    pub fn require_field(&mut self, name: impl Into<String>) {
        self.required_fields.push(name.into());
    }

    /// Load seed accounts from a YAML document (a list of accounts).
    ///
    /// Uids are assigned in list order, continuing from the highest uid
    /// already stored. Returns the number of accounts loaded.
    pub fn load_fixture(&mut self, yaml: &str) -> Result<usize> {
        let accounts: Vec<UserAccount> = serde_yaml::from_str(yaml)?;
        let count = accounts.len();
        for account in accounts {
            let uid = self.insert(account)?;
            tracing::debug!(uid, "Seeded fixture user");
        }
        Ok(count)
    }

    /// Get a stored account by uid.
    pub fn user(&self, uid: u64) -> Option<&UserAccount> {
        self.users.get(&uid)
    }

    /// Number of stored accounts.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Uid of the currently logged-in user, if any.
    pub fn session(&self) -> Option<u64> {
        self.session
    }

    fn insert(&mut self, mut account: UserAccount) -> Result<u64> {
        if account.name.is_empty() {
            return Err(ContextError::EntitySave(
                "account name must not be empty".to_string(),
            ));
        }
        if self.find_user(UserColumn::Name, &account.name).is_some() {
            return Err(ContextError::EntitySave(format!(
                "account name \"{}\" is already taken",
                account.name
            )));
        }

        self.next_uid += 1;
        account.uid = self.next_uid;
        self.users.insert(account.uid, account);
        Ok(self.next_uid)
    }
}

impl CmsBackend for MemoryCms {
    fn create_user(&mut self, account: &UserAccount) -> Result<u64> {
        for field in &self.required_fields {
            if !account.fields.contains_key(field) {
                return Err(ContextError::MissingRequiredField(field.clone()));
            }
        }
        self.insert(account.clone())
    }

    fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let uid = self
            .find_user(UserColumn::Name, username)
            .filter(|uid| {
                self.users
                    .get(uid)
                    .is_some_and(|u| u.password == password)
            })
            .ok_or_else(|| ContextError::Authorization(username.to_string()))?;

        self.session = Some(uid);
        Ok(())
    }

    fn logout(&mut self) {
        self.session = None;
    }

    fn find_user(&self, column: UserColumn, value: &str) -> Option<u64> {
        // Lowest uid wins when mail addresses are shared between accounts
        self.users
            .values()
            .filter(|u| match column {
                UserColumn::Name => u.name == value,
                UserColumn::Mail => u.mail == value,
            })
            .map(|u| u.uid)
            .min()
    }
}

/// Navigation double that records visited paths in order.
#[derive(Debug, Default)]
pub struct PageLog {
    visited: Vec<String>,
}

impl PageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All paths visited so far, oldest first.
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    /// The most recently visited path.
    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl RedirectContext for PageLog {
    fn visit_page(&mut self, path: &str) {
        tracing::debug!(path, "Visiting page");
        self.visited.push(path.to_string());
    }
}
