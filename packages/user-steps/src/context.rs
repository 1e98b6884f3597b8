//! User context: the operations behind the user-flow step bindings
//!
//! [`UserContext`] owns the two collaborator seams and the account created
//! most recently in the scenario. Each public method maps one-to-one onto a
//! step pattern; failures from the collaborators propagate unchanged.

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::backend::{CmsBackend, RedirectContext};
use crate::config;
use crate::error::{ContextError, Result};
use crate::types::{parse_roles, user_path, Credentials, UserAccount};

/// Drives user authentication and user-record actions against the CMS
/// under test.
pub struct UserContext<B, R> {
    backend: B,
    redirect: R,
    current_user: Option<UserAccount>,
    seed: u64,
    sequence: u64,
}

impl<B: CmsBackend, R: RedirectContext> UserContext<B, R> {
    /// Create a context over the given backend and redirect collaborators.
    pub fn new(backend: B, redirect: R) -> Self {
        Self {
            backend,
            redirect,
            current_user: None,
            seed: u64::from(std::process::id()),
            sequence: 0,
        }
    }

    /// The CMS backend collaborator.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the CMS backend collaborator.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The redirect collaborator.
    pub fn redirect(&self) -> &R {
        &self.redirect
    }

    /// The account created most recently in this scenario, if any.
    pub fn current_user(&self) -> Option<&UserAccount> {
        self.current_user.as_ref()
    }

    /// Create a user with the given roles and fields, then log in as
    /// that user.
    pub fn login_created_user(
        &mut self,
        roles: &str,
        fields: HashMap<String, String>,
    ) -> Result<()> {
        self.create_user(roles, fields)?;
        self.login_user()
    }

    /// Create a user with the given roles and fields.
    ///
    /// `roles` is a comma-separated role string; an empty string attaches no
    /// roles. The `name`, `mail` and `pass` entries of `fields` override the
    /// generated account values; everything else lands on the entity as-is.
    /// An empty field map is valid and creates a fully generated account.
    ///
    /// The created account becomes the context's current user. Returns the
    /// uid assigned by the backend.
    pub fn create_user(&mut self, roles: &str, mut fields: HashMap<String, String>) -> Result<u64> {
        let name = match fields.remove("name") {
            Some(name) => name,
            None => format!(
                "{}{}",
                config::GENERATED_NAME_PREFIX,
                self.token(config::GENERATED_NAME_LEN, "name")
            ),
        };
        let mail = fields
            .remove("mail")
            .unwrap_or_else(|| format!("{}@{}", name, config::GENERATED_MAIL_DOMAIN));
        let password = match fields.remove("pass") {
            Some(password) => password,
            None => self.token(config::GENERATED_PASSWORD_LEN, "pass"),
        };

        let account = UserAccount {
            uid: 0,
            name,
            mail,
            password,
            roles: parse_roles(roles),
            fields,
        };

        let uid = self.backend.create_user(&account)?;
        tracing::info!(uid, name = %account.name, roles = ?account.roles, "Created user");

        self.current_user = Some(UserAccount { uid, ..account });
        Ok(uid)
    }

    /// Log in as the account created most recently in this scenario.
    pub fn login_user(&mut self) -> Result<()> {
        let credentials = match &self.current_user {
            Some(account) => Credentials {
                username: account.name.clone(),
                password: account.password.clone(),
            },
            None => return Err(ContextError::NoUserCreated),
        };
        self.fill_login_form(&credentials)
    }

    /// Log in with explicit credentials.
    pub fn login_with_credentials(&mut self, credentials: &Credentials) -> Result<()> {
        self.fill_login_form(credentials)
    }

    fn fill_login_form(&mut self, credentials: &Credentials) -> Result<()> {
        self.backend.login(&credentials.username, &credentials.password)?;
        tracing::debug!(username = %credentials.username, "Logged in");
        Ok(())
    }

    /// End the current session. Safe to call when nobody is logged in;
    /// scenario teardown calls this unconditionally.
    pub fn logout(&mut self) {
        self.backend.logout();
        tracing::debug!("Logged out");
    }

    /// Open a user page resolved by column lookup.
    ///
    /// `operation` is one of `visit`, `view` or `edit` (`visit` normalizes
    /// to `view`); `column` is `name` or `mail`. Fails with
    /// [`ContextError::UserNotFound`] when the lookup produces no match.
    pub fn visit_user(&mut self, operation: &str, column: &str, value: &str) -> Result<()> {
        let operation = operation.parse()?;
        let column = column.parse()?;

        let uid = self
            .backend
            .find_user(column, value)
            .ok_or_else(|| ContextError::UserNotFound {
                column: column.to_string(),
                value: value.to_string(),
            })?;

        let path = user_path(uid, operation);
        tracing::debug!(%path, "Resolved user page");
        self.redirect.visit_page(&path);
        Ok(())
    }

    /// Deterministic-per-process hex token for generated account values.
    fn token(&mut self, len: usize, tag: &str) -> String {
        self.sequence += 1;

        let mut hasher = Sha256::new();
        hasher.update(self.seed.to_le_bytes());
        hasher.update(self.sequence.to_le_bytes());
        hasher.update(tag.as_bytes());

        let mut digest = hex::encode(hasher.finalize());
        digest.truncate(len);
        digest
    }
}
