//! CMS user-flow step bindings
//!
//! Glue between Gherkin step patterns and a content-management system under
//! test. The library supplies:
//! - [`UserContext`]: the five user-flow operations (create, create+login,
//!   credential login, logout, user-page navigation)
//! - [`CmsBackend`] / [`RedirectContext`]: the collaborator seams a real CMS
//!   adapter implements
//! - [`MemoryCms`] / [`PageLog`]: in-memory doubles, YAML-seedable, used by
//!   the bundled Cucumber harness
//!
//! # Example
//!
//! ```ignore
//! use cms_user_steps::{MemoryCms, PageLog, UserContext};
//! use std::collections::HashMap;
//!
//! let mut context = UserContext::new(MemoryCms::new(), PageLog::new());
//! context.login_created_user("editor, reviewer", HashMap::new())?;
//! ```

pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use backend::{CmsBackend, MemoryCms, PageLog, RedirectContext};
pub use context::UserContext;
pub use error::{ContextError, Result};
pub use types::{parse_roles, user_path, Credentials, UserAccount, UserColumn, UserOperation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
