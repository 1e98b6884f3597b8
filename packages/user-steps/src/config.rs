//! Configuration constants for the user-flow step layer
//!
//! Centralized values used when the context generates accounts for
//! created users. Currently these are compile-time constants; runtime
//! configuration has not been needed so far.

/// Prefix for generated account names.
///
/// Keeps test accounts recognizable in the CMS user table and avoids
/// collisions with seeded fixture users.
pub const GENERATED_NAME_PREFIX: &str = "bdd_user_";

/// Number of hex characters appended to the prefix of a generated name.
///
/// 8 hex characters (32 bits) are enough to keep generated names unique
/// within a test run without producing unwieldy account names.
pub const GENERATED_NAME_LEN: usize = 8;

/// Length of a generated password in hex characters.
///
/// 16 characters is comfortably above any CMS minimum-length policy.
pub const GENERATED_PASSWORD_LEN: usize = 16;

/// Mail domain for generated accounts.
///
/// Reserved domain per RFC 2606, so generated addresses can never reach
/// a real mailbox.
pub const GENERATED_MAIL_DOMAIN: &str = "example.com";
