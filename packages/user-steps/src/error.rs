//! Error types for the user-flow step layer

use thiserror::Error;

/// Main error type for user context operations.
///
/// Every variant corresponds to a failure raised by a collaborator (the CMS
/// backend or fixture loading). The step layer performs no recovery: a failed
/// operation aborts the current scenario.
#[derive(Error, Debug)]
pub enum ContextError {
    /// The CMS entity layer refused to save the user
    #[error("Failed to save user entity: {0}")]
    EntitySave(String),

    /// A field declared as required was not filled
    #[error("Required field is not filled: {0}")]
    MissingRequiredField(String),

    /// The login form was submitted but the CMS rejected the credentials
    #[error("Authorization failed for user: {0}")]
    Authorization(String),

    /// User lookup by column produced no match
    #[error("User not found by {column} \"{value}\"")]
    UserNotFound { column: String, value: String },

    /// A login was requested before any user had been created
    #[error("No user has been created in this scenario")]
    NoUserCreated,

    /// Lookup column outside the supported set (name, mail)
    #[error("Invalid lookup column: {0}")]
    InvalidColumn(String),

    /// User page operation outside the supported set (visit, view, edit)
    #[error("Invalid user operation: {0}")]
    InvalidOperation(String),

    /// Credentials table did not contain exactly username and password
    #[error("Credentials must contain exactly \"username\" and \"password\": {0}")]
    InvalidCredentials(String),

    /// YAML parsing error (fixture loading)
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// IO error (fixture file operations)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for user context operations
pub type Result<T> = std::result::Result<T, ContextError>;
