use std::path::PathBuf;

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when an address does not contain exactly one `@`
    #[error("malformed email address: {0}")]
    MalformedEmail(String),
    /// Error when a username is missing from the authors file
    #[error("no such username: {0}")]
    UnknownUsername(String),
    /// Error when a username cannot be joined into a pair email
    #[error("invalid username: '{0}' (usernames must be non-empty and must not contain '+')")]
    InvalidUsername(String),
    /// Error when a lone username would produce the template address itself
    #[error("username '{0}' is the same as the email template prefix")]
    UsernameMatchesTemplate(String),
    /// Error when the authors file cannot be read or parsed
    #[error("unable to read authors from file ({}): {reason}", path.display())]
    AuthorsFileUnreadable { path: PathBuf, reason: String },
    /// Error when a git config property cannot be read
    #[error("unable to get {key} from {}: {reason}", path.display())]
    ConfigReadFailed {
        path: PathBuf,
        key: String,
        reason: String,
    },
    /// Error when a git config property cannot be written
    #[error("unable to set {key} in {}: {reason}", path.display())]
    ConfigWriteFailed {
        path: PathBuf,
        key: String,
        reason: String,
    },
    /// Error when switching branches before any pair was set
    #[error("no pair configured in {}: run `pair USER1 [USER2 ...]` first", .0.display())]
    PairNotConfigured(PathBuf),
    /// Error when git fails to create or check out a branch
    #[error("unable to check out git branch: {0}")]
    BranchOperationFailed(String),
    /// Error when no template is configured and none can be derived
    #[error("please set $PAIR_EMAIL to configure the pair email template ({0})")]
    TemplateUnavailable(String),
    /// Error when a default path needs a home directory that cannot be found
    #[error("failed to find the home directory, set ${0}")]
    HomeDirUnavailable(String),
    /// Error when spawning git fails
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
