use std::fmt;

use tracing::warn;
use validator::ValidateEmail;

use crate::error::AppError;

/// Splits an email address into its local part and host
///
/// Fails unless `email` contains exactly one `@`. Empty parts are returned as-is.
///
/// # Arguments
/// * `email` - Address to split
pub fn split_email(email: &str) -> Result<(&str, &str), AppError> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(host), None) => Ok((local, host)),
        _ => Err(AppError::MalformedEmail(email.to_string())),
    }
}

/// Address that pair emails are derived from, e.g. `git@example.com`
///
/// The local part marks composed pair addresses and the host is shared by
/// every derived address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTemplate {
    pub local: String,
    pub host: String,
}

impl EmailTemplate {
    /// Parses a template address
    ///
    /// Addresses that split cleanly but would not pass a stricter email check
    /// are accepted with a warning.
    pub fn parse(template: &str) -> Result<Self, AppError> {
        let (local, host) = split_email(template)?;
        if !template.validate_email() {
            warn!(template, "email template does not look like a valid address");
        }

        Ok(Self {
            local: local.to_string(),
            host: host.to_string(),
        })
    }

    /// Prefix that starts the local part of every composed pair address
    pub fn pair_prefix(&self) -> String {
        format!("{}+", self.local)
    }
}

impl fmt::Display for EmailTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.host)
    }
}
