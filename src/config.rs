use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{discovery::default_email_template, email::EmailTemplate, error::AppError};

/// Git config file that author info is read from and written to
pub const CONFIG_FILE_VAR: &str = "PAIR_GIT_CONFIG";
/// YAML file mapping usernames to full names
pub const AUTHORS_FILE_VAR: &str = "PAIR_FILE";
/// Email address pair emails are derived from
pub const EMAIL_TEMPLATE_VAR: &str = "PAIR_EMAIL";
/// Branch new pair branches are created from
pub const BASE_BRANCH_VAR: &str = "PAIR_BASE_BRANCH";
/// Network interface used to derive a default email template
pub const INTERFACE_VAR: &str = "PAIR_INTERFACE";

/// Git config file in the user's home directory
const DEFAULT_CONFIG_FILE: &str = ".gitconfig_local";
/// Authors file in the user's home directory
const DEFAULT_AUTHORS_FILE: &str = ".pairs";
const DEFAULT_BASE_BRANCH: &str = "master";
const DEFAULT_INTERFACE: &str = "en0";

/// Settings resolved from the environment, falling back to defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_file: PathBuf,
    pub authors_file: PathBuf,
    /// Explicit template, derived from the network on demand when unset
    pub email_template: Option<String>,
    pub base_branch: String,
    pub interface: String,
}

impl Settings {
    /// Resolves settings from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::resolve(|name| std::env::var(name).ok(), dirs::home_dir().as_deref())
    }

    /// Resolves settings through `lookup`. Empty values count as unset.
    ///
    /// # Arguments
    /// * `lookup` - Reads an environment variable by name
    /// * `home` - Home directory holding the default files
    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        home: Option<&Path>,
    ) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let home_file = |name: &str, file: &str| -> Result<PathBuf, AppError> {
            match var(name) {
                Some(path) => Ok(PathBuf::from(path)),
                None => home
                    .map(|home| home.join(file))
                    .ok_or_else(|| AppError::HomeDirUnavailable(name.to_string())),
            }
        };

        let settings = Self {
            config_file: home_file(CONFIG_FILE_VAR, DEFAULT_CONFIG_FILE)?,
            authors_file: home_file(AUTHORS_FILE_VAR, DEFAULT_AUTHORS_FILE)?,
            email_template: var(EMAIL_TEMPLATE_VAR),
            base_branch: var(BASE_BRANCH_VAR).unwrap_or_else(|| DEFAULT_BASE_BRANCH.to_string()),
            interface: var(INTERFACE_VAR).unwrap_or_else(|| DEFAULT_INTERFACE.to_string()),
        };
        debug!(?settings, "resolved settings");
        Ok(settings)
    }

    /// Parses the configured template, deriving one from the network when unset
    pub fn email_template(&self) -> Result<EmailTemplate, AppError> {
        match &self.email_template {
            Some(template) => EmailTemplate::parse(template),
            None => EmailTemplate::parse(&default_email_template(&self.interface)?),
        }
    }
}
