use std::{
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use tracing::{debug, info};

use crate::error::AppError;

/// Git config key holding the author name
pub const USER_NAME: &str = "user.name";
/// Git config key holding the author email
pub const USER_EMAIL: &str = "user.email";

/// Persistent key/value properties read and written by pair
pub trait ConfigStore {
    /// Reads a property, `None` when the key is not set
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    /// Writes a property, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    /// Location reported in errors
    fn path(&self) -> &Path;
}

/// Branch operations performed in the current repository
pub trait Branches {
    /// Checks whether `branch` resolves to a revision
    fn exists(&self, branch: &str) -> Result<bool, AppError>;
    /// Creates `branch` from `base` and checks it out
    fn create(&self, branch: &str, base: &str) -> Result<(), AppError>;
    /// Checks out an existing `branch`
    fn switch(&self, branch: &str) -> Result<(), AppError>;
}

/// A single git config file driven through `git config --file`
///
/// Only this file is touched, so the global git config stays as it is.
#[derive(Debug, Clone)]
pub struct GitConfigFile {
    path: PathBuf,
}

impl GitConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn git_config(&self, args: &[&str]) -> std::io::Result<Output> {
        debug!(path = %self.path.display(), ?args, "running git config");
        Command::new("git")
            .arg("config")
            .arg("--file")
            .arg(&self.path)
            .args(args)
            .output()
    }
}

impl ConfigStore for GitConfigFile {
    /// Executes a git config get command
    ///
    /// # Arguments
    /// * `key` - Git config key (user.name or user.email)
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let read_failed = |reason: String| AppError::ConfigReadFailed {
            path: self.path.clone(),
            key: key.to_string(),
            reason,
        };

        let git_command_output = self
            .git_config(&["--get", key])
            .map_err(|e| read_failed(e.to_string()))?;

        // git config exits with 1 and stays silent when the key is missing
        if git_command_output.status.code() == Some(1) && git_command_output.stderr.is_empty() {
            return Ok(None);
        }
        if !git_command_output.status.success() {
            return Err(read_failed(stderr_message(&git_command_output)));
        }

        let value = String::from_utf8_lossy(&git_command_output.stdout);
        Ok(Some(value.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Executes a git config set command
    ///
    /// # Arguments
    /// * `key` - Git config key to set (user.name or user.email)
    /// * `value` - Value to set for key (name or email)
    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let write_failed = |reason: String| AppError::ConfigWriteFailed {
            path: self.path.clone(),
            key: key.to_string(),
            reason,
        };

        let git_command_output = self
            .git_config(&[key, value])
            .map_err(|e| write_failed(e.to_string()))?;

        if !git_command_output.status.success() {
            return Err(write_failed(stderr_message(&git_command_output)));
        }

        info!(path = %self.path.display(), key, value, "updated git config");
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Branch operations through the `git` binary in the working directory
///
/// Checkouts inherit stdout and stderr so git's own messages reach the user.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitBranches;

impl GitBranches {
    fn checkout(&self, args: &[&str], branch: &str) -> Result<(), AppError> {
        debug!(?args, "running git checkout");
        let status = Command::new("git").arg("checkout").args(args).status()?;
        if !status.success() {
            return Err(AppError::BranchOperationFailed(branch.to_string()));
        }

        info!(branch, "checked out branch");
        Ok(())
    }
}

impl Branches for GitBranches {
    fn exists(&self, branch: &str) -> Result<bool, AppError> {
        let status = Command::new("git")
            .args(["rev-parse", "--verify", "--quiet", branch])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        debug!(branch, exists = status.success(), "probed branch");
        Ok(status.success())
    }

    fn create(&self, branch: &str, base: &str) -> Result<(), AppError> {
        self.checkout(&["-b", branch, base], branch)
    }

    fn switch(&self, branch: &str) -> Result<(), AppError> {
        self.checkout(&[branch], branch)
    }
}

fn stderr_message(output: &Output) -> String {
    let message = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if message.is_empty() {
        format!("git exited with {}", output.status)
    } else {
        message
    }
}
