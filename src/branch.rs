use tracing::debug;

use crate::{
    email::EmailTemplate,
    error::AppError,
    git::{Branches, ConfigStore, USER_EMAIL},
    identity::{branch_name, decompose},
};

/// Switches to the current pair's branch for `suffix`, creating it from `base` when missing
///
/// Returns the full branch name, e.g. `lb+mb/ONCALL-843`.
///
/// # Arguments
/// * `store` - Config holding the current pair email
/// * `branches` - Branch operations of the working repository
/// * `template` - Template the pair email was composed with
/// * `suffix` - Branch name after the pair prefix
/// * `base` - Integration branch new pair branches start from
pub fn switch_to_pair_branch(
    store: &impl ConfigStore,
    branches: &impl Branches,
    template: &EmailTemplate,
    suffix: &str,
    base: &str,
) -> Result<String, AppError> {
    let email = store
        .get(USER_EMAIL)?
        .ok_or_else(|| AppError::PairNotConfigured(store.path().to_path_buf()))?;

    let usernames = decompose(&email, template)?;
    let branch = branch_name(&usernames, suffix);
    debug!(%email, %branch, "resolved pair branch");

    if branches.exists(&branch)? {
        branches.switch(&branch)?;
    } else {
        branches.create(&branch, base)?;
    }

    Ok(branch)
}
