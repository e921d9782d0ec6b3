use tracing::info;

use crate::{
    authors::Authors,
    branch::switch_to_pair_branch,
    cli::Cli,
    config::Settings,
    email::EmailTemplate,
    error::AppError,
    git::{ConfigStore, GitBranches, GitConfigFile, USER_EMAIL, USER_NAME},
    identity::{Identity, compose, validate_username},
};

/// Runs the mode selected by the command line
pub fn run(cli: Cli, settings: &Settings) -> Result<(), AppError> {
    let store = GitConfigFile::new(&settings.config_file);

    if let Some(suffix) = cli.branch {
        // $ pair -b BRANCH
        let template = settings.email_template()?;
        switch_to_pair_branch(&store, &GitBranches, &template, &suffix, &settings.base_branch)?;
        return Ok(());
    }

    if cli.usernames.is_empty() {
        // $ pair
        show_current_pair(&store)
    } else {
        // $ pair author1 author2
        let template = settings.email_template()?;
        let authors = Authors::load(&settings.authors_file)?;
        let identity = set_pair(&store, &authors, &template, cli.usernames)?;
        println!("{identity}");
        Ok(())
    }
}

/// Prints the author info currently stored in the config
pub fn show_current_pair(store: &impl ConfigStore) -> Result<(), AppError> {
    println!("{}", current_pair(store)?);
    Ok(())
}

/// Reads the author name and email from the config
pub fn current_pair(store: &impl ConfigStore) -> Result<Identity, AppError> {
    let property = |key: &str| -> Result<String, AppError> {
        store.get(key)?.ok_or_else(|| AppError::ConfigReadFailed {
            path: store.path().to_path_buf(),
            key: key.to_string(),
            reason: "not set".to_string(),
        })
    };

    Ok(Identity {
        name: property(USER_NAME)?,
        email: property(USER_EMAIL)?,
    })
}

/// Stores the identity of `usernames` as the git author and returns it as read back
///
/// Usernames are sorted first so the same pair always gets the same identity.
/// Nothing is written unless every username resolves. The name is written
/// before the email.
///
/// # Arguments
/// * `store` - Config receiving user.name and user.email
/// * `authors` - Full names by username
/// * `template` - Template pair emails are derived from
/// * `usernames` - Usernames of the pair, in any order
pub fn set_pair(
    store: &impl ConfigStore,
    authors: &Authors,
    template: &EmailTemplate,
    mut usernames: Vec<String>,
) -> Result<Identity, AppError> {
    for username in &usernames {
        validate_username(username)?;
    }
    if let [username] = usernames.as_slice() {
        if *username == template.local {
            return Err(AppError::UsernameMatchesTemplate(username.clone()));
        }
    }

    usernames.sort();
    let identity = compose(&usernames, authors, template)?;

    store.set(USER_NAME, &identity.name)?;
    store.set(USER_EMAIL, &identity.email)?;
    info!(%identity, "paired");

    current_pair(store)
}
