//! Composition of pair identities and recovery of usernames from pair emails.
//!
//! For the template `git@example.com`:
//!
//! | usernames | name | email |
//! |---|---|---|
//! | `[]` | `` | `git@example.com` |
//! | `[mb]` | `Michael Bluth` | `mb@example.com` |
//! | `[lb, mb]` | `Lindsay Bluth and Michael Bluth` | `git+lb+mb@example.com` |

use std::fmt;

use crate::{
    authors::Authors,
    email::{EmailTemplate, split_email},
    error::AppError,
};

/// Joins usernames inside a pair email and a pair branch prefix
pub const USERNAME_SEPARATOR: char = '+';
/// Joins full names in a pair display name
pub const NAME_SEPARATOR: &str = " and ";

/// Author name and email written to the git config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Checks that a username can be joined into a pair email and split out again
pub fn validate_username(username: &str) -> Result<(), AppError> {
    if username.is_empty() || username.contains(USERNAME_SEPARATOR) {
        return Err(AppError::InvalidUsername(username.to_string()));
    }
    Ok(())
}

/// Composes the pair identity for `usernames`, kept in the order given
///
/// Callers sort the usernames first so that any permutation yields the same identity.
pub fn compose(
    usernames: &[String],
    authors: &Authors,
    template: &EmailTemplate,
) -> Result<Identity, AppError> {
    let email = match usernames {
        [] => template.to_string(),
        [username] => format!("{username}@{}", template.host),
        _ => format!(
            "{}{}@{}",
            template.pair_prefix(),
            usernames.join(&USERNAME_SEPARATOR.to_string()),
            template.host
        ),
    };

    let names = usernames
        .iter()
        .map(|username| authors.lookup(username))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Identity {
        name: names.join(NAME_SEPARATOR),
        email,
    })
}

/// Recovers the `+`-joined usernames from an email built by [`compose`]
///
/// `git+lb+mb@example.com` gives `lb+mb`, and a single-user `mb@example.com` gives `mb`.
pub fn decompose(email: &str, template: &EmailTemplate) -> Result<String, AppError> {
    let (local, _) = split_email(email)?;
    let usernames = local.strip_prefix(&template.pair_prefix()).unwrap_or(local);
    Ok(usernames.to_string())
}

/// Name of the branch a pair works on, e.g. `lb+mb/ONCALL-843`
pub fn branch_name(usernames: &str, suffix: &str) -> String {
    format!("{usernames}/{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn template() -> EmailTemplate {
        EmailTemplate::parse("git@example.com").unwrap()
    }

    #[fixture]
    fn authors() -> Authors {
        Authors::from_iter([("mb", "Michael Bluth"), ("lb", "Lindsay Bluth"), ("gm", "George Michael")])
    }

    fn usernames(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[rstest]
    #[case(&[], "", "git@example.com")]
    #[case(&["mb"], "Michael Bluth", "mb@example.com")]
    #[case(&["lb", "mb"], "Lindsay Bluth and Michael Bluth", "git+lb+mb@example.com")]
    #[case(
        &["gm", "lb", "mb"],
        "George Michael and Lindsay Bluth and Michael Bluth",
        "git+gm+lb+mb@example.com"
    )]
    fn composes_identity(
        template: EmailTemplate,
        authors: Authors,
        #[case] names: &[&str],
        #[case] name: &str,
        #[case] email: &str,
    ) {
        let identity = compose(&usernames(names), &authors, &template).unwrap();
        assert_eq!(
            identity,
            Identity {
                name: name.to_string(),
                email: email.to_string()
            }
        );
    }

    #[rstest]
    fn compose_keeps_given_order(template: EmailTemplate, authors: Authors) {
        let identity = compose(&usernames(&["mb", "lb"]), &authors, &template).unwrap();
        assert_eq!(identity.email, "git+mb+lb@example.com");
        assert_eq!(identity.name, "Michael Bluth and Lindsay Bluth");
    }

    #[rstest]
    fn compose_fails_on_first_unknown_username(template: EmailTemplate, authors: Authors) {
        let err = compose(&usernames(&["lb", "tb", "zz"]), &authors, &template).unwrap_err();
        assert_eq!(err.to_string(), "no such username: tb");
    }

    #[rstest]
    fn identity_displays_as_author_line(template: EmailTemplate, authors: Authors) {
        let identity = compose(&usernames(&["mb"]), &authors, &template).unwrap();
        assert_eq!(identity.to_string(), "Michael Bluth <mb@example.com>");
    }

    #[rstest]
    #[case("git+lb+mb@example.com", "lb+mb")]
    #[case("mb@example.com", "mb")]
    #[case("git@example.com", "git")]
    #[case("gitlb@example.com", "gitlb")]
    fn decomposes_email(template: EmailTemplate, #[case] email: &str, #[case] expected: &str) {
        assert_eq!(decompose(email, &template).unwrap(), expected);
    }

    #[rstest]
    fn decompose_rejects_malformed_email(template: EmailTemplate) {
        assert!(matches!(
            decompose("git+lb+mb", &template),
            Err(AppError::MalformedEmail(_))
        ));
    }

    #[rstest]
    #[case("")]
    #[case("lb+mb")]
    #[case("+")]
    fn rejects_unjoinable_usernames(#[case] username: &str) {
        assert!(matches!(
            validate_username(username),
            Err(AppError::InvalidUsername(_))
        ));
    }

    #[test]
    fn branch_name_joins_with_slash() {
        assert_eq!(branch_name("lb+mb", "ONCALL-843"), "lb+mb/ONCALL-843");
    }

    fn arbitrary_authors() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z]{1,6}", 1..6).prop_filter(
            "the template prefix would make a lone username ambiguous",
            |names| names.iter().all(|name| name != "git"),
        )
    }

    proptest! {
        #[test]
        fn decompose_inverts_compose(mut names in arbitrary_authors()) {
            names.sort();
            let template = EmailTemplate::parse("git@example.com").unwrap();
            let authors: Authors = names.iter().map(|name| (name.clone(), name.to_uppercase())).collect();

            let identity = compose(&names, &authors, &template).unwrap();
            prop_assert_eq!(decompose(&identity.email, &template).unwrap(), names.join("+"));
        }

        #[test]
        fn sorted_permutations_compose_identically(names in arbitrary_authors(), seed in any::<u64>()) {
            let template = EmailTemplate::parse("git@example.com").unwrap();
            let authors: Authors = names.iter().map(|name| (name.clone(), name.to_uppercase())).collect();

            let mut sorted = names.clone();
            sorted.sort();
            let mut shuffled = names.clone();
            shuffled.rotate_left((seed as usize) % names.len());
            shuffled.reverse();
            shuffled.sort();

            prop_assert_eq!(
                compose(&sorted, &authors, &template).unwrap(),
                compose(&shuffled, &authors, &template).unwrap()
            );
        }

        #[test]
        fn email_and_name_have_one_separator_per_extra_user(mut names in arbitrary_authors()) {
            names.sort();
            let template = EmailTemplate::parse("git@example.com").unwrap();
            let authors: Authors = names.iter().map(|name| (name.clone(), name.to_uppercase())).collect();

            let identity = compose(&names, &authors, &template).unwrap();
            let (local, _) = split_email(&identity.email).unwrap();
            if names.len() == 1 {
                prop_assert!(!identity.email.contains('+'));
            } else {
                prop_assert!(local.starts_with("git+"));
                prop_assert_eq!(local.matches('+').count(), names.len());
            }
            prop_assert_eq!(identity.name.matches(" and ").count(), names.len() - 1);
        }
    }
}
