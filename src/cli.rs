use clap::Parser;

const AFTER_HELP: &str = "\
Examples

  # configure paired git author info for this shell
  $ pair jsmith alice
  Alice Barns and Jon Smith <git+alice+jsmith@example.com>

  # use the same author info as the last time pair was run
  $ pair
  Alice Barns and Jon Smith <git+alice+jsmith@example.com>

  # create a branch to work on a feature
  $ pair -b ONCALL-843
  Switched to a new branch 'alice+jsmith/ONCALL-843'

Configuration

  PAIR_FILE         YAML file with a map of usernames to full names (default: ~/.pairs).
  PAIR_GIT_CONFIG   Git config file for reading and writing author info (default: ~/.gitconfig_local).
  PAIR_EMAIL        Email address to base derived email addresses on
                    (default: derived from the reverse DNS name of PAIR_INTERFACE).
  PAIR_BASE_BRANCH  Branch that new pair branches start from (default: master).
  PAIR_INTERFACE    Network interface used to derive PAIR_EMAIL (default: en0).";

/// CLI arguments parser using `clap`
///
/// Configures your git author and committer info by changing ~/.gitconfig_local.
/// This is meant to be used both as a means of adding multiple authors to a commit
/// and an alternative to editing your ~/.gitconfig (which is checked into git).
#[derive(Parser, Debug)]
#[command(name = "pair", version, after_help = AFTER_HELP)]
pub struct Cli {
    /// Usernames from the authors file to pair as, in any order
    #[arg(value_name = "USER")]
    pub usernames: Vec<String>,
    /// Switches to a git branch prefixed with the paired usernames
    #[arg(short = 'b', long, value_name = "BRANCH")]
    pub branch: Option<String>,
}
