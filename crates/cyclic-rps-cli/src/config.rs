//! Environment configuration for the console game.
use cyclic_rps_core::CasePolicy;
use std::env;

/// Console game configuration.
///
/// Command-line flags take precedence over these values.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Duplicate check policy for move names.
    pub case_policy: CasePolicy,
    /// Width of each result column in the help table.
    pub column_width: usize,
}

impl CliConfig {
    pub const MIN_COLUMN_WIDTH: usize = 4;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CYCLIC_RPS_IGNORE_CASE` - treat `Rock` and `rock` as the same move (default: false)
    /// - `CYCLIC_RPS_COLUMN_WIDTH` - help table column width (default: 12)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(flag) = env::var("CYCLIC_RPS_IGNORE_CASE").ok().and_then(|v| parse_flag(&v)) {
            config.case_policy = policy_for(flag);
        }
        if let Some(width) = read_env::<usize>("CYCLIC_RPS_COLUMN_WIDTH") {
            config.column_width = width.max(Self::MIN_COLUMN_WIDTH);
        }

        config
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, ignore_case: bool, column_width: Option<usize>) -> Self {
        if ignore_case {
            self.case_policy = CasePolicy::Insensitive;
        }
        if let Some(width) = column_width {
            self.column_width = width.max(Self::MIN_COLUMN_WIDTH);
        }
        self
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            case_policy: CasePolicy::Sensitive,
            column_width: 12,
        }
    }
}

fn policy_for(ignore_case: bool) -> CasePolicy {
    if ignore_case {
        CasePolicy::Insensitive
    } else {
        CasePolicy::Sensitive
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
