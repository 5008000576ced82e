//! Store behavior configuration.

use log::warn;

/// Environment variable selecting [`MissingRecordPolicy`].
pub const MISSING_UPDATE_ENV: &str = "CONTACTBOOK_MISSING_UPDATE";

/// How `update_contact` treats an id that matches no stored record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingRecordPolicy {
    /// Leave the collection untouched and report success.
    #[default]
    Ignore,
    /// Leave the collection untouched and return `StoreError::NotFound`.
    Reject,
}

impl MissingRecordPolicy {
    /// Parses `ignore` / `reject`, case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ignore" => Some(Self::Ignore),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Reject => "reject",
        }
    }
}

/// Runtime options for [`crate::ContactStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub missing_update: MissingRecordPolicy,
}

impl StoreConfig {
    /// Reads options from the process environment.
    ///
    /// Unset or unrecognized values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds options from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let missing_update = match lookup(MISSING_UPDATE_ENV) {
            Some(raw) => MissingRecordPolicy::parse(&raw).unwrap_or_else(|| {
                warn!(
                    "event=config_fallback module=store key={} fallback={}",
                    MISSING_UPDATE_ENV,
                    MissingRecordPolicy::default().as_str()
                );
                MissingRecordPolicy::default()
            }),
            None => MissingRecordPolicy::default(),
        };
        Self { missing_update }
    }
}

#[cfg(test)]
mod tests {
    use super::{MissingRecordPolicy, StoreConfig, MISSING_UPDATE_ENV};

    #[test]
    fn parse_accepts_known_values_case_insensitively() {
        assert_eq!(
            MissingRecordPolicy::parse(" Reject "),
            Some(MissingRecordPolicy::Reject)
        );
        assert_eq!(
            MissingRecordPolicy::parse("IGNORE"),
            Some(MissingRecordPolicy::Ignore)
        );
        assert_eq!(MissingRecordPolicy::parse("strict"), None);
    }

    #[test]
    fn lookup_falls_back_to_ignore() {
        let unset = StoreConfig::from_lookup(|_| None);
        assert_eq!(unset.missing_update, MissingRecordPolicy::Ignore);

        let garbage = StoreConfig::from_lookup(|_| Some("maybe".to_string()));
        assert_eq!(garbage.missing_update, MissingRecordPolicy::Ignore);
    }

    #[test]
    fn lookup_reads_reject_policy() {
        let config = StoreConfig::from_lookup(|key| {
            (key == MISSING_UPDATE_ENV).then(|| "reject".to_string())
        });
        assert_eq!(config.missing_update, MissingRecordPolicy::Reject);
    }
}
