//! Enhancement strategy selection.
//!
//! The strategy decides which ruleset governs starforce mechanics and,
//! through the event catalog, which rate-modifying events are legal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The active enhancement ruleset.
///
/// Exactly two rulesets exist: the legacy system (`Classic`) and the newer
/// regional revision (`Renewal`). The tag strings are part of the persisted
/// state layout and must stay stable across releases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Legacy ruleset. Also the fallback for unrecognized persisted tags.
    #[default]
    Classic,
    /// Newer regional ruleset.
    Renewal,
}

impl Strategy {
    /// All strategies, in display order.
    pub const ALL: [Strategy; 2] = [Strategy::Classic, Strategy::Renewal];

    /// Stable tag string used in persistent storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Classic => "classic",
            Strategy::Renewal => "renewal",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Strategy::Classic),
            "renewal" => Ok(Strategy::Renewal),
            other => Err(DomainError::parse(format!(
                "unknown strategy tag: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn unknown_tag_is_a_parse_error() {
        let err = "foo".parse::<Strategy>();
        assert!(matches!(err, Err(DomainError::Parse(_))));
    }

    #[test]
    fn default_is_classic() {
        assert_eq!(Strategy::default(), Strategy::Classic);
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Strategy::Renewal).expect("serialize");
        assert_eq!(json, "\"renewal\"");
        let parsed: Strategy = serde_json::from_str("\"classic\"").expect("deserialize");
        assert_eq!(parsed, Strategy::Classic);
    }
}
