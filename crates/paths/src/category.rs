//! Path categories

use jmxbeat_errors::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of directories a relative path can be resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathCategory {
    Home,
    Config,
    Data,
    Logs,
}

impl PathCategory {
    /// All categories, in display order
    pub const ALL: [PathCategory; 4] = [Self::Home, Self::Config, Self::Data, Self::Logs];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Config => "config",
            Self::Data => "data",
            Self::Logs => "logs",
        }
    }
}

impl fmt::Display for PathCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathCategory {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| PathError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

// Implement clap::ValueEnum for PathCategory
impl clap::ValueEnum for PathCategory {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        for category in PathCategory::ALL {
            assert_eq!(category.to_string().parse::<PathCategory>().unwrap(), category);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "cache".parse::<PathCategory>().unwrap_err();
        assert!(matches!(err, PathError::UnknownCategory { ref name } if name == "cache"));
        assert!("Home".parse::<PathCategory>().is_err());
        assert!("".parse::<PathCategory>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&PathCategory::Logs).unwrap();
        assert_eq!(json, "\"logs\"");
        let back: PathCategory = serde_json::from_str("\"config\"").unwrap();
        assert_eq!(back, PathCategory::Config);
    }
}
