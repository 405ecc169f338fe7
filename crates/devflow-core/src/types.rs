use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// BranchType
// ---------------------------------------------------------------------------

/// Conventional branch category. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchType {
    #[default]
    Feat,
    Fix,
    Hotfix,
    Chore,
}

impl BranchType {
    pub fn all() -> &'static [BranchType] {
        &[
            BranchType::Feat,
            BranchType::Fix,
            BranchType::Hotfix,
            BranchType::Chore,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BranchType::Feat => "feat",
            BranchType::Fix => "fix",
            BranchType::Hotfix => "hotfix",
            BranchType::Chore => "chore",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BranchType::Feat => "New feature development",
            BranchType::Fix => "Bug fix",
            BranchType::Hotfix => "Urgent production fix",
            BranchType::Chore => "Maintenance tasks",
        }
    }

    /// Only feature branches carry a breaking-change marker.
    pub fn allows_breaking(self) -> bool {
        self == BranchType::Feat
    }
}

impl fmt::Display for BranchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BranchType {
    type Err = crate::error::DevflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feat" => Ok(BranchType::Feat),
            "fix" => Ok(BranchType::Fix),
            "hotfix" => Ok(BranchType::Hotfix),
            "chore" => Ok(BranchType::Chore),
            _ => Err(crate::error::DevflowError::InvalidBranchType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DevflowError;

    #[test]
    fn parse_every_type() {
        for t in BranchType::all() {
            let parsed: BranchType = t.as_str().parse().unwrap();
            assert_eq!(parsed, *t);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(matches!(
            "Feat".parse::<BranchType>(),
            Err(DevflowError::InvalidBranchType(s)) if s == "Feat"
        ));
        assert!("feature".parse::<BranchType>().is_err());
        assert!("".parse::<BranchType>().is_err());
    }

    #[test]
    fn only_feat_allows_breaking() {
        assert!(BranchType::Feat.allows_breaking());
        assert!(!BranchType::Fix.allows_breaking());
        assert!(!BranchType::Hotfix.allows_breaking());
        assert!(!BranchType::Chore.allows_breaking());
    }

    #[test]
    fn serializes_as_tag() {
        let json = serde_json::to_string(&BranchType::Hotfix).unwrap();
        assert_eq!(json, "\"hotfix\"");
        assert_eq!(BranchType::default(), BranchType::Feat);
    }
}
