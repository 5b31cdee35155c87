use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the fixed content buckets of the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Releases,
    Mixes,
    Interviews,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown category '{0}', expected one of: releases, mixes, interviews")]
pub struct CategoryParseError(pub String);

impl Category {
    pub const ALL: [Category; 3] = [Category::Releases, Category::Mixes, Category::Interviews];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Releases => "releases",
            Category::Mixes => "mixes",
            Category::Interviews => "interviews",
        }
    }

    /// Tab label shown in the tab bar.
    pub fn label(&self) -> String {
        crate::utils::capitalize(self.key())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| CategoryParseError(key.to_string()))
    }
}
