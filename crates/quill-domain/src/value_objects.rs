//! Value objects representing immutable domain concepts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Blog identifier assigned by storage on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogId(i64);

impl BlogId {
    /// Wrap a raw storage identifier
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw storage identifier
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BlogId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<BlogId> for i64 {
    fn from(id: BlogId) -> Self {
        id.0
    }
}

impl FromStr for BlogId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
