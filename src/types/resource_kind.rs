//! Resource kinds known to the synthesizer.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of infrastructure kinds a resource can have.
///
/// Tags that are not recognized are kept as `Unrecognized` so that a registry
/// can still hold them; such resources have no operation table. Equality and
/// hashing compare the tag, not the variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceKind {
    /// An object store bucket (e.g. `ObjectStore`).
    ObjectStore,
    /// A document / key-value table (e.g. `DocumentTable`).
    DocumentTable,
    /// A compute function. Known, but not a valid policy target.
    Function,
    /// Any other tag, stored verbatim.
    Unrecognized(String),
}

impl ResourceKind {
    /// Kinds with a canonical name, in declaration order.
    pub const KNOWN: [ResourceKind; 3] = [
        ResourceKind::ObjectStore,
        ResourceKind::DocumentTable,
        ResourceKind::Function,
    ];

    pub fn is_recognized(&self) -> bool {
        Self::KNOWN.iter().any(|known| known.as_ref() == self.as_ref())
    }
}

impl PartialEq for ResourceKind {
    fn eq(&self, other: &Self) -> bool {
        self.as_ref() == other.as_ref()
    }
}

impl Eq for ResourceKind {}

impl Hash for ResourceKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state);
    }
}

impl AsRef<str> for ResourceKind {
    fn as_ref(&self) -> &str {
        match self {
            Self::ObjectStore => "ObjectStore",
            Self::DocumentTable => "DocumentTable",
            Self::Function => "Function",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ResourceKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ResourceKind::from(s))
    }
}

impl From<&str> for ResourceKind {
    fn from(s: &str) -> Self {
        match s {
            "ObjectStore" => Self::ObjectStore,
            "DocumentTable" => Self::DocumentTable,
            "Function" => Self::Function,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ResourceKind {
    fn from(s: String) -> Self {
        match ResourceKind::from(s.as_str()) {
            ResourceKind::Unrecognized(_) => ResourceKind::Unrecognized(s),
            known => known,
        }
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Unrecognized(raw) => raw,
            known => known.as_ref().to_string(),
        }
    }
}
