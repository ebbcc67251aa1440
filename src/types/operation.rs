//! Abstract operations requested by grants.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An abstract operation such as `read` or `write`.
///
/// Parsing never fails: names outside the vocabulary become `Unrecognized`
/// and keep their original spelling, so they can be reported back verbatim.
///
/// Equality and hashing go through the canonical name, so a hand-built
/// `Unrecognized("read")` is the same operation as `Read`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operation {
    Read,
    Write,
    Delete,
    Query,
    Unrecognized(String),
}

impl Operation {
    /// Operations with a canonical name.
    pub const KNOWN: [Operation; 4] = [
        Operation::Read,
        Operation::Write,
        Operation::Delete,
        Operation::Query,
    ];

    pub fn is_recognized(&self) -> bool {
        Self::KNOWN.iter().any(|known| known.as_ref() == self.as_ref())
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.as_ref() == other.as_ref()
    }
}

impl Eq for Operation {}

impl Hash for Operation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state);
    }
}

impl AsRef<str> for Operation {
    fn as_ref(&self) -> &str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Delete => "delete",
            Self::Query => "query",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Operation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Operation::from(s))
    }
}

impl From<&str> for Operation {
    fn from(s: &str) -> Self {
        match s {
            "read" => Self::Read,
            "write" => Self::Write,
            "delete" => Self::Delete,
            "query" => Self::Query,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Operation {
    fn from(s: String) -> Self {
        match Operation::from(s.as_str()) {
            Operation::Unrecognized(_) => Operation::Unrecognized(s),
            known => known,
        }
    }
}

impl From<Operation> for String {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Unrecognized(raw) => raw,
            known => known.as_ref().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        read = { "read", Operation::Read },
        write = { "write", Operation::Write },
        delete = { "delete", Operation::Delete },
        query = { "query", Operation::Query },
        typo = { "wirte", Operation::Unrecognized("wirte".to_string()) },
        uppercase = { "READ", Operation::Unrecognized("READ".to_string()) },
        empty = { "", Operation::Unrecognized(String::new()) },
    )]
    fn test_operation_from_str(input: &str, expected: Operation) {
        let op = Operation::from(input);
        assert_eq!(op, expected);
        assert_eq!(op.to_string(), input);
    }

    #[test]
    fn test_unrecognized_is_flagged() {
        assert!(Operation::Read.is_recognized());
        assert!(!Operation::from("foo").is_recognized());
        assert!(Operation::Unrecognized("write".to_string()).is_recognized());
    }

    #[test]
    fn test_hand_built_canonical_name_equals_known_variant() {
        let hand_built = Operation::Unrecognized("read".to_string());
        assert_eq!(hand_built, Operation::Read);
        assert_ne!(Operation::Unrecognized("Read".to_string()), Operation::Read);

        let mut seen = std::collections::HashSet::new();
        seen.insert(Operation::Read);
        assert!(seen.contains(&hand_built));

        let json = serde_json::to_string(&hand_built).unwrap();
        let back: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hand_built);
        assert!(matches!(back, Operation::Read));
    }
}
