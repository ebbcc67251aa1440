//! Resolved resources held by a registry.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::resource_kind::ResourceKind;

/// A deployed (or to-be-deployed) resource, addressed by its logical id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Logical identifier, unique within a registry
    id: String,
    /// Infrastructure kind, e.g. "ObjectStore"
    #[schema(value_type = String)]
    kind: ResourceKind,
    /// Provider-native reference, e.g. an ARN
    provider_id: String,
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}::\"{}\"", self.kind, self.id)
    }
}

impl Resource {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<ResourceKind>,
        provider_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            provider_id: provider_id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }
}
