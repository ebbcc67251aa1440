//! Permission grants as produced by the deployment configuration.

use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::operation::Operation;

/// One requested operation, as written in configuration: `{ "operation": "read" }`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct OperationRequest {
    #[schema(value_type = String)]
    pub operation: Operation,
}

impl OperationRequest {
    pub fn new(operation: impl Into<Operation>) -> Self {
        Self {
            operation: operation.into(),
        }
    }
}

/// A request that a compute unit may perform `operations` on `resource_id`.
///
/// Operations keep their configured order, duplicates included.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct PermissionGrant {
    #[serde(rename = "resourceID")]
    pub resource_id: String,
    #[serde(default)]
    pub operations: Vec<OperationRequest>,
}

impl PermissionGrant {
    /// Build a grant from operation names, e.g. `PermissionGrant::new("uploads", ["read", "write"])`.
    pub fn new<I, S>(resource_id: impl Into<String>, operations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Operation>,
    {
        Self {
            resource_id: resource_id.into(),
            operations: operations.into_iter().map(OperationRequest::new).collect(),
        }
    }

    /// Parse a list of grants from the configuration JSON shape.
    pub fn list_from_json_str(json: &str) -> Result<Vec<Self>, crate::SynthesisError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter().map(|req| &req.operation)
    }
}

impl Display for PermissionGrant {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} [{}]", self.resource_id, self.operations().join(", "))
    }
}
