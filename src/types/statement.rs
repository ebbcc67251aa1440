//! Synthesized policy statements and documents.

use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::provider_action::ProviderAction;

/// Policy language version written into every document.
pub const POLICY_VERSION: &str = "2012-10-17";

/// Statement effect. Synthesis only ever produces `Allow`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub enum Effect {
    #[default]
    Allow,
    Deny,
}

impl Display for Effect {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Effect::Allow => write!(f, "Allow"),
            Effect::Deny => write!(f, "Deny"),
        }
    }
}

/// One effect / action-list / resource triple.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct PolicyStatement {
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Action")]
    #[schema(value_type = Vec<String>)]
    pub actions: Vec<ProviderAction>,
    #[serde(rename = "Resource")]
    pub resource: String,
}

impl PolicyStatement {
    pub fn allow(resource: impl Into<String>, actions: Vec<ProviderAction>) -> Self {
        Self {
            effect: Effect::Allow,
            actions,
            resource: resource.into(),
        }
    }
}

impl Display for PolicyStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} [{}] on {}",
            self.effect,
            self.actions.iter().join(", "),
            self.resource
        )
    }
}

/// A complete access-policy document wrapping synthesized statements.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Statement")]
    pub statements: Vec<PolicyStatement>,
}

impl PolicyDocument {
    pub fn new(statements: Vec<PolicyStatement>) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statements,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, crate::SynthesisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
