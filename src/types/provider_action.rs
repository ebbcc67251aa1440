//! Concrete provider action verbs emitted into policy statements.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// A provider-native permission string, e.g. `s3:GetObject`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ProviderAction {
    #[strum(serialize = "s3:GetObject")]
    GetObject,
    #[strum(serialize = "s3:PutObject")]
    PutObject,
    #[strum(serialize = "s3:DeleteObject")]
    DeleteObject,
    #[strum(serialize = "dynamodb:GetItem")]
    GetItem,
    #[strum(serialize = "dynamodb:Query")]
    Query,
    #[strum(serialize = "dynamodb:PutItem")]
    PutItem,
    #[strum(serialize = "dynamodb:UpdateItem")]
    UpdateItem,
    #[strum(serialize = "dynamodb:DeleteItem")]
    DeleteItem,
}

impl ProviderAction {
    /// The provider-neutral verb for this action, e.g. `get-object`.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::GetObject => "get-object",
            Self::PutObject => "put-object",
            Self::DeleteObject => "delete-object",
            Self::GetItem => "get-item",
            Self::Query => "query",
            Self::PutItem => "put-item",
            Self::UpdateItem => "update-item",
            Self::DeleteItem => "delete-item",
        }
    }

    /// The service prefix of the provider string (`s3`, `dynamodb`).
    pub fn service(&self) -> &'static str {
        let full: &'static str = (*self).into();
        full.split_once(':').map_or(full, |(service, _)| service)
    }
}

impl TryFrom<String> for ProviderAction {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
