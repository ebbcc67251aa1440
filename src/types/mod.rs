//! Data model for grants, resources and synthesized statements.
//!
//! Canonical string forms:
//! - ResourceKind: `ObjectStore`, `DocumentTable`, `Function`
//! - Operation: `read`, `write`, `delete`, `query`
//! - ProviderAction: `service:Verb`, e.g. `s3:GetObject`
//!
//! Unknown kinds and operations parse into an `Unrecognized` variant that keeps
//! the raw string, so they surface as errors during synthesis instead of
//! failing at load time.

mod grant;
mod operation;
mod provider_action;
mod resource;
mod resource_kind;
mod statement;

pub use grant::{OperationRequest, PermissionGrant};
pub use operation::Operation;
pub use provider_action::ProviderAction;
pub use resource::Resource;
pub use resource_kind::ResourceKind;
pub use statement::{Effect, POLICY_VERSION, PolicyDocument, PolicyStatement};
