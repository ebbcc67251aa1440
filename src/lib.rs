//! Compiles declarative "grant operation X on resource Y" statements into the
//! access-policy statements a compute unit needs.
//!
//! ```rust
//! use policy_synth_core::{PermissionGrant, PolicySynthesizer, Registry, Resource, ResourceKind};
//!
//! let registry = Registry::builder()
//!     .with_resource(Resource::new("orders", ResourceKind::DocumentTable, "arn:aws:dynamodb:eu-west-1:123456789012:table/orders"))
//!     .build()
//!     .unwrap();
//!
//! let statements = PolicySynthesizer::new(&registry)
//!     .synthesize(&[PermissionGrant::new("orders", ["write"])])
//!     .unwrap();
//!
//! assert_eq!(statements.len(), 1);
//! assert_eq!(statements[0].actions.len(), 2);
//! ```

pub use error::SynthesisError;
pub use mapping::{OperationTable, operation_table, supported_kinds};
pub use registry::{Registry, RegistryBuilder, ResourceLookup};
pub use synthesizer::PolicySynthesizer;
pub use types::{
    Effect, Operation, OperationRequest, POLICY_VERSION, PermissionGrant, PolicyDocument,
    PolicyStatement, ProviderAction, Resource, ResourceKind,
};

mod error;
pub mod mapping;
#[cfg(feature = "observability")]
pub mod metrics;
mod registry;
pub mod reporter;
mod synthesizer;
mod timers;
mod types;
