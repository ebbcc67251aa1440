//! Resource registry: resolves logical resource ids to resolved resources.
//!
//! The synthesizer only depends on [`ResourceLookup`]. [`Registry`] is the
//! in-memory implementation; it is immutable once built, so it can be shared
//! between threads and looked up concurrently without locking.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use itertools::Itertools;
use tracing::debug;

use crate::error::SynthesisError;
use crate::types::Resource;

/// Read-only lookup of resources by logical id.
///
/// Implementations must be pure: the same id always yields the same resource
/// for the lifetime of the implementor.
pub trait ResourceLookup {
    fn lookup(&self, resource_id: &str) -> Option<&Resource>;
}

impl ResourceLookup for HashMap<String, Resource> {
    fn lookup(&self, resource_id: &str) -> Option<&Resource> {
        self.get(resource_id)
    }
}

/// An immutable set of resources keyed by logical id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    resources: HashMap<String, Resource>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Load a registry from a JSON array of `{ "id", "kind", "providerId" }` objects.
    pub fn from_json_str(json: &str) -> Result<Self, SynthesisError> {
        let resources: Vec<Resource> = serde_json::from_str(json)?;
        Registry::builder().with_resources(resources).build()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn contains(&self, resource_id: &str) -> bool {
        self.resources.contains_key(resource_id)
    }

    /// All resources, ordered by id.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources
            .values()
            .sorted_by(|a, b| a.id().cmp(b.id()))
    }
}

impl ResourceLookup for Registry {
    fn lookup(&self, resource_id: &str) -> Option<&Resource> {
        self.resources.get(resource_id)
    }
}

/// Collects resources and checks id uniqueness before producing a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    resources: Vec<Resource>,
}

impl RegistryBuilder {
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn with_resources<I>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = Resource>,
    {
        self.resources.extend(resources);
        self
    }

    pub fn build(self) -> Result<Registry, SynthesisError> {
        let mut resources = HashMap::with_capacity(self.resources.len());
        for resource in self.resources {
            match resources.entry(resource.id().to_string()) {
                Entry::Occupied(entry) => {
                    return Err(SynthesisError::DuplicateResource(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(resource);
                }
            }
        }

        debug!(event = "Registry", phase = "Built", resources = resources.len());
        Ok(Registry { resources })
    }
}
