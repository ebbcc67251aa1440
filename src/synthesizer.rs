use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::SynthesisError;
use crate::mapping::{describe_operations, operation_table};
use crate::registry::ResourceLookup;
use crate::reporter::{Message, Task};
use crate::timers::{PhaseTimer, PhaseTimings};
use crate::types::{PermissionGrant, PolicyDocument, PolicyStatement, Resource};

/// Compiles permission grants into policy statements against a registry.
///
/// The registry is borrowed, never owned or global; the synthesizer itself
/// holds no other state, so one instance can serve any number of calls,
/// including concurrent ones when the registry is `Sync`.
pub struct PolicySynthesizer<'r, R: ResourceLookup + ?Sized> {
    registry: &'r R,
}

impl<'r, R: ResourceLookup + ?Sized> PolicySynthesizer<'r, R> {
    pub fn new(registry: &'r R) -> Self {
        PolicySynthesizer { registry }
    }

    /// Produce one `Allow` statement per grant, in grant order.
    ///
    /// The first grant that fails aborts the whole batch: no statements are
    /// returned alongside an error, and later grants are not looked at.
    pub fn synthesize(
        &self,
        grants: &[PermissionGrant],
    ) -> Result<Vec<PolicyStatement>, SynthesisError> {
        let started = Instant::now();
        let mut timings = PhaseTimings::default();

        debug!(event = "Synthesis", phase = "Start", grants = grants.len());

        let result: Result<Vec<PolicyStatement>, SynthesisError> = grants
            .iter()
            .map(|grant| self.statement_for(grant, &mut timings))
            .collect();

        let elapsed = started.elapsed();
        match &result {
            Ok(statements) => info!(
                event = "Synthesis",
                phase = "Done",
                grants = grants.len(),
                statements = statements.len(),
                duration_us = elapsed.as_micros() as u64
            ),
            Err(err) => warn!(
                event = "Synthesis",
                phase = "Failed",
                grants = grants.len(),
                error = %err
            ),
        }
        debug!(
            event = "Synthesis",
            phase = "Timing",
            resolve_us = timings.resolve.as_micros() as u64,
            map_us = timings.map.as_micros() as u64,
            overhead_us = elapsed.saturating_sub(timings.measured()).as_micros() as u64
        );

        #[cfg(feature = "observability")]
        crate::metrics::record_synthesis(
            crate::metrics::SynthesisStats {
                duration: elapsed,
                grants: grants.len(),
                statements: result.as_ref().map_or(0, Vec::len),
                succeeded: result.is_ok(),
            },
            crate::metrics::SynthesisPhases::from_timings(&timings, elapsed),
        );

        result
    }

    /// Like [`synthesize`](Self::synthesize), wrapped in a policy document.
    pub fn synthesize_document(
        &self,
        grants: &[PermissionGrant],
    ) -> Result<PolicyDocument, SynthesisError> {
        self.synthesize(grants).map(PolicyDocument::new)
    }

    /// Like [`synthesize`](Self::synthesize), reporting progress under `task`.
    ///
    /// Opens a `synthesize access policy` subtask, logs the action count per
    /// grant and closes it with success or the error. The result is the same
    /// as an unreported call.
    pub fn synthesize_reported(
        &self,
        grants: &[PermissionGrant],
        task: &Task,
    ) -> Result<Vec<PolicyStatement>, SynthesisError> {
        let sub = task.subtask(
            Message::new("synthesize access policy").with_arg("grants", grants.len().to_string()),
        );

        match self.synthesize(grants) {
            Ok(statements) => {
                for (grant, statement) in grants.iter().zip(&statements) {
                    sub.log(format!(
                        "{}: {} action(s)",
                        grant.resource_id,
                        statement.actions.len()
                    ));
                }
                sub.success_with([("statements", statements.len().to_string())]);
                Ok(statements)
            }
            Err(err) => {
                sub.failure(&err);
                Err(err)
            }
        }
    }

    fn resolve(&self, grant: &PermissionGrant) -> Result<&'r Resource, SynthesisError> {
        self.registry.lookup(&grant.resource_id).ok_or_else(|| {
            debug!(
                event = "Synthesis",
                phase = "Resolve",
                resource_id = grant.resource_id.as_str(),
                found = false
            );
            SynthesisError::UnknownResource(grant.resource_id.clone())
        })
    }

    fn statement_for(
        &self,
        grant: &PermissionGrant,
        timings: &mut PhaseTimings,
    ) -> Result<PolicyStatement, SynthesisError> {
        let resource = {
            let _timer = PhaseTimer::new(&mut timings.resolve);
            self.resolve(grant)?
        };

        let _timer = PhaseTimer::new(&mut timings.map);
        let kind = resource.kind();
        let Some(table) = operation_table(kind) else {
            debug!(
                event = "Synthesis",
                phase = "Map",
                resource_id = grant.resource_id.as_str(),
                kind = %kind,
                recognized = kind.is_recognized()
            );
            return Err(SynthesisError::UnsupportedResourceType(
                grant.resource_id.clone(),
            ));
        };

        let mut actions = Vec::with_capacity(grant.operations.len());
        for operation in grant.operations() {
            let Some(expanded) = table.actions_for(operation) else {
                debug!(
                    event = "Synthesis",
                    phase = "Map",
                    resource_id = grant.resource_id.as_str(),
                    kind = %kind,
                    operation = %operation,
                    recognized = operation.is_recognized(),
                    supported = %describe_operations(kind)
                );
                return Err(SynthesisError::UnsupportedOperation {
                    operation: operation.clone(),
                    kind: kind.clone(),
                });
            };
            actions.extend_from_slice(expanded);
        }

        debug!(
            event = "Synthesis",
            phase = "Map",
            resource_id = grant.resource_id.as_str(),
            kind = %kind,
            actions = actions.len()
        );

        Ok(PolicyStatement::allow(resource.provider_id(), actions))
    }
}

#[cfg(test)]
mod tests;
