//! Operation tables: which provider actions each abstract operation expands to,
//! per resource kind.
//!
//! Every supported kind is one entry in [`TABLES`]. A kind without an entry
//! cannot be the target of a grant. An operation may expand to more than one
//! action; the actions are emitted in the order listed here.

use std::collections::HashMap;

use itertools::Itertools;
use once_cell::sync::Lazy;

use crate::types::{Operation, ProviderAction, ResourceKind};

/// One row of an operation table.
pub type OperationMapping = (Operation, &'static [ProviderAction]);

/// The operations supported by a single resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationTable {
    entries: &'static [OperationMapping],
}

impl OperationTable {
    pub const fn new(entries: &'static [OperationMapping]) -> Self {
        Self { entries }
    }

    /// The actions `operation` expands to, or `None` if the kind does not support it.
    pub fn actions_for(&self, operation: &Operation) -> Option<&'static [ProviderAction]> {
        self.entries
            .iter()
            .find(|(op, _)| op == operation)
            .map(|(_, actions)| *actions)
    }

    /// Supported operations, in table order.
    pub fn operations(&self) -> impl Iterator<Item = &'static Operation> + use<> {
        let entries: &'static [OperationMapping] = self.entries;
        entries.iter().map(|(op, _)| op)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static OBJECT_STORE_ENTRIES: [OperationMapping; 3] = [
    (Operation::Read, &[ProviderAction::GetObject]),
    (Operation::Write, &[ProviderAction::PutObject]),
    (Operation::Delete, &[ProviderAction::DeleteObject]),
];

static DOCUMENT_TABLE_ENTRIES: [OperationMapping; 4] = [
    (Operation::Read, &[ProviderAction::GetItem]),
    (Operation::Query, &[ProviderAction::Query]),
    (
        Operation::Write,
        &[ProviderAction::PutItem, ProviderAction::UpdateItem],
    ),
    (Operation::Delete, &[ProviderAction::DeleteItem]),
];

static OBJECT_STORE: OperationTable = OperationTable::new(&OBJECT_STORE_ENTRIES);
static DOCUMENT_TABLE: OperationTable = OperationTable::new(&DOCUMENT_TABLE_ENTRIES);

/// Kinds that can be the target of a grant, with their tables.
static TABLES: [(ResourceKind, &OperationTable); 2] = [
    (ResourceKind::ObjectStore, &OBJECT_STORE),
    (ResourceKind::DocumentTable, &DOCUMENT_TABLE),
];

static TABLES_BY_KIND: Lazy<HashMap<ResourceKind, &'static OperationTable>> =
    Lazy::new(|| TABLES.iter().map(|(kind, table)| (kind.clone(), *table)).collect());

/// Look up the operation table for `kind`.
pub fn operation_table(kind: &ResourceKind) -> Option<&'static OperationTable> {
    TABLES_BY_KIND.get(kind).copied()
}

/// Kinds with an operation table, in declaration order.
pub fn supported_kinds() -> impl Iterator<Item = &'static ResourceKind> {
    TABLES.iter().map(|(kind, _)| kind)
}

/// Comma-separated list of the operations `kind` supports, for diagnostics.
pub fn describe_operations(kind: &ResourceKind) -> String {
    operation_table(kind)
        .map(|table| table.operations().join(", "))
        .unwrap_or_default()
}
