use std::sync::Arc;

use super::*;
use crate::registry::Registry;
use crate::types::{Effect, ProviderAction, ResourceKind};
use yare::parameterized;


const UPLOADS_ARN: &str = "arn:aws:s3:::acme-uploads/*";
const ORDERS_ARN: &str = "arn:aws:dynamodb:eu-west-1:123456789012:table/orders";
const RESIZE_ARN: &str = "arn:aws:lambda:eu-west-1:123456789012:function:resize";

const TEST_REGISTRY: &str = r#"[
    { "id": "uploads", "kind": "ObjectStore", "providerId": "arn:aws:s3:::acme-uploads/*" },
    { "id": "orders", "kind": "DocumentTable", "providerId": "arn:aws:dynamodb:eu-west-1:123456789012:table/orders" },
    { "id": "resize", "kind": "Function", "providerId": "arn:aws:lambda:eu-west-1:123456789012:function:resize" },
    { "id": "events", "kind": "Queue", "providerId": "arn:aws:sqs:eu-west-1:123456789012:events" }
]"#;

#[derive(Clone)]
struct SharedLogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

struct SharedLogWriter(Arc<std::sync::Mutex<Vec<u8>>>);

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedLogBuffer {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter(Arc::clone(&self.0))
    }
}

impl std::io::Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a debug-level subscriber and return everything it logged.
fn capture_logs<F: FnOnce()>(f: F) -> String {
    let buffer = SharedLogBuffer(Arc::new(std::sync::Mutex::new(Vec::new())));
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(buffer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

fn test_registry() -> Registry {
    Registry::from_json_str(TEST_REGISTRY).expect("registry should load")
}

fn grant(resource_id: &str, operations: &[&str]) -> PermissionGrant {
    PermissionGrant::new(resource_id, operations.iter().copied())
}

fn synthesize(grants: &[PermissionGrant]) -> Result<Vec<PolicyStatement>, SynthesisError> {
    let registry = test_registry();
    PolicySynthesizer::new(&registry).synthesize(grants)
}

#[parameterized(
    object_store_read = { "uploads", &["read"], &[ProviderAction::GetObject] },
    object_store_read_write = { "uploads", &["read", "write"], &[ProviderAction::GetObject, ProviderAction::PutObject] },
    object_store_all = { "uploads", &["delete", "write", "read"], &[ProviderAction::DeleteObject, ProviderAction::PutObject, ProviderAction::GetObject] },
    document_table_write = { "orders", &["write"], &[ProviderAction::PutItem, ProviderAction::UpdateItem] },
    document_table_query_write = { "orders", &["query", "write"], &[ProviderAction::Query, ProviderAction::PutItem, ProviderAction::UpdateItem] },
    document_table_all = { "orders", &["read", "query", "write", "delete"], &[ProviderAction::GetItem, ProviderAction::Query, ProviderAction::PutItem, ProviderAction::UpdateItem, ProviderAction::DeleteItem] },
    duplicates_preserved = { "uploads", &["read", "read"], &[ProviderAction::GetObject, ProviderAction::GetObject] },
    duplicate_write_expands_twice = { "orders", &["write", "write"], &[ProviderAction::PutItem, ProviderAction::UpdateItem, ProviderAction::PutItem, ProviderAction::UpdateItem] },
    no_operations = { "orders", &[], &[] },
)]
fn test_single_grant_actions(resource_id: &str, operations: &[&str], expected: &[ProviderAction]) {
    let statements = synthesize(&[grant(resource_id, operations)]).unwrap();
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].effect, Effect::Allow);
    assert_eq!(statements[0].actions, expected);
}

#[test]
fn test_statement_resource_is_provider_id() {
    let statements = synthesize(&[grant("uploads", &["read"]), grant("orders", &["read"])]).unwrap();
    assert_eq!(statements[0].resource, UPLOADS_ARN);
    assert_eq!(statements[1].resource, ORDERS_ARN);
}

#[test]
fn test_empty_grant_list() {
    let statements = synthesize(&[]).unwrap();
    assert!(statements.is_empty());
}

#[test]
fn test_synthesize_document() {
    let registry = test_registry();
    let document = PolicySynthesizer::new(&registry)
        .synthesize_document(&[grant("uploads", &["read", "write"]), grant("orders", &["write"])])
        .unwrap();

    insta::assert_json_snapshot!(document, @r#"
    {
      "Version": "2012-10-17",
      "Statement": [
        {
          "Effect": "Allow",
          "Action": [
            "s3:GetObject",
            "s3:PutObject"
          ],
          "Resource": "arn:aws:s3:::acme-uploads/*"
        },
        {
          "Effect": "Allow",
          "Action": [
            "dynamodb:PutItem",
            "dynamodb:UpdateItem"
          ],
          "Resource": "arn:aws:dynamodb:eu-west-1:123456789012:table/orders"
        }
      ]
    }
    "#);
}

#[test]
fn test_works_with_any_lookup() {
    let mut map = std::collections::HashMap::new();
    map.insert(
        "uploads".to_string(),
        Resource::new("uploads", ResourceKind::ObjectStore, UPLOADS_ARN),
    );
    let lookup: &dyn ResourceLookup = &map;
    let statements = PolicySynthesizer::new(lookup)
        .synthesize(&[grant("uploads", &["delete"])])
        .unwrap();
    assert_eq!(statements[0].actions, vec![ProviderAction::DeleteObject]);
}

#[test]
fn test_grants_from_config_json() {
    let grants = PermissionGrant::list_from_json_str(
        r#"[
            { "resourceID": "orders", "operations": [{ "operation": "query" }, { "operation": "delete" }] }
        ]"#,
    )
    .unwrap();
    let statements = synthesize(&grants).unwrap();
    assert_eq!(
        statements[0].actions,
        vec![ProviderAction::Query, ProviderAction::DeleteItem]
    );
}

#[test]
fn test_grants_are_not_mutated() {
    let grants = vec![grant("orders", &["write", "read"])];
    let before = grants.clone();
    synthesize(&grants).unwrap();
    assert_eq!(grants, before);
}

#[test]
fn test_logs_successful_synthesis() {
    let logs = capture_logs(|| {
        synthesize(&[grant("uploads", &["read"])]).unwrap();
    });
    assert!(logs.contains("phase=\"Done\""));
    assert!(logs.contains("statements=1"));
}

#[test]
fn test_logs_known_kind_without_table() {
    let logs = capture_logs(|| {
        let _ = synthesize(&[grant("resize", &["read"])]);
    });
    assert!(logs.contains("kind=Function"));
    assert!(logs.contains("recognized=true"));
}

#[test]
fn test_logs_failed_synthesis() {
    let logs = capture_logs(|| {
        let _ = synthesize(&[grant("uploads", &["foo"])]);
    });
    assert!(logs.contains("phase=\"Failed\""));
    assert!(logs.contains("supported=read, write, delete"));
    assert!(logs.contains("recognized=false"));
}
