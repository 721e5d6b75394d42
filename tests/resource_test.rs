//! Tests for the static MCP resources.
mod common;

use common::{TestWorkspace, gl_publisher_server};
use ledger_lore::mcp::LedgerLore;
use ledger_lore::mcp::resources::{ADR_LIST_URI, MODULE_DOCS_URI, SCHEMA_REFERENCE_URI};

#[test]
fn test_server_has_three_resources() {
    let (_ws, server) = gl_publisher_server();
    let uris: Vec<_> = server.resource_descriptors().iter().map(|r| r.uri).collect();
    assert_eq!(uris, [ADR_LIST_URI, MODULE_DOCS_URI, SCHEMA_REFERENCE_URI]);
}

#[test]
fn test_adr_list_resource() {
    let (_ws, server) = gl_publisher_server();
    let text = server.resource_text(ADR_LIST_URI);
    assert_eq!(
        text,
        "# Architecture Decision Records\n\n\
         - 0003-add-oracle-import-check-logic.md\n\
         - 0007-idempotency-key-meaning.md\n\
         - 0010-Reversals-in-GL-Publisher.md\n"
    );
}

#[test]
fn test_module_docs_resource() {
    let (_ws, server) = gl_publisher_server();
    let text = server.resource_text(MODULE_DOCS_URI);
    let api = text.find("# api\n\n# API Module").unwrap();
    let qp = text.find("# queue-processor\n\n# Queue Processor").unwrap();
    assert!(api < qp);
    assert!(!text.contains("# db"), "db has no README, got: {text}");
}

#[test]
fn test_schema_reference_resource() {
    let (ws, server) = gl_publisher_server();
    let expected = std::fs::read_to_string(ws.apath("docs/oracle-gl-schema-reference.md")).unwrap();
    assert_eq!(server.resource_text(SCHEMA_REFERENCE_URI), expected);
}

#[test]
fn test_unknown_and_empty_resources() {
    let ws = TestWorkspace::builder().fixture("//- notes.txt\nhello\n").build();
    let server = LedgerLore::new(ws.repo());
    assert_eq!(server.resource_text("adrs://other"), "Unknown resource: adrs://other");
    assert_eq!(server.resource_text(ADR_LIST_URI), "No ADRs found.");
    assert_eq!(
        server.resource_text(SCHEMA_REFERENCE_URI),
        "Schema reference documentation not found."
    );
}
