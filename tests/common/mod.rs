//! Common test helpers and utilities.

#![allow(dead_code)]

pub mod temp_workspace;

use ledger_lore::mcp::LedgerLore;
use rmcp::model::{CallToolResult, RawContent};

// Re-export for convenience
pub use temp_workspace::TestWorkspace;

/// Directory holding impact builders in the fixture repository.
pub const BUILDERS: &str = "queue-processor/src/main/kotlin/com/wealthsimple/oracleglpublisher/queueprocessor/glrecordbuilders";

/// A small GL publisher checkout: ADRs, module READMEs, schema reference
/// and a couple of impact builders.
pub fn gl_publisher_fixture() -> String {
    format!(
        r#"
//- README.md
# Oracle GL Publisher
Publishes ledger activity to Oracle GL.
//- api/README.md
# API Module
Accepts activities over HTTP.
//- queue-processor/README.md
# Queue Processor
Consumes activities and builds GL records.
//- docs/adr/README.md
# ADR index
Mentions reversal and idempotency but is not an ADR.
//- docs/adr/0003-add-oracle-import-check-logic.md
# 3. Add Oracle import check logic

## Status

Accepted

## Context

Imports into GL_INTERFACE can silently fail, so we poll the import status.
//- docs/adr/0007-idempotency-key-meaning.md
# 7. Idempotency key meaning

## Status

Accepted

The idempotency key identifies one activity, not one journal line.
//- docs/adr/0010-Reversals-in-GL-Publisher.md
# 10. Reversals in GL Publisher

## Decision

A REVERSAL negates every line of the original journal entry.
//- docs/oracle-gl-schema-reference.md
# Oracle GL Schema Reference

## GL_INTERFACE

Staging table for journal imports.

| Column | Type |
| STATUS | VARCHAR2 |

## GL_JE_BATCHES

Only batch columns live here: JE_BATCH_ID.

## GL_JE_HEADERS

Header columns.
//- {BUILDERS}/cash/CashDepositImpactBuilder.kt
package com.wealthsimple.oracleglpublisher.queueprocessor.glrecordbuilders.cash

class CashDepositImpactBuilder : ImpactBuilder<CashDeposit> {{
    override val acceptedType: KClass<CashDeposit> = CashDeposit::class
}}
//- {BUILDERS}/trade/FeeImpactBuilder.kt
package com.wealthsimple.oracleglpublisher.queueprocessor.glrecordbuilders.trade

class FeeImpactBuilder : ImpactBuilder<Fee> {{
    // accepted type resolved at runtime
}}
//- {BUILDERS}/TradeBuyImpactBuilder.kt
package com.wealthsimple.oracleglpublisher.queueprocessor.glrecordbuilders

class TradeBuyImpactBuilder : ImpactBuilder<TradeBuy> {{
    override val acceptedType = TradeBuy::class
}}
//- {BUILDERS}/ImpactBuilderHelpers.kt
object ImpactBuilderHelpers
//- target/classes/Generated.kt
class GeneratedImpactBuilder
"#
    )
}

/// Creates a server over the GL publisher fixture.
pub fn gl_publisher_server() -> (TestWorkspace, LedgerLore) {
    let ws = TestWorkspace::builder()
        .fixture(&gl_publisher_fixture())
        .build();
    let server = LedgerLore::new(ws.repo());
    (ws, server)
}

/// Extracts the text of the first content block.
/// ## Panics
/// if the result has no text content
pub fn text_of(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text_content) => &text_content.text,
        other => panic!("Expected Text content, got: {other:?}"),
    }
}
