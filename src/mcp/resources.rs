//! Static, read-only MCP resources.

use std::fmt::Write as _;

use rmcp::model::{Annotated, RawResource, Resource};

use crate::repo::Repository;

/// URI of the ADR listing.
pub const ADR_LIST_URI: &str = "adrs://list";
/// URI of the concatenated module READMEs.
pub const MODULE_DOCS_URI: &str = "docs://modules";
/// URI of the full schema reference.
pub const SCHEMA_REFERENCE_URI: &str = "schema://reference";

/// Modules whose README is served under [`MODULE_DOCS_URI`].
pub const MODULES: [&str; 4] = ["api", "queue-processor", "audit-status-processor", "db"];

/// Describes one resource stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Scheme-qualified URI.
    pub uri: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// What the resource contains.
    pub description: &'static str,
    /// MIME type of the content.
    pub mime_type: &'static str,
}

impl ResourceDescriptor {
    /// Converts to the rmcp wire type.
    pub fn to_resource(self) -> Resource {
        Annotated::new(
            RawResource {
                uri: self.uri.into(),
                name: self.name.into(),
                title: None,
                description: Some(self.description.into()),
                mime_type: Some(self.mime_type.into()),
                size: None,
                icons: None,
                meta: None,
            },
            None,
        )
    }
}

/// Every resource, in advertised order.
pub const RESOURCES: [ResourceDescriptor; 3] = [
    ResourceDescriptor {
        uri: ADR_LIST_URI,
        name: "Architecture Decision Records",
        description: "List of all ADRs in the GL publisher repository",
        mime_type: "text/markdown",
    },
    ResourceDescriptor {
        uri: MODULE_DOCS_URI,
        name: "Module Documentation",
        description: "README files of the GL publisher modules",
        mime_type: "text/markdown",
    },
    ResourceDescriptor {
        uri: SCHEMA_REFERENCE_URI,
        name: "Oracle GL Schema Reference",
        description: "Oracle GL table schema reference documentation",
        mime_type: "text/markdown",
    },
];

/// Renders the text of a resource. Unknown URIs yield a message, not a fault.
pub fn read_resource_text(repo: &Repository, uri: &str) -> String {
    match uri {
        ADR_LIST_URI => adr_listing(repo),
        MODULE_DOCS_URI => module_docs(repo),
        SCHEMA_REFERENCE_URI => repo
            .schema_document()
            .unwrap_or_else(|| "Schema reference documentation not found.".to_string()),
        other => format!("Unknown resource: {other}"),
    }
}

fn adr_listing(repo: &Repository) -> String {
    let names = repo.adr_names();
    if names.is_empty() {
        return "No ADRs found.".to_string();
    }
    let mut out = String::from("# Architecture Decision Records\n\n");
    for name in names {
        let _ = writeln!(out, "- {name}");
    }
    out
}

fn module_docs(repo: &Repository) -> String {
    let sections: Vec<String> = MODULES
        .iter()
        .filter_map(|module| {
            repo.module_readme(module)
                .map(|readme| format!("# {module}\n\n{readme}"))
        })
        .collect();

    if sections.is_empty() {
        "No module documentation found.".to_string()
    } else {
        sections.join("\n\n---\n\n")
    }
}
