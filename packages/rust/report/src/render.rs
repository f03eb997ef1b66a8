//! Serialization of grouped diagrams into the final Markdown document.
//!
//! Rendering is deterministic: the same domain mapping always produces
//! byte-identical output. The document is built as a flat list of lines and
//! joined once at the end.

use std::collections::BTreeMap;

use tracing::debug;

use diagramdex_shared::DiagramBlock;

/// Canonical domain presentation order. Domains present in the data but
/// absent from this list are appended afterward, alphabetically, in a
/// flatter secondary format.
pub const DOMAIN_ORDER: &[&str] = &[
    "Prd",
    "Identity",
    "Marketplace",
    "Booking",
    "Fulfillment",
    "Financial",
    "Notifications",
    "Messaging",
    "System",
    "Data",
    "Ux",
    "General",
];

/// Render the domain → blocks mapping into the output document.
pub fn render_document(organized: &BTreeMap<String, Vec<DiagramBlock>>) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push("# System Diagrams".into());
    out.push(String::new());
    out.push(
        "This document contains all Mermaid diagrams extracted from PRD and architecture documents."
            .into(),
    );
    out.push("Diagrams are organized by domain for easy reference.".into());
    out.push(String::new());
    out.push("---".into());
    out.push(String::new());

    let canonical: Vec<&str> = DOMAIN_ORDER
        .iter()
        .copied()
        .filter(|domain| organized.get(*domain).is_some_and(|blocks| !blocks.is_empty()))
        .collect();

    // BTreeMap keys iterate alphabetically, which is the required order for
    // the trailing non-canonical domains.
    let extras: Vec<&str> = organized
        .iter()
        .filter(|(domain, blocks)| {
            !DOMAIN_ORDER.contains(&domain.as_str()) && !blocks.is_empty()
        })
        .map(|(domain, _)| domain.as_str())
        .collect();

    for (pos, domain) in canonical.iter().enumerate() {
        render_canonical_domain(&mut out, domain, &organized[*domain]);

        if pos + 1 < canonical.len() || !extras.is_empty() {
            out.push(String::new());
            out.push("---".into());
            out.push(String::new());
        }
    }

    for domain in &extras {
        render_extra_domain(&mut out, domain, &organized[*domain]);
    }

    debug!(
        domains = canonical.len() + extras.len(),
        lines = out.len(),
        "document rendered"
    );

    out.join("\n")
}

/// Render one canonical-order domain: blocks grouped per source file, files
/// in lexicographic path order.
fn render_canonical_domain(out: &mut Vec<String>, domain: &str, blocks: &[DiagramBlock]) {
    out.push(format!("## {domain} Domain"));
    out.push(String::new());

    let mut by_file: BTreeMap<&str, Vec<&DiagramBlock>> = BTreeMap::new();
    for block in blocks {
        by_file.entry(block.source_path.as_str()).or_default().push(block);
    }

    let file_count = by_file.len();
    for (file_pos, (file_path, file_blocks)) in by_file.iter().enumerate() {
        out.push(format!("### From: `{file_path}`"));
        out.push(String::new());

        let block_count = file_blocks.len();
        for (block_pos, block) in file_blocks.iter().enumerate() {
            render_block(out, block);

            if block_pos + 1 < block_count {
                out.push("---".into());
                out.push(String::new());
            }
        }

        if file_pos + 1 < file_count {
            out.push(String::new());
            out.push("---".into());
            out.push(String::new());
        }
    }
}

/// One block: optional bold label, italic metadata line, fenced content.
fn render_block(out: &mut Vec<String>, block: &DiagramBlock) {
    if let Some(title) = &block.title {
        out.push(format!("**{title}**"));
        out.push(String::new());
    } else if let Some(section) = &block.section {
        out.push(format!("**{section}**"));
        out.push(String::new());
    }

    let mut meta: Vec<String> = Vec::new();
    if block.block_type.is_known() {
        meta.push(format!("Type: {}", block.block_type));
    }
    meta.push(format!("Source: `{}`", block.source_path));
    if let Some(section) = &block.section {
        meta.push(format!("Section: {section}"));
    }
    out.push(format!("*{}*", meta.join(", ")));
    out.push(String::new());

    out.push("```mermaid".into());
    out.push(block.content.clone());
    out.push("```".into());
    out.push(String::new());
}

/// Flatter format for domains outside the canonical order: no per-file
/// subheadings, a rule after every block.
fn render_extra_domain(out: &mut Vec<String>, domain: &str, blocks: &[DiagramBlock]) {
    out.push(format!("## {domain} Domain"));
    out.push(String::new());

    for block in blocks {
        if let Some(title) = &block.title {
            out.push(format!("**{title}**"));
            out.push(String::new());
        }

        out.push(format!("*Source: `{}`*", block.source_path));
        out.push(String::new());
        out.push("```mermaid".into());
        out.push(block.content.clone());
        out.push("```".into());
        out.push(String::new());
        out.push("---".into());
        out.push(String::new());
    }
}
