//! Grouping and rendering of extracted diagram blocks.
//!
//! [`group_by_domain`] turns the flat scan result into a domain → blocks
//! mapping with a deterministic order; [`render_document`] serializes that
//! mapping into the consolidated Markdown document. Both are pure.

mod render;

use std::collections::BTreeMap;

use diagramdex_shared::DiagramBlock;

pub use render::{DOMAIN_ORDER, render_document};

/// Group blocks by domain, sorting each domain's list ascending by
/// `(source_path, section-or-empty)`. The sort is stable, so identical
/// inputs always produce identical orderings.
pub fn group_by_domain(blocks: Vec<DiagramBlock>) -> BTreeMap<String, Vec<DiagramBlock>> {
    let mut organized: BTreeMap<String, Vec<DiagramBlock>> = BTreeMap::new();

    for block in blocks {
        organized.entry(block.domain.clone()).or_default().push(block);
    }

    for domain_blocks in organized.values_mut() {
        domain_blocks.sort_by(|a, b| {
            (a.source_path.as_str(), a.section.as_deref().unwrap_or(""))
                .cmp(&(b.source_path.as_str(), b.section.as_deref().unwrap_or("")))
        });
    }

    organized
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagramdex_shared::BlockType;
    use pretty_assertions::assert_eq;

    fn block(
        content: &str,
        source_path: &str,
        section: Option<&str>,
        domain: &str,
    ) -> DiagramBlock {
        DiagramBlock {
            content: content.into(),
            source_path: source_path.into(),
            title: None,
            section: section.map(Into::into),
            block_type: BlockType::infer(content),
            domain: domain.into(),
        }
    }

    #[test]
    fn groups_blocks_under_their_domain() {
        let grouped = group_by_domain(vec![
            block("graph TD\n  A", "identity/a.md", None, "Identity"),
            block("graph TD\n  B", "wallet.md", None, "Financial"),
            block("graph TD\n  C", "identity/b.md", None, "Identity"),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["Identity"].len(), 2);
        assert_eq!(grouped["Financial"].len(), 1);
    }

    #[test]
    fn sorts_by_path_then_section() {
        let grouped = group_by_domain(vec![
            block("a", "b.md", Some("Zeta"), "General"),
            block("b", "b.md", Some("Alpha"), "General"),
            block("c", "a.md", Some("Mid"), "General"),
            block("d", "b.md", None, "General"),
        ]);

        let order: Vec<(&str, Option<&str>)> = grouped["General"]
            .iter()
            .map(|b| (b.source_path.as_str(), b.section.as_deref()))
            .collect();

        assert_eq!(
            order,
            vec![
                ("a.md", Some("Mid")),
                ("b.md", None),
                ("b.md", Some("Alpha")),
                ("b.md", Some("Zeta")),
            ]
        );
    }

    #[test]
    fn grouping_does_not_alter_block_fields() {
        let input = block("flowchart TD\n  A --> B", "identity/a.md", Some("S"), "Identity");
        let grouped = group_by_domain(vec![input.clone()]);
        assert_eq!(grouped["Identity"][0], input);
    }

    #[test]
    fn grouping_is_deterministic() {
        let blocks = vec![
            block("a", "x.md", Some("One"), "System"),
            block("b", "x.md", Some("One"), "System"),
            block("c", "y.md", None, "Data"),
        ];
        assert_eq!(group_by_domain(blocks.clone()), group_by_domain(blocks));
    }

    // Renderer tests ---------------------------------------------------------

    fn full_block(
        content: &str,
        source_path: &str,
        title: Option<&str>,
        section: Option<&str>,
        domain: &str,
    ) -> DiagramBlock {
        DiagramBlock {
            content: content.into(),
            source_path: source_path.into(),
            title: title.map(Into::into),
            section: section.map(Into::into),
            block_type: BlockType::infer(content),
            domain: domain.into(),
        }
    }

    #[test]
    fn render_has_fixed_preamble() {
        let doc = render_document(&BTreeMap::new());
        assert!(doc.starts_with("# System Diagrams\n"));
        assert!(doc.contains("organized by domain"));
        assert!(doc.contains("\n---\n"));
    }

    #[test]
    fn render_contains_content_verbatim() {
        let content = "flowchart TD\n  A -->|yes| B\n  A -->|no| C";
        let grouped = group_by_domain(vec![full_block(
            content,
            "identity/login.md",
            Some("Login Flow"),
            Some("Login Flow"),
            "Identity",
        )]);

        let doc = render_document(&grouped);
        assert!(doc.contains(&format!("```mermaid\n{content}\n```")));
    }

    #[test]
    fn render_block_metadata_line() {
        let grouped = group_by_domain(vec![full_block(
            "sequenceDiagram\n  A->>B: hi",
            "messaging/chat.md",
            Some("Chat Handshake"),
            Some("Realtime"),
            "Messaging",
        )]);

        let doc = render_document(&grouped);
        assert!(doc.contains("## Messaging Domain"));
        assert!(doc.contains("### From: `messaging/chat.md`"));
        assert!(doc.contains("**Chat Handshake**"));
        assert!(doc.contains("*Type: sequenceDiagram, Source: `messaging/chat.md`, Section: Realtime*"));
    }

    #[test]
    fn render_omits_type_when_unknown() {
        let grouped = group_by_domain(vec![full_block(
            "pie title Pets",
            "misc.md",
            None,
            None,
            "General",
        )]);

        let doc = render_document(&grouped);
        assert!(doc.contains("*Source: `misc.md`*"));
        assert!(!doc.contains("Type: unknown"));
    }

    #[test]
    fn render_falls_back_to_section_label() {
        let grouped = group_by_domain(vec![full_block(
            "graph TD\n  A",
            "data/schema.md",
            None,
            Some("Entity Map"),
            "Data",
        )]);

        let doc = render_document(&grouped);
        assert!(doc.contains("**Entity Map**"));
    }

    #[test]
    fn render_domains_in_canonical_order() {
        let grouped = group_by_domain(vec![
            full_block("a", "data/schema.md", None, None, "Data"),
            full_block("b", "identity/x.md", None, None, "Identity"),
            full_block("c", "prd/epic.md", None, None, "Prd"),
        ]);

        let doc = render_document(&grouped);
        let prd = doc.find("## Prd Domain").unwrap();
        let identity = doc.find("## Identity Domain").unwrap();
        let data = doc.find("## Data Domain").unwrap();
        assert!(prd < identity && identity < data);
    }

    #[test]
    fn render_unknown_domain_appended_in_flat_format() {
        let grouped = group_by_domain(vec![
            full_block("a", "identity/x.md", None, None, "Identity"),
            full_block("b", "other.md", Some("Odd One"), None, "Zzz"),
        ]);

        let doc = render_document(&grouped);
        let identity = doc.find("## Identity Domain").unwrap();
        let extra = doc.find("## Zzz Domain").unwrap();
        assert!(identity < extra);
        assert!(doc.contains("**Odd One**"));
        // Flat format has no per-file subheading for the extra domain.
        assert!(!doc[extra..].contains("### From:"));
    }

    #[test]
    fn render_separators_between_blocks_and_files() {
        let grouped = group_by_domain(vec![
            full_block("a1", "sys/a.md", None, Some("One"), "System"),
            full_block("a2", "sys/a.md", None, Some("Two"), "System"),
            full_block("b1", "sys/b.md", None, None, "System"),
        ]);

        let doc = render_document(&grouped);
        // Preamble rule + one between the two blocks of a.md + one between
        // the files.
        let rules = doc.matches("\n---\n").count();
        assert_eq!(rules, 3);
        // No trailing rule after the final block.
        assert!(!doc.trim_end().ends_with("---"));
    }

    #[test]
    fn render_is_byte_identical_for_identical_input() {
        let grouped = group_by_domain(vec![
            full_block("graph TD\n  A", "ux/nav.md", Some("Nav"), Some("Nav"), "Ux"),
            full_block("journey\n  title J", "prd/epic.md", None, None, "Prd"),
        ]);

        assert_eq!(render_document(&grouped), render_document(&grouped));
    }
}
