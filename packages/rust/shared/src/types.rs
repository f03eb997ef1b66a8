//! Core domain types for extracted diagrams.

/// Directory scanned for Markdown documents, relative to the working directory.
pub const DOCS_DIR_NAME: &str = "docs";

/// Name of the generated output document. Also the reserved filename the
/// walker excludes, so reruns never consume their own prior output.
pub const OUTPUT_FILE_NAME: &str = "diagrams.md";

// ---------------------------------------------------------------------------
// BlockType
// ---------------------------------------------------------------------------

/// Mermaid notation variant, inferred from the first line of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Flowchart,
    SequenceDiagram,
    StateDiagramV2,
    StateDiagram,
    Journey,
    Gantt,
    Graph,
    ClassDiagram,
    ErDiagram,
    /// First line matched none of the known type keywords.
    Unknown,
}

/// Recognized type keywords, checked by prefix in this exact order.
/// `stateDiagram-v2` must precede `stateDiagram` so the longer prefix wins.
const TYPE_KEYWORDS: &[(&str, BlockType)] = &[
    ("flowchart", BlockType::Flowchart),
    ("sequenceDiagram", BlockType::SequenceDiagram),
    ("stateDiagram-v2", BlockType::StateDiagramV2),
    ("stateDiagram", BlockType::StateDiagram),
    ("journey", BlockType::Journey),
    ("gantt", BlockType::Gantt),
    ("graph", BlockType::Graph),
    ("classDiagram", BlockType::ClassDiagram),
    ("erDiagram", BlockType::ErDiagram),
];

impl BlockType {
    /// Infer the type from trimmed block content.
    ///
    /// Only the first line is examined, matched case-sensitively by prefix;
    /// the first keyword that matches wins.
    pub fn infer(content: &str) -> Self {
        let first_line = content.trim().lines().next().unwrap_or("");

        for (keyword, block_type) in TYPE_KEYWORDS {
            if first_line.starts_with(keyword) {
                return *block_type;
            }
        }

        Self::Unknown
    }

    /// The Mermaid keyword for this type (`"unknown"` for [`Self::Unknown`]).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::SequenceDiagram => "sequenceDiagram",
            Self::StateDiagramV2 => "stateDiagram-v2",
            Self::StateDiagram => "stateDiagram",
            Self::Journey => "journey",
            Self::Gantt => "gantt",
            Self::Graph => "graph",
            Self::ClassDiagram => "classDiagram",
            Self::ErDiagram => "erDiagram",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the type was recognized.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DiagramBlock
// ---------------------------------------------------------------------------

/// One extracted Mermaid diagram with its inferred context.
///
/// Immutable after construction; grouping and sorting only reorder blocks,
/// they never touch the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramBlock {
    /// Trimmed body of the fenced block. Never empty.
    pub content: String,
    /// Originating document, relative to the scan root (`/`-separated).
    pub source_path: String,
    /// Short title inferred from nearby markup.
    pub title: Option<String>,
    /// Nearest enclosing heading above the block.
    pub section: Option<String>,
    /// Inferred notation variant.
    pub block_type: BlockType,
    /// Domain label. Always set; `"General"` when nothing matched.
    pub domain: String,
}
