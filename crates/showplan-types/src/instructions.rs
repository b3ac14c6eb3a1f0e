use serde::{Deserialize, Serialize};

/// Tag describing what an [`InstructionItem`] node represents.
///
/// Open-ended on the wire: providers may emit tags beyond the known set,
/// which round-trip through [`InstructionKind::Other`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(from = "String", into = "String")]
pub enum InstructionKind {
    Header,
    Section,
    Action,
    Addon,
    File,
    Other(String),
}

impl InstructionKind {
    pub fn as_str(&self) -> &str {
        match self {
            InstructionKind::Header => "header",
            InstructionKind::Section => "section",
            InstructionKind::Action => "action",
            InstructionKind::Addon => "addon",
            InstructionKind::File => "file",
            InstructionKind::Other(tag) => tag,
        }
    }
}

impl From<String> for InstructionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "header" => InstructionKind::Header,
            "section" => InstructionKind::Section,
            "action" => InstructionKind::Action,
            "addon" => InstructionKind::Addon,
            "file" => InstructionKind::File,
            _ => InstructionKind::Other(value),
        }
    }
}

impl From<InstructionKind> for String {
    fn from(value: InstructionKind) -> Self {
        value.as_str().to_string()
    }
}

/// One node of the instructions outline.
///
/// Depth is unbounded (in practice four levels or less). Children are owned,
/// so the tree cannot contain cycles. `children` is `None` for plain leaves
/// such as file references; container nodes keep `Some` even when empty,
/// because an empty container is meaningful (an informational item, or a
/// section that currently has no presentations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct InstructionItem {
    pub id: String,
    pub item_type: InstructionKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Length in seconds, where the provider supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<InstructionItem>>,
}

impl InstructionItem {
    pub fn is_leaf(&self) -> bool {
        self.children.as_ref().map(Vec::is_empty).unwrap_or(true)
    }

    pub fn child_count(&self) -> usize {
        self.children.as_ref().map(Vec::len).unwrap_or(0)
    }
}

/// A hierarchical outline view. Structurally a forest, not a single tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Instructions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<InstructionItem>,
}
