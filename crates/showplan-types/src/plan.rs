use serde::{Deserialize, Serialize};

use crate::content::ContentFile;

/// How a presentation is meant to be used while a plan runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum PlanAction {
    #[serde(rename = "play")]
    Play,
    #[serde(rename = "add-on")]
    AddOn,
    #[serde(rename = "other")]
    Other,
}

impl PlanAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanAction::Play => "play",
            PlanAction::AddOn => "add-on",
            PlanAction::Other => "other",
        }
    }
}

/// One playable unit inside a plan, e.g. a song or a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanPresentation {
    pub id: String,
    pub name: String,
    pub action_type: PlanAction,
    /// Ordered media files. May be empty, e.g. a spoken agenda item.
    #[serde(default)]
    pub files: Vec<ContentFile>,
}

/// A grouping boundary inside a plan, e.g. "Worship" or "Announcements".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanSection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub presentations: Vec<PlanPresentation>,
}

/// A sectioned service plan.
///
/// `all_files` is denormalized on purpose: it must always equal the
/// concatenation of every presentation's files in section/presentation
/// order, which turns the playlist view into a plain projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub sections: Vec<PlanSection>,
    #[serde(default)]
    pub all_files: Vec<ContentFile>,
}

impl Plan {
    /// Builds a plan from sections, filling `all_files` in document order.
    pub fn from_sections(
        id: impl Into<String>,
        name: impl Into<String>,
        sections: Vec<PlanSection>,
    ) -> Self {
        let all_files = flatten_files(&sections);
        Plan {
            id: id.into(),
            name: name.into(),
            description: None,
            thumbnail_url: None,
            sections,
            all_files,
        }
    }

    /// Re-derives `all_files` from the current sections.
    ///
    /// Call after mutating `sections` so the denormalized list stays in sync.
    pub fn recompute_all_files(&mut self) {
        self.all_files = flatten_files(&self.sections);
    }
}

/// Every file across all sections, in a left-to-right, top-to-bottom
/// traversal of sections, presentations and files.
pub fn flatten_files(sections: &[PlanSection]) -> Vec<ContentFile> {
    sections
        .iter()
        .flat_map(|section| section.presentations.iter())
        .flat_map(|presentation| presentation.files.iter())
        .cloned()
        .collect()
}
