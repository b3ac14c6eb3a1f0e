use serde::{Deserialize, Serialize};

/// The view a derived result was converted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Playlist,
    Presentations,
    Instructions,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Playlist => "playlist",
            SourceFormat::Presentations => "presentations",
            SourceFormat::Instructions => "instructions",
        }
    }
}

/// Provenance of one resolution call.
///
/// Produced exactly once per call and never mutated afterwards. `is_lossy`
/// is true on every derived path, with no exception for conversions that
/// happen to preserve file content: grouping semantics are always dropped,
/// and downstream badges rely on the flag staying coarse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFormatMeta {
    pub is_native: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_format: Option<SourceFormat>,
    pub is_lossy: bool,
}

impl ResolvedFormatMeta {
    /// The provider served the requested view directly.
    pub fn native() -> Self {
        ResolvedFormatMeta {
            is_native: true,
            source_format: None,
            is_lossy: false,
        }
    }

    /// The view was converted from another natively supported view.
    pub fn derived(source: SourceFormat) -> Self {
        ResolvedFormatMeta {
            is_native: false,
            source_format: Some(source),
            is_lossy: true,
        }
    }

    /// No native accessor and no fallback source produced data.
    pub fn unavailable() -> Self {
        ResolvedFormatMeta {
            is_native: false,
            source_format: None,
            is_lossy: false,
        }
    }
}

/// The `{data, meta}` pair every resolver entry point returns.
///
/// `data` is `None` when the view is unobtainable by any path; `meta` is
/// populated either way so callers can tell "unsupported" apart from
/// "supported but empty".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolved<T> {
    pub data: Option<T>,
    pub meta: ResolvedFormatMeta,
}

impl<T> Resolved<T> {
    pub fn native(data: T) -> Self {
        Resolved {
            data: Some(data),
            meta: ResolvedFormatMeta::native(),
        }
    }

    pub fn derived(data: T, source: SourceFormat) -> Self {
        Resolved {
            data: Some(data),
            meta: ResolvedFormatMeta::derived(source),
        }
    }

    pub fn unavailable() -> Self {
        Resolved {
            data: None,
            meta: ResolvedFormatMeta::unavailable(),
        }
    }
}
