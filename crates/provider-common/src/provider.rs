//! The provider boundary: an object-safe, capability-tagged accessor set.
//!
//! Every accessor is present on the trait with a default body returning
//! `Ok(None)`, so "this provider never serves that view" and "the native call
//! found nothing" look identical to callers. That removes any need for
//! runtime method-presence checks; the [`Capabilities`](crate::Capabilities)
//! flags are the only signal for what a provider claims to support.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use showplan_types::{ContentFile, Instructions, Plan};

use crate::{Capabilities, ProviderError, ProviderMetadata};

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Opaque credentials forwarded to provider accessors.
///
/// Token acquisition and refresh live in the per-provider auth flows; this
/// layer only carries the result along.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        AuthContext { bearer_token: None }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        AuthContext {
            bearer_token: Some(token.into()),
        }
    }
}

/// Slash-separated location inside a provider's content tree.
///
/// Segment meaning is provider-specific; this type only carries the segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentPath(Vec<String>);

impl ContentPath {
    pub fn root() -> Self {
        ContentPath(Vec::new())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        ContentPath(segments)
    }
}

impl From<&str> for ContentPath {
    fn from(value: &str) -> Self {
        ContentPath(
            value
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

impl FromStr for ContentPath {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(ContentPath::from(value))
    }
}

impl fmt::Display for ContentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

/// A content provider as seen by the format resolver.
///
/// Accessors suspend only at the provider's own I/O boundary and must
/// normalize their transport failures into [`ProviderError`]; `Ok(None)`
/// means the view is not available at this path.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    fn metadata(&self) -> ProviderMetadata;

    fn capabilities(&self) -> Capabilities {
        self.metadata().capabilities
    }

    async fn get_presentations(
        &self,
        _path: &ContentPath,
        _auth: &AuthContext,
    ) -> ProviderResult<Option<Plan>> {
        Ok(None)
    }

    /// `resolution` is a provider-specific media quality hint, e.g. "720p".
    async fn get_playlist(
        &self,
        _path: &ContentPath,
        _auth: &AuthContext,
        _resolution: Option<&str>,
    ) -> ProviderResult<Option<Vec<ContentFile>>> {
        Ok(None)
    }

    async fn get_instructions(
        &self,
        _path: &ContentPath,
        _auth: &AuthContext,
    ) -> ProviderResult<Option<Instructions>> {
        Ok(None)
    }

    async fn get_expanded_instructions(
        &self,
        _path: &ContentPath,
        _auth: &AuthContext,
    ) -> ProviderResult<Option<Instructions>> {
        Ok(None)
    }
}
