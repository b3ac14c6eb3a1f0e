use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod provider;
pub mod registry;

pub use provider::{AuthContext, ContentPath, ContentProvider, ProviderResult};
pub use registry::ProviderRegistry;

/// Common error type providers reuse to surface failures at their boundary.
///
/// The format resolver never branches on the variant: any error is collapsed
/// to "view not obtainable from this accessor" before a resolution decision
/// is made. The variants exist for provider implementations, the registry and
/// the CLI surface.
#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProviderError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("unknown provider error: {0}")]
    Other(String),
}

impl ProviderError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ProviderError::Validation(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        ProviderError::Transport(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ProviderError::Unauthorized(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        ProviderError::Other(msg.into())
    }
}


/// Which views a provider serves natively.
///
/// The four flags are independent; none implies another. A provider that can
/// only reach a view through derivation must keep that flag `false`: the
/// resolver owns derivation, not the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub browse: bool,
    pub presentations: bool,
    pub playlist: bool,
    pub instructions: bool,
}

impl Capabilities {
    /// A provider that only exposes its folder tree.
    pub fn browse_only() -> Self {
        Capabilities {
            browse: true,
            presentations: false,
            playlist: false,
            instructions: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::browse_only()
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    pub provider_id: String,
    pub display_name: String,
    pub version: String,
    pub capabilities: Capabilities,
}
