//! Format resolution and conversion engine for content providers.
//!
//! Given a provider and a requested view, the resolver decides whether the
//! view can be served natively; if not, it derives the view from whichever
//! other view the provider does support and reports, per call, where the
//! data came from and whether the derivation dropped information.

pub mod convert;
pub mod meta;
pub mod resolver;

pub use convert::{
    collapse_instructions, plan_to_expanded_instructions, plan_to_instructions, plan_to_playlist,
};
pub use meta::{Resolved, ResolvedFormatMeta, SourceFormat};
pub use resolver::{
    get_expanded_instructions_with_meta, get_instructions_with_meta, get_playlist_with_meta,
    get_presentations_with_meta,
};
