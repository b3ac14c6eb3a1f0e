//! Wire-level content shapes shared by providers and consumers.
//!
//! These structs are the public JSON contract: consumers render and persist
//! them directly, so field names and nesting are identical whether a value
//! came from a native provider call or from a derived conversion.

pub mod content;
pub mod instructions;
pub mod plan;

pub use content::{ContentFile, MediaKind};
pub use instructions::{InstructionItem, InstructionKind, Instructions};
pub use plan::{Plan, PlanAction, PlanPresentation, PlanSection};
