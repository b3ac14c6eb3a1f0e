//! Pure conversions between the plan, playlist and instructions views.
//!
//! All four functions are total for well-formed input and perform no I/O.
//! Derivation is one-directional: nothing here reconstructs a [`Plan`], and
//! a converted tree does not round-trip back into its source shape.

use showplan_types::{
    ContentFile, InstructionItem, InstructionKind, Instructions, Plan, PlanPresentation,
    PlanSection,
};

/// Projects a plan onto its flat ordered file list.
///
/// Returns the plan's denormalized `all_files` unchanged, so the result is
/// every file across all sections in section/presentation order. File content
/// is preserved; which section or presentation a file came from is not.
/// An empty plan yields an empty vec.
pub fn plan_to_playlist(plan: &Plan) -> Vec<ContentFile> {
    plan.all_files.clone()
}

/// Rebuilds a plan as an instructions outline.
///
/// Sections become `section` items, presentations become `action` items
/// (1:1, keyed by the presentation id, with the action classification in the
/// description), files become `file` leaves. Container children are always
/// present, even when empty: a section with no presentations and an action
/// with no files both stay visible as informational items.
pub fn plan_to_instructions(plan: &Plan) -> Instructions {
    instructions_from_plan(plan, false)
}

/// Like [`plan_to_instructions`], but single-file actions also carry the
/// file's embeddable URL as their own `downloadUrl`, so consumers can act on
/// the action node without descending a level for the common one-file case.
/// The `file` child is still emitted, keeping the shape consistent with
/// multi-file actions.
pub fn plan_to_expanded_instructions(plan: &Plan) -> Instructions {
    instructions_from_plan(plan, true)
}

fn instructions_from_plan(plan: &Plan, expand: bool) -> Instructions {
    Instructions {
        name: Some(plan.name.clone()),
        items: plan
            .sections
            .iter()
            .map(|section| section_item(section, expand))
            .collect(),
    }
}

fn section_item(section: &PlanSection, expand: bool) -> InstructionItem {
    InstructionItem {
        id: section.id.clone(),
        item_type: InstructionKind::Section,
        label: section.name.clone(),
        description: None,
        duration: None,
        embed_url: None,
        download_url: None,
        children: Some(
            section
                .presentations
                .iter()
                .map(|presentation| action_item(presentation, expand))
                .collect(),
        ),
    }
}

fn action_item(presentation: &PlanPresentation, expand: bool) -> InstructionItem {
    let download_url = match presentation.files.as_slice() {
        [only] if expand => Some(only.embeddable_url().to_string()),
        _ => None,
    };
    InstructionItem {
        id: presentation.id.clone(),
        item_type: InstructionKind::Action,
        label: presentation.name.clone(),
        description: Some(presentation.action_type.as_str().to_string()),
        duration: None,
        embed_url: None,
        download_url,
        children: Some(presentation.files.iter().map(file_item).collect()),
    }
}

fn file_item(file: &ContentFile) -> InstructionItem {
    InstructionItem {
        id: file.id.clone(),
        item_type: InstructionKind::File,
        label: file.title.clone(),
        description: None,
        duration: file.duration,
        embed_url: Some(file.embeddable_url().to_string()),
        download_url: None,
        children: None,
    }
}

/// Removes `file` leaves whose parent is an `action` with exactly one child,
/// promoting the parent's `downloadUrl` to stand in for the removed leaf
/// (taking the leaf's embed URL when the parent has none).
///
/// This is an inverse-direction simplification of the expanded view, not an
/// inverse conversion. Node ids and ordering are preserved; only the
/// cardinality of the deepest layer changes. Idempotent: collapsing an
/// already-collapsed tree is a no-op.
pub fn collapse_instructions(expanded: Instructions) -> Instructions {
    Instructions {
        name: expanded.name,
        items: expanded.items.into_iter().map(collapse_item).collect(),
    }
}

fn collapse_item(mut item: InstructionItem) -> InstructionItem {
    let Some(mut children) = item.children.take() else {
        return item;
    };
    let single_file = item.item_type == InstructionKind::Action
        && children.len() == 1
        && children[0].item_type == InstructionKind::File;
    if single_file {
        let leaf = children.remove(0);
        if item.download_url.is_none() {
            item.download_url = leaf.embed_url;
        }
        item.children = Some(children);
    } else {
        item.children = Some(children.into_iter().map(collapse_item).collect());
    }
    item
}
