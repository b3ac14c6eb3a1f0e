//! End-to-end properties of the format resolver against scripted providers.

use provider_common::{AuthContext, Capabilities, ContentPath};
use provider_tests::{
    CountingProvider, all_capabilities, content_file, presentations_only, sample_plan,
};
use showplan_resolver::{
    SourceFormat, get_instructions_with_meta, get_playlist_with_meta,
    get_presentations_with_meta, plan_to_instructions, plan_to_playlist,
};

fn path() -> ContentPath {
    "plans/2024/sunday".parse().expect("infallible")
}

fn auth() -> AuthContext {
    AuthContext::bearer("test-token")
}

#[tokio::test]
async fn playlist_length_matches_total_file_count_in_order() {
    let plan = sample_plan();
    let expected: usize = plan
        .sections
        .iter()
        .flat_map(|s| s.presentations.iter())
        .map(|p| p.files.len())
        .sum();
    let playlist = plan_to_playlist(&plan);
    assert_eq!(playlist.len(), expected);
    let ids: Vec<&str> = playlist.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, ["f1", "f2", "f3"]);
}

#[tokio::test]
async fn instructions_counts_mirror_the_plan() {
    let plan = sample_plan();
    let instructions = plan_to_instructions(&plan);
    assert_eq!(instructions.items.len(), plan.sections.len());
    for (item, section) in instructions.items.iter().zip(&plan.sections) {
        assert_eq!(item.child_count(), section.presentations.len());
    }
}

#[tokio::test]
async fn derived_playlist_names_presentations_as_its_source() {
    let mut provider = CountingProvider::with_capabilities(presentations_only());
    provider.plan = Some(sample_plan());

    let resolved = get_playlist_with_meta(&provider, &path(), &auth()).await;
    assert!(!resolved.meta.is_native);
    assert!(resolved.meta.is_lossy);
    assert_eq!(resolved.meta.source_format, Some(SourceFormat::Presentations));
    assert_eq!(resolved.data.expect("data"), plan_to_playlist(&sample_plan()));
    assert_eq!(provider.presentations_calls(), 1);
    assert_eq!(provider.playlist_calls(), 0);
}

#[tokio::test]
async fn browse_only_provider_is_unobtainable_for_all_views() {
    let provider = CountingProvider::with_capabilities(Capabilities::browse_only());

    let playlist = get_playlist_with_meta(&provider, &path(), &auth()).await;
    let presentations = get_presentations_with_meta(&provider, &path(), &auth()).await;
    let instructions = get_instructions_with_meta(&provider, &path(), &auth()).await;

    assert_eq!(playlist.data, None);
    assert_eq!(presentations.data, None);
    assert_eq!(instructions.data, None);
    for meta in [playlist.meta, presentations.meta, instructions.meta] {
        assert!(!meta.is_native);
        assert_eq!(meta.source_format, None);
    }
    // no capability was declared, so no accessor may be consulted at all
    assert_eq!(provider.total_calls(), 0);
}

#[tokio::test]
async fn native_presentations_short_circuit() {
    let mut provider = CountingProvider::with_capabilities(all_capabilities());
    provider.plan = Some(sample_plan());
    provider.playlist = Some(vec![content_file("x1", "Native")]);

    let resolved = get_presentations_with_meta(&provider, &path(), &auth()).await;
    assert!(resolved.meta.is_native);
    assert!(!resolved.meta.is_lossy);
    // the native accessor ran exactly once and nothing else was touched,
    // so the returned plan is the provider's own object, unconverted
    assert_eq!(resolved.data.expect("data"), sample_plan());
    assert_eq!(provider.presentations_calls(), 1);
    assert_eq!(provider.total_calls(), 1);
}

#[tokio::test]
async fn declared_but_broken_native_support_recovers_silently() {
    let mut provider = CountingProvider::with_capabilities(Capabilities {
        browse: true,
        presentations: true,
        playlist: true,
        instructions: false,
    });
    provider.failing = vec!["playlist"];
    provider.plan = Some(sample_plan());

    let resolved = get_playlist_with_meta(&provider, &path(), &auth()).await;
    assert_eq!(resolved.meta.source_format, Some(SourceFormat::Presentations));
    assert_eq!(provider.playlist_calls(), 1);
    assert_eq!(provider.presentations_calls(), 1);
}

#[tokio::test]
async fn exhausted_fallback_stops_after_one_attempt() {
    // Presentations are declared but return nothing: the resolver tries the
    // chosen fallback once and gives up instead of hunting further.
    let provider = CountingProvider::with_capabilities(presentations_only());

    let resolved = get_playlist_with_meta(&provider, &path(), &auth()).await;
    assert_eq!(resolved.data, None);
    assert_eq!(resolved.meta.source_format, None);
    assert_eq!(provider.presentations_calls(), 1);
    assert_eq!(provider.total_calls(), 1);
}

#[tokio::test]
async fn repeated_resolution_is_memoization_free() {
    let mut provider = CountingProvider::with_capabilities(presentations_only());
    provider.plan = Some(sample_plan());

    let first = get_playlist_with_meta(&provider, &path(), &auth()).await;
    let second = get_playlist_with_meta(&provider, &path(), &auth()).await;
    assert_eq!(first, second);
    assert_eq!(provider.presentations_calls(), 2);
}
