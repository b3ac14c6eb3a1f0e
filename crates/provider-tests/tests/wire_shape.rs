//! Wire-shape stability: consumers persist these JSON structures directly,
//! so field names and nesting must not drift, and a derived result must be
//! indistinguishable in shape from a native one.

use insta::assert_json_snapshot;
use provider_common::{AuthContext, ContentPath};
use provider_tests::{CountingProvider, all_capabilities, presentations_only, sample_plan};
use serde_json::json;
use showplan_resolver::{
    ResolvedFormatMeta, SourceFormat, get_instructions_with_meta, get_playlist_with_meta,
};
use showplan_types::{
    ContentFile, MediaKind, Plan, PlanAction, PlanPresentation, PlanSection,
};

fn path() -> ContentPath {
    ContentPath::root()
}

#[test]
fn worship_scenario_playlist_is_byte_identical_to_all_files() {
    let plan = Plan::from_sections(
        "plan-w",
        "Worship",
        vec![PlanSection {
            id: "s1".into(),
            name: "Worship".into(),
            presentations: vec![PlanPresentation {
                id: "p1".into(),
                name: "Song A".into(),
                action_type: PlanAction::Play,
                files: vec![ContentFile {
                    id: "f1".into(),
                    title: "Song A".into(),
                    media_type: MediaKind::Video,
                    url: "https://x/a.mp4".into(),
                    thumbnail_url: None,
                    embed_url: None,
                    duration: None,
                    payload: None,
                }],
            }],
        }],
    );
    let playlist = showplan_resolver::plan_to_playlist(&plan);
    assert_eq!(playlist.len(), 1);
    assert_eq!(
        serde_json::to_value(&playlist).expect("serialize"),
        json!([{
            "id": "f1",
            "title": "Song A",
            "mediaType": "video",
            "url": "https://x/a.mp4",
        }])
    );
    assert_eq!(
        serde_json::to_string(&playlist).expect("serialize"),
        serde_json::to_string(&plan.all_files).expect("serialize")
    );
}

#[tokio::test]
async fn derived_and_native_playlists_share_one_shape() {
    let mut native = CountingProvider::with_capabilities(all_capabilities());
    native.playlist = Some(sample_plan().all_files);
    let mut deriving = CountingProvider::with_capabilities(presentations_only());
    deriving.plan = Some(sample_plan());

    let auth = AuthContext::anonymous();
    let from_native = get_playlist_with_meta(&native, &path(), &auth).await;
    let from_derived = get_playlist_with_meta(&deriving, &path(), &auth).await;

    assert_eq!(
        serde_json::to_value(&from_native.data).expect("serialize"),
        serde_json::to_value(&from_derived.data).expect("serialize")
    );
}

#[tokio::test]
async fn derived_instructions_snapshot() {
    let mut provider = CountingProvider::with_capabilities(presentations_only());
    provider.plan = Some(sample_plan());

    let resolved = get_instructions_with_meta(&provider, &path(), &AuthContext::anonymous()).await;
    assert_json_snapshot!(resolved.meta, @r###"
    {
      "isNative": false,
      "sourceFormat": "presentations",
      "isLossy": true
    }
    "###);

    let instructions = resolved.data.expect("data");
    assert_json_snapshot!(instructions.items[1], @r###"
    {
      "id": "s2",
      "itemType": "section",
      "label": "Announcements",
      "children": [
        {
          "id": "p3",
          "itemType": "action",
          "label": "Welcome",
          "description": "other",
          "children": []
        }
      ]
    }
    "###);
}

#[test]
fn unavailable_meta_snapshot() {
    assert_json_snapshot!(ResolvedFormatMeta::unavailable(), @r###"
    {
      "isNative": false,
      "isLossy": false
    }
    "###);
    assert_eq!(
        serde_json::to_value(ResolvedFormatMeta::derived(SourceFormat::Instructions))
            .expect("serialize")["sourceFormat"],
        json!("instructions")
    );
}
