//! Shared infrastructure for resolver and provider-boundary tests.
//!
//! Contains [`CountingProvider`], a scripted provider that records how often
//! each accessor is hit, plus the content fixtures the test files share.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use provider_common::{
    AuthContext, Capabilities, ContentPath, ContentProvider, ProviderError, ProviderMetadata,
    ProviderResult,
};
use showplan_types::{
    ContentFile, Instructions, MediaKind, Plan, PlanAction, PlanPresentation, PlanSection,
};

/// Scripted provider for driving the resolver from tests.
///
/// Each accessor returns its scripted value (or error) and bumps a counter,
/// so tests can assert both what the resolver returned and which accessors
/// it actually consulted.
#[derive(Default)]
pub struct CountingProvider {
    pub capabilities: Capabilities,
    pub plan: Option<Plan>,
    pub playlist: Option<Vec<ContentFile>>,
    pub instructions: Option<Instructions>,
    pub expanded_instructions: Option<Instructions>,
    /// Accessors listed here return a transport error instead of data.
    pub failing: Vec<&'static str>,
    presentations_calls: AtomicUsize,
    playlist_calls: AtomicUsize,
    instructions_calls: AtomicUsize,
    expanded_calls: AtomicUsize,
}

impl CountingProvider {
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        CountingProvider {
            capabilities,
            ..Default::default()
        }
    }

    pub fn presentations_calls(&self) -> usize {
        self.presentations_calls.load(Ordering::SeqCst)
    }

    pub fn playlist_calls(&self) -> usize {
        self.playlist_calls.load(Ordering::SeqCst)
    }

    pub fn instructions_calls(&self) -> usize {
        self.instructions_calls.load(Ordering::SeqCst)
    }

    pub fn expanded_calls(&self) -> usize {
        self.expanded_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.presentations_calls()
            + self.playlist_calls()
            + self.instructions_calls()
            + self.expanded_calls()
    }

    fn fails(&self, accessor: &str) -> bool {
        self.failing.contains(&accessor)
    }
}

#[async_trait]
impl ContentProvider for CountingProvider {
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            provider_id: "counting".into(),
            display_name: "Counting".into(),
            version: "0.0.0".into(),
            capabilities: self.capabilities,
        }
    }

    async fn get_presentations(
        &self,
        _path: &ContentPath,
        _auth: &AuthContext,
    ) -> ProviderResult<Option<Plan>> {
        self.presentations_calls.fetch_add(1, Ordering::SeqCst);
        if self.fails("presentations") {
            return Err(ProviderError::transport("scripted failure"));
        }
        Ok(self.plan.clone())
    }

    async fn get_playlist(
        &self,
        _path: &ContentPath,
        _auth: &AuthContext,
        _resolution: Option<&str>,
    ) -> ProviderResult<Option<Vec<ContentFile>>> {
        self.playlist_calls.fetch_add(1, Ordering::SeqCst);
        if self.fails("playlist") {
            return Err(ProviderError::transport("scripted failure"));
        }
        Ok(self.playlist.clone())
    }

    async fn get_instructions(
        &self,
        _path: &ContentPath,
        _auth: &AuthContext,
    ) -> ProviderResult<Option<Instructions>> {
        self.instructions_calls.fetch_add(1, Ordering::SeqCst);
        if self.fails("instructions") {
            return Err(ProviderError::transport("scripted failure"));
        }
        Ok(self.instructions.clone())
    }

    async fn get_expanded_instructions(
        &self,
        _path: &ContentPath,
        _auth: &AuthContext,
    ) -> ProviderResult<Option<Instructions>> {
        self.expanded_calls.fetch_add(1, Ordering::SeqCst);
        if self.fails("expanded") {
            return Err(ProviderError::transport("scripted failure"));
        }
        Ok(self.expanded_instructions.clone())
    }
}

pub fn content_file(id: &str, title: &str) -> ContentFile {
    ContentFile {
        id: id.to_string(),
        title: title.to_string(),
        media_type: MediaKind::Video,
        url: format!("https://x/{id}.mp4"),
        thumbnail_url: None,
        embed_url: None,
        duration: None,
        payload: None,
    }
}

/// A two-section plan: one section with a single-file song and a two-file
/// add-on, one section with a file-less announcement.
pub fn sample_plan() -> Plan {
    Plan::from_sections(
        "plan-1",
        "Sunday Service",
        vec![
            PlanSection {
                id: "s1".into(),
                name: "Worship".into(),
                presentations: vec![
                    PlanPresentation {
                        id: "p1".into(),
                        name: "Song A".into(),
                        action_type: PlanAction::Play,
                        files: vec![content_file("f1", "Song A")],
                    },
                    PlanPresentation {
                        id: "p2".into(),
                        name: "Medley".into(),
                        action_type: PlanAction::AddOn,
                        files: vec![content_file("f2", "Verse"), content_file("f3", "Chorus")],
                    },
                ],
            },
            PlanSection {
                id: "s2".into(),
                name: "Announcements".into(),
                presentations: vec![PlanPresentation {
                    id: "p3".into(),
                    name: "Welcome".into(),
                    action_type: PlanAction::Other,
                    files: Vec::new(),
                }],
            },
        ],
    )
}

pub fn all_capabilities() -> Capabilities {
    Capabilities {
        browse: true,
        presentations: true,
        playlist: true,
        instructions: true,
    }
}

pub fn presentations_only() -> Capabilities {
    Capabilities {
        browse: true,
        presentations: true,
        playlist: false,
        instructions: false,
    }
}
