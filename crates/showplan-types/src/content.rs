use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of playable media behind a [`ContentFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
}

/// A leaf media reference.
///
/// Immutable once produced; owned by whichever container holds it (playlist
/// array, presentation, instruction item), never shared across containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContentFile {
    pub id: String,
    pub title: String,
    pub media_type: MediaKind,
    /// Playable URL.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    /// Playback length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Provider-specific payload, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl ContentFile {
    /// URL to use when embedding the file, falling back to the playable URL.
    pub fn embeddable_url(&self) -> &str {
        self.embed_url.as_deref().unwrap_or(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn video(id: &str) -> ContentFile {
        ContentFile {
            id: id.to_string(),
            title: "Song A".to_string(),
            media_type: MediaKind::Video,
            url: "https://x/a.mp4".to_string(),
            thumbnail_url: None,
            embed_url: None,
            duration: None,
            payload: None,
        }
    }

    #[test]
    fn serializes_camel_case_and_skips_absent_fields() {
        let value = serde_json::to_value(video("f1")).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "f1",
                "title": "Song A",
                "mediaType": "video",
                "url": "https://x/a.mp4",
            })
        );
    }

    #[test]
    fn embeddable_url_prefers_embed_url() {
        let mut file = video("f1");
        assert_eq!(file.embeddable_url(), "https://x/a.mp4");
        file.embed_url = Some("https://x/embed/a".to_string());
        assert_eq!(file.embeddable_url(), "https://x/embed/a");
    }

    #[test]
    fn deserializes_with_optional_fields() {
        let file: ContentFile = serde_json::from_value(json!({
            "id": "f2",
            "title": "Backdrop",
            "mediaType": "image",
            "url": "https://x/b.png",
            "thumbnailUrl": "https://x/b-thumb.png",
            "duration": 30,
            "payload": {"providerKey": "abc"},
        }))
        .expect("deserialize");
        assert_eq!(file.media_type, MediaKind::Image);
        assert_eq!(file.duration, Some(30));
        assert_eq!(file.payload.as_ref().and_then(|p| p.get("providerKey")), Some(&json!("abc")));
    }
}
