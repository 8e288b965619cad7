//! Shared types for the YuriOS desktop
//!
//! These types are used by both:
//! - the content catalog (static JSON embedded at build time)
//! - the Dioxus shell (WASM)
//!
//! Serializable with serde so the content tree can live outside the code.

use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry
// ============================================================================

/// A point in CSS pixels, relative to the desktop canvas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Preferred window size for a content item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self { w: 500, h: 400 }
    }
}

// ============================================================================
// Content Tree
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Document,
    Folder,
    Audio,
    Image,
    Embed,
}

/// Third-party widget rendered inside an `embed` item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedWidget {
    /// Loader script injected into the page once
    pub script_src: String,
    pub post_id: String,
    pub aspect_ratio: String,
    pub link_href: String,
    pub link_text: String,
}

/// Node in the static content tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub kind: ContentKind,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub sprite: String,
    /// Inline HTML for documents
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub src: Option<String>,
    /// Background video paired with an audio item
    #[serde(default)]
    pub video_src: Option<String>,
    #[serde(default)]
    pub embed: Option<EmbedWidget>,
    #[serde(default)]
    pub window_size: Option<WindowSize>,
    #[serde(default)]
    pub children: Vec<ContentItem>,
}

impl ContentItem {
    pub fn is_folder(&self) -> bool {
        self.kind == ContentKind::Folder
    }

    pub fn is_audio(&self) -> bool {
        self.kind == ContentKind::Audio
    }

    pub fn size_or_default(&self) -> WindowSize {
        self.window_size.unwrap_or_default()
    }
}

/// Find an item by id anywhere in the tree (depth-first, first match wins).
pub fn find_item_by_id<'a>(items: &'a [ContentItem], id: &str) -> Option<&'a ContentItem> {
    for item in items {
        if item.id == id {
            return Some(item);
        }
        if let Some(found) = find_item_by_id(&item.children, id) {
            return Some(found);
        }
    }
    None
}

// ============================================================================
// Session State
// ============================================================================

/// Pre-desktop gate stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Boot,
    Password,
    Desktop,
}

/// Snapshot of the media session reported to the shell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    /// Active audio item id
    pub active: Option<String>,
    pub title: Option<String>,
    pub video_src: Option<String>,
    pub playing: bool,
    pub current_time: f64,
    pub duration: f64,
}

impl PlaybackState {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn shows_video(&self) -> bool {
        self.video_src.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, kind: ContentKind) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: id.to_lowercase(),
            kind,
            icon: String::new(),
            sprite: String::new(),
            content: None,
            src: None,
            video_src: None,
            embed: None,
            window_size: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_find_item_recurses_into_children() {
        let mut music = leaf("MUSIC", ContentKind::Folder);
        music.children.push(leaf("whisper", ContentKind::Audio));
        let tree = vec![leaf("README", ContentKind::Document), music];

        assert_eq!(
            find_item_by_id(&tree, "whisper").map(|i| i.kind),
            Some(ContentKind::Audio)
        );
        assert!(find_item_by_id(&tree, "nope").is_none());
    }

    #[test]
    fn test_content_kind_serialization() {
        let json = serde_json::to_string(&ContentKind::Embed).unwrap();
        assert_eq!(json, "\"embed\"");
    }

    #[test]
    fn test_item_defaults_when_fields_missing() {
        let item: ContentItem =
            serde_json::from_str(r#"{"id":"A","title":"a.txt","kind":"document"}"#).unwrap();
        assert!(item.children.is_empty());
        assert_eq!(item.size_or_default(), WindowSize { w: 500, h: 400 });
    }

    #[test]
    fn test_playback_state_default_is_idle() {
        let state = PlaybackState::default();
        assert!(!state.is_active());
        assert!(!state.playing);
        assert!(!state.shows_video());
    }
}
