//! Static content catalog.
//!
//! The desktop's "file system" is a JSON document embedded at build time. It is
//! parsed and rebased onto the configured base path once at startup and never
//! mutated afterwards.

use std::collections::HashSet;

use serde::Deserialize;
use shared_types::{find_item_by_id, ContentItem, ContentKind};
use thiserror::Error;

use crate::config::SiteConfig;

const EMBEDDED_FILESYSTEM: &str = include_str!("../content/filesystem.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Invalid content tree: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate content id: {0}")]
    DuplicateId(String),

    #[error("Audio folder not found: {0}")]
    MissingAudioFolder(String),

    #[error("Audio item has no source: {0}")]
    MissingSource(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub href: String,
}

/// Playable entry of the designated audio folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub src: String,
    pub video_src: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FilesystemDocument {
    audio_folder: String,
    items: Vec<ContentItem>,
    #[serde(default)]
    hidden: Vec<ContentItem>,
    #[serde(default)]
    links: Vec<ExternalLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentCatalog {
    items: Vec<ContentItem>,
    hidden: Vec<ContentItem>,
    links: Vec<ExternalLink>,
    tracks: Vec<Track>,
}

impl ContentCatalog {
    pub fn embedded(config: &SiteConfig) -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_FILESYSTEM, config)
    }

    pub fn from_json(json: &str, config: &SiteConfig) -> Result<Self, ContentError> {
        let mut doc: FilesystemDocument = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for item in doc.items.iter().chain(doc.hidden.iter()) {
            check_unique_ids(item, &mut seen)?;
        }

        for item in doc.items.iter_mut().chain(doc.hidden.iter_mut()) {
            rebase_item(item, config);
        }

        let folder = find_item_by_id(&doc.items, &doc.audio_folder)
            .filter(|item| item.is_folder())
            .ok_or_else(|| ContentError::MissingAudioFolder(doc.audio_folder.clone()))?;

        let mut tracks = Vec::new();
        for child in folder.children.iter().filter(|c| c.is_audio()) {
            let src = child
                .src
                .clone()
                .ok_or_else(|| ContentError::MissingSource(child.id.clone()))?;
            tracks.push(Track {
                id: child.id.clone(),
                title: child.title.clone(),
                src,
                video_src: child.video_src.clone(),
            });
        }

        Ok(Self {
            items: doc.items,
            hidden: doc.hidden,
            links: doc.links,
            tracks,
        })
    }

    /// Items shown on the desktop
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Items only shown with "Show Hidden Files"
    pub fn hidden(&self) -> &[ContentItem] {
        &self.hidden
    }

    pub fn links(&self) -> &[ExternalLink] {
        &self.links
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn find(&self, id: &str) -> Option<&ContentItem> {
        find_item_by_id(&self.items, id).or_else(|| find_item_by_id(&self.hidden, id))
    }

    pub fn kind_of(&self, id: &str) -> Option<ContentKind> {
        self.find(id).map(|item| item.kind)
    }
}

fn check_unique_ids(item: &ContentItem, seen: &mut HashSet<String>) -> Result<(), ContentError> {
    if !seen.insert(item.id.clone()) {
        return Err(ContentError::DuplicateId(item.id.clone()));
    }
    for child in &item.children {
        check_unique_ids(child, seen)?;
    }
    Ok(())
}

fn rebase_item(item: &mut ContentItem, config: &SiteConfig) {
    if !item.icon.is_empty() {
        item.icon = config.with_base(&item.icon);
    }
    if let Some(src) = item.src.as_mut() {
        *src = config.with_base(src);
    }
    if let Some(video) = item.video_src.as_mut() {
        *video = config.with_base(video);
    }
    for child in &mut item.children {
        rebase_item(child, config);
    }
}
