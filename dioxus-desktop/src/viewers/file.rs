use dioxus::prelude::*;
use shared_types::{ContentItem, ContentKind, EmbedWidget};

use crate::desktop::components::folder_content::FolderContent;
use crate::viewers::{EmbedViewer, ImageViewer};

/// How a window renders its content item.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerKind {
    InlineHtml(String),
    Frame(String),
    Image(String),
    Embed(EmbedWidget),
    Folder,
    Unknown,
}

impl ViewerKind {
    pub fn for_item(item: &ContentItem) -> Self {
        match item.kind {
            ContentKind::Document => match (&item.content, &item.src) {
                (Some(html), _) => ViewerKind::InlineHtml(html.clone()),
                (None, Some(src)) => ViewerKind::Frame(src.clone()),
                (None, None) => ViewerKind::Unknown,
            },
            ContentKind::Image => item
                .src
                .clone()
                .map(ViewerKind::Image)
                .unwrap_or(ViewerKind::Unknown),
            ContentKind::Embed => item
                .embed
                .clone()
                .map(ViewerKind::Embed)
                .unwrap_or(ViewerKind::Unknown),
            ContentKind::Folder => ViewerKind::Folder,
            ContentKind::Audio => ViewerKind::Unknown,
        }
    }
}

#[component]
pub fn FileViewer(item: ContentItem, on_activate: Callback<String>) -> Element {
    match ViewerKind::for_item(&item) {
        ViewerKind::InlineHtml(html) => rsx! {
            div { class: "document-viewer", dangerous_inner_html: "{html}" }
        },
        ViewerKind::Frame(src) => rsx! {
            div {
                class: "frame-viewer",
                iframe { src: "{src}", title: item.title.clone() }
            }
        },
        ViewerKind::Image(src) => rsx! {
            ImageViewer { src, alt: item.title.clone() }
        },
        ViewerKind::Embed(widget) => rsx! {
            EmbedViewer { widget }
        },
        ViewerKind::Folder => rsx! {
            FolderContent { items: item.children.clone(), on_activate }
        },
        ViewerKind::Unknown => rsx! {
            div { class: "unknown-viewer", "Unknown file type" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: ContentKind) -> ContentItem {
        ContentItem {
            id: "ITEM".to_string(),
            title: "item".to_string(),
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
    fn documents_prefer_inline_content() {
        let mut doc = item(ContentKind::Document);
        doc.src = Some("/media/resume.pdf".to_string());
        assert_eq!(
            ViewerKind::for_item(&doc),
            ViewerKind::Frame("/media/resume.pdf".to_string())
        );

        doc.content = Some("<p>hi</p>".to_string());
        assert_eq!(
            ViewerKind::for_item(&doc),
            ViewerKind::InlineHtml("<p>hi</p>".to_string())
        );
    }

    #[test]
    fn items_without_payload_are_unknown() {
        for kind in [
            ContentKind::Document,
            ContentKind::Image,
            ContentKind::Embed,
            ContentKind::Audio,
        ] {
            assert_eq!(ViewerKind::for_item(&item(kind)), ViewerKind::Unknown);
        }
        assert_eq!(
            ViewerKind::for_item(&item(ContentKind::Folder)),
            ViewerKind::Folder
        );
    }

    #[test]
    fn images_and_embeds_carry_their_source() {
        let mut image = item(ContentKind::Image);
        image.src = Some("/gundam.png".to_string());
        assert_eq!(
            ViewerKind::for_item(&image),
            ViewerKind::Image("/gundam.png".to_string())
        );

        let mut embed = item(ContentKind::Embed);
        let widget = EmbedWidget {
            script_src: "https://tenor.com/embed.js".to_string(),
            post_id: "1".to_string(),
            aspect_ratio: "1.0".to_string(),
            link_href: "https://tenor.com".to_string(),
            link_text: "gif".to_string(),
        };
        embed.embed = Some(widget.clone());
        assert_eq!(ViewerKind::for_item(&embed), ViewerKind::Embed(widget));
    }
}
