use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use shared_types::EmbedWidget;

use crate::interop::inject_script_once;

const EMBED_SCRIPT_ID: &str = "yurios-embed-script";

/// Tenor GIF widget. The loader script replaces the placeholder markup.
#[component]
pub fn EmbedViewer(widget: EmbedWidget) -> Element {
    let EmbedWidget {
        script_src,
        post_id,
        aspect_ratio,
        link_href,
        link_text,
    } = widget;
    use_hook(move || {
        if inject_script_once(EMBED_SCRIPT_ID, &script_src) {
            debug!("embed loader injected from {script_src}");
        }
    });

    rsx! {
        div {
            class: "embed-viewer",
            div {
                class: "tenor-gif-embed",
                "data-postid": "{post_id}",
                "data-share-method": "host",
                "data-aspect-ratio": "{aspect_ratio}",
                "data-width": "100%",
                a { href: "{link_href}", "{link_text}" }
            }
        }
    }
}
