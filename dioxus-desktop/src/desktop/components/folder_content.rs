use dioxus::prelude::*;
use shared_types::ContentItem;

use crate::desktop::components::desktop_icons::sprite_size;

/// Children of a folder window. One click activates an entry.
#[component]
pub fn FolderContent(items: Vec<ContentItem>, on_activate: Callback<String>) -> Element {
    rsx! {
        div {
            class: "folder-content",
            for item in items {
                div {
                    key: "{item.id}",
                    class: "icon folder-icon",
                    onclick: {
                        let id = item.id.clone();
                        move |_| on_activate.call(id.clone())
                    },
                    div {
                        class: "sprite-top {item.sprite}",
                        style: "background-image: url({item.icon}); background-position: 0 0; background-size: {sprite_size(item.kind)};",
                    }
                    h5 { "{item.title}" }
                }
            }
        }
    }
}
