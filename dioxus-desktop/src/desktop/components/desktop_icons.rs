use dioxus::prelude::*;
use shared_types::{ContentItem, ContentKind, Point};

use crate::desktop::drag::DragTracker;
use crate::desktop::state::IconLayout;
use crate::interop::{capture_pointer, get_desktop_canvas_size, pointer_point, release_pointer};

const ICON_SELECTOR: &str = ".desktop-icon";

/// Sprite sheet size per icon family
pub(crate) fn sprite_size(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Document | ContentKind::Embed | ContentKind::Image => "28px 72px",
        ContentKind::Folder | ContentKind::Audio => "36px 58px",
    }
}

#[component]
pub fn DesktopIcons(
    items: Vec<ContentItem>,
    layout: Signal<IconLayout>,
    on_activate: Callback<String>,
) -> Element {
    rsx! {
        for item in items {
            DesktopIcon {
                key: "{item.id}",
                item: item.clone(),
                layout,
                on_activate,
            }
        }
    }
}

#[component]
fn DesktopIcon(item: ContentItem, layout: Signal<IconLayout>, on_activate: Callback<String>) -> Element {
    let mut layout = layout;
    let mut drag = use_signal(DragTracker::default);
    let position = layout.read().position(&item.id);

    let id_for_move = item.id.clone();
    let id_for_open = item.id.clone();
    let background = sprite_size(item.kind);

    rsx! {
        div {
            class: "icon desktop-icon",
            id: "{item.id}",
            style: "left: {position.x}px; top: {position.y}px;",
            ondoubleclick: move |_| on_activate.call(id_for_open.clone()),
            onpointerdown: move |e| {
                let pointer_id = e.data().pointer_id();
                capture_pointer(&e, ICON_SELECTOR, pointer_id);
                drag.write().start(pointer_id, pointer_point(&e), position);
            },
            onpointermove: move |e| {
                let Some(session) = drag.read().session() else {
                    return;
                };
                if session.pointer_id != e.data().pointer_id() {
                    return;
                }
                let pointer = pointer_point(&e);
                let next: Point = match get_desktop_canvas_size() {
                    Some(canvas) => session.clamped_origin_for(pointer, canvas),
                    None => session.origin_for(pointer),
                };
                layout.write().set_position(&id_for_move, next);
            },
            onpointerup: move |e| {
                let pointer_id = e.data().pointer_id();
                if drag.write().end(pointer_id) {
                    release_pointer(&e, ICON_SELECTOR, pointer_id);
                }
            },
            onpointercancel: move |e| {
                drag.write().end(e.data().pointer_id());
            },
            onlostpointercapture: move |e| {
                drag.write().end(e.data().pointer_id());
            },

            div {
                class: "sprite-top {item.sprite}",
                style: "background-image: url({item.icon}); background-position: 0 0; background-size: {background};",
            }
            h5 { "{item.title}" }
        }
    }
}
