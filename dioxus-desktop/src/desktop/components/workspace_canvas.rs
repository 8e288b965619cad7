use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{ContentItem, Point, WindowSize};

use crate::content::ContentCatalog;
use crate::desktop::components::desktop_icons::DesktopIcons;
use crate::desktop::state::{IconLayout, WindowRegistry, MUSIC_PLAYER_ID};
use crate::desktop_window::FloatingWindow;
use crate::media::player::{MusicPlayer, MUSIC_PLAYER_TITLE};
use crate::media::MediaSession;
use crate::viewers::FileViewer;

/// Viewports at or below this width pin the player while music is active
pub const CONDENSED_MAX_WIDTH: u32 = 768;
const MUSIC_PLAYER_SIZE: WindowSize = WindowSize { w: 400, h: 280 };

pub fn is_condensed(viewport_width: u32, session_active: bool) -> bool {
    session_active && viewport_width <= CONDENSED_MAX_WIDTH
}

#[component]
pub fn WorkspaceCanvas(
    windows: Signal<WindowRegistry>,
    layout: Signal<IconLayout>,
    show_hidden: Signal<bool>,
    viewport: Signal<(u32, u32)>,
    on_activate: Callback<String>,
    on_close: Callback<String>,
    on_focus: Callback<String>,
    on_move: Callback<(String, Point)>,
) -> Element {
    let catalog = use_context::<Rc<ContentCatalog>>();
    let media = use_context::<MediaSession>();

    let mut icons: Vec<ContentItem> = catalog.items().to_vec();
    if show_hidden() {
        icons.extend(catalog.hidden().iter().cloned());
    }

    let condensed = is_condensed(viewport.read().0, media.playback().read().is_active());
    let registry = windows.read().clone();
    let focused = registry.focused().map(str::to_string);

    rsx! {
        div {
            class: "desktop-canvas",
            DesktopIcons { items: icons, layout, on_activate }

            // Stable node order; focus only changes z-index.
            for id in registry.render_order().iter().cloned() {
                if id == MUSIC_PLAYER_ID {
                    FloatingWindow {
                        key: "{id}",
                        id: id.clone(),
                        title: MUSIC_PLAYER_TITLE.to_string(),
                        position: if condensed { Point::default() } else { registry.position(&id) },
                        size: MUSIC_PLAYER_SIZE,
                        z_index: registry.z_index(&id),
                        is_active: focused.as_deref() == Some(id.as_str()),
                        draggable: !condensed,
                        class: if condensed { "music-player-window condensed".to_string() } else { "music-player-window".to_string() },
                        on_close,
                        on_focus,
                        on_move,
                        MusicPlayer {}
                    }
                } else if let Some(item) = catalog.find(&id).cloned() {
                    FloatingWindow {
                        key: "{id}",
                        id: id.clone(),
                        title: item.title.clone(),
                        position: registry.position(&id),
                        size: item.size_or_default(),
                        z_index: registry.z_index(&id),
                        is_active: focused.as_deref() == Some(id.as_str()),
                        on_close,
                        on_focus,
                        on_move,
                        FileViewer { item, on_activate }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condensed_only_on_small_screens_with_music() {
        assert!(is_condensed(768, true));
        assert!(is_condensed(375, true));
        assert!(!is_condensed(769, true));
        assert!(!is_condensed(375, false));
    }
}
