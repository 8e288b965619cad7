use dioxus::prelude::{Signal, WritableExt};
use dioxus_logger::tracing::debug;
use shared_types::{ContentKind, Point};

use crate::content::ContentCatalog;
use crate::desktop::state::{WindowRegistry, MUSIC_PLAYER_ID, MUSIC_PLAYER_POSITION};
use crate::media::MediaSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Ignore,
    PlayTrack(String),
    OpenWindow(String),
}

pub fn route_activation(catalog: &ContentCatalog, id: &str) -> Activation {
    match catalog.kind_of(id) {
        None => Activation::Ignore,
        Some(ContentKind::Audio) => Activation::PlayTrack(id.to_string()),
        Some(_) => Activation::OpenWindow(id.to_string()),
    }
}

/// Open the music player, or raise it when already open.
pub fn show_music_player(registry: &mut WindowRegistry) {
    if registry.is_open(MUSIC_PLAYER_ID) {
        registry.focus(MUSIC_PLAYER_ID);
    } else {
        registry.open_at(MUSIC_PLAYER_ID, MUSIC_PLAYER_POSITION);
    }
}

/// Open an item's window, raising it when already open.
pub fn show_item(registry: &mut WindowRegistry, id: &str) {
    if registry.is_open(id) {
        registry.focus(id);
    } else {
        registry.open(id);
    }
}

pub fn activate_item(
    id: &str,
    catalog: &ContentCatalog,
    mut windows: Signal<WindowRegistry>,
    media: &MediaSession,
) {
    match route_activation(catalog, id) {
        Activation::Ignore => debug!("ignoring activation of unknown item {id}"),
        Activation::PlayTrack(track) => {
            media.play_item(&track);
            show_music_player(&mut windows.write());
        }
        Activation::OpenWindow(window) => show_item(&mut windows.write(), &window),
    }
}

pub fn close_window(id: &str, mut windows: Signal<WindowRegistry>, media: &MediaSession) {
    if id == MUSIC_PLAYER_ID {
        media.update(|controller, _| controller.stop());
    }
    windows.write().close(id);
}

pub fn move_window(id: &str, point: Point, mut windows: Signal<WindowRegistry>) {
    windows.write().set_position(id, point);
}

pub fn focus_window(id: &str, mut windows: Signal<WindowRegistry>) {
    windows.write().focus(id);
}
