use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::interop::canvas_by_id;
use crate::media::controller::{display_title, format_time};
use crate::media::session::{MediaSession, AUDIO_ELEMENT_ID, VIDEO_ELEMENT_ID};
use crate::media::visualizer::{CANVAS_HEIGHT, CANVAS_WIDTH};

pub const MUSIC_PLAYER_TITLE: &str = "Music Player";
const VISUALIZER_CANVAS_ID: &str = "yurios-visualizer";
const FRAME_MS: u32 = 16;
const ARTIST: &str = "@uri.sound";

/// Player body shown inside the music player window.
#[component]
pub fn MusicPlayer() -> Element {
    let media = use_context::<MediaSession>();
    let playback = media.playback();
    let cooling_down = media.cooling_down();

    {
        let media = media.clone();
        use_hook(move || {
            spawn(async move {
                loop {
                    TimeoutFuture::new(FRAME_MS).await;
                    if let Some(canvas) = canvas_by_id(VISUALIZER_CANVAS_ID) {
                        media.draw(&canvas);
                    }
                }
            });
        });
    }

    let state = playback.read().clone();
    let time = format!(
        "{} / {}",
        format_time(state.current_time),
        format_time(state.duration)
    );
    let title = display_title(state.title.as_deref().unwrap_or_default());
    let navigation_disabled = cooling_down();

    let media_prev = media.clone();
    let media_play = media.clone();
    let media_next = media;

    rsx! {
        div {
            class: "music-player",
            div {
                class: "audio-visualizer",
                canvas {
                    id: VISUALIZER_CANVAS_ID,
                    width: "{CANVAS_WIDTH}",
                    height: "{CANVAS_HEIGHT}",
                }
            }
            div { class: "divider" }
            div { class: "playback-time", "{time}" }
            div {
                class: "song-info",
                div { class: "song-title", "{title}" }
                div { class: "song-artist", "{ARTIST}" }
            }
            div {
                class: "player-controls",
                button {
                    class: "control-btn prev-btn",
                    "aria-label": "Previous",
                    disabled: navigation_disabled,
                    onclick: move |_| {
                        media_prev.update(|controller, now| controller.previous(now));
                    },
                    svg {
                        width: "16",
                        height: "16",
                        view_box: "0 0 16 16",
                        path { d: "M8 2 L2 8 L8 14", stroke: "currentColor", stroke_width: "2", fill: "none" }
                        path { d: "M14 2 L8 8 L14 14", stroke: "currentColor", stroke_width: "2", fill: "none" }
                    }
                }
                button {
                    class: "control-btn play-pause-btn",
                    "aria-label": if state.playing { "Pause" } else { "Play" },
                    onclick: move |_| media_play.toggle_play(),
                    svg {
                        width: "16",
                        height: "16",
                        view_box: "0 0 16 16",
                        fill: "currentColor",
                        if state.playing {
                            rect { x: "4", y: "2", width: "3", height: "12" }
                            rect { x: "9", y: "2", width: "3", height: "12" }
                        } else {
                            path { d: "M4 2 L14 8 L4 14 Z" }
                        }
                    }
                }
                button {
                    class: "control-btn next-btn",
                    "aria-label": "Next",
                    disabled: navigation_disabled,
                    onclick: move |_| {
                        media_next.update(|controller, now| controller.next(now));
                    },
                    svg {
                        width: "16",
                        height: "16",
                        view_box: "0 0 16 16",
                        path { d: "M2 2 L8 8 L2 14", stroke: "currentColor", stroke_width: "2", fill: "none" }
                        path { d: "M8 2 L14 8 L8 14", stroke: "currentColor", stroke_width: "2", fill: "none" }
                    }
                }
            }
        }
    }
}

/// The single `<audio>` element. Mounted for the page lifetime; only the
/// controller sets its source.
#[component]
pub fn AudioElement() -> Element {
    let media = use_context::<MediaSession>();
    let on_ready = media.clone();
    let on_time = media.clone();
    let on_meta = media.clone();
    let on_ended = media.clone();
    let on_error = media;

    rsx! {
        audio {
            id: AUDIO_ELEMENT_ID,
            preload: "auto",
            crossorigin: "anonymous",
            oncanplaythrough: move |_| {
                on_ready.update(|controller, now| controller.on_audio_can_play_through(now));
            },
            ontimeupdate: move |_| on_time.update(|controller, _| controller.on_progress()),
            onloadedmetadata: move |_| on_meta.update(|controller, _| controller.on_progress()),
            onended: move |_| on_ended.update(|controller, _| controller.on_audio_ended()),
            onerror: move |_| {
                on_error.update(|controller, _| controller.on_audio_error());
            },
        }
    }
}

/// Full-screen looping video behind the desktop, shown while the session has one.
#[component]
pub fn BackgroundVideo() -> Element {
    let media = use_context::<MediaSession>();
    let visible = media.playback().read().shows_video();
    let on_can_play = media.clone();
    let on_data = media.clone();
    let on_meta = media.clone();
    let on_ended = media;

    rsx! {
        video {
            id: VIDEO_ELEMENT_ID,
            class: if visible { "background-video visible" } else { "background-video" },
            muted: true,
            r#loop: true,
            playsinline: true,
            preload: "auto",
            "aria-hidden": "true",
            oncanplay: move |_| on_can_play.update(|controller, _| controller.on_video_ready()),
            onloadeddata: move |_| on_data.update(|controller, _| controller.on_video_ready()),
            onloadedmetadata: move |_| on_meta.update(|controller, _| controller.on_video_ready()),
            onended: move |_| on_ended.update(|controller, _| controller.on_video_ended()),
        }
    }
}
