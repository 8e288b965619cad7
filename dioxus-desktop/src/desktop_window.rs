use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::{Point, WindowSize};

use crate::desktop::drag::DragTracker;
use crate::interop::{capture_pointer, pointer_point, release_pointer};

/// Length of the open and close animations
pub const WINDOW_TRANSITION_MS: u32 = 300;
const WINDOW_SELECTOR: &str = ".floating-window";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowPhase {
    Opening,
    Open,
    Closing,
}

impl WindowPhase {
    fn class(self) -> &'static str {
        match self {
            WindowPhase::Opening => "opening",
            WindowPhase::Open => "open",
            WindowPhase::Closing => "closing",
        }
    }
}

fn window_class(phase: WindowPhase, is_active: bool, extra: Option<&str>) -> String {
    let mut class = format!("floating-window {}", phase.class());
    if is_active {
        class.push_str(" active");
    }
    if let Some(extra) = extra {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

fn window_style(position: Point, size: WindowSize, z_index: usize) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px; z-index: {z_index};",
        position.x, position.y, size.w, size.h
    )
}

#[component]
pub fn FloatingWindow(
    id: String,
    title: String,
    position: Point,
    size: WindowSize,
    z_index: usize,
    is_active: bool,
    #[props(default = true)] draggable: bool,
    class: Option<String>,
    on_close: Callback<String>,
    on_focus: Callback<String>,
    on_move: Callback<(String, Point)>,
    children: Element,
) -> Element {
    let mut phase = use_signal(|| WindowPhase::Opening);
    let mut drag = use_signal(DragTracker::default);
    let mut live_position = use_signal(|| None::<Point>);

    use_hook(move || {
        spawn(async move {
            TimeoutFuture::new(WINDOW_TRANSITION_MS).await;
            if phase() == WindowPhase::Opening {
                phase.set(WindowPhase::Open);
            }
        });
    });

    let shown_at = if draggable {
        live_position().unwrap_or(position)
    } else {
        position
    };
    let style = window_style(shown_at, size, z_index);
    let class = window_class(phase(), is_active, class.as_deref());

    let id_for_focus = id.clone();
    let id_for_move = id.clone();
    let id_for_up = id.clone();
    let id_for_lost = id.clone();
    let id_for_close = id;

    let close = move |e: MouseEvent| {
        e.stop_propagation();
        if phase() == WindowPhase::Closing {
            return;
        }
        phase.set(WindowPhase::Closing);
        let id = id_for_close.clone();
        spawn(async move {
            TimeoutFuture::new(WINDOW_TRANSITION_MS).await;
            on_close.call(id);
        });
    };

    rsx! {
        div {
            class: "{class}",
            role: "dialog",
            "aria-label": title.clone(),
            style: "{style}",
            onpointerdown: move |_| {
                if !is_active {
                    on_focus.call(id_for_focus.clone());
                }
            },
            onpointermove: move |e| {
                if let Some(next) = drag.read().update(e.data().pointer_id(), pointer_point(&e)) {
                    live_position.set(Some(next));
                    on_move.call((id_for_move.clone(), next));
                }
            },
            onpointerup: move |e| {
                let pointer_id = e.data().pointer_id();
                if drag.write().end(pointer_id) {
                    release_pointer(&e, WINDOW_SELECTOR, pointer_id);
                    if let Some(last) = live_position() {
                        on_move.call((id_for_up.clone(), last));
                    }
                    live_position.set(None);
                }
            },
            onpointercancel: move |e| {
                let pointer_id = e.data().pointer_id();
                if drag.write().end(pointer_id) {
                    release_pointer(&e, WINDOW_SELECTOR, pointer_id);
                    live_position.set(None);
                }
            },
            // Capture can be lost without a pointerup reaching the window.
            onlostpointercapture: move |e| {
                if drag.write().end(e.data().pointer_id()) {
                    if let Some(last) = live_position() {
                        on_move.call((id_for_lost.clone(), last));
                    }
                    live_position.set(None);
                }
            },

            div {
                class: if draggable { "window-titlebar draggable" } else { "window-titlebar" },
                onpointerdown: move |e| {
                    if !draggable {
                        return;
                    }
                    e.prevent_default();
                    let pointer_id = e.data().pointer_id();
                    capture_pointer(&e, WINDOW_SELECTOR, pointer_id);
                    drag.write().start(pointer_id, pointer_point(&e), position);
                },

                button {
                    class: "window-close",
                    "aria-label": "Close",
                    onpointerdown: move |e| e.stop_propagation(),
                    onclick: close,
                }
                span { class: "window-title", "{title}" }
            }

            div {
                class: "window-content",
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_reflects_phase_and_focus() {
        assert_eq!(
            window_class(WindowPhase::Opening, false, None),
            "floating-window opening"
        );
        assert_eq!(
            window_class(WindowPhase::Open, true, Some("music-player-window")),
            "floating-window open active music-player-window"
        );
        assert_eq!(
            window_class(WindowPhase::Closing, true, None),
            "floating-window closing active"
        );
    }

    #[test]
    fn style_places_window_and_stacks_it() {
        let style = window_style(Point::new(-20, 35), WindowSize { w: 400, h: 280 }, 12);
        assert_eq!(
            style,
            "left: -20px; top: 35px; width: 400px; height: 280px; z-index: 12;"
        );
    }
}
