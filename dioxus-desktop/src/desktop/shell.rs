use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};
use shared_types::{PlaybackState, Point, Screen};

use crate::config::SiteConfig;
use crate::content::ContentCatalog;
use crate::desktop::actions;
use crate::desktop::boot::Gate;
use crate::desktop::components::boot_screen::BootScreen;
use crate::desktop::components::crt_overlay::CrtOverlay;
use crate::desktop::components::navbar::Navbar;
use crate::desktop::components::password_screen::PasswordScreen;
use crate::desktop::components::status_views::ErrorState;
use crate::desktop::components::workspace_canvas::WorkspaceCanvas;
use crate::desktop::effects;
use crate::desktop::state::{IconLayout, WindowRegistry};
use crate::desktop::styles::DESKTOP_STYLES;
use crate::media::player::{AudioElement, BackgroundVideo};
use crate::media::MediaSession;

const BANANA_ICON: &str = "/pixel-banana.svg";

fn load_site() -> Result<(SiteConfig, Rc<ContentCatalog>), String> {
    let config = SiteConfig::from_build_env().map_err(|e| e.to_string())?;
    let catalog = ContentCatalog::embedded(&config).map_err(|e| e.to_string())?;
    Ok((config, Rc::new(catalog)))
}

#[component]
pub fn DesktopShell() -> Element {
    let loaded = use_hook(|| {
        let loaded = load_site();
        if let Err(message) = &loaded {
            error!("failed to load site: {message}");
        }
        loaded
    });

    match loaded {
        Ok((config, catalog)) => rsx! {
            DesktopSession { config, catalog }
        },
        Err(message) => rsx! {
            style { {DESKTOP_STYLES} }
            ErrorState { error: message }
        },
    }
}

#[component]
fn DesktopSession(config: SiteConfig, catalog: Rc<ContentCatalog>) -> Element {
    let catalog = use_context_provider(|| catalog);
    let config = use_context_provider(|| config);

    let playback = use_signal(PlaybackState::default);
    let cooling_down = use_signal(|| false);
    let media = {
        let tracks = catalog.tracks().to_vec();
        use_context_provider(move || MediaSession::new(tracks, playback, cooling_down))
    };

    let gate = use_signal(Gate::default);
    let windows = use_signal(WindowRegistry::new);
    let mut layout = {
        let catalog = catalog.clone();
        use_signal(move || IconLayout::for_items(catalog.items()))
    };
    let show_hidden = use_signal(|| false);
    let viewport = use_signal(|| (0u32, 0u32));
    let clock = use_signal(String::new);

    use_hook(move || effects::track_viewport(viewport));

    {
        let media = media.clone();
        let config = config.clone();
        use_hook(move || {
            info!("YuriOS starting");
            effects::inject_analytics(&config);
            spawn(effects::run_clock(clock));
            spawn(effects::run_media_pump(media));
        });
    }

    // Hidden items keep their slot once revealed.
    {
        let catalog = catalog.clone();
        use_effect(move || {
            if show_hidden() {
                layout
                    .write()
                    .reveal(catalog.items().len(), catalog.hidden());
            }
        });
    }

    let on_activate = {
        let catalog = catalog.clone();
        let media = media.clone();
        use_callback(move |id: String| {
            actions::activate_item(&id, &catalog, windows, &media);
        })
    };
    let on_close = {
        let media = media.clone();
        use_callback(move |id: String| actions::close_window(&id, windows, &media))
    };
    let on_focus = use_callback(move |id: String| actions::focus_window(&id, windows));
    let on_move = use_callback(move |(id, point): (String, Point)| {
        actions::move_window(&id, point, windows);
    });

    let screen = gate.read().screen();
    let banana_icon = config.with_base(BANANA_ICON);
    let links = catalog.links().to_vec();
    let shows_video = playback.read().shows_video();
    let on_click_gesture = media.clone();
    let on_key_gesture = media;

    rsx! {
        style { {DESKTOP_STYLES} }
        div {
            class: "yurios-root",
            onclick: move |_| on_click_gesture.on_user_gesture(),
            onkeydown: move |_| on_key_gesture.on_user_gesture(),

            BackgroundVideo {}
            AudioElement {}

            {match screen {
                Screen::Boot => rsx! {
                    BootScreen { gate }
                },
                Screen::Password => rsx! {
                    Navbar { clock, links, show_hidden: None, banana_icon }
                    PasswordScreen { gate }
                },
                Screen::Desktop => rsx! {
                    Navbar { clock, links, show_hidden: Some(show_hidden), banana_icon }
                    div {
                        class: if shows_video { "desktop with-video" } else { "desktop" },
                        WorkspaceCanvas {
                            windows,
                            layout,
                            show_hidden,
                            viewport,
                            on_activate,
                            on_close,
                            on_focus,
                            on_move,
                        }
                    }
                },
            }}

            CrtOverlay {}
        }
    }
}
