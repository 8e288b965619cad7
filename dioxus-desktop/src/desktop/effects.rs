use std::rc::Rc;

use chrono::Local;
use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use dioxus_logger::tracing::{debug, info};
use gloo_timers::future::TimeoutFuture;
use shared_types::Screen;

use crate::config::SiteConfig;
use crate::desktop::boot::Gate;
use crate::desktop::components::navbar::format_clock;
use crate::interop::{get_viewport_size, inject_script_once, WindowListener};
use crate::media::MediaSession;

const CLOCK_INTERVAL_MS: u32 = 1_000;
const MEDIA_PUMP_INTERVAL_MS: u32 = 16;
const ANALYTICS_SCRIPT_ID: &str = "yurios-analytics";

/// Keep `viewport` in sync with the window size while the guard lives.
pub fn track_viewport(mut viewport: Signal<(u32, u32)>) -> Option<Rc<WindowListener>> {
    if let Some(size) = get_viewport_size() {
        viewport.set(size);
    }

    WindowListener::new(&["resize", "orientationchange"], move |_| {
        if let Some(size) = get_viewport_size() {
            viewport.set(size);
        }
    })
    .map(Rc::new)
}

pub async fn run_clock(mut clock: Signal<String>) {
    loop {
        let now = format_clock(&Local::now().naive_local());
        if *clock.peek() != now {
            clock.set(now);
        }
        TimeoutFuture::new(CLOCK_INTERVAL_MS).await;
    }
}

/// Reveal boot lines on their own delays until the script ends or the boot
/// screen is left. Ticks armed before a fast-forward are dropped by the gate.
pub async fn run_boot_script(mut gate: Signal<Gate>) {
    loop {
        let next = {
            let current = gate.peek();
            if current.screen() != Screen::Boot {
                return;
            }
            current.boot.next_tick()
        };
        let Some((generation, delay_ms)) = next else {
            return;
        };
        TimeoutFuture::new(delay_ms).await;
        if !gate.write().boot.tick(generation) {
            debug!("dropped stale boot tick");
        }
    }
}

/// Drain settled play results and fire controller deadlines.
pub async fn run_media_pump(media: MediaSession) {
    loop {
        media.pump();
        TimeoutFuture::new(MEDIA_PUMP_INTERVAL_MS).await;
    }
}

pub fn inject_analytics(config: &SiteConfig) {
    let Some(src) = config.analytics_script() else {
        return;
    };
    if inject_script_once(ANALYTICS_SCRIPT_ID, src) {
        info!("analytics enabled");
    }
}
