use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;

use crate::desktop::boot::{key_advances_boot, BootInput, BootLineKind, Gate, BOOT_EXIT_DELAY_MS};
use crate::desktop::effects;
use crate::interop::WindowListener;

#[component]
pub fn BootScreen(gate: Signal<Gate>) -> Element {
    let mut exiting = use_signal(|| false);

    use_hook(move || {
        spawn(async move {
            effects::run_boot_script(gate).await;
        });
    });

    use_hook(move || {
        let mut gate = gate;
        WindowListener::new(&["keydown", "click"], move |event| {
            if *exiting.peek() {
                return;
            }
            if let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                if !key_advances_boot(&key.key()) {
                    return;
                }
            }
            if gate.write().boot_input() == BootInput::Finished {
                exiting.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(BOOT_EXIT_DELAY_MS).await;
                    gate.write().finish_boot();
                });
            }
        })
        .map(Rc::new)
    });

    let boot = gate.read().boot.clone();
    let lines = boot.visible_lines();

    rsx! {
        div {
            class: if exiting() { "bios exiting" } else { "bios" },
            div {
                class: "text",
                for (index, line) in lines.iter().enumerate() {
                    {match line.kind {
                        BootLineKind::Text(text) => rsx! { p { key: "{index}", "{text}" } },
                        BootLineKind::Spacer => rsx! { div { key: "{index}", class: "spacer" } },
                        BootLineKind::Prompt => rsx! {
                            p {
                                key: "{index}",
                                "Press "
                                span { class: "blinking", "Any Key" }
                                " to boot system"
                            }
                        },
                    }}
                }
                if boot.shows_cursor() {
                    span { class: "blinking", "_" }
                }
            }
        }
    }
}
