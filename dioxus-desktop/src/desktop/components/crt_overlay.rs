use dioxus::prelude::*;

/// Static noise, scanlines and vignette drawn over the whole screen.
#[component]
pub fn CrtOverlay() -> Element {
    rsx! {
        div { class: "crt-overlay", "aria-hidden": "true" }
        div { class: "crt-scanlines", "aria-hidden": "true" }
        div { class: "crt-vignette", "aria-hidden": "true" }
    }
}
