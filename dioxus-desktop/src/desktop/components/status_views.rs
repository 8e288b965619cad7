use dioxus::prelude::*;

#[component]
pub fn ErrorState(error: String) -> Element {
    rsx! {
        div {
            class: "error-state",
            p { class: "error-title", "YuriOS failed to start" }
            p { class: "error-detail", "{error}" }
        }
    }
}
