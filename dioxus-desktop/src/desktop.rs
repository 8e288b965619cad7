//! Desktop shell: gate screens, icons, windows and the media session

use dioxus::prelude::*;

pub mod actions;
pub mod boot;
pub mod components;
pub mod drag;
mod effects;
mod shell;
pub mod state;
mod styles;

pub use shell::DesktopShell;

#[component]
pub fn Desktop() -> Element {
    rsx! {
        DesktopShell {}
    }
}
