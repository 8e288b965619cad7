use std::rc::Rc;

use chrono::{Datelike, NaiveDateTime, Timelike};
use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::content::ExternalLink;
use crate::interop::{reload_page, WindowListener};

const MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "Jun.", "July", "Aug.", "Sep.", "Oct.", "Nov.", "Dec.",
];
/// The desktop lives in 2049 whatever the host clock says
const LORE_YEAR: u32 = 2049;

/// `ALCON1 {h}:{mm}{AM|PM} - {Mon} {day}, 2049`
pub fn format_clock(now: &NaiveDateTime) -> String {
    let (is_pm, hour) = now.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    let month = MONTHS[now.month0() as usize];
    format!(
        "ALCON1 {hour}:{:02}{meridiem} - {month} {}, {LORE_YEAR}",
        now.minute(),
        now.day()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Banana,
    File,
    Edit,
    Special,
}

fn toggle(open: Option<Menu>, menu: Menu) -> Option<Menu> {
    if open == Some(menu) {
        None
    } else {
        Some(menu)
    }
}

fn click_is_inside_menus(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            element.closest("nav").ok().flatten().is_some()
                || element.closest(".dropdown").ok().flatten().is_some()
        })
        .unwrap_or(false)
}

#[component]
pub fn Navbar(
    clock: Signal<String>,
    links: Vec<ExternalLink>,
    #[props(!optional)] show_hidden: Option<Signal<bool>>,
    banana_icon: String,
) -> Element {
    let mut open = use_signal(|| None::<Menu>);

    use_hook(move || {
        WindowListener::new(&["click"], move |event| {
            if !click_is_inside_menus(&event) && open.peek().is_some() {
                open.set(None);
            }
        })
        .map(Rc::new)
    });

    // No flag means the hidden-files toggle is not offered.
    let hidden_toggle = show_hidden.map(|flag| {
        let label = if flag() {
            "Hide Hidden Files"
        } else {
            "Show Hidden Files"
        };
        (flag, label)
    });

    rsx! {
        nav {
            div {
                class: "nav-menus",
                a {
                    class: "nav-item nav-logo",
                    onclick: move |_| open.set(toggle(open(), Menu::Banana)),
                    img { src: "{banana_icon}", alt: "Banana" }
                }
                a { class: "nav-item", onclick: move |_| open.set(toggle(open(), Menu::File)), "File" }
                a { class: "nav-item", onclick: move |_| open.set(toggle(open(), Menu::Edit)), "Edit" }
                a { class: "nav-item", onclick: move |_| open.set(toggle(open(), Menu::Special)), "Special" }
            }
            p { id: "time", "{clock}" }
        }

        {match open() {
            Some(Menu::Banana) => rsx! {
                div {
                    class: "dropdown banana",
                    ul {
                        li { "About" }
                        li { class: "unclickable", "Battery" }
                        li { onclick: move |_| reload_page(), "Restart" }
                    }
                }
            },
            Some(Menu::File) => rsx! {
                div {
                    class: "dropdown file",
                    ul {
                        li { class: "unclickable", "New" }
                        li { class: "unclickable", "Open" }
                        if let Some((flag, label)) = hidden_toggle {
                            li {
                                onclick: move |_| {
                                    let mut flag = flag;
                                    flag.set(!flag());
                                    open.set(None);
                                },
                                "{label}"
                            }
                        }
                    }
                }
            },
            Some(Menu::Edit) => rsx! {
                div {
                    class: "dropdown edit",
                    ul {
                        li { class: "unclickable", "Undo" }
                        li { class: "unclickable", "Copy" }
                        li { class: "unclickable", "Paste" }
                        li { class: "unclickable", "Print" }
                    }
                }
            },
            Some(Menu::Special) => rsx! {
                div {
                    class: "dropdown special",
                    ul {
                        for link in links.iter() {
                            a {
                                key: "{link.href}",
                                href: "{link.href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                li { "{link.label}" }
                            }
                        }
                    }
                }
            },
            None => rsx! {},
        }}
    }
}
