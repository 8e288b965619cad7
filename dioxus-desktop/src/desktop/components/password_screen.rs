use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::desktop::boot::Gate;

#[component]
pub fn PasswordScreen(gate: Signal<Gate>) -> Element {
    let mut gate = gate;
    let mut submit = move || {
        if gate.write().submit_password() {
            info!("desktop unlocked");
        }
    };

    let current = gate.read();
    let input_class = if current.password.has_error() {
        "password-input error"
    } else {
        "password-input"
    };
    let value = current.password.input().to_string();
    let hint = current.password.hint();
    drop(current);

    rsx! {
        div {
            class: "password-screen",
            div {
                class: "input-box",
                div {
                    class: "outline",
                    p { "Welcome User!" }
                    div {
                        class: "password-hold",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "{input_class}",
                            r#type: "password",
                            autofocus: true,
                            value: "{value}",
                            oninput: move |e| gate.write().password.edit(e.value()),
                            onkeydown: move |e| {
                                if e.key() == Key::Enter {
                                    submit();
                                }
                            },
                        }
                        p {
                            id: "password-hint",
                            onclick: move |_| gate.write().password.reveal_hint(),
                            "{hint}"
                        }
                        button { r#type: "button", onclick: move |_| submit(), "OK" }
                    }
                }
            }
        }
    }
}
