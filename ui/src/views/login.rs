use dioxus::prelude::*;

use crate::core::session::use_session;
use crate::t;

/// Login / registration screen. Neither form verifies anything: submitting
/// logs in under the entered username (or the placeholder user).
#[component]
pub fn Login() -> Element {
    let handle = use_session();
    let mut registering = use_signal(|| false);
    let mut login_username = use_signal(String::new);
    let mut register_username = use_signal(String::new);

    let container_class = if registering() {
        "auth auth--register"
    } else {
        "auth"
    };

    rsx! {
        section { class: "{container_class}",
            div { class: "auth__form auth__form--login",
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        handle.login(login_username());
                    },
                    h1 { {t!("login-title")} }
                    div { class: "input-box",
                        input {
                            r#type: "text",
                            placeholder: t!("form-username"),
                            required: true,
                            value: "{login_username}",
                            oninput: move |evt: FormEvent| login_username.set(evt.value()),
                        }
                        i { class: "bx bxs-user" }
                    }
                    div { class: "input-box",
                        input { r#type: "password", placeholder: t!("form-password"), required: true }
                        i { class: "bx bxs-lock-alt" }
                    }
                    div { class: "auth__forgot",
                        a { href: "#", {t!("login-forgot")} }
                    }
                    button { r#type: "submit", class: "button button--primary", {t!("login-submit")} }
                    SocialIcons { caption: t!("login-social") }
                }
            }

            div { class: "auth__form auth__form--register",
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        handle.login(register_username());
                    },
                    h1 { {t!("register-title")} }
                    div { class: "input-box",
                        input {
                            r#type: "text",
                            placeholder: t!("form-username"),
                            required: true,
                            value: "{register_username}",
                            oninput: move |evt: FormEvent| register_username.set(evt.value()),
                        }
                        i { class: "bx bxs-user" }
                    }
                    div { class: "input-box",
                        input { r#type: "email", placeholder: t!("form-email"), required: true }
                        i { class: "bx bxs-envelope" }
                    }
                    div { class: "input-box",
                        input { r#type: "text", placeholder: t!("form-designation"), required: true }
                        i { class: "bx bxs-briefcase" }
                    }
                    div { class: "input-box",
                        input { r#type: "password", placeholder: t!("form-password"), required: true }
                        i { class: "bx bxs-lock-alt" }
                    }
                    button { r#type: "submit", class: "button button--primary", {t!("register-submit")} }
                    SocialIcons { caption: t!("register-social") }
                }
            }

            div { class: "auth__toggle",
                div { class: "auth__panel auth__panel--left",
                    h1 { {t!("auth-welcome")} }
                    p { {t!("auth-no-account")} }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| registering.set(true),
                        {t!("register-submit")}
                    }
                }
                div { class: "auth__panel auth__panel--right",
                    h1 { {t!("auth-welcome-back")} }
                    p { {t!("auth-has-account")} }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| registering.set(false),
                        {t!("login-submit")}
                    }
                }
            }
        }
    }
}

#[component]
fn SocialIcons(caption: String) -> Element {
    rsx! {
        p { "{caption}" }
        div { class: "auth__social",
            for icon in ["bxl-google", "bxl-facebook", "bxl-github", "bxl-linkedin"] {
                a { key: "{icon}", href: "#", i { class: "bx {icon}" } }
            }
        }
    }
}
