use dioxus::prelude::*;

use crate::components::{AppNavbar, SiteFooter};
use crate::core::config::DEFAULT_DESIGNATION;
use crate::core::password::validate_password_change;
use crate::core::session::use_session;
use crate::t;

/// Editable copy of the account details. Saving only updates this view;
/// the session's username and derived email are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub full_name: String,
    pub email: String,
    pub designation: String,
}

impl ProfileDraft {
    pub fn seeded(username: &str, email: &str) -> Self {
        Self {
            full_name: username.to_string(),
            email: email.to_string(),
            designation: DEFAULT_DESIGNATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum PasswordStatus {
    Idle,
    Changed,
    Rejected(String),
}

impl PasswordStatus {
    fn check(email: &str, password: &str, confirmation: &str) -> Self {
        match validate_password_change(email, password, confirmation) {
            Ok(()) => PasswordStatus::Changed,
            Err(err) => PasswordStatus::Rejected(err.to_string()),
        }
    }

    /// Rejections are shown in a modal that must be dismissed first.
    fn blocking_message(&self) -> Option<&str> {
        match self {
            PasswordStatus::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let handle = use_session();
    let session = handle.snapshot();

    let mut saved = use_signal(|| ProfileDraft::seeded(&session.username, &session.derived_email));
    let mut draft = use_signal(|| saved());
    let mut editing = use_signal(|| false);

    let mut pw_email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut pw_status = use_signal(|| PasswordStatus::Idle);

    let current = saved();
    let edit_label = if editing() {
        t!("profile-cancel")
    } else {
        t!("profile-edit")
    };

    let mut toggle_edit = move || {
        if !editing() {
            draft.set(saved());
        }
        editing.set(!editing());
    };

    let on_password_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = PasswordStatus::check(&pw_email(), &password(), &confirmation());
        match &outcome {
            PasswordStatus::Rejected(reason) => {
                tracing::warn!(%reason, "password change blocked");
            }
            _ => {
                tracing::info!(email = %pw_email(), "password change accepted");
                pw_email.set(String::new());
                password.set(String::new());
                confirmation.set(String::new());
            }
        }
        pw_status.set(outcome);
    };

    let status = pw_status();
    let pw_changed = status == PasswordStatus::Changed;
    let blocking_message = status.blocking_message().map(str::to_string);

    rsx! {
        div { class: "page page-profile",
            AppNavbar {}

            main { class: "page__main",
                div { class: "welcome",
                    h2 { {t!("profile-title")} }
                }

                section { class: "profile-stats",
                    ProfileStat { icon: "bx bxs-user-circle", label: t!("profile-full-name"), value: current.full_name.clone() }
                    ProfileStat { icon: "bx bxs-envelope", label: t!("profile-email"), value: current.email.clone() }
                    ProfileStat { icon: "bx bxs-briefcase", label: t!("profile-designation"), value: current.designation.clone() }
                }

                section { class: "section-box",
                    div { class: "section-box__header",
                        h2 { class: "section-title", {t!("profile-account")} }
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| toggle_edit(),
                            i { class: "bx bx-edit-alt" }
                            "{edit_label}"
                        }
                    }
                    div { class: "section-box__content",
                        if editing() {
                            form {
                                class: "account-form",
                                onsubmit: move |evt: FormEvent| {
                                    evt.prevent_default();
                                    let next = draft();
                                    tracing::debug!(?next, "profile saved");
                                    saved.set(next);
                                    editing.set(false);
                                },
                                div { class: "form-row",
                                    div { class: "form-group",
                                        label { i { class: "bx bx-user" } " " {t!("profile-full-name")} }
                                        input {
                                            r#type: "text",
                                            required: true,
                                            value: "{draft().full_name}",
                                            oninput: move |evt: FormEvent| draft.write().full_name = evt.value(),
                                        }
                                    }
                                    div { class: "form-group",
                                        label { i { class: "bx bx-envelope" } " " {t!("profile-email")} }
                                        input {
                                            r#type: "email",
                                            required: true,
                                            value: "{draft().email}",
                                            oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                                        }
                                    }
                                }
                                div { class: "form-row",
                                    div { class: "form-group",
                                        label { i { class: "bx bx-briefcase" } " " {t!("profile-designation")} }
                                        input {
                                            r#type: "text",
                                            required: true,
                                            value: "{draft().designation}",
                                            oninput: move |evt: FormEvent| draft.write().designation = evt.value(),
                                        }
                                    }
                                }
                                div { class: "form-actions",
                                    button { r#type: "submit", class: "button button--primary",
                                        i { class: "bx bx-check" }
                                        {t!("profile-save")}
                                    }
                                    button {
                                        r#type: "button",
                                        class: "button",
                                        onclick: move |_| toggle_edit(),
                                        i { class: "bx bx-x" }
                                        {t!("profile-cancel")}
                                    }
                                }
                            }
                        } else {
                            div { class: "account-info",
                                InfoRow { icon: "bx bx-user", label: t!("profile-full-name"), value: current.full_name.clone() }
                                InfoRow { icon: "bx bx-envelope", label: t!("profile-email"), value: current.email.clone() }
                                InfoRow { icon: "bx bx-briefcase", label: t!("profile-designation"), value: current.designation.clone() }
                            }
                        }
                    }
                }

                section { class: "section-box",
                    div { class: "section-box__header",
                        h2 { class: "section-title", {t!("profile-change-password")} }
                    }
                    div { class: "section-box__content",
                        form { class: "password-form", onsubmit: on_password_submit,
                            div { class: "form-row",
                                div { class: "form-group",
                                    label { {t!("profile-email")} }
                                    input {
                                        r#type: "email",
                                        required: true,
                                        value: "{pw_email}",
                                        oninput: move |evt: FormEvent| pw_email.set(evt.value()),
                                    }
                                }
                            }
                            div { class: "form-row",
                                div { class: "form-group",
                                    label { {t!("profile-new-password")} }
                                    input {
                                        r#type: "password",
                                        required: true,
                                        minlength: "8",
                                        value: "{password}",
                                        oninput: move |evt: FormEvent| password.set(evt.value()),
                                    }
                                }
                                div { class: "form-group",
                                    label { {t!("profile-confirm-password")} }
                                    input {
                                        r#type: "password",
                                        required: true,
                                        minlength: "8",
                                        value: "{confirmation}",
                                        oninput: move |evt: FormEvent| confirmation.set(evt.value()),
                                    }
                                }
                            }
                            if pw_changed {
                                p { class: "form-status form-status--success", {t!("profile-password-changed")} }
                            }
                            div { class: "form-actions",
                                button { r#type: "submit", class: "button button--accent",
                                    i { class: "bx bx-key" }
                                    {t!("profile-update-password")}
                                }
                            }
                        }
                    }
                }
            }

            SiteFooter {}

            if let Some(message) = blocking_message {
                div { class: "modal-backdrop",
                    div { class: "modal", role: "alertdialog", aria_modal: "true",
                        p { class: "form-status form-status--error", "{message}" }
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            autofocus: true,
                            onclick: move |_| pw_status.set(PasswordStatus::Idle),
                            {t!("profile-dismiss")}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileStat(icon: &'static str, label: String, value: String) -> Element {
    rsx! {
        div { class: "stat-card profile-stat",
            div { class: "profile-stat__icon", i { class: "{icon}" } }
            div { class: "profile-stat__info",
                div { class: "stat-card__label", "{label}" }
                div { class: "profile-stat__value", "{value}" }
            }
        }
    }
}

#[component]
fn InfoRow(icon: &'static str, label: String, value: String) -> Element {
    rsx! {
        div { class: "info-item",
            div { class: "info-item__label",
                i { class: "{icon}" }
                span { "{label}" }
            }
            div { class: "info-item__value", "{value}" }
        }
    }
}
