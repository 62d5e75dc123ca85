use dioxus::prelude::*;

use crate::components::{AppNavbar, SiteFooter};
use crate::core::sample::{PopularField, POPULAR_FIELDS, PORTAL_STATS};
use crate::core::session::{search_query, use_session};
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let handle = use_session();
    let session = handle.snapshot();
    let mut query = use_signal(String::new);

    let welcome = t!("dashboard-welcome");
    let stats = PORTAL_STATS;

    rsx! {
        div { class: "page page-dashboard",
            AppNavbar {}

            main { class: "page__main",
                div { class: "welcome",
                    h2 { "{welcome} {session.username}!" }
                }

                section { class: "dashboard-stats",
                    h2 { class: "section-title", {t!("dashboard-quick-stats")} }
                    div { class: "stats-grid",
                        div { class: "stat-card",
                            div { class: "stat-card__number", "{stats.publications}" }
                            div { class: "stat-card__label", {t!("stat-publications")} }
                        }
                        div { class: "stat-card stat-card--highlight",
                            div { class: "stat-card__number", "{stats.authors}" }
                            div { class: "stat-card__label", {t!("stat-authors")} }
                        }
                        div { class: "stat-card",
                            div { class: "stat-card__number", "{stats.fields}" }
                            div { class: "stat-card__label", {t!("stat-fields")} }
                        }
                    }
                }

                section { class: "dashboard-search",
                    h2 { class: "section-title", {t!("dashboard-author-search")} }
                    form {
                        class: "search-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            let raw = query();
                            if let Some(author) = search_query(&raw) {
                                handle.navigate_to_explorer(author);
                            }
                        },
                        input {
                            r#type: "text",
                            class: "search-form__input",
                            placeholder: t!("dashboard-search-placeholder"),
                            value: "{query}",
                            oninput: move |evt: FormEvent| query.set(evt.value()),
                        }
                        button { r#type: "submit", class: "search-form__button",
                            i { class: "bx bx-search" }
                        }
                    }
                }

                section { class: "dashboard-fields",
                    h2 { class: "section-title", {t!("dashboard-popular-fields")} }
                    div { class: "fields-scroll",
                        div { class: "fields-grid",
                            for field in POPULAR_FIELDS.iter().copied() {
                                FieldCard { key: "{field.name}", field: field }
                            }
                        }
                    }
                }
            }

            SiteFooter {}
        }
    }
}

#[component]
fn FieldCard(field: PopularField) -> Element {
    rsx! {
        div {
            class: "field-card",
            onclick: move |_| tracing::debug!(field = field.name, "popular field selected"),
            img { class: "field-card__image", src: "{field.image}", alt: "{field.name}" }
            div { class: "field-card__overlay",
                h3 { "{field.name}" }
            }
        }
    }
}
