use dioxus::prelude::*;

use crate::components::{AppNavbar, CitationChart, SiteFooter};
use crate::core::sample::{self, PublicationRecord, FIELD_FILTERS, INDEX_FILTERS, YEAR_FILTERS};
use crate::core::session::use_session;
use crate::export;
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

#[component]
pub fn Explorer() -> Element {
    let handle = use_session();
    let session = handle.snapshot();
    let author = session.explorer_author().to_string();

    let summary = sample::author_summary(&author);
    let publications = sample::publications();
    let chart = sample::citation_chart();

    let mut status = use_signal(|| ExportStatus::Idle);

    let export_handler = {
        let author = author.clone();
        let records = publications.clone();
        move |_| {
            let outcome = export::host_target()
                .and_then(|target| export::export_publications(&author, &records, target.as_ref()));
            match outcome {
                Ok(filename) => status.set(ExportStatus::Done(filename)),
                Err(err) => {
                    tracing::warn!(%err, "publication export failed");
                    status.set(ExportStatus::Error(err.to_string()));
                }
            }
        }
    };

    let feedback = match status() {
        ExportStatus::Idle => None,
        ExportStatus::Done(file) => Some((
            "export__status export__status--success",
            t!("explorer-export-done", file = file),
        )),
        ExportStatus::Error(err) => Some(("export__status export__status--error", err)),
    };

    let stats = [
        (t!("stat-total-publications"), summary.total_publications),
        (t!("stat-total-citations"), summary.total_citations),
        (t!("stat-total-self-citations"), summary.total_self_citations),
        (t!("stat-nm-index"), summary.nm_index),
        (t!("stat-h-index"), summary.h_index),
        (t!("stat-c-score"), summary.c_score),
    ];

    rsx! {
        div { class: "page page-explorer",
            AppNavbar {}

            main { class: "page__main",
                div { class: "explorer__header",
                    h2 { class: "page-title", {t!("nav-explorer")} }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| {
                            handle.reset_search();
                            handle.navigate_to_dashboard();
                        },
                        i { class: "bx bx-reset" }
                        {t!("explorer-reset")}
                    }
                }

                section { class: "author-profile",
                    div { class: "author-profile__left",
                        div { class: "profile-card",
                            div { class: "profile-card__icon", i { class: "bx bxs-user" } }
                            div { class: "profile-card__info",
                                h3 { "{summary.name}" }
                                p { "{summary.email}" }
                            }
                        }
                        div { class: "stats-grid-small",
                            for (label, value) in stats {
                                div { key: "{label}", class: "stat-item",
                                    div { class: "stat-item__label", "{label}" }
                                    div { class: "stat-item__value", "{value}" }
                                }
                            }
                        }
                    }
                    CitationChart { data: chart }
                }

                FilterBar {}

                section { class: "publications",
                    for (i, publication) in publications.into_iter().enumerate() {
                        PublicationCard { key: "{i}", publication: publication }
                    }
                }

                div { class: "export",
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: export_handler,
                        {t!("explorer-export")}
                    }
                    if let Some((class_name, message)) = feedback {
                        p { class: "{class_name}", "{message}" }
                    }
                }
            }

            SiteFooter {}
        }
    }
}

/// Filter selects. Selections are kept as view state only; the publication
/// list does not react to them.
#[component]
fn FilterBar() -> Element {
    let mut field = use_signal(String::new);
    let mut year = use_signal(String::new);
    let mut h_index = use_signal(String::new);
    let mut nm_index = use_signal(String::new);

    rsx! {
        section { class: "filters",
            div { class: "filters__header",
                i { class: "bx bx-filter" }
                span { {t!("filter-title")} }
            }
            div { class: "filters__controls",
                FilterSelect {
                    label: t!("filter-field"),
                    placeholder: t!("filter-field-placeholder"),
                    options: FIELD_FILTERS,
                    value: field(),
                    on_change: move |v| field.set(v),
                }
                FilterSelect {
                    label: t!("filter-year"),
                    placeholder: t!("filter-year-placeholder"),
                    options: YEAR_FILTERS,
                    value: year(),
                    on_change: move |v| year.set(v),
                }
                FilterSelect {
                    label: t!("filter-h-index"),
                    placeholder: t!("filter-h-index"),
                    options: INDEX_FILTERS,
                    value: h_index(),
                    on_change: move |v| h_index.set(v),
                }
                FilterSelect {
                    label: t!("filter-nm-index"),
                    placeholder: t!("filter-nm-index"),
                    options: INDEX_FILTERS,
                    value: nm_index(),
                    on_change: move |v| nm_index.set(v),
                }
            }
        }
    }
}

#[component]
fn FilterSelect(
    label: String,
    placeholder: String,
    options: &'static [(&'static str, &'static str)],
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "filters__item",
            label { "{label}" }
            select {
                value: "{value}",
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                option { value: "", "{placeholder}" }
                for (v, text) in options.iter().copied() {
                    option { key: "{v}", value: "{v}", "{text}" }
                }
            }
        }
    }
}

#[component]
fn PublicationCard(publication: PublicationRecord) -> Element {
    rsx! {
        article { class: "publication-card",
            div { class: "publication-card__main",
                h3 { class: "publication-card__title", "{publication.title}" }
                div { class: "publication-card__fields",
                    for (i, field) in publication.fields.iter().enumerate() {
                        span { key: "{i}", class: "field-tag", "{field}" }
                    }
                }
                div { class: "publication-card__authors",
                    h4 { {t!("explorer-authors-contribution")} }
                    for (i, author) in publication.authors.iter().enumerate() {
                        p { key: "{i}", "{author}" }
                    }
                }
            }
            div { class: "publication-card__stats",
                div { class: "pub-stat",
                    div { class: "pub-stat__label", {t!("stat-total-self-citations")} }
                    div { class: "pub-stat__value", "{publication.total_self_citations}" }
                }
                div { class: "pub-stat",
                    div { class: "pub-stat__label", {t!("stat-published-year")} }
                    div { class: "pub-stat__value", "{publication.published_year}" }
                }
                div { class: "pub-stat",
                    div { class: "pub-stat__label", {t!("stat-total-citations")} }
                    div { class: "pub-stat__value", "{publication.total_citations}" }
                }
            }
        }
    }
}
