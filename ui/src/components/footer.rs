use dioxus::prelude::*;

use crate::core::session::{use_session, Page, Session};
use crate::t;

use super::app_navbar::{follow_link, nav_links, page_label, NavLink};

const RESOURCES: &[(&str, &str)] = &[
    ("#docs", "Documentation"),
    ("#api", "API Reference"),
    ("#tutorials", "Tutorials"),
    ("#faq", "FAQ"),
];

const CONTACT: &[(&str, &str)] = &[
    ("#support", "Support Center"),
    ("mailto:info@academine.edu", "info@academine.edu"),
    ("#feedback", "Send Feedback"),
    ("#report", "Report an Issue"),
];

/// Footer quick links: the header links with Profile ahead of About.
pub fn footer_links(session: &Session) -> Vec<NavLink> {
    let mut links = nav_links(session);
    let at = links
        .iter()
        .position(|link| link.page == Page::About)
        .unwrap_or(links.len());
    links.insert(
        at,
        NavLink {
            page: Page::Profile,
            active: session.page == Page::Profile,
        },
    );
    links
}

#[component]
pub fn SiteFooter() -> Element {
    let handle = use_session();
    let session = handle.snapshot();

    let quick_links = footer_links(&session);

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__content",
                div { class: "site-footer__section",
                    div { class: "site-footer__title",
                        i { class: "bx bx-file" }
                        h3 { "ScholarMetrics" }
                    }
                    p { {t!("footer-blurb")} }
                }

                div { class: "site-footer__section",
                    h4 { {t!("footer-quick-links")} }
                    ul {
                        for link in quick_links {
                            li { key: "{link.page:?}",
                                a {
                                    href: "#",
                                    onclick: {
                                        let session = session.clone();
                                        move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            follow_link(handle, link, &session);
                                        }
                                    },
                                    "{page_label(link.page)}"
                                }
                            }
                        }
                    }
                }

                div { class: "site-footer__section",
                    h4 { {t!("footer-resources")} }
                    ul {
                        for (href, label) in RESOURCES.iter().copied() {
                            li { key: "{href}", a { href: "{href}", "{label}" } }
                        }
                    }
                }

                div { class: "site-footer__section",
                    h4 { {t!("footer-contact")} }
                    ul {
                        for (href, label) in CONTACT.iter().copied() {
                            li { key: "{href}", a { href: "{href}", "{label}" } }
                        }
                    }
                }
            }
        }
    }
}
