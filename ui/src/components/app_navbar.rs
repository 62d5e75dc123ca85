use crate::core::session::{use_session, Page, Session, SessionHandle};
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

/// One entry of the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub page: Page,
    pub active: bool,
}

/// Header links for `session`. The "Data Explorer" entry is present iff a
/// search has been submitted; Profile is reached through the user icon and
/// Logout is a separate button, so neither appears here.
pub fn nav_links(session: &Session) -> Vec<NavLink> {
    let mut pages = vec![Page::Dashboard];
    if session.has_searched_author {
        pages.push(Page::Explorer);
    }
    pages.push(Page::About);

    pages
        .into_iter()
        .map(|page| NavLink {
            page,
            active: session.page == page,
        })
        .collect()
}

/// Localized label for a navigation target.
pub fn page_label(page: Page) -> String {
    match page {
        Page::Login => t!("nav-login"),
        Page::Dashboard => t!("nav-dashboard"),
        Page::Explorer => t!("nav-explorer"),
        Page::About => t!("nav-about"),
        Page::Profile => t!("nav-profile"),
    }
}

/// Perform the transition a header link stands for. The explorer link is
/// inert while the explorer is already open.
pub fn follow_link(handle: SessionHandle, link: NavLink, session: &Session) {
    match link.page {
        Page::Explorer if link.active => {}
        Page::Explorer => handle.navigate_to_explorer(session.explorer_link_query()),
        Page::Dashboard => handle.navigate_to_dashboard(),
        Page::About => handle.navigate_to_about(),
        Page::Profile => handle.navigate_to_profile(),
        Page::Login => handle.logout(),
    }
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let handle = use_session();
    let session = handle.snapshot();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal provided by the root component, if any.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(_) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, "locale switch rejected"),
        }
    };

    let links: Vec<(NavLink, &'static str)> = nav_links(&session)
        .into_iter()
        .map(|link| {
            let class = if link.active {
                "navbar__link navbar__link--active"
            } else {
                "navbar__link"
            };
            (link, class)
        })
        .collect();
    let profile_active = session.page == Page::Profile;
    let icon_class = if profile_active {
        "user-icon user-icon--active"
    } else {
        "user-icon"
    };

    rsx! {
        header { id: "navbar", class: "navbar",
            // Hidden marker keeps the navbar subscribed to the language signal.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    i { class: "bx bxs-graduation" }
                    span { class: "navbar__brand-mark", "ScholarMetrics" }
                }

                nav { class: "navbar__links",
                    for (link, class) in links {
                        a {
                            key: "{link.page:?}",
                            href: "#",
                            class: "{class}",
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
                    button {
                        r#type: "button",
                        class: "navbar__link navbar__logout",
                        onclick: move |_| handle.logout(),
                        {t!("nav-logout")}
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }

                div {
                    class: "{icon_class}",
                    title: "{page_label(Page::Profile)}",
                    onclick: move |_| {
                        if !profile_active {
                            handle.navigate_to_profile();
                        }
                    },
                    i { class: "bx bxs-user-circle" }
                }
            }
        }
    }
}
