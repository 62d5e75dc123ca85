use dioxus::prelude::*;

use crate::core::session::{Page, Session, SessionHandle};
use crate::views::{About, Dashboard, Explorer, Login, Profile};

const BOXICONS_CSS: &str = "https://unpkg.com/boxicons@2.1.4/css/boxicons.min.css";

/// Root component shared by every platform shell. Owns the session and
/// renders the one screen its `page` selects.
#[component]
pub fn App() -> Element {
    crate::i18n::init();

    let session = use_signal(Session::new);
    use_context_provider(|| SessionHandle::new(session));

    // Language code shared with the navbar's locale switcher.
    let lang_code = use_signal(crate::i18n::current_language);
    use_context_provider(|| lang_code);

    let page = session.read().page;

    rsx! {
        document::Link { rel: "stylesheet", href: BOXICONS_CSS }

        // Keyed wrapper remounts the active screen when the language changes.
        div {
            key: "{lang_code()}",
            class: "app",
            match page {
                Page::Login => rsx! { Login {} },
                Page::Dashboard => rsx! { Dashboard {} },
                Page::Explorer => rsx! { Explorer {} },
                Page::About => rsx! { About {} },
                Page::Profile => rsx! { Profile {} },
            }
        }
    }
}
