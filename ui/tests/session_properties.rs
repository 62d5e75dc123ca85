//! Property checks for the session controller over arbitrary transition
//! sequences.

use proptest::prelude::*;
use ui::components::{footer_links, nav_links};
use ui::core::session::{Page, Session, SessionAction};

fn action() -> impl Strategy<Value = SessionAction> {
    prop_oneof![
        "[A-Za-z ]{0,16}".prop_map(SessionAction::Login),
        Just(SessionAction::Logout),
        "[A-Za-z ]{0,16}".prop_map(SessionAction::NavigateToExplorer),
        Just(SessionAction::NavigateToDashboard),
        Just(SessionAction::NavigateToAbout),
        Just(SessionAction::NavigateToProfile),
        Just(SessionAction::ResetSearch),
    ]
}

fn run(actions: &[SessionAction]) -> Session {
    let mut session = Session::new();
    for a in actions {
        session.apply(a.clone());
    }
    session
}

proptest! {
    #[test]
    fn logout_always_yields_reset_state(actions in prop::collection::vec(action(), 0..24)) {
        let mut session = run(&actions);
        session.apply(SessionAction::Logout);
        prop_assert_eq!(session.page, Page::Login);
        prop_assert_eq!(session.username.as_str(), "");
        prop_assert_eq!(session.derived_email.as_str(), "");
        prop_assert_eq!(session.searched_author.as_str(), "");
        prop_assert!(!session.has_searched_author);

        let once = session.clone();
        session.apply(SessionAction::Logout);
        prop_assert_eq!(session, once);
    }

    #[test]
    fn explorer_link_tracks_search_flag(actions in prop::collection::vec(action(), 0..24)) {
        let session = run(&actions);
        let in_header = nav_links(&session).iter().any(|l| l.page == Page::Explorer);
        let in_footer = footer_links(&session).iter().any(|l| l.page == Page::Explorer);
        prop_assert_eq!(in_header, session.has_searched_author);
        prop_assert_eq!(in_footer, session.has_searched_author);
    }

    #[test]
    fn search_flag_only_set_by_explorer_navigation(actions in prop::collection::vec(action(), 0..24)) {
        let session = run(&actions);
        let last_search_or_clear = actions.iter().rev().find(|a| {
            matches!(
                a,
                SessionAction::NavigateToExplorer(_) | SessionAction::ResetSearch | SessionAction::Logout
            )
        });
        let expected = matches!(last_search_or_clear, Some(SessionAction::NavigateToExplorer(_)));
        prop_assert_eq!(session.has_searched_author, expected);
    }

    #[test]
    fn plain_navigation_touches_only_page(
        actions in prop::collection::vec(action(), 0..16),
        target in prop_oneof![
            Just(SessionAction::NavigateToDashboard),
            Just(SessionAction::NavigateToAbout),
            Just(SessionAction::NavigateToProfile),
        ],
    ) {
        let before = run(&actions);
        let mut after = before.clone();
        after.apply(target);
        prop_assert_eq!(&after.username, &before.username);
        prop_assert_eq!(&after.derived_email, &before.derived_email);
        prop_assert_eq!(&after.searched_author, &before.searched_author);
        prop_assert_eq!(after.has_searched_author, before.has_searched_author);
    }
}

#[test]
fn search_then_reset_leaves_explorer_open() {
    let session = run(&[
        SessionAction::Login("Ada Lovelace".into()),
        SessionAction::NavigateToExplorer("Marie Curie".into()),
        SessionAction::ResetSearch,
    ]);
    assert_eq!(session.page, Page::Explorer);
    assert!(!session.has_searched_author);
    assert_eq!(session.searched_author, "");
}
