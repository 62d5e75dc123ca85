//! Navigation and session state for the dashboard.
//!
//! `Session` is the single source of truth for which screen is visible and
//! for the context carried between screens (who is logged in, which author
//! was searched). Screens never touch the fields directly: they hold a
//! [`SessionHandle`] from context and request one of the named transitions.
//!
//! Every transition is total. There is no error path; invalid input is
//! either normalised (empty login name) or rejected by the caller before
//! the transition is requested (empty search query, see [`search_query`]).

use dioxus::prelude::*;

use super::config::{
    DEFAULT_EXPLORER_AUTHOR, DEFAULT_USERNAME, EXPLORER_LINK_PLACEHOLDER, INSTITUTION_DOMAIN,
};

/// The top-level screen currently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Login,
    Dashboard,
    Explorer,
    About,
    Profile,
}

/// A requested transition, as emitted by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Login(String),
    Logout,
    NavigateToExplorer(String),
    NavigateToDashboard,
    NavigateToAbout,
    NavigateToProfile,
    ResetSearch,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub page: Page,
    /// Display name; empty while logged out.
    pub username: String,
    /// Computed from `username` at login only.
    pub derived_email: String,
    /// Author currently being explored; empty until a search is submitted.
    pub searched_author: String,
    /// Gates the "Data Explorer" link on every screen.
    pub has_searched_author: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a transition. Every variant maps onto exactly one named operation.
    pub fn apply(&mut self, action: SessionAction) {
        tracing::debug!(?action, from = ?self.page, "session transition");
        match action {
            SessionAction::Login(name) => self.login(&name),
            SessionAction::Logout => self.logout(),
            SessionAction::NavigateToExplorer(query) => self.navigate_to_explorer(&query),
            SessionAction::NavigateToDashboard => self.navigate_to_dashboard(),
            SessionAction::NavigateToAbout => self.navigate_to_about(),
            SessionAction::NavigateToProfile => self.navigate_to_profile(),
            SessionAction::ResetSearch => self.reset_search(),
        }
    }

    /// Log in as `name` (no credential check). An empty name becomes the
    /// placeholder user.
    pub fn login(&mut self, name: &str) {
        let name = if name.is_empty() {
            DEFAULT_USERNAME
        } else {
            name
        };
        self.username = name.to_string();
        self.derived_email = derive_email(name);
        self.page = Page::Dashboard;
    }

    /// Drop every session field and return to the login screen.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// Record `query` as the explored author and open the explorer. The query
    /// is stored verbatim; callers validate search input beforehand.
    pub fn navigate_to_explorer(&mut self, query: &str) {
        self.searched_author = query.to_string();
        self.has_searched_author = true;
        self.page = Page::Explorer;
    }

    pub fn navigate_to_dashboard(&mut self) {
        self.page = Page::Dashboard;
    }

    pub fn navigate_to_about(&mut self) {
        self.page = Page::About;
    }

    pub fn navigate_to_profile(&mut self) {
        self.page = Page::Profile;
    }

    /// Forget the searched author. The page is left as is.
    pub fn reset_search(&mut self) {
        self.searched_author.clear();
        self.has_searched_author = false;
    }

    pub fn is_logged_in(&self) -> bool {
        self.page != Page::Login
    }

    /// Argument for "Data Explorer" navigation links: reopen the last search,
    /// or fall back to the placeholder when no name was ever recorded.
    pub fn explorer_link_query(&self) -> String {
        if self.searched_author.is_empty() {
            EXPLORER_LINK_PLACEHOLDER.to_string()
        } else {
            self.searched_author.clone()
        }
    }

    /// Name shown on the explorer and used to name exports.
    pub fn explorer_author(&self) -> &str {
        if self.searched_author.is_empty() {
            DEFAULT_EXPLORER_AUTHOR
        } else {
            &self.searched_author
        }
    }
}

/// `Ada Lovelace` -> `adalovelace@university.edu`
pub fn derive_email(name: &str) -> String {
    let local: String = name.to_lowercase().chars().filter(|c| *c != ' ').collect();
    format!("{local}@{INSTITUTION_DOMAIN}")
}

/// Guard for the author search form. Whitespace-only input is rejected;
/// anything else is passed through untrimmed.
pub fn search_query(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

/// Reactive handle to the session, shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    state: Signal<Session>,
}

impl SessionHandle {
    pub fn new(state: Signal<Session>) -> Self {
        Self { state }
    }

    /// Current session, subscribing the calling component to changes.
    pub fn snapshot(&self) -> Session {
        self.state.read().clone()
    }

    pub fn dispatch(&self, action: SessionAction) {
        let mut state = self.state;
        state.write().apply(action);
    }

    pub fn login(&self, name: impl Into<String>) {
        self.dispatch(SessionAction::Login(name.into()));
    }

    pub fn logout(&self) {
        self.dispatch(SessionAction::Logout);
    }

    pub fn navigate_to_explorer(&self, query: impl Into<String>) {
        self.dispatch(SessionAction::NavigateToExplorer(query.into()));
    }

    pub fn navigate_to_dashboard(&self) {
        self.dispatch(SessionAction::NavigateToDashboard);
    }

    pub fn navigate_to_about(&self) {
        self.dispatch(SessionAction::NavigateToAbout);
    }

    pub fn navigate_to_profile(&self) {
        self.dispatch(SessionAction::NavigateToProfile);
    }

    pub fn reset_search(&self) {
        self.dispatch(SessionAction::ResetSearch);
    }
}

/// Session handle provided by the root `App` component.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in(name: &str) -> Session {
        let mut session = Session::new();
        session.login(name);
        session
    }

    #[test]
    fn starts_logged_out() {
        let session = Session::new();
        assert_eq!(session.page, Page::Login);
        assert!(session.username.is_empty());
        assert!(!session.has_searched_author);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn login_derives_email_and_opens_dashboard() {
        let session = logged_in("Ada Lovelace");
        assert_eq!(session.username, "Ada Lovelace");
        assert_eq!(session.derived_email, "adalovelace@university.edu");
        assert_eq!(session.page, Page::Dashboard);
    }

    #[test]
    fn empty_login_falls_back_to_placeholder_user() {
        let session = logged_in("");
        assert_eq!(session.username, "User");
        assert_eq!(session.derived_email, "user@university.edu");
    }

    #[test]
    fn derive_email_strips_every_space() {
        assert_eq!(
            derive_email("Jean Baptiste Fourier"),
            "jeanbaptistefourier@university.edu"
        );
    }

    #[test]
    fn logout_resets_everything_and_is_idempotent() {
        let mut session = logged_in("Ada Lovelace");
        session.navigate_to_explorer("Marie Curie");
        session.logout();
        assert_eq!(session, Session::default());

        let once = session.clone();
        session.logout();
        assert_eq!(session, once);
    }

    #[test]
    fn explorer_navigation_records_author() {
        let mut session = logged_in("Ada");
        session.navigate_to_explorer("Marie Curie");
        assert_eq!(session.page, Page::Explorer);
        assert_eq!(session.searched_author, "Marie Curie");
        assert!(session.has_searched_author);
    }

    #[test]
    fn reset_search_keeps_page() {
        let mut session = logged_in("Ada");
        session.navigate_to_explorer("Marie Curie");
        session.reset_search();
        assert!(!session.has_searched_author);
        assert!(session.searched_author.is_empty());
        assert_eq!(session.page, Page::Explorer);
    }

    #[test]
    fn navigating_away_keeps_search_context() {
        let mut session = logged_in("Ada");
        session.navigate_to_explorer("Marie Curie");
        session.navigate_to_about();
        session.navigate_to_profile();
        session.navigate_to_dashboard();
        assert!(session.has_searched_author);
        assert_eq!(session.searched_author, "Marie Curie");
        assert_eq!(session.username, "Ada");
    }

    #[test]
    fn apply_matches_named_operations() {
        let mut via_actions = Session::new();
        via_actions.apply(SessionAction::Login("Grace Hopper".into()));
        via_actions.apply(SessionAction::NavigateToExplorer("Alan Turing".into()));
        via_actions.apply(SessionAction::NavigateToProfile);

        let mut direct = Session::new();
        direct.login("Grace Hopper");
        direct.navigate_to_explorer("Alan Turing");
        direct.navigate_to_profile();

        assert_eq!(via_actions, direct);
    }

    #[test]
    fn explorer_link_reuses_last_search() {
        let mut session = logged_in("Ada");
        session.navigate_to_explorer("Marie Curie");
        assert_eq!(session.explorer_link_query(), "Marie Curie");

        session.navigate_to_explorer("");
        assert_eq!(session.explorer_link_query(), "Researcher");
        assert_eq!(session.explorer_author(), "Jone Mickel");
    }

    #[test]
    fn search_guard_rejects_blank_queries() {
        assert_eq!(search_query(""), None);
        assert_eq!(search_query("   \t"), None);
        assert_eq!(search_query(" Marie Curie "), Some(" Marie Curie "));
    }
}
