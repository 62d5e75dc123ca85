//! Compile-time settings for the dashboard.

/// Domain appended to the login name when deriving the profile email.
pub const INSTITUTION_DOMAIN: &str = "university.edu";

/// Display name used when a login form is submitted with an empty username.
pub const DEFAULT_USERNAME: &str = "User";

/// Query passed by "Data Explorer" links when no author name is known.
pub const EXPLORER_LINK_PLACEHOLDER: &str = "Researcher";

/// Author shown on the explorer when the session carries no searched name.
pub const DEFAULT_EXPLORER_AUTHOR: &str = "Jone Mickel";

/// Designation seeded into the profile screen.
pub const DEFAULT_DESIGNATION: &str = "Prof";

/// Suffix of every exported publications file (`{author}{suffix}`).
pub const EXPORT_SUFFIX: &str = "_publications.csv";

/// MIME type used when staging the CSV artifact in a browser.
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Minimum accepted length for a new password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Identifiers handed to `directories::ProjectDirs` on native targets.
pub const PROJECT_QUALIFIER: &str = "edu";
pub const PROJECT_ORGANIZATION: &str = "ScholarMetrics";
pub const PROJECT_APPLICATION: &str = "ScholarMetrics";
