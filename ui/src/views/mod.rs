mod about;
pub use about::About;

mod dashboard;
pub use dashboard::Dashboard;

mod explorer;
pub use explorer::Explorer;

mod login;
pub use login::Login;

mod profile;
pub use profile::{Profile, ProfileDraft};
