//! Shared UI for the talebook client: the session provider/hooks and the
//! chrome components every page uses.

mod session;
pub use session::{use_api, use_config, use_session, SessionProvider};

mod navbar;
pub use navbar::Navbar;

mod alert;
pub use alert::AlertBar;

mod loading;
pub use loading::Loading;
