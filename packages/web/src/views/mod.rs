//! Page components, one per route table entry. Pages own their data fetching
//! through the API client and talk to the session store for everything
//! user-visible (loading flag, alerts, nav visibility, login state).

use dioxus::prelude::*;
use ui::use_session;

mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod book_list;
pub use book_list::{BookCards, Hot, MetaBooks, Recent, Search};

mod book_detail;
pub use book_detail::BookDetail;

mod book_edit;
pub use book_edit::BookEdit;

mod book_nav;
pub use book_nav::BookNav;

mod meta_list;
pub use meta_list::MetaList;

mod login;
pub use login::Login;

mod logout;
pub use logout::Logout;

mod signup;
pub use signup::Signup;

mod user;
pub use user::{ActiveSuccess, UserDetail, UserHistory};

mod admin;
pub use admin::Admin;

mod install;
pub use install::Install;

mod welcome;
pub use welcome::Welcome;

mod not_found;
pub use not_found::NotFound;

/// Declare the page's chrome mode on mount. Pure pages (login, install,
/// welcome, ...) hide the navbar; regular pages show it.
pub(crate) fn use_pure_mode(pure: bool) {
    let mut session = use_session();
    use_effect(move || session.with_mut(|s| s.set_pure_mode(pure)));
}
