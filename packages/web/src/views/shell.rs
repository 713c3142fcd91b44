//! Layout wrapping every page: navbar with the primary links and search box,
//! the alert slot, the global loading indicator, and the routed page itself.

use dioxus::prelude::*;

use ui::{use_session, AlertBar, Loading, Navbar};

use crate::routes::{MetaKind, Route};

#[component]
pub fn Shell() -> Element {
    let session = use_session();
    let logged_in = session.read().state().user.is_login;
    let is_admin = session.read().state().user.is_admin;

    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::BookNav {}, "Categories" }
            Link { to: Route::Recent {}, "Recent" }
            Link { to: Route::Hot {}, "Popular" }
            Link { to: Route::MetaList { kind: MetaKind::Author }, "Authors" }
            SearchBox {}
            if is_admin {
                Link { to: Route::Admin {}, "Admin" }
            }
            if logged_in {
                Link { to: Route::UserDetail {}, "My page" }
                Link { to: Route::Logout {}, "Sign out" }
            } else {
                Link { to: Route::Login {}, "Sign in" }
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
        AlertBar {}
        Loading {}
        main { class: "page",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn SearchBox() -> Element {
    let mut term = use_signal(String::new);
    let nav = use_navigator();

    rsx! {
        form {
            class: "search",
            onsubmit: move |_| {
                let name = term();
                let name = name.trim();
                if !name.is_empty() {
                    go_to_search(&nav, name);
                }
            },
            input {
                r#type: "search",
                placeholder: "Search books",
                value: "{term}",
                oninput: move |event| term.set(event.value()),
            }
        }
    }
}

/// The search term travels as a query string, which the router does not
/// interpret; a full navigation lets the search page read it back from the
/// document location.
fn go_to_search(nav: &Navigator, name: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = nav;
        if let Some(window) = web_sys::window() {
            let encoded = js_sys::encode_uri_component(name);
            let _ = window.location().set_href(&format!("/search?name={encoded}"));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = name;
        nav.push(Route::Search {});
    }
}
