use dioxus::prelude::*;

use ui::SessionProvider;

mod routes;
mod views;

use routes::Route;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        SessionProvider {
            Router::<Route> {}
        }
    }
}
