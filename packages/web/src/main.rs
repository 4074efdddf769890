use dioxus::prelude::*;

use views::{Register, SignIn};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/register")]
    Register {},
    #[route("/signin")]
    SignIn {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(api::ClientConfig::from_env);

    rsx! {
        ui::RegistrationProvider {
            config: config,
            ui::components::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/register`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Register {});
    rsx! {}
}
