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

/// Optional config file in the working directory, see [`api::ClientConfig`].
const CONFIG_FILE: &str = "hopeaid.toml";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| load_config().unwrap_or_else(api::ClientConfig::from_env));

    rsx! {
        ui::RegistrationProvider {
            config: config,
            ui::components::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// `hopeaid.toml` if present and valid; `None` falls back to the environment.
fn load_config() -> Option<api::ClientConfig> {
    let text = std::fs::read_to_string(CONFIG_FILE).ok()?;
    match api::ClientConfig::from_toml(&text) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::error!("Ignoring invalid {}: {}", CONFIG_FILE, e);
            None
        }
    }
}

#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Register {});
    rsx! {}
}
