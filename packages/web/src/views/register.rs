//! Registration page view.

use dioxus::prelude::*;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::RegisterView {
            on_registered: move |_| {
                tracing::info!("Registered, redirecting to sign in");
                nav.push(Route::SignIn {});
            },
            on_navigate_signin: move |_| {
                nav.push(Route::SignIn {});
            },
        }
    }
}
