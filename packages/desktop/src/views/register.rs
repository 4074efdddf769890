//! Registration page view for desktop.

use dioxus::prelude::*;

use crate::Route;

/// Register page component for desktop.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::RegisterView {
            on_registered: move |_| {
                nav.replace(Route::SignIn {});
            },
            on_navigate_signin: move |_| {
                nav.push(Route::SignIn {});
            },
        }
    }
}
