use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::SignInPlaceholder {
            on_navigate_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
