use dioxus::prelude::*;

/// Landing spot after a successful registration, until sign-in is implemented
/// on this client.
#[component]
pub fn SignInPlaceholder(on_navigate_register: EventHandler<()>) -> Element {
    rsx! {
        document::Stylesheet { href: crate::REGISTER_CSS }

        div {
            class: "register-page",
            div {
                class: "register-card",
                h2 { class: "register-title", "Sign In" }
                p { class: "register-footnote", "Your account is ready. Log in to continue." }
                p {
                    class: "register-footnote",
                    "New here? "
                    a {
                        class: "register-link",
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate_register.call(());
                        },
                        "Create an account"
                    }
                }
            }
        }
    }
}
