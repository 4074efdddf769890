//! Shared registration form.

use api::{Notice, PhotoFile, RegistrationError, RegistrationRequest, RegistrationState};
use dioxus::html::FileData;
use dioxus::prelude::*;

use crate::components::{use_toast, ToastOptions};
use crate::icons::{FaSpinner, FaUserPlus};
use crate::{use_registration_client, Icon, REGISTER_CSS};

/// Sign-up form: name, email, password and an optional profile photo.
///
/// Required fields are enforced by the browser before `onsubmit` fires. The chosen
/// photo is read as part of the submission; a failed read is reported like any other
/// error. If there is a photo it is uploaded to the image host first; then the
/// profile is created.
/// Platform packages decide where "signed up" and "log in" lead.
#[component]
pub fn RegisterView(
    /// Called once after the backend accepted the registration.
    on_registered: EventHandler<()>,
    /// Called from the "Log in" link.
    on_navigate_signin: EventHandler<()>,
) -> Element {
    let client = use_registration_client();
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut photo = use_signal(|| Option::<FileData>::None);
    let mut state = use_signal(RegistrationState::default);

    let handle_photo = move |evt: FormEvent| {
        photo.set(evt.files().into_iter().next());
    };

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if !state.write().begin() {
            tracing::debug!("Ignoring submit while a registration is in flight");
            return;
        }

        let name = name();
        let email = email();
        let password = password();
        let selected = photo();
        let client = client.clone();
        spawn(async move {
            let request = RegistrationRequest {
                name,
                email,
                password,
                photo: None,
            };
            let outcome = client.submit_with_photo(request, read_photo(selected)).await;
            state.write().finish(&outcome);
            match outcome.notice() {
                Notice::Success(message) => {
                    on_registered.call(());
                    toast.success(message, ToastOptions::new());
                }
                Notice::Error(message) => {
                    toast.error(message, ToastOptions::new());
                }
            }
        });
    };

    let loading = state.read().is_loading();
    let error = state.read().error_message().map(str::to_string);

    rsx! {
        document::Stylesheet { href: REGISTER_CSS }

        div {
            class: "register-page",

            div {
                class: "register-card",

                h2 { class: "register-title", "Please Sign Up" }
                h2 {
                    class: "register-brand",
                    "Hope"
                    span { class: "register-brand-accent", "Aid" }
                }

                div { class: "register-divider", span { "sign up with e-mail" } }

                form {
                    class: "register-form",
                    onsubmit: handle_register,

                    input {
                        class: "register-input",
                        r#type: "text",
                        name: "name",
                        placeholder: "Your name",
                        required: true,
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }

                    input {
                        class: "register-input",
                        r#type: "email",
                        name: "email",
                        placeholder: "Email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    input {
                        class: "register-input",
                        r#type: "password",
                        name: "password",
                        placeholder: "Password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    label {
                        class: "register-photo",
                        span { class: "sr-only", "Choose profile photo" }
                        input {
                            r#type: "file",
                            name: "photourl",
                            accept: "image/*",
                            onchange: handle_photo,
                        }
                    }

                    button {
                        class: "register-submit",
                        r#type: "submit",
                        disabled: loading,
                        if loading {
                            span {
                                class: "register-spinner",
                                Icon { icon: FaSpinner, width: 18, height: 18 }
                            }
                            span { "Signing Up..." }
                        } else {
                            Icon { icon: FaUserPlus, width: 18, height: 18 }
                            span { "Sign Up" }
                        }
                    }

                    if let Some(err) = error {
                        p { class: "register-error", "{err}" }
                    }
                }

                p {
                    class: "register-footnote",
                    "Already have an account? Please "
                    a {
                        class: "register-link",
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate_signin.call(());
                        },
                        "Log in"
                    }
                }

                p {
                    class: "register-footnote",
                    "I agree to abide by HopeAid's Terms of Service and its Privacy Policy."
                }
            }
        }
    }
}

/// Load the chosen file into memory, keeping the browser's MIME type.
async fn read_photo(file: Option<FileData>) -> Result<Option<PhotoFile>, RegistrationError> {
    let Some(file) = file else {
        return Ok(None);
    };
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| RegistrationError::PhotoRead(e.to_string()))?;

    let mut photo = PhotoFile::new(file.name(), bytes.to_vec());
    if let Some(content_type) = file.content_type() {
        photo = photo.with_content_type(content_type);
    }
    Ok(Some(photo))
}
