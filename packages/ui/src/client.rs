//! Registration client context.

use api::{ClientConfig, RegistrationClient};
use dioxus::prelude::*;

/// Get the registration client provided by [`RegistrationProvider`].
pub fn use_registration_client() -> RegistrationClient {
    use_context::<RegistrationClient>()
}

/// Provider component that builds the registration client once.
/// Wrap your app with this component before rendering any registration view.
///
/// Only the `config` from the first render is used.
#[component]
pub fn RegistrationProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(move || {
        let client = RegistrationClient::new(&config);
        tracing::info!("Registration backend: {}", client.profiles.url());
        client
    });

    rsx! {
        {children}
    }
}
