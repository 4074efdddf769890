//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const REGISTER_CSS: Asset = asset!("/assets/styling/register.css");

mod client;
pub use client::{use_registration_client, RegistrationProvider};
