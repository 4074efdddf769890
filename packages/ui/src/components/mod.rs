//! Toast notifications, backed by `dioxus-primitives`.
//!
//! Mount a [`ToastProvider`] above the router so a toast raised right before a
//! navigation survives the route change.

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
