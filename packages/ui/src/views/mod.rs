mod register;
pub use register::RegisterView;

mod signin_placeholder;
pub use signin_placeholder::SignInPlaceholder;
