mod register;
pub use register::Register;

mod signin;
pub use signin::SignIn;
