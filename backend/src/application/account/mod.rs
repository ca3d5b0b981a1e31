// Account self-service, available before or after sign-in

pub mod register;
pub mod change_password;

pub use register::RegistrationForm;
