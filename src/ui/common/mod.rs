//! Reusable form and button components

pub mod button;
pub mod form;
pub mod message;

pub use button::{ButtonLink, ButtonVariant, SubmitButton};
pub use form::FieldInput;
pub use message::ErrorMessage;
