//! Core till logic: currencies, amounts and the form controller

pub mod amount;
pub mod config;
pub mod controller;
pub mod currency;
pub mod form;
pub mod log;

// Re-export main types for cleaner imports
pub use amount::{Amount, PLACEHOLDER, format_amount, parse_amount};
pub use controller::{FormController, FormEvent, UpdateState};
pub use currency::{Currency, RATE};
pub use form::{ChangeDisplay, Field, FormFields, FormState, compute_form_state};
