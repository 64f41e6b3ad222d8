//! The Vivo login screen without a UI toolkit attached.
//!
//! [`LoginForm`] holds the form state and runs the (simulated) sign-in flow. Acknowledgements go
//! through a [`Notifier`], and [`view::render`] turns a [`FormState`] snapshot into markup.

mod error;
mod form;
pub mod notify;
pub mod validation;
pub mod view;

pub use error::*;
pub use form::{FormEvent, FormState, LoginForm, SubmitOutcome, SIMULATED_LATENCY};
pub use notify::{Notice, Notifier, NotifyError, NotifyResult, TracingNotifier};
pub use validation::{Field, ValidationError};
