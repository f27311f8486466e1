//! `folio-contact` - The portfolio contact form, without the browser
//!
//! This library provides the contact form's field state, validation,
//! submission lifecycle and feedback signals, plus an HTTP client for the
//! email delivery service that receives the messages.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod delivery;
pub mod email;
pub mod error;
pub mod form;
pub mod logging;
pub mod machine;
pub mod profile;
pub mod signal;

pub use config::Config;
pub use controller::ContactFormController;
pub use delivery::{DeliveryService, EmailJsClient};
pub use email::is_valid_email;
pub use error::{Error, Result};
pub use form::{FormField, FormFields, Payload};
pub use logging::init_logging;
pub use machine::{transition, Event, SubmissionState, SubmitOutcome};
pub use profile::ContactProfile;
pub use signal::{Notifier, Signal, TerminalNotifier};
