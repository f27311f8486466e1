//! The contact form controller.
//!
//! Owns the form contents and submission state, drives the pure state
//! machine in [`crate::machine`], performs the one delivery call, and reports
//! exactly one [`Signal`] per submit.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, trace, warn};

use crate::config::DeliveryConfig;
use crate::delivery::{DeliveryService, EmailJsClient};
use crate::error::Result;
use crate::form::{FormField, FormFields, Payload, UnknownField};
use crate::machine::{
    edit_field, request_submit, settle_delivery, DeliveryOutcome, Step, SubmissionState,
    SubmitOutcome,
};
use crate::signal::{Notifier, Signal};

/// Form contents plus submission state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Current field values.
    pub fields: FormFields,
    /// Whether a delivery is in flight.
    pub submission: SubmissionState,
}

/// Mediates between user input and the delivery service.
///
/// All methods take `&self`: edits made while a submit is awaiting delivery
/// are applied immediately and do not affect the in-flight payload. The lock
/// is never held across the delivery call.
#[derive(Debug)]
pub struct ContactFormController<D, N> {
    delivery: D,
    notifier: N,
    state: Mutex<FormState>,
}

impl<N: Notifier> ContactFormController<EmailJsClient, N> {
    /// Build a controller that delivers through the configured EmailJS
    /// account.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built from `config`.
    pub fn with_emailjs(config: &DeliveryConfig, notifier: N) -> Result<Self> {
        Ok(Self::new(EmailJsClient::new(config)?, notifier))
    }
}

impl<D: DeliveryService, N: Notifier> ContactFormController<D, N> {
    /// Create a controller with an empty form.
    #[must_use]
    pub fn new(delivery: D, notifier: N) -> Self {
        Self {
            delivery,
            notifier,
            state: Mutex::new(FormState::default()),
        }
    }

    /// Replace one field's value. No validation happens here.
    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        trace!(%field, len = value.len(), "Field updated");
        self.apply(|fields, state| edit_field(fields, state, field, value));
    }

    /// Replace a field named by an input event.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownField`] if `name` is not one of the form's fields.
    pub fn update_named(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> std::result::Result<(), UnknownField> {
        let field = name.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Check whether a delivery is in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.lock().submission == SubmissionState::Sending
    }

    /// Current submission state.
    #[must_use]
    pub fn submission_state(&self) -> SubmissionState {
        self.lock().submission
    }

    /// Snapshot of the current field values.
    #[must_use]
    pub fn fields(&self) -> FormFields {
        self.lock().fields.clone()
    }

    /// Validate and send the form.
    ///
    /// Emits exactly one signal to the notifier and returns it. Validation
    /// failures never touch the network. On success the form is cleared; on
    /// delivery failure it is left as is so the user can retry.
    pub async fn submit(&self) -> Signal {
        debug!("Submit requested");
        let signal = match self.apply(request_submit) {
            SubmitOutcome::Reject(rejection) => {
                debug!(?rejection, "Submission rejected by validation");
                rejection
            }
            SubmitOutcome::Dispatch(payload) => self.dispatch(payload).await,
        };
        self.notifier.notify(&signal);
        signal
    }

    async fn dispatch(&self, payload: Payload) -> Signal {
        debug!(
            subject_len = payload.subject.len(),
            message_len = payload.message.len(),
            "Delivering contact message"
        );
        let outcome = match self.delivery.deliver(&payload).await {
            Ok(()) => {
                info!("Contact message delivered");
                DeliveryOutcome::Delivered
            }
            Err(e) if e.is_delivery_error() => {
                warn!(error = %e, "Contact message delivery failed");
                DeliveryOutcome::Failed
            }
            Err(e) => {
                error!(error = %e, "Delivery service misconfigured");
                DeliveryOutcome::Failed
            }
        };
        self.apply(|fields, _| settle_delivery(fields, outcome))
    }

    fn apply<O>(&self, step: impl FnOnce(FormFields, SubmissionState) -> Step<O>) -> O {
        let mut guard = self.lock();
        let current = std::mem::take(&mut *guard);
        let Step {
            fields,
            state,
            output,
        } = step(current.fields, current.submission);
        *guard = FormState {
            fields,
            submission: state,
        };
        output
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
