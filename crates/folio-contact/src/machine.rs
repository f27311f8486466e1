//! Submission state machine.
//!
//! The controller's behavior expressed as a pure function over
//! `(FormFields, SubmissionState, Event)`. No I/O happens here: when a submit
//! passes validation the returned [`Step`] carries the payload to dispatch,
//! and the caller reports the result back as [`Event::DeliverySettled`].

use serde::Serialize;

use crate::email::is_valid_email;
use crate::form::{FormField, FormFields, Payload};
use crate::signal::Signal;

/// Whether a delivery is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    /// Ready to accept a submission.
    #[default]
    Idle,
    /// Waiting for the delivery service to answer.
    Sending,
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Sending => write!(f, "sending"),
        }
    }
}

/// How a delivery attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryOutcome {
    /// The service accepted the message.
    Delivered,
    /// The transport failed or the service refused.
    Failed,
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user edited one field.
    FieldChanged {
        /// Which field.
        field: FormField,
        /// Its complete new value.
        value: String,
    },
    /// The user pressed submit.
    SubmitRequested,
    /// An in-flight delivery finished.
    DeliverySettled(DeliveryOutcome),
}

/// What the caller must do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Nothing to do.
    Nothing,
    /// Show this signal.
    Notify(Signal),
    /// Hand this payload to the delivery service, then report back with
    /// [`Event::DeliverySettled`].
    Dispatch(Payload),
}

/// What a submit request turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; show this signal and send nothing.
    Reject(Signal),
    /// Validation passed; deliver this payload.
    Dispatch(Payload),
}

impl From<SubmitOutcome> for Output {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Reject(signal) => Self::Notify(signal),
            SubmitOutcome::Dispatch(payload) => Self::Dispatch(payload),
        }
    }
}

/// Result of applying one event.
///
/// `O` is the follow-up work. [`transition`] yields the general [`Output`];
/// the per-event functions yield exactly what their event can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<O = Output> {
    /// Form contents after the event.
    pub fields: FormFields,
    /// Submission state after the event.
    pub state: SubmissionState,
    /// Follow-up work for the caller.
    pub output: O,
}

impl<O> Step<O> {
    fn new(fields: FormFields, state: SubmissionState, output: O) -> Self {
        Self {
            fields,
            state,
            output,
        }
    }

    /// Convert the follow-up work, keeping fields and state.
    #[must_use]
    pub fn map<P>(self, f: impl FnOnce(O) -> P) -> Step<P> {
        Step::new(self.fields, self.state, f(self.output))
    }
}

impl Step {
    /// The signal to show, if any.
    #[must_use]
    pub fn signal(&self) -> Option<&Signal> {
        match &self.output {
            Output::Notify(signal) => Some(signal),
            _ => None,
        }
    }

    /// The payload to dispatch, if any.
    #[must_use]
    pub fn dispatch(&self) -> Option<&Payload> {
        match &self.output {
            Output::Dispatch(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Check a form for submission, returning the rejection signal if any.
///
/// Missing fields take precedence over a malformed email.
#[must_use]
pub fn validate(fields: &FormFields) -> Option<Signal> {
    let missing = fields.missing();
    if !missing.is_empty() {
        return Some(Signal::MissingFields { fields: missing });
    }
    if !is_valid_email(&fields.email) {
        return Some(Signal::InvalidEmail);
    }
    None
}

/// Replace one field. State is untouched, even while sending.
#[must_use]
pub fn edit_field(
    mut fields: FormFields,
    state: SubmissionState,
    field: FormField,
    value: String,
) -> Step<()> {
    fields.set(field, value);
    Step::new(fields, state, ())
}

/// Handle a submit request.
///
/// A form that passes validation moves to [`SubmissionState::Sending`] and is
/// snapshotted for dispatch. A rejected form leaves the state untouched.
///
/// Submitting while already sending is not refused here. Callers gate the
/// submit control on [`SubmissionState::Sending`].
#[must_use]
pub fn request_submit(fields: FormFields, state: SubmissionState) -> Step<SubmitOutcome> {
    match validate(&fields) {
        Some(rejection) => Step::new(fields, state, SubmitOutcome::Reject(rejection)),
        None => {
            let payload = fields.to_payload();
            Step::new(
                fields,
                SubmissionState::Sending,
                SubmitOutcome::Dispatch(payload),
            )
        }
    }
}

/// Settle an in-flight delivery.
///
/// Always returns to [`SubmissionState::Idle`]. Success clears the form;
/// failure keeps it for a retry.
#[must_use]
pub fn settle_delivery(fields: FormFields, outcome: DeliveryOutcome) -> Step<Signal> {
    match outcome {
        DeliveryOutcome::Delivered => Step::new(
            FormFields::default(),
            SubmissionState::Idle,
            Signal::Success,
        ),
        DeliveryOutcome::Failed => Step::new(fields, SubmissionState::Idle, Signal::DeliveryError),
    }
}

/// Apply one event.
///
/// Dispatches to [`edit_field`], [`request_submit`] or [`settle_delivery`]
/// and widens their result to [`Output`]. A submit that passes validation
/// yields [`Output::Dispatch`]; its signal arrives with the matching
/// [`Event::DeliverySettled`].
#[must_use]
pub fn transition(fields: FormFields, state: SubmissionState, event: Event) -> Step {
    match event {
        Event::FieldChanged { field, value } => {
            edit_field(fields, state, field, value).map(|()| Output::Nothing)
        }
        Event::SubmitRequested => request_submit(fields, state).map(Output::from),
        Event::DeliverySettled(outcome) => settle_delivery(fields, outcome).map(Output::Notify),
    }
}
