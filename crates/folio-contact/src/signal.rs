//! User-facing feedback.
//!
//! Every call to [`ContactFormController::submit`](crate::ContactFormController::submit)
//! produces exactly one [`Signal`], which is handed to a [`Notifier`] for
//! display. Notifiers are fire-and-forget.

use serde::Serialize;

use crate::form::FormField;

/// How a presenter should style a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The message went out.
    Success,
    /// Something needs the user's attention.
    Error,
}

/// Feedback emitted for a single submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Signal {
    /// One or more fields were blank; nothing was sent.
    MissingFields {
        /// The blank fields, in form order.
        fields: Vec<FormField>,
    },
    /// The email field is not a plausible address; nothing was sent.
    InvalidEmail,
    /// The delivery service accepted the message.
    Success,
    /// The delivery service could not be reached or refused the message.
    DeliveryError,
}

impl Signal {
    /// The text shown to the user.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingFields { .. } => "Please fill in all fields.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::Success => "Message sent successfully!",
            Self::DeliveryError => "Failed to send message. Please try again later.",
        }
    }

    /// Presentation severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Success => Severity::Success,
            Self::MissingFields { .. } | Self::InvalidEmail | Self::DeliveryError => {
                Severity::Error
            }
        }
    }

    /// Check if this signal reports a validation failure.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::MissingFields { .. } | Self::InvalidEmail)
    }

    /// Check if this signal reports success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Displays signals to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Show one signal. Must not block on user interaction.
    fn notify(&self, signal: &Signal);
}

/// Prints signals to the terminal: success on stdout, errors on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    /// Render a signal as a single terminal line.
    #[must_use]
    pub fn render(signal: &Signal) -> String {
        let mut line = match signal.severity() {
            Severity::Success => format!("✓ {}", signal.message()),
            Severity::Error => format!("✗ {}", signal.message()),
        };
        if let Signal::MissingFields { fields } = signal {
            if fields.is_empty() {
                return line;
            }
            let names: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
            line.push_str(&format!(" (missing: {})", names.join(", ")));
        }
        line
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, signal: &Signal) {
        match signal.severity() {
            Severity::Success => println!("{}", Self::render(signal)),
            Severity::Error => eprintln!("{}", Self::render(signal)),
        }
    }
}
