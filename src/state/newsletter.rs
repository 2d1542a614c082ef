//! Newsletter signup form state.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use crate::util::email;

/// How long the success acknowledgement stays on the submit button.
pub const ACK_REVERT_MS: u32 = 3_000;

/// Submit button state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AckStatus {
    /// Normal label.
    #[default]
    Idle,
    /// Transient success label shown after a valid submission.
    Subscribed,
}

/// Signup form state: the live input value and the submit button state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewsletterState {
    pub email: String,
    pub status: AckStatus,
}

impl NewsletterState {
    /// Handle a submit attempt.
    ///
    /// A valid address clears the input and switches the button to
    /// [`AckStatus::Subscribed`], returning `true` so the caller schedules
    /// the revert. Invalid input leaves everything untouched.
    pub fn submit(&mut self) -> bool {
        if !email::is_valid_email(self.email.trim()) {
            return false;
        }
        self.email.clear();
        self.status = AckStatus::Subscribed;
        true
    }

    /// Return the button to its normal label.
    pub fn revert_ack(&mut self) {
        self.status = AckStatus::Idle;
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.status == AckStatus::Subscribed
    }
}
