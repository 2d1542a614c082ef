use super::*;

fn with_email(email: &str) -> NewsletterState {
    NewsletterState { email: email.to_owned(), status: AckStatus::Idle }
}

// =============================================================
// Submit outcomes
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = NewsletterState::default();
    assert!(state.email.is_empty());
    assert_eq!(state.status, AckStatus::Idle);
    assert!(!state.is_subscribed());
}

#[test]
fn invalid_email_is_rejected_without_side_effects() {
    let mut state = with_email("not-an-email");
    assert!(!state.submit());
    assert_eq!(state.email, "not-an-email");
    assert_eq!(state.status, AckStatus::Idle);
}

#[test]
fn empty_input_is_rejected() {
    let mut state = NewsletterState::default();
    assert!(!state.submit());
    assert_eq!(state.status, AckStatus::Idle);
}

#[test]
fn valid_email_subscribes_and_clears_the_input() {
    let mut state = with_email("user@x.com");
    assert!(state.submit());
    assert!(state.email.is_empty());
    assert_eq!(state.status, AckStatus::Subscribed);
    assert!(state.is_subscribed());
}

#[test]
fn surrounding_whitespace_is_stripped_before_validation() {
    let mut state = with_email("  user@x.com  ");
    assert!(state.submit());
    assert!(state.email.is_empty());
}

#[test]
fn resubmitting_while_subscribed_stays_subscribed() {
    let mut state = with_email("user@x.com");
    assert!(state.submit());
    state.email = "again@x.com".to_owned();
    assert!(state.submit());
    assert_eq!(state.status, AckStatus::Subscribed);
}

// =============================================================
// Acknowledgement window
// =============================================================

#[test]
fn revert_returns_the_button_to_idle() {
    let mut state = with_email("user@x.com");
    state.submit();
    state.revert_ack();
    assert_eq!(state.status, AckStatus::Idle);
    assert!(state.email.is_empty());
}

#[test]
fn ack_window_is_three_seconds() {
    assert_eq!(ACK_REVERT_MS, 3_000);
}
