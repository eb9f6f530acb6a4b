//! Contact form reducers: validation and the simulated send.

use std::time::{Duration, Instant};

use crate::ui::store::state::{ContactStatus, Severity, State};

use super::notice;

/// Delay between accepting a submission and reporting success.
pub const SEND_DELAY: Duration = Duration::from_millis(2000);

/// Validates a submission and starts the simulated send. Invalid input is
/// reported through the notice slot and leaves the form untouched.
pub fn submit(state: &mut State, name: &str, email: &str, message: &str, now: Instant) {
    if let ContactStatus::Sending { .. } = state.contact {
        return;
    }

    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        notice::notify(
            state,
            String::from("Please fill in all fields."),
            Severity::Error,
            now,
        );
        return;
    }

    if !is_valid_email(email) {
        notice::notify(
            state,
            String::from("Please enter a valid email address."),
            Severity::Error,
            now,
        );
        return;
    }

    state.contact = ContactStatus::Sending { since: now };
}

/// Completes a send whose delay has elapsed: success notice, form cleared.
pub fn complete_pending_send(state: &mut State, now: Instant) {
    if let ContactStatus::Sending { since } = state.contact {
        if now.duration_since(since) >= SEND_DELAY {
            state.contact = ContactStatus::Idle;
            state.contact_epoch = state.contact_epoch.wrapping_add(1);
            notice::notify(
                state,
                String::from("Message sent! I'll get back to you soon."),
                Severity::Success,
                now,
            );
        }
    }
}

/// Shape check for email addresses: a local part, one `@`, and a domain
/// containing a dot, with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
