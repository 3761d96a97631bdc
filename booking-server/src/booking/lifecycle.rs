//! Booking Lifecycle Manager
//!
//! Pure state-transition logic: validates preconditions, produces
//! the updated record plus an optional notification instruction.
//! The caller is responsible for the persistence write (with a
//! status compare-and-swap, see `BookingRepository::update_transition`)
//! and for dispatching the notification. A notification failure
//! never reverses a completed transition.

use chrono::{DateTime, Utc};
use shared::models::{Booking, BookingStatus};
use thiserror::Error;

use crate::mail::templates;

/// Admin action on a booking
#[derive(Debug, Clone)]
pub enum BookingAction {
    /// pending -> approved; note is embedded in the confirmation email
    Approve { note: Option<String> },
    /// pending -> rejected; note is embedded as the decline reason
    Reject { note: Option<String> },
    /// any non-cancelled -> cancelled (+ closed flag)
    Close,
    /// Permanent removal, allowed from any status. Irreversible.
    Delete,
}

impl BookingAction {
    /// Statuses the record must currently hold for this action.
    ///
    /// The persistence layer re-checks this set atomically (CAS), so
    /// two racing approves cannot both succeed. `None` means the
    /// action is unconditional (delete).
    pub fn expected_statuses(&self) -> Option<&'static [BookingStatus]> {
        match self {
            BookingAction::Approve { .. } | BookingAction::Reject { .. } => {
                Some(&[BookingStatus::Pending])
            }
            BookingAction::Close => Some(&[
                BookingStatus::Pending,
                BookingStatus::Approved,
                BookingStatus::Rejected,
            ]),
            BookingAction::Delete => None,
        }
    }
}

/// Lifecycle precondition failure
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Instruction to send one email; dispatch is the mailer's job
#[derive(Debug, Clone)]
pub struct Notification {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Result of a successful lifecycle action
#[derive(Debug, Clone)]
pub struct Transition {
    /// The record after the transition; `None` for delete
    pub updated: Option<Booking>,
    /// At most one queued notification per action
    pub notification: Option<Notification>,
}

/// Policy knobs for lifecycle behavior
#[derive(Debug, Clone)]
pub struct LifecyclePolicy {
    /// Whether closing a booking notifies the customer
    pub notify_on_close: bool,
    /// Frontend base URL, linked from the rejection email
    pub frontend_url: String,
}

/// Apply an admin action to a booking.
///
/// Replaying `approve` on an already-approved booking fails with
/// [`LifecycleError::InvalidState`] instead of silently succeeding;
/// this guards against duplicate admin clicks causing duplicate
/// emails. `updated_at` advances on every mutating transition.
pub fn apply(
    booking: &Booking,
    action: &BookingAction,
    policy: &LifecyclePolicy,
    now: DateTime<Utc>,
) -> Result<Transition, LifecycleError> {
    match action {
        BookingAction::Approve { note } => {
            require_pending(booking, "approve")?;
            let mut updated = booking.clone();
            updated.status = BookingStatus::Approved;
            updated.approval_note = Some(note.clone().unwrap_or_default());
            updated.updated_at = now;

            let notification = Notification {
                to: updated.email.clone(),
                subject: templates::APPROVAL_SUBJECT.to_string(),
                html_body: templates::render_approval(&updated, note.as_deref()),
            };
            Ok(Transition {
                updated: Some(updated),
                notification: Some(notification),
            })
        }

        BookingAction::Reject { note } => {
            require_pending(booking, "reject")?;
            let mut updated = booking.clone();
            updated.status = BookingStatus::Rejected;
            updated.approval_note = Some(note.clone().unwrap_or_default());
            updated.updated_at = now;

            let notification = Notification {
                to: updated.email.clone(),
                subject: templates::REJECTION_SUBJECT.to_string(),
                html_body: templates::render_rejection(&updated, note.as_deref(), &policy.frontend_url),
            };
            Ok(Transition {
                updated: Some(updated),
                notification: Some(notification),
            })
        }

        BookingAction::Close => {
            if booking.status == BookingStatus::Cancelled || booking.closed {
                return Err(LifecycleError::InvalidState(format!(
                    "Cannot close booking: already cancelled (status is {})",
                    booking.status
                )));
            }
            let mut updated = booking.clone();
            updated.status = BookingStatus::Cancelled;
            updated.closed = true;
            updated.updated_at = now;

            let notification = policy.notify_on_close.then(|| Notification {
                to: updated.email.clone(),
                subject: templates::CANCELLATION_SUBJECT.to_string(),
                html_body: templates::render_cancellation(&updated),
            });
            Ok(Transition {
                updated: Some(updated),
                notification,
            })
        }

        // Delete is allowed regardless of status, including cancelled.
        // Callers confirm intent in the UI; nothing to check here.
        BookingAction::Delete => Ok(Transition {
            updated: None,
            notification: None,
        }),
    }
}

fn require_pending(booking: &Booking, action: &str) -> Result<(), LifecycleError> {
    if booking.status != BookingStatus::Pending {
        return Err(LifecycleError::InvalidState(format!(
            "Cannot {} booking: status is {}, expected pending",
            action, booking.status
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn policy() -> LifecyclePolicy {
        LifecyclePolicy {
            notify_on_close: false,
            frontend_url: "http://localhost:3000".to_string(),
        }
    }

    fn make_booking(status: BookingStatus) -> Booking {
        let now = Utc::now();
        Booking {
            id: Some("b1".to_string()),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: "555-0100".to_string(),
            branch: shared::models::Branch::Naran,
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            time: "7:00 PM".to_string(),
            guests: 4,
            occasion: Some("birthday".to_string()),
            message: None,
            status,
            approval_note: None,
            closed: status == BookingStatus::Cancelled,
            created_at: now - Duration::hours(1),
            updated_at: now - Duration::hours(1),
        }
    }

    #[test]
    fn approve_sets_note_and_targets_customer_email() {
        let booking = make_booking(BookingStatus::Pending);
        let now = Utc::now();
        let action = BookingAction::Approve {
            note: Some("see you soon".to_string()),
        };

        let transition = apply(&booking, &action, &policy(), now).unwrap();
        let updated = transition.updated.unwrap();
        assert_eq!(updated.status, BookingStatus::Approved);
        assert_eq!(updated.approval_note.as_deref(), Some("see you soon"));
        assert_eq!(updated.updated_at, now);

        let notification = transition.notification.unwrap();
        assert_eq!(notification.to, "alice@example.com");
        assert!(notification.subject.contains("Confirmed"));
        assert!(notification.html_body.contains("see you soon"));
    }

    #[test]
    fn approve_replay_fails_invalid_state() {
        let booking = make_booking(BookingStatus::Approved);
        let action = BookingAction::Approve { note: None };
        assert!(matches!(
            apply(&booking, &action, &policy(), Utc::now()),
            Err(LifecycleError::InvalidState(_))
        ));
    }

    #[test]
    fn reject_requires_pending() {
        for status in [
            BookingStatus::Approved,
            BookingStatus::Rejected,
            BookingStatus::Cancelled,
        ] {
            let booking = make_booking(status);
            let action = BookingAction::Reject { note: None };
            assert!(matches!(
                apply(&booking, &action, &policy(), Utc::now()),
                Err(LifecycleError::InvalidState(_))
            ));
        }
    }

    #[test]
    fn reject_embeds_reason() {
        let booking = make_booking(BookingStatus::Pending);
        let action = BookingAction::Reject {
            note: Some("fully booked that evening".to_string()),
        };
        let transition = apply(&booking, &action, &policy(), Utc::now()).unwrap();
        let updated = transition.updated.unwrap();
        assert_eq!(updated.status, BookingStatus::Rejected);
        assert!(
            transition
                .notification
                .unwrap()
                .html_body
                .contains("fully booked that evening")
        );
    }

    #[test]
    fn close_sets_cancelled_and_closed() {
        let booking = make_booking(BookingStatus::Approved);
        let transition = apply(&booking, &BookingAction::Close, &policy(), Utc::now()).unwrap();
        let updated = transition.updated.unwrap();
        assert_eq!(updated.status, BookingStatus::Cancelled);
        assert!(updated.closed);
        // Close is silent unless the notify-on-close toggle is set
        assert!(transition.notification.is_none());
    }

    #[test]
    fn close_notifies_when_toggled_on() {
        let booking = make_booking(BookingStatus::Pending);
        let policy = LifecyclePolicy {
            notify_on_close: true,
            ..self::policy()
        };
        let transition = apply(&booking, &BookingAction::Close, &policy, Utc::now()).unwrap();
        assert!(transition.notification.is_some());
    }

    #[test]
    fn close_fails_when_already_cancelled() {
        let booking = make_booking(BookingStatus::Cancelled);
        assert!(matches!(
            apply(&booking, &BookingAction::Close, &policy(), Utc::now()),
            Err(LifecycleError::InvalidState(_))
        ));
    }

    #[test]
    fn delete_is_allowed_from_any_status() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Approved,
            BookingStatus::Rejected,
            BookingStatus::Cancelled,
        ] {
            let booking = make_booking(status);
            let transition =
                apply(&booking, &BookingAction::Delete, &policy(), Utc::now()).unwrap();
            assert!(transition.updated.is_none());
            assert!(transition.notification.is_none());
        }
    }
}
