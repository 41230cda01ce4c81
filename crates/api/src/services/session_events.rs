//! In-process auth session event stream.
//!
//! Consumers register an observer and get back a subscription handle;
//! dropping the handle stops delivery. Nothing polls: publishers push
//! into a broadcast channel and only live subscriptions receive.

use shared::jwt::TokenRole;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Capacity of the broadcast channel. Slow subscribers that fall further
/// behind than this lose oldest events (Lagged), they do not block logins.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// A change in authentication session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new official signed up and a profile row was created.
    SignedUp { subject_id: Uuid },
    /// A subject authenticated successfully.
    SignedIn { subject_id: Uuid, role: TokenRole },
    /// A subject's session was revoked.
    SignedOut { subject_id: Uuid, role: TokenRole },
}

/// Publisher half of the session event stream. Cheap to clone; all clones
/// feed the same subscribers.
#[derive(Debug, Clone)]
pub struct SessionEvents {
    sender: broadcast::Sender<SessionEvent>,
}

impl SessionEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publish an event to all live subscriptions. Events with no
    /// subscriber are dropped silently.
    pub fn publish(&self, event: SessionEvent) {
        let _ = self.sender.send(event);
    }

    /// Register an observer. Delivery stops when the returned handle is
    /// dropped; there is no other teardown step.
    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// A live observer registration. Dropping it unsubscribes.
pub struct SessionSubscription {
    receiver: broadcast::Receiver<SessionEvent>,
}

impl SessionSubscription {
    /// Wait for the next event. Returns None once the publisher is gone.
    /// Events missed while lagging are skipped, not redelivered.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Session event subscriber lagged");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

/// Spawns a listener that logs session-state changes for the lifetime of
/// the process.
pub fn spawn_logging_listener(events: &SessionEvents) {
    let mut subscription = events.subscribe();
    tokio::spawn(async move {
        while let Some(event) = subscription.next_event().await {
            match event {
                SessionEvent::SignedUp { subject_id } => {
                    tracing::info!(subject_id = %subject_id, "Official signed up");
                }
                SessionEvent::SignedIn { subject_id, role } => {
                    tracing::info!(subject_id = %subject_id, role = role.as_str(), "Signed in");
                }
                SessionEvent::SignedOut { subject_id, role } => {
                    tracing::info!(subject_id = %subject_id, role = role.as_str(), "Signed out");
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let events = SessionEvents::new();
        let mut subscription = events.subscribe();

        let subject_id = Uuid::new_v4();
        events.publish(SessionEvent::SignedIn {
            subject_id,
            role: TokenRole::Official,
        });

        let received = subscription.next_event().await.unwrap();
        assert_eq!(
            received,
            SessionEvent::SignedIn {
                subject_id,
                role: TokenRole::Official,
            }
        );
    }

    #[tokio::test]
    async fn test_drop_unsubscribes() {
        let events = SessionEvents::new();
        let subscription = events.subscribe();
        assert_eq!(events.subscriber_count(), 1);

        drop(subscription);
        assert_eq!(events.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_does_not_panic() {
        let events = SessionEvents::new();
        events.publish(SessionEvent::SignedUp {
            subject_id: Uuid::new_v4(),
        });
    }

    #[tokio::test]
    async fn test_multiple_subscribers_all_receive() {
        let events = SessionEvents::new();
        let mut first = events.subscribe();
        let mut second = events.subscribe();

        let subject_id = Uuid::new_v4();
        events.publish(SessionEvent::SignedOut {
            subject_id,
            role: TokenRole::Admin,
        });

        assert!(first.next_event().await.is_some());
        assert!(second.next_event().await.is_some());
    }
}
