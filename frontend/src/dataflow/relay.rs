//! Type-safe event streaming over plain unbounded channels.

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};

/// One-way event channel from UI code into an Actor loop.
///
/// Sending never blocks; events emitted while no receiver exists are
/// silently dropped, which matches fire-and-forget UI events.
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The receiver side has been dropped.
    ChannelClosed,
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (Relay { sender }, receiver)
    }

    pub fn send(&self, value: T) {
        let _ = self.sender.unbounded_send(value);
    }

    pub fn try_send(&self, value: T) -> Result<(), RelayError> {
        self.sender
            .unbounded_send(value)
            .map_err(|_| RelayError::ChannelClosed)
    }
}

impl<T> Default for Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// A disconnected relay that discards every event. Useful as a
    /// placeholder before wiring, and in tests.
    fn default() -> Self {
        let (relay, _receiver) = Self::new();
        relay
    }
}

/// Create a Relay together with its receiver stream, following Rust's
/// channel conventions.
pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn send_reaches_the_receiver_in_order() {
        let (relay, mut stream) = relay::<u32>();
        relay.send(1);
        relay.send(2);
        assert_eq!(stream.next().await, Some(1));
        assert_eq!(stream.next().await, Some(2));
    }

    #[tokio::test]
    async fn try_send_reports_a_dropped_receiver() {
        let (relay, receiver) = relay::<&'static str>();
        assert!(relay.try_send("alive").is_ok());
        drop(receiver);
        assert_eq!(relay.try_send("dead"), Err(RelayError::ChannelClosed));
    }

    #[test]
    fn default_relay_discards_silently() {
        let relay = Relay::<u32>::default();
        relay.send(7);
    }
}
