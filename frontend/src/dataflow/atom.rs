//! Local UI state helper.

use crate::dataflow::{relay, Actor, Relay};
use futures::StreamExt;
use zoon::Signal;

/// Thin Actor+Relay wrapper for local UI state (dialog visibility, loading
/// flags, filter toggles). Keeps the no-raw-Mutables rule without the
/// ceremony of a dedicated domain.
#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    actor: Actor<T>,
    set_relay: Relay<T>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (set_relay, mut set_stream) = relay();
        let actor = Actor::new(initial, async move |state| {
            while let Some(value) = set_stream.next().await {
                state.set(value);
            }
        });
        Self { actor, set_relay }
    }

    pub fn set(&self, value: T) {
        self.set_relay.send(value);
    }

    pub fn signal(&self) -> impl Signal<Item = T> {
        self.actor.signal()
    }
}
