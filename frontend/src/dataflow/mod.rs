//! Reactive state primitives for the Actor+Relay architecture.
//!
//! All domain state lives in Actors fed by Relays; UI code never holds raw
//! `Mutable`s and reads state only through signals. Relays are named after
//! their event source (`{source}_{event}_relay`).

pub mod actor;
pub mod actor_vec;
pub mod atom;
pub mod relay;

pub use actor::Actor;
pub use actor_vec::ActorVec;
pub use atom::Atom;
pub use relay::{relay, Relay};
