//! Single-value reactive state container.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Owns one piece of state and the async loop that is allowed to mutate
/// it. Events arrive through Relay streams captured by the processor;
/// everything else reads the state through [`Actor::signal`].
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Spawn the processor with a handle to the owned state. The processor
    /// normally loops over `select!`-ed relay streams; it is dropped with
    /// the last Actor clone.
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));
        Self { state, task_handle }
    }

    pub fn signal(&self) -> impl Signal<Item = T> {
        self.state.signal_cloned()
    }

    pub fn signal_ref<U>(
        &self,
        f: impl Fn(&T) -> U + Send + Sync + 'static,
    ) -> impl Signal<Item = U> {
        self.state.signal_ref(move |state| f(state))
    }
}
