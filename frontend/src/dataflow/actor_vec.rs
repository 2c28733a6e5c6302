//! Reactive collection container.

use std::future::Future;
use std::sync::Arc;
use zoon::{MutableVec, Signal, SignalExt, SignalVec, SignalVecExt, Task, TaskHandle};

/// Collection counterpart of [`crate::dataflow::Actor`]: a `MutableVec`
/// whose only mutation point is the processor loop.
#[derive(Clone, Debug)]
pub struct ActorVec<T>
where
    T: Clone + Send + Sync + 'static,
{
    items: MutableVec<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
}

impl<T> ActorVec<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(initial_items: Vec<T>, processor: F) -> Self
    where
        F: FnOnce(MutableVec<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let items = MutableVec::new_with_values(initial_items);
        let task_handle = Arc::new(Task::start_droppable(processor(items.clone())));
        Self { items, task_handle }
    }

    pub fn signal_vec(&self) -> impl SignalVec<Item = T> {
        self.items.signal_vec_cloned()
    }

    /// Whole-collection snapshot signal, for consumers that re-render the
    /// full list (tables, counts).
    pub fn signal(&self) -> impl Signal<Item = Vec<T>> {
        self.items.signal_vec_cloned().to_signal_cloned()
    }

    pub fn len_signal(&self) -> impl Signal<Item = usize> {
        self.items.signal_vec_cloned().len()
    }

    pub fn is_empty_signal(&self) -> impl Signal<Item = bool> {
        self.len_signal().map(|len| len == 0)
    }
}
