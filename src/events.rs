/// Typed notification sources
use std::sync::{Arc, RwLock};

/// A registered event handler
pub type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Capability to register a handler for one kind of notification
pub trait Subscribe<E> {
    fn subscribe(&self, handler: Handler<E>);
}

/// Synchronous, in-process notification source for events of type `E`.
///
/// Handlers run on the caller's thread, in registration order, before
/// `emit` returns.
pub struct Emitter<E> {
    handlers: RwLock<Vec<Handler<E>>>,
}

impl<E> Emitter<E> {
    /// Create an emitter with no handlers
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Register a handler for every future emission
    pub fn on<F>(&self, handler: F)
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let handler: Handler<E> = Arc::new(handler);
        self.subscribe(handler);
    }

    /// Dispatch an event to all handlers, returning how many ran
    pub fn emit(&self, event: &E) -> usize {
        // Snapshot so handlers may register further handlers without deadlocking
        let handlers: Vec<Handler<E>> = match self.handlers.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        for handler in &handlers {
            handler(event);
        }

        handlers.len()
    }

    /// Number of registered handlers
    pub fn listener_count(&self) -> usize {
        match self.handlers.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Subscribe<E> for Emitter<E> {
    fn subscribe(&self, handler: Handler<E>) {
        match self.handlers.write() {
            Ok(mut guard) => guard.push(handler),
            Err(poisoned) => poisoned.into_inner().push(handler),
        }
    }
}

impl<E, S: Subscribe<E> + ?Sized> Subscribe<E> for Arc<S> {
    fn subscribe(&self, handler: Handler<E>) {
        (**self).subscribe(handler);
    }
}
