//! Synchronous observable-value container.
//!
//! [`Writable`] holds one value and a list of observers. Observers are
//! invoked synchronously, in registration order, with the current value at
//! registration time and with every subsequent value. Observer callbacks
//! must not call back into the same container.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// A mutable observable value.
///
/// Cloning is shallow: clones share the same value and observer list.
pub struct Writable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

struct Inner<T> {
    value: T,
    observers: Vec<Observer<T>>,
    next_id: u64,
}

struct Observer<T> {
    id: u64,
    callback: Box<dyn FnMut(&T) + Send>,
}

impl<T> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the value and notify every observer.
    pub fn set(&self, value: T) {
        let mut inner = self.lock();
        inner.value = value;
        inner.notify();
    }

    /// Replace the value with a transform of the current one and notify.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let mut inner = self.lock();
        inner.value = f(&inner.value);
        inner.notify();
    }

    /// Register an observer. It is invoked immediately with the current
    /// value, then again on every change, until unsubscribed.
    pub fn subscribe(&self, mut f: impl FnMut(&T) + Send + 'static) -> Subscription<T> {
        let mut inner = self.lock();
        f(&inner.value);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.observers.push(Observer {
            id,
            callback: Box::new(f),
        });
        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Read-only view of this value.
    pub fn readonly(&self) -> Readable<T> {
        Readable {
            inner: self.clone(),
        }
    }
}

impl<T: Clone> Writable<T> {
    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.lock().value.clone()
    }
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Writable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Writable").field(&self.lock().value).finish()
    }
}

impl<T> Inner<T> {
    fn notify(&mut self) {
        let Self {
            value, observers, ..
        } = self;
        for observer in observers {
            (observer.callback)(value);
        }
    }
}

/// Read-only handle to a [`Writable`].
#[derive(Clone)]
pub struct Readable<T> {
    inner: Writable<T>,
}

impl<T> Readable<T> {
    /// Register an observer; same contract as [`Writable::subscribe`].
    pub fn subscribe(&self, f: impl FnMut(&T) + Send + 'static) -> Subscription<T> {
        self.inner.subscribe(f)
    }
}

impl<T: Clone> Readable<T> {
    pub fn get(&self) -> T {
        self.inner.get()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Readable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Readable").field(&self.inner.lock().value).finish()
    }
}

/// Handle returned by `subscribe`. Dropping it does nothing; call
/// [`unsubscribe`](Self::unsubscribe) to stop receiving values.
pub struct Subscription<T> {
    inner: Weak<Mutex<Inner<T>>>,
    id: u64,
}

impl<T> Subscription<T> {
    pub fn unsubscribe(self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.observers.retain(|observer| observer.id != self.id);
        }
    }
}
