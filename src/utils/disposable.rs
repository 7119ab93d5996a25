//! Scoped listener registrations
//!
//! Every listener registration hands back a [`Disposable`]. Owners collect
//! them in a [`DisposableStore`] which releases everything exactly once.

use std::cell::{Cell, RefCell};

/// Handle that undoes a registration when disposed
#[must_use = "dropping a Disposable without storing it leaks the registration"]
pub struct Disposable {
    release: Option<Box<dyn FnOnce()>>,
}

impl Disposable {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A disposable that releases nothing
    pub fn none() -> Self {
        Self { release: None }
    }

    /// Release the registration. Consuming `self` makes a second release impossible.
    pub fn dispose(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    /// Forget the registration without releasing it
    pub fn leak(mut self) {
        self.release = None;
    }
}

impl std::fmt::Debug for Disposable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposable")
            .field("pending", &self.release.is_some())
            .finish()
    }
}

/// Collection of disposables released together
#[derive(Default)]
pub struct DisposableStore {
    items: RefCell<Vec<Disposable>>,
    disposed: Cell<bool>,
}

impl DisposableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a disposable. Adding to an already disposed store releases it immediately.
    pub fn add(&self, disposable: Disposable) {
        if self.disposed.get() {
            log::warn!("Registration added to a disposed store, releasing it right away");
            disposable.dispose();
            return;
        }
        self.items.borrow_mut().push(disposable);
    }

    /// Release everything; later calls are no-ops
    pub fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        // Take the list first so release callbacks may touch the store
        let items = std::mem::take(&mut *self.items.borrow_mut());
        for item in items {
            item.dispose();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl Drop for DisposableStore {
    fn drop(&mut self) {
        self.dispose();
    }
}
