//! Single-threaded task scheduling for UI handlers
//!
//! Handlers never block. Work that must happen after the current dispatch
//! turn is deferred, and asynchronous workbench actions are spawned onto the
//! same local event loop.
//!
//! Two schedulers are provided:
//! - `QueueScheduler` queues work for the owner of the application's update
//!   loop, which runs it on a later turn (see `TitleBar::update`)
//! - `TokioScheduler` runs work on a tokio `LocalSet`

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};
use tokio::sync::Notify;
use tokio::task::LocalSet;

/// Boxed future that stays on the current thread
pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A unit of deferred work
pub type Job = Box<dyn FnOnce()>;

/// Event loop hooks used by UI controllers
pub trait Scheduler {
    /// Run `job` on a later turn of the event loop, never synchronously
    fn defer(&self, job: Job);

    /// Drive `future` to completion on the event loop
    fn spawn(&self, future: LocalBoxFuture<'static, ()>);
}

/// Scheduler backed by a tokio `LocalSet`
///
/// Jobs run whenever the owner drives the set, e.g. with
/// `LocalSet::run_until` from the application's runtime.
#[derive(Clone)]
pub struct TokioScheduler {
    local: Rc<LocalSet>,
}

impl TokioScheduler {
    pub fn new(local: Rc<LocalSet>) -> Self {
        Self { local }
    }

    pub fn local_set(&self) -> &Rc<LocalSet> {
        &self.local
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new(Rc::new(LocalSet::new()))
    }
}

impl Scheduler for TokioScheduler {
    fn defer(&self, job: Job) {
        self.local.spawn_local(async move { job() });
    }

    fn spawn(&self, future: LocalBoxFuture<'static, ()>) {
        self.local.spawn_local(future);
    }
}

impl std::fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioScheduler").finish_non_exhaustive()
    }
}

/// Wakes the update loop when a queued future can make progress
#[derive(Debug, Default)]
struct WakeSignal {
    notify: Notify,
}

impl Wake for WakeSignal {
    fn wake(self: Arc<Self>) {
        self.notify.notify_one();
    }
}

/// Scheduler whose work is run by the owner of the update loop
///
/// Nothing runs until `run_pending` is called. Jobs deferred while
/// `run_pending` is running wait for the next call.
pub struct QueueScheduler {
    jobs: RefCell<VecDeque<Job>>,
    /// Futures not polled yet
    spawned: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
    /// Futures that returned `Pending` and wait for a wake
    waiting: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
    signal: Arc<WakeSignal>,
}

impl QueueScheduler {
    pub fn new() -> Self {
        Self {
            jobs: RefCell::new(VecDeque::new()),
            spawned: RefCell::new(Vec::new()),
            waiting: RefCell::new(Vec::new()),
            signal: Arc::new(WakeSignal::default()),
        }
    }

    /// Whether work is ready to run on the next turn
    pub fn has_ready(&self) -> bool {
        !self.jobs.borrow().is_empty() || !self.spawned.borrow().is_empty()
    }

    /// Whether futures are waiting for a wake
    pub fn has_waiting(&self) -> bool {
        !self.waiting.borrow().is_empty()
    }

    pub fn is_idle(&self) -> bool {
        !self.has_ready() && !self.has_waiting()
    }

    /// Run the jobs queued so far and poll every queued future once
    pub fn run_pending(&self) {
        let jobs = std::mem::take(&mut *self.jobs.borrow_mut());
        for job in jobs {
            job();
        }

        let mut futures = std::mem::take(&mut *self.spawned.borrow_mut());
        futures.append(&mut self.waiting.borrow_mut());
        if futures.is_empty() {
            return;
        }

        let waker = Waker::from(self.signal.clone());
        let mut cx = Context::from_waker(&waker);
        for mut future in futures {
            if let Poll::Pending = future.as_mut().poll(&mut cx) {
                self.waiting.borrow_mut().push(future);
            }
        }
    }

    /// Resolves once a waiting future has been woken
    pub fn woken(&self) -> impl Future<Output = ()> + Send + 'static {
        let signal = self.signal.clone();
        async move { signal.notify.notified().await }
    }
}

impl Default for QueueScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for QueueScheduler {
    fn defer(&self, job: Job) {
        self.jobs.borrow_mut().push_back(job);
    }

    fn spawn(&self, future: LocalBoxFuture<'static, ()>) {
        self.spawned.borrow_mut().push(future);
    }
}

impl std::fmt::Debug for QueueScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueScheduler")
            .field("jobs", &self.jobs.borrow().len())
            .field("spawned", &self.spawned.borrow().len())
            .field("waiting", &self.waiting.borrow().len())
            .finish()
    }
}
