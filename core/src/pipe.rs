//! Typed, closable publish channels connecting presentation to logic.
//!
//! # Design
//! Pipes wrap tokio channels with explicit close semantics: closing is
//! terminal, irreversible, and idempotent, and `send` after close is a safe
//! no-op returning `false` rather than a panic. Errors travel in-band as
//! [`Signal::Error`], so a subscriber sees one ordered stream of values and
//! failures.
//!
//! [`Pipe`] is single-consumer: `subscribe` hands out the one receiver.
//! [`BroadcastPipe`] fans out to any number of subscribers. Each pipe is
//! owned by one component, which is responsible for closing it; dropping
//! the pipe closes it implicitly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tokio::sync::{broadcast, mpsc};

use crate::error::PipeError;

/// Per-pipe buffer for broadcast subscribers that lag behind.
const BROADCAST_CAPACITY: usize = 16;

/// One item in a pipe's stream: a value or a forwarded error.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal<T> {
    Data(T),
    Error(PipeError),
}

/// Single-consumer publish channel.
pub struct Pipe<T> {
    tx: Mutex<Option<mpsc::UnboundedSender<Signal<T>>>>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<Signal<T>>>>,
}

impl<T> Pipe<T> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx: Mutex::new(Some(tx)),
            rx: Mutex::new(Some(rx)),
        }
    }

    /// Take the receiving end. Returns `None` once taken — the pipe is
    /// intended for a single logical consumer.
    pub fn subscribe(&self) -> Option<mpsc::UnboundedReceiver<Signal<T>>> {
        self.rx.lock().unwrap().take()
    }

    /// Publish a value. Returns whether the channel accepted it — `false`
    /// after `close`, or once the subscriber has gone away.
    pub fn send(&self, value: T) -> bool {
        self.emit(Signal::Data(value))
    }

    /// Forward an error to the subscriber in place of a value.
    pub fn throw_error(&self, error: PipeError) -> bool {
        self.emit(Signal::Error(error))
    }

    fn emit(&self, signal: Signal<T>) -> bool {
        match self.tx.lock().unwrap().as_ref() {
            Some(tx) => tx.send(signal).is_ok(),
            None => false,
        }
    }

    /// Close the pipe. Terminal and idempotent; the subscriber's stream
    /// ends after draining anything already sent.
    pub fn close(&self) {
        self.tx.lock().unwrap().take();
    }

    pub fn is_closed(&self) -> bool {
        self.tx.lock().unwrap().is_none()
    }
}

impl<T> Default for Pipe<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Multi-subscriber publish channel.
///
/// Subscribers each see every signal sent after they subscribed, provided
/// they keep up: a subscriber that falls more than the pipe's capacity
/// behind observes a lag error from its receiver and resumes at the oldest
/// retained signal. Sending with zero subscribers still succeeds; the
/// signal is simply dropped.
pub struct BroadcastPipe<T> {
    tx: Mutex<Option<broadcast::Sender<Signal<T>>>>,
}

impl<T: Clone> BroadcastPipe<T> {
    pub fn new() -> Self {
        Self::with_capacity(BROADCAST_CAPACITY)
    }

    /// A pipe retaining up to `capacity` signals for slow subscribers.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx: Mutex::new(Some(tx)),
        }
    }

    /// Register a new subscriber. Returns `None` once the pipe is closed.
    pub fn subscribe(&self) -> Option<broadcast::Receiver<Signal<T>>> {
        self.tx.lock().unwrap().as_ref().map(|tx| tx.subscribe())
    }

    /// Publish a value to every current subscriber. Returns `false` only
    /// after `close`.
    pub fn send(&self, value: T) -> bool {
        self.emit(Signal::Data(value))
    }

    /// Forward an error to every current subscriber.
    pub fn throw_error(&self, error: PipeError) -> bool {
        self.emit(Signal::Error(error))
    }

    fn emit(&self, signal: Signal<T>) -> bool {
        match self.tx.lock().unwrap().as_ref() {
            Some(tx) => {
                // A send with no live receivers is not a failure.
                let _ = tx.send(signal);
                true
            }
            None => false,
        }
    }

    /// Close the pipe. Terminal and idempotent; subscriber streams end
    /// after draining.
    pub fn close(&self) {
        self.tx.lock().unwrap().take();
    }

    pub fn is_closed(&self) -> bool {
        self.tx.lock().unwrap().is_none()
    }
}

impl<T: Clone> Default for BroadcastPipe<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Validating pipe: each sent value runs through a validation closure.
///
/// Valid values pass through as `Some(value)` and set the last-was-valid
/// flag; invalid values are suppressed — the subscriber receives `None`
/// while the flag goes false, so it can distinguish "nothing sent" from
/// "something invalid sent".
pub struct ValidatorPipe<T> {
    inner: Pipe<Option<T>>,
    validate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    last_valid: AtomicBool,
}

impl<T> ValidatorPipe<T> {
    pub fn new(validate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            inner: Pipe::new(),
            validate: Box::new(validate),
            last_valid: AtomicBool::new(false),
        }
    }

    pub fn subscribe(&self) -> Option<mpsc::UnboundedReceiver<Signal<Option<T>>>> {
        self.inner.subscribe()
    }

    /// Validate and publish. Invalid values deliver `None` to the
    /// subscriber. Returns whether the underlying channel accepted the
    /// signal.
    pub fn send(&self, value: T) -> bool {
        if self.inner.is_closed() {
            return false;
        }
        let valid = (self.validate)(&value);
        let accepted = self.inner.send(valid.then_some(value));
        if accepted {
            self.last_valid.store(valid, Ordering::SeqCst);
        }
        accepted
    }

    /// Whether the most recently accepted value passed validation.
    pub fn last_was_valid(&self) -> bool {
        self.last_valid.load(Ordering::SeqCst)
    }

    pub fn throw_error(&self, error: PipeError) -> bool {
        self.inner.throw_error(error)
    }

    pub fn close(&self) {
        self.inner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

/// Payload-less pipe: signals that something happened, nothing more.
#[derive(Default)]
pub struct EventPipe {
    inner: Pipe<()>,
}

impl EventPipe {
    pub fn new() -> Self {
        Self { inner: Pipe::new() }
    }

    /// Publish the no-data sentinel.
    pub fn launch(&self) -> bool {
        self.inner.send(())
    }

    pub fn subscribe(&self) -> Option<mpsc::UnboundedReceiver<Signal<()>>> {
        self.inner.subscribe()
    }

    pub fn throw_error(&self, error: PipeError) -> bool {
        self.inner.throw_error(error)
    }

    pub fn close(&self) {
        self.inner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

/// Payload-less broadcast pipe.
#[derive(Default)]
pub struct BroadcastEventPipe {
    inner: BroadcastPipe<()>,
}

impl BroadcastEventPipe {
    pub fn new() -> Self {
        Self {
            inner: BroadcastPipe::new(),
        }
    }

    pub fn launch(&self) -> bool {
        self.inner.send(())
    }

    pub fn subscribe(&self) -> Option<broadcast::Receiver<Signal<()>>> {
        self.inner.subscribe()
    }

    pub fn throw_error(&self, error: PipeError) -> bool {
        self.inner.throw_error(error)
    }

    pub fn close(&self) {
        self.inner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}
