//! Change fan-out contract.
//!
//! A store publishes only after its change is committed; a failed publish
//! never rolls anything back. Each subscriber sees one publisher's messages
//! in publish order.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};

/// Receiving end handed out by [`EventBus::subscribe`].
///
/// Broadcast: every subscription gets its own copy of each message published
/// after it was created. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription<M> {
    rx: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(rx: Receiver<M>) -> Self {
        Self { rx }
    }

    /// Next buffered message, if any.
    pub fn poll(&self) -> Option<M> {
        match self.rx.try_recv() {
            Ok(m) => Some(m),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    pub fn drain(&self) -> Vec<M> {
        self.rx.try_iter().collect()
    }
}

/// Blocking iteration; ends when the publishing side is dropped.
impl<M> IntoIterator for Subscription<M> {
    type Item = M;
    type IntoIter = std::sync::mpsc::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.rx.into_iter()
    }
}

pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        B::publish(self, message)
    }

    fn subscribe(&self) -> Subscription<M> {
        B::subscribe(self)
    }
}
