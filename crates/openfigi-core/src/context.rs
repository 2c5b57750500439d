//! Per-call cancellation and deadline handle.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::error::{FigiError, Result};

/// Cancellation signal and deadline for one call.
///
/// The interrupt signal is a `watch` channel: sending `true` aborts any call
/// holding a receiver. A dropped sender never interrupts.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    interrupt: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that is never interrupted and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Create an interruptible context together with its trigger.
    pub fn with_interrupt() -> (Self, watch::Sender<bool>) {
        let (tx, rx) = watch::channel(false);
        (Self::background().with_interrupt_signal(rx), tx)
    }

    pub fn with_interrupt_signal(mut self, rx: watch::Receiver<bool>) -> Self {
        self.interrupt = Some(rx);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the deadline relative to now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupt.as_ref().is_some_and(|rx| *rx.borrow())
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Fail fast if the context is already done.
    pub fn check(&self) -> Result<()> {
        if self.is_interrupted() {
            return Err(FigiError::Cancelled);
        }
        if self.is_expired() {
            return Err(FigiError::Timeout);
        }
        Ok(())
    }

    /// Drive `fut` to completion unless the context is interrupted or its
    /// deadline passes first. `fut` is never polled once the context is done.
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let interrupted = async {
            match self.interrupt.clone() {
                Some(mut rx) => loop {
                    if *rx.borrow_and_update() {
                        break;
                    }
                    if rx.changed().await.is_err() {
                        std::future::pending::<()>().await;
                    }
                },
                None => std::future::pending::<()>().await,
            }
        };

        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = interrupted => Err(FigiError::Cancelled),
            _ = expired => Err(FigiError::Timeout),
            out = fut => out,
        }
    }
}
