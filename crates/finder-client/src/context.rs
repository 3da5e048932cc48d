//! Cancellation and deadline scope for a lookup

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{ClientError, Result};

/// Bounds a lookup by a cancellation token and an optional deadline
///
/// Cloning shares the token; [`LookupContext::child`] derives a scope that is
/// cancelled with its parent but can also be cancelled on its own.
#[derive(Debug, Clone, Default)]
pub struct LookupContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl LookupContext {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// A context driven by an existing token
    pub fn with_cancel(cancel: CancellationToken) -> Self {
        Self {
            cancel,
            deadline: None,
        }
    }

    /// Bound this context by `timeout` from now, keeping any earlier deadline
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Bound this context by `deadline`, keeping any earlier deadline
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// A child scope cancelled together with this one
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Underlying cancellation token, for handing to signal handlers
    pub fn token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Drive `fut` to completion unless the context ends first
    ///
    /// An already-cancelled context returns without polling `fut`.
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let bounded = async {
            match self.deadline {
                Some(deadline) => match tokio::time::timeout_at(deadline, fut).await {
                    Ok(result) => result,
                    Err(_) => Err(ClientError::DeadlineExceeded),
                },
                None => fut.await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ClientError::Cancelled),
            result = bounded => result,
        }
    }
}
