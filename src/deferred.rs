use std::time::Duration;

use tokio::sync::oneshot::{self, error::TryRecvError};

/// A value that becomes available once, after a simulated delay.
///
/// `after` needs a tokio runtime to be entered; `ready` does not.
#[derive(Debug)]
pub struct Deferred<T> {
    rx: oneshot::Receiver<T>,
}

impl<T: Send + 'static> Deferred<T> {
    #[must_use]
    pub fn after(delay: Duration, value: T) -> Self {
        if delay.is_zero() {
            return Self::ready(value);
        }
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(value);
        });
        Self { rx }
    }

    #[must_use]
    pub fn ready(value: T) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(value);
        Self { rx }
    }

    /// Takes the value if it has arrived. Returns `None` while still waiting
    /// and after the value has been taken.
    pub fn try_take(&mut self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(value) => Some(value),
            Err(TryRecvError::Empty | TryRecvError::Closed) => None,
        }
    }
}
