#[cfg(test)]
mod gate_test;

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;

/// Gate is a one-shot signal. It starts open and can be closed exactly once;
/// every task waiting on it is released when it closes, and every later
/// wait returns immediately.
#[derive(Debug, Default)]
pub struct Gate {
    closed: AtomicBool,
    notify: Notify,
}

impl Gate {
    pub fn new() -> Self {
        Gate::default()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// close closes the gate and wakes all waiters. It returns true only for
    /// the call that actually closed it.
    pub fn close(&self) -> bool {
        if self.closed.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.notify.notify_waiters();
        true
    }

    /// wait resolves once the gate is closed.
    pub async fn wait(&self) {
        loop {
            // a Notified future receives notify_waiters from the moment it is
            // created, so registering before the check cannot lose a wakeup
            let notified = self.notify.notified();
            if self.is_closed() {
                return;
            }
            notified.await;
        }
    }
}
