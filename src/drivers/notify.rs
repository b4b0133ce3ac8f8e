//! "New fix available" notification.
//!
//! Fired from interrupt context, so implementations must only flag work for a task,
//! never do the work inline.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

pub trait ReceiveNotifier {
    fn notify(&self);
}

/// Lets an embassy task `await` the next location.
impl<M: RawMutex> ReceiveNotifier for Signal<M, ()> {
    fn notify(&self) {
        self.signal(());
    }
}

impl ReceiveNotifier for fn() {
    fn notify(&self) {
        (self)()
    }
}
