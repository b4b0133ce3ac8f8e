//! Single-record handoff from interrupt context to the application.
//!
//! The producer replaces the whole record and raises `pending`. The consumer clears
//! `pending`, copies, then re-checks: if the producer published again in between, the
//! copy is thrown away and taken again. Only the latest record is ever visible; there
//! is no queue.

use core::cell::Cell;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

pub struct PendingSlot<T: Copy> {
    pending: AtomicBool,
    data: Mutex<CriticalSectionRawMutex, Cell<T>>,
}

impl<T: Copy> PendingSlot<T> {
    pub const fn new(init: T) -> Self {
        Self {
            pending: AtomicBool::new(false),
            data: Mutex::new(Cell::new(init)),
        }
    }

    /// Producer side. Called from interrupt context.
    pub fn publish(&self, value: &T) {
        self.data.lock(|cell| cell.set(*value));
        self.pending.store(true, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Consumer side. Returns the latest published record and clears `pending`.
    /// Returns the initial/last record unchanged if nothing new was published.
    pub fn take(&self) -> T {
        self.take_with(|| {})
    }

    fn take_with(&self, mut after_copy: impl FnMut()) -> T {
        loop {
            self.pending.store(false, Ordering::Release);
            let value = self.data.lock(|cell| cell.get());
            after_copy();
            if !self.pending.load(Ordering::Acquire) {
                return value;
            }
        }
    }
}
