//! Serial link toward the receiver.
//!
//! The facade only needs a handful of operations from the UART driver. Completion and
//! receive events travel the other way: the platform's interrupt handler calls
//! [`Gnss::on_write_complete`](super::gnss::Gnss::on_write_complete) and
//! [`Gnss::on_receive_ready`](super::gnss::Gnss::on_receive_ready).

use crate::error::TransportError;

pub trait Transport {
    /// (Re)configure the peripheral at `baud` and start receiving.
    fn open(&mut self, baud: u32) -> Result<(), TransportError>;

    fn close(&mut self);

    /// Copy up to `buf.len()` already-received bytes. Returns 0 when nothing is buffered;
    /// never waits.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Queue `data` for transmission. The transport keeps its own copy; completion is
    /// reported later through `on_write_complete`.
    fn write(&mut self, data: &[u8]) -> Result<(), TransportError>;

    /// Start raising receive-ready events for buffered input.
    fn enable_receive_notification(&mut self);

    /// Allow RX activity to wake the MCU from stop mode.
    fn set_low_power_wake(&mut self, enabled: bool);
}
