//! Error types for the receiver facade.
//!
//! Nothing here is fatal: every failure is returned inline to the caller.
//! Hooks running in interrupt context log and swallow their failures instead.

use core::fmt;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// No transport is bound: `start` was never called or `stop` already ran.
    NotStarted,
    /// `start` called on a facade that is already running.
    InvalidState,
    /// The protocol engine declined the directive.
    Rejected,
    /// The transport refused an open or write.
    Transport(TransportError),
}

/// Failures a [`Transport`](crate::drivers::transport::Transport) may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Baud rate not supported by the peripheral
    InvalidBaudRate,
    /// A previous write is still in flight
    Busy,
    /// Outbound data does not fit the transmit buffer
    Overflow,
    /// Peripheral is closed
    Closed,
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotStarted => write!(f, "receiver not started"),
            Error::InvalidState => write!(f, "receiver already started"),
            Error::Rejected => write!(f, "directive rejected by protocol engine"),
            Error::Transport(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::InvalidBaudRate => write!(f, "invalid baud rate"),
            TransportError::Busy => write!(f, "write in progress"),
            TransportError::Overflow => write!(f, "transmit buffer overflow"),
            TransportError::Closed => write!(f, "transport closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_converts() {
        let e: Error = TransportError::Busy.into();
        assert_eq!(e, Error::Transport(TransportError::Busy));
    }

    #[test]
    fn display_mentions_cause() {
        let s = std::format!("{}", Error::Transport(TransportError::InvalidBaudRate));
        assert_eq!(s, "transport error: invalid baud rate");
        assert_eq!(std::format!("{}", Error::NotStarted), "receiver not started");
    }
}
