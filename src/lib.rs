#![cfg_attr(not(test), no_std)]

//! GNSS receiver facade for microcontrollers.
//!
//! Sits between a UART, an optional receiver enable pin and an external protocol
//! engine (NMEA/UBX/...). Decoded fixes and satellite lists arrive in interrupt context
//! and are handed to application code as [`GnssLocation`] / [`GnssSatellites`]
//! snapshots.

// must come first so the logging macros are visible to every module
mod fmt;

pub mod board;
pub mod drivers;
pub mod error;
pub mod state;

pub use board::GnssConfig;
pub use drivers::engine::{EngineHooks, ProtocolEngine, SendCompletion};
pub use drivers::gnss::{Gnss, Notifier, RX_CHUNK};
pub use drivers::location::GnssLocation;
pub use drivers::notify::ReceiveNotifier;
pub use drivers::power::{EnablePin, NoPower, PowerControl};
pub use drivers::satellites::GnssSatellites;
pub use drivers::transport::Transport;
pub use error::{Error, Result, TransportError};
pub use state::{
    Antenna, Constellation, EngineSettings, FixQuality, FixRecord, FixTime, FixType,
    Periodic, Protocol, Rate, SatelliteInfo, SatelliteSet, SatelliteState, SATELLITES_MAX,
};
