use embassy_time::Duration;

use crate::state::{Protocol, Rate};

/// Board-level receiver parameters, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GnssConfig {
    /// Rate the UART is opened at before the engine takes over
    pub boot_baud: u32,
    /// Operating rate for the NMEA text protocol
    pub nmea_baud: u32,
    /// Binary protocols at 1 Hz
    pub binary_low_baud: u32,
    /// Binary protocols above 1 Hz
    pub binary_high_baud: u32,
    /// At or below this rate the UART may wake the MCU from low-power modes
    pub wake_max_baud: u32,
    /// Spin after raising the enable line in `start()`
    pub enable_settle: Duration,
}

impl GnssConfig {
    pub const fn new() -> Self {
        Self {
            boot_baud: 9_600,
            nmea_baud: 9_600,
            binary_low_baud: 38_400,
            binary_high_baud: 115_200,
            wake_max_baud: 38_400,
            enable_settle: Duration::from_millis(125),
        }
    }

    pub const fn with_enable_settle(mut self, settle: Duration) -> Self {
        self.enable_settle = settle;
        self
    }

    /// Operating baud rate the engine is initialized with.
    pub fn baud_rate(&self, protocol: Protocol, rate: Rate) -> u32 {
        match protocol {
            Protocol::Nmea => self.nmea_baud,
            _ if rate > Rate::Hz1 => self.binary_high_baud,
            _ => self.binary_low_baud,
        }
    }

    pub fn low_power_wake(&self, baud: u32) -> bool {
        baud <= self.wake_max_baud
    }
}

impl Default for GnssConfig {
    fn default() -> Self {
        Self::new()
    }
}
