//! Value types exchanged between the protocol engine, the facade and the application.
//!
//! All records are flat `Copy` values: the engine hands them over by reference, the
//! facade copies them wholesale into its pending slots, and the snapshots embed them by
//! value. Fixed-point fields stay integer here; scaling happens in the accessors.

use bitflags::bitflags;

/// Upper bound on satellites reported in one [`SatelliteSet`].
pub const SATELLITES_MAX: usize = 32;

/// GPS epoch used by the engine for `FixTime::year`.
pub const YEAR_BASE: u16 = 1980;

// ── Fix ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FixType {
    #[default]
    None,
    Time,
    TwoD,
    ThreeD,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FixQuality {
    #[default]
    None,
    Autonomous,
    Differential,
    Precise,
    RtkFixed,
    RtkFloat,
    Estimated,
    Manual,
    Simulation,
}

/// UTC time of a fix. `year` counts from [`YEAR_BASE`]. Not calendar-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixTime {
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millis: u16,
}

/// One decoded navigation solution as produced by the protocol engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixRecord {
    pub fix_type: FixType,
    pub quality: FixQuality,
    pub satellites: u8,     // used in fix
    pub time: FixTime,
    pub correction: u8,     // age/source of differential correction
    pub latitude: i32,      // deg  × 1e7
    pub longitude: i32,     // deg  × 1e7
    pub altitude: i32,      // m    × 1e3 (MSL)
    pub separation: i32,    // m    × 1e3 (geoid)
    pub speed: i32,         // m/s  × 1e3
    pub course: i32,        // deg  × 1e5
    pub climb: i32,         // m/s  × 1e3
    pub ehpe: u32,          // m    × 1e3
    pub evpe: u32,          // m    × 1e3
    pub pdop: u16,          // × 1e2
    pub hdop: u16,          // × 1e2
    pub vdop: u16,          // × 1e2
}

impl FixRecord {
    pub const fn new() -> Self {
        Self {
            fix_type: FixType::None,
            quality: FixQuality::None,
            satellites: 0,
            time: FixTime {
                year: 0,
                month: 0,
                day: 0,
                hour: 0,
                minute: 0,
                second: 0,
                millis: 0,
            },
            correction: 0,
            latitude: 0,
            longitude: 0,
            altitude: 0,
            separation: 0,
            speed: 0,
            course: 0,
            climb: 0,
            ehpe: 0,
            evpe: 0,
            pdop: 0,
            hdop: 0,
            vdop: 0,
        }
    }
}

// ── Satellites ────────────────────────────────────────────────────────────────

bitflags! {
    /// Tracking state of a single satellite.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SatelliteState: u8 {
        const UNHEALTHY  = 0x01;
        const ALMANAC    = 0x02;
        const EPHEMERIS  = 0x04;
        const AUTONOMOUS = 0x08;
        const CORRECTION = 0x10;
        const ACQUIRED   = 0x20;
        const LOCKED     = 0x40;
        const NAVIGATING = 0x80;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SatelliteState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SatelliteState({=u8:#x})", self.bits());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SatelliteInfo {
    pub svid: u8,
    pub snr: u8,        // dB-Hz
    pub elevation: u8,  // degrees
    pub azimuth: u16,   // degrees
    pub state: SatelliteState,
}

/// Satellites in view, `count` valid entries at the front of `info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SatelliteSet {
    pub count: u8,
    pub info: [SatelliteInfo; SATELLITES_MAX],
}

impl SatelliteSet {
    pub const fn new() -> Self {
        Self {
            count: 0,
            info: [SatelliteInfo {
                svid: 0,
                snr: 0,
                elevation: 0,
                azimuth: 0,
                state: SatelliteState::empty(),
            }; SATELLITES_MAX],
        }
    }

    /// Builds a set from a slice, truncated to [`SATELLITES_MAX`].
    pub fn from_slice(sats: &[SatelliteInfo]) -> Self {
        let mut set = Self::new();
        let n = sats.len().min(SATELLITES_MAX);
        set.info[..n].copy_from_slice(&sats[..n]);
        set.count = n as u8;
        set
    }

    /// Valid entries only. A corrupt `count` above capacity is clamped.
    pub fn as_slice(&self) -> &[SatelliteInfo] {
        let n = (self.count as usize).min(SATELLITES_MAX);
        &self.info[..n]
    }
}

impl Default for SatelliteSet {
    fn default() -> Self {
        Self::new()
    }
}

// ── Receiver configuration values ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Protocol {
    Nmea,
    Ubx,
    Mediatek,
}

/// Navigation update rate. Ordered so `rate > Rate::Hz1` reads naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rate {
    Hz1,
    Hz5,
    Hz10,
}

impl Rate {
    pub const fn hz(self) -> u8 {
        match self {
            Rate::Hz1 => 1,
            Rate::Hz5 => 5,
            Rate::Hz10 => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Antenna {
    Internal,
    External,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Constellation: u8 {
        const GPS     = 0x01;
        const GLONASS = 0x02;
        const BEIDOU  = 0x04;
        const GALILEO = 0x08;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Constellation {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Constellation({=u8:#x})", self.bits());
    }
}

/// Duty-cycled tracking: receiver is on for `on_time_s` out of every `period_s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Periodic {
    pub on_time_s: u32,
    pub period_s: u32,
    pub force: bool,
}

/// What the engine is told at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineSettings {
    pub protocol: Protocol,
    pub rate: Rate,
    pub baud_rate: u32,
    /// The board has a receiver enable line. Without one, [`EngineHooks::enable`] and
    /// [`EngineHooks::disable`] do nothing and the engine must keep the receiver awake
    /// with protocol commands alone.
    ///
    /// [`EngineHooks::enable`]: crate::drivers::engine::EngineHooks::enable
    /// [`EngineHooks::disable`]: crate::drivers::engine::EngineHooks::disable
    pub power_control: bool,
}
