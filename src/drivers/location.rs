use crate::state::{FixQuality, FixRecord, FixType, YEAR_BASE};

/// Snapshot of one fix, returned by [`Gnss::location`](super::gnss::Gnss::location).
///
/// Fixed-point fields are scaled on read; the embedded record stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GnssLocation {
    record: FixRecord,
}

impl GnssLocation {
    pub const fn new(record: FixRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &FixRecord {
        &self.record
    }

    /// `false` while the receiver has no fix.
    pub fn is_valid(&self) -> bool {
        self.record.fix_type != FixType::None
    }

    pub fn fix_type(&self) -> FixType {
        self.record.fix_type
    }

    pub fn fix_quality(&self) -> FixQuality {
        self.record.quality
    }

    /// Satellites used in the solution.
    pub fn satellites(&self) -> u8 {
        self.record.satellites
    }

    // ── Time (UTC) ──

    pub fn year(&self) -> u16 {
        self.record.time.year as u16 + YEAR_BASE
    }

    pub fn month(&self) -> u8 {
        self.record.time.month
    }

    pub fn day(&self) -> u8 {
        self.record.time.day
    }

    pub fn hour(&self) -> u8 {
        self.record.time.hour
    }

    pub fn minute(&self) -> u8 {
        self.record.time.minute
    }

    pub fn second(&self) -> u8 {
        self.record.time.second
    }

    pub fn millis(&self) -> u16 {
        self.record.time.millis
    }

    pub fn correction(&self) -> u8 {
        self.record.correction
    }

    // ── Position ──

    /// Degrees
    pub fn latitude(&self) -> f64 {
        self.record.latitude as f64 / 1e7
    }

    /// Degrees
    pub fn longitude(&self) -> f64 {
        self.record.longitude as f64 / 1e7
    }

    /// Metres above mean sea level
    pub fn altitude(&self) -> f32 {
        self.record.altitude as f32 / 1e3
    }

    /// Geoid separation, metres
    pub fn separation(&self) -> f32 {
        self.record.separation as f32 / 1e3
    }

    // ── Motion ──

    /// Ground speed, m/s
    pub fn speed(&self) -> f32 {
        self.record.speed as f32 / 1e3
    }

    /// Course over ground, degrees
    pub fn course(&self) -> f32 {
        self.record.course as f32 / 1e5
    }

    /// Vertical speed, m/s, positive up
    pub fn climb(&self) -> f32 {
        self.record.climb as f32 / 1e3
    }

    // ── Precision ──

    /// Estimated horizontal position error, metres
    pub fn ehpe(&self) -> f32 {
        self.record.ehpe as f32 / 1e3
    }

    /// Estimated vertical position error, metres
    pub fn evpe(&self) -> f32 {
        self.record.evpe as f32 / 1e3
    }

    pub fn pdop(&self) -> f32 {
        self.record.pdop as f32 / 1e2
    }

    pub fn hdop(&self) -> f32 {
        self.record.hdop as f32 / 1e2
    }

    pub fn vdop(&self) -> f32 {
        self.record.vdop as f32 / 1e2
    }
}

impl From<FixRecord> for GnssLocation {
    fn from(record: FixRecord) -> Self {
        Self::new(record)
    }
}

impl From<GnssLocation> for bool {
    fn from(loc: GnssLocation) -> bool {
        loc.is_valid()
    }
}
