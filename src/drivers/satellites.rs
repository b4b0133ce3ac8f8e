use crate::state::{SatelliteInfo, SatelliteSet, SatelliteState};

/// Snapshot of the satellites in view, returned by
/// [`Gnss::satellites`](super::gnss::Gnss::satellites).
///
/// Per-index getters return 0 / `false` for `index >= count()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GnssSatellites {
    set: SatelliteSet,
}

impl GnssSatellites {
    pub const fn new(set: SatelliteSet) -> Self {
        Self { set }
    }

    pub fn count(&self) -> usize {
        self.set.as_slice().len()
    }

    pub fn get(&self, index: usize) -> Option<&SatelliteInfo> {
        self.set.as_slice().get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SatelliteInfo> {
        self.set.as_slice().iter()
    }

    pub fn svid(&self, index: usize) -> u8 {
        self.get(index).map_or(0, |s| s.svid)
    }

    pub fn snr(&self, index: usize) -> u8 {
        self.get(index).map_or(0, |s| s.snr)
    }

    pub fn elevation(&self, index: usize) -> u8 {
        self.get(index).map_or(0, |s| s.elevation)
    }

    pub fn azimuth(&self, index: usize) -> u16 {
        self.get(index).map_or(0, |s| s.azimuth)
    }

    pub fn state(&self, index: usize) -> SatelliteState {
        self.get(index).map_or(SatelliteState::empty(), |s| s.state)
    }

    fn has(&self, index: usize, flag: SatelliteState) -> bool {
        self.state(index).contains(flag)
    }

    pub fn unhealthy(&self, index: usize) -> bool {
        self.has(index, SatelliteState::UNHEALTHY)
    }

    pub fn almanac(&self, index: usize) -> bool {
        self.has(index, SatelliteState::ALMANAC)
    }

    pub fn ephemeris(&self, index: usize) -> bool {
        self.has(index, SatelliteState::EPHEMERIS)
    }

    pub fn autonomous(&self, index: usize) -> bool {
        self.has(index, SatelliteState::AUTONOMOUS)
    }

    pub fn correction(&self, index: usize) -> bool {
        self.has(index, SatelliteState::CORRECTION)
    }

    pub fn acquired(&self, index: usize) -> bool {
        self.has(index, SatelliteState::ACQUIRED)
    }

    pub fn locked(&self, index: usize) -> bool {
        self.has(index, SatelliteState::LOCKED)
    }

    pub fn navigating(&self, index: usize) -> bool {
        self.has(index, SatelliteState::NAVIGATING)
    }
}

impl From<SatelliteSet> for GnssSatellites {
    fn from(set: SatelliteSet) -> Self {
        Self::new(set)
    }
}
