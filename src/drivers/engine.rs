//! Boundary to the receiver protocol engine.
//!
//! The engine owns everything protocol-specific (sentence assembly, checksums, UBX
//! framing, command sequencing). It never touches hardware itself: every side effect
//! goes through the [`EngineHooks`] it is handed on each call.

use crate::state::{
    Antenna, Constellation, EngineSettings, FixRecord, Periodic, SatelliteSet,
};

/// What should happen once an outbound buffer has left the UART.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendCompletion {
    /// Call [`ProtocolEngine::send_complete`].
    NotifyEngine,
    /// Reopen the link at the operating baud rate, ready to receive.
    RestoreReceive,
}

/// Side effects available to the engine. Implemented by the facade.
pub trait EngineHooks {
    /// Power the receiver and bring the link up at the operating baud rate.
    /// No-op unless [`EngineSettings::power_control`] was set.
    fn enable(&mut self);

    /// Power the receiver down and close the link.
    /// No-op unless [`EngineSettings::power_control`] was set.
    fn disable(&mut self);

    /// Record a decoded fix. The application is notified once the current engine
    /// call returns.
    fn location(&mut self, record: &FixRecord);

    fn satellites(&mut self, set: &SatelliteSet);

    fn send(&mut self, data: &[u8], completion: SendCompletion);
}

/// Directive methods return `true` when the engine accepted and queued the request.
pub trait ProtocolEngine {
    fn initialize(&mut self, settings: EngineSettings, hooks: &mut dyn EngineHooks);

    fn feed(&mut self, data: &[u8], hooks: &mut dyn EngineHooks);

    /// A send issued with [`SendCompletion::NotifyEngine`] has been transmitted.
    fn send_complete(&mut self, hooks: &mut dyn EngineHooks);

    fn set_antenna(&mut self, antenna: Antenna, hooks: &mut dyn EngineHooks) -> bool;

    fn set_constellation(
        &mut self,
        constellation: Constellation,
        hooks: &mut dyn EngineHooks,
    ) -> bool;

    fn set_sbas(&mut self, enable: bool, hooks: &mut dyn EngineHooks) -> bool;

    fn set_qzss(&mut self, enable: bool, hooks: &mut dyn EngineHooks) -> bool;

    fn set_periodic(&mut self, periodic: Periodic, hooks: &mut dyn EngineHooks) -> bool;

    fn sleep(&mut self, hooks: &mut dyn EngineHooks) -> bool;

    fn wakeup(&mut self, hooks: &mut dyn EngineHooks) -> bool;

    fn is_busy(&self) -> bool;
}
