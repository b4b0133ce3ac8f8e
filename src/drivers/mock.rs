//! In-memory collaborators for host tests.
//!
//! Each mock keeps its state behind an `Rc<RefCell<_>>` so a test can hand the mock to
//! the facade and still inspect what happened to it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::engine::{EngineHooks, ProtocolEngine, SendCompletion};
use super::power::PowerControl;
use super::transport::Transport;
use crate::error::TransportError;
use crate::state::{
    Antenna, Constellation, EngineSettings, FixRecord, Periodic, SatelliteSet,
};

// ── Transport ─────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct TransportState {
    pub is_open: bool,
    pub opens: Vec<u32>,
    pub closes: u32,
    pub rx: VecDeque<u8>,
    pub reads: Vec<usize>,
    pub tx: Vec<Vec<u8>>,
    pub rx_armed: bool,
    pub wake: Option<bool>,
    pub fail_writes: bool,
}

#[derive(Clone, Default)]
pub struct MockTransport {
    pub state: Rc<RefCell<TransportState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inject_rx(&self, data: &[u8]) {
        self.state.borrow_mut().rx.extend(data.iter().copied());
    }

    pub fn last_open(&self) -> Option<u32> {
        self.state.borrow().opens.last().copied()
    }
}

impl Transport for MockTransport {
    fn open(&mut self, baud: u32) -> Result<(), TransportError> {
        if baud == 0 {
            return Err(TransportError::InvalidBaudRate);
        }
        let mut s = self.state.borrow_mut();
        s.is_open = true;
        s.opens.push(baud);
        Ok(())
    }

    fn close(&mut self) {
        let mut s = self.state.borrow_mut();
        s.is_open = false;
        s.closes += 1;
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut s = self.state.borrow_mut();
        if !s.is_open {
            return 0;
        }
        let n = buf.len().min(s.rx.len());
        for slot in buf.iter_mut().take(n) {
            *slot = s.rx.pop_front().unwrap_or(0);
        }
        if n > 0 {
            s.reads.push(n);
        }
        n
    }

    fn write(&mut self, data: &[u8]) -> Result<(), TransportError> {
        let mut s = self.state.borrow_mut();
        if s.fail_writes {
            return Err(TransportError::Busy);
        }
        if !s.is_open {
            return Err(TransportError::Closed);
        }
        s.tx.push(data.to_vec());
        Ok(())
    }

    fn enable_receive_notification(&mut self) {
        self.state.borrow_mut().rx_armed = true;
    }

    fn set_low_power_wake(&mut self, enabled: bool) {
        self.state.borrow_mut().wake = Some(enabled);
    }
}

// ── Protocol engine ───────────────────────────────────────────────────────────
//
// Toy byte protocol so tests can drive the hooks through `feed`:
//   'L' → location(next_fix)    'S' → satellites(next_sats)
//   'T' → send("ACK", NotifyEngine)
// Anything else is just recorded. Accepted directives send "CFG" with
// RestoreReceive; `sleep` disables the receiver, `wakeup` enables it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Antenna(Antenna),
    Constellation(Constellation),
    Sbas(bool),
    Qzss(bool),
    Periodic(Periodic),
    Sleep,
    Wakeup,
}

#[derive(Debug)]
pub struct EngineState {
    pub settings: Option<EngineSettings>,
    pub fed: Vec<u8>,
    pub accept: bool,
    pub busy: bool,
    pub directives: Vec<Directive>,
    pub send_completes: u32,
    pub next_fix: FixRecord,
    pub next_sats: SatelliteSet,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            settings: None,
            fed: Vec::new(),
            accept: true,
            busy: false,
            directives: Vec::new(),
            send_completes: 0,
            next_fix: FixRecord::default(),
            next_sats: SatelliteSet::default(),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockEngine {
    pub state: Rc<RefCell<EngineState>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn directive(&mut self, d: Directive, hooks: &mut dyn EngineHooks) -> bool {
        let accept = {
            let mut s = self.state.borrow_mut();
            s.directives.push(d);
            s.accept
        };
        if accept {
            hooks.send(b"CFG", SendCompletion::RestoreReceive);
        }
        accept
    }
}

impl ProtocolEngine for MockEngine {
    fn initialize(&mut self, settings: EngineSettings, hooks: &mut dyn EngineHooks) {
        self.state.borrow_mut().settings = Some(settings);
        hooks.send(b"INIT", SendCompletion::RestoreReceive);
    }

    fn feed(&mut self, data: &[u8], hooks: &mut dyn EngineHooks) {
        for &b in data {
            let (fix, sats) = {
                let mut s = self.state.borrow_mut();
                s.fed.push(b);
                (s.next_fix, s.next_sats)
            };
            match b {
                b'L' => hooks.location(&fix),
                b'S' => hooks.satellites(&sats),
                b'T' => hooks.send(b"ACK", SendCompletion::NotifyEngine),
                _ => {}
            }
        }
    }

    fn send_complete(&mut self, _hooks: &mut dyn EngineHooks) {
        self.state.borrow_mut().send_completes += 1;
    }

    fn set_antenna(&mut self, antenna: Antenna, hooks: &mut dyn EngineHooks) -> bool {
        self.directive(Directive::Antenna(antenna), hooks)
    }

    fn set_constellation(
        &mut self,
        constellation: Constellation,
        hooks: &mut dyn EngineHooks,
    ) -> bool {
        self.directive(Directive::Constellation(constellation), hooks)
    }

    fn set_sbas(&mut self, enable: bool, hooks: &mut dyn EngineHooks) -> bool {
        self.directive(Directive::Sbas(enable), hooks)
    }

    fn set_qzss(&mut self, enable: bool, hooks: &mut dyn EngineHooks) -> bool {
        self.directive(Directive::Qzss(enable), hooks)
    }

    fn set_periodic(&mut self, periodic: Periodic, hooks: &mut dyn EngineHooks) -> bool {
        self.directive(Directive::Periodic(periodic), hooks)
    }

    fn sleep(&mut self, hooks: &mut dyn EngineHooks) -> bool {
        let ok = self.directive(Directive::Sleep, hooks);
        if ok {
            hooks.disable();
        }
        ok
    }

    fn wakeup(&mut self, hooks: &mut dyn EngineHooks) -> bool {
        let accept = {
            let mut s = self.state.borrow_mut();
            s.directives.push(Directive::Wakeup);
            s.accept
        };
        if accept {
            hooks.enable();
        }
        accept
    }

    fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }
}

// ── Power ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct PowerState {
    pub on: bool,
    pub transitions: Vec<bool>,
}

#[derive(Clone, Default)]
pub struct MockPower {
    pub state: Rc<RefCell<PowerState>>,
}

impl MockPower {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PowerControl for MockPower {
    fn power_on(&mut self) {
        let mut s = self.state.borrow_mut();
        s.on = true;
        s.transitions.push(true);
    }

    fn power_off(&mut self) {
        let mut s = self.state.borrow_mut();
        s.on = false;
        s.transitions.push(false);
    }
}
