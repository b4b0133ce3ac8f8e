//! Receiver facade.
//!
//! Two execution contexts meet here. The UART interrupt calls
//! [`Gnss::on_receive_ready`] and [`Gnss::on_write_complete`]; those run the protocol
//! engine, which reports back through [`EngineHooks`]. Application code polls
//! [`Gnss::available`] / [`Gnss::location`] / [`Gnss::satellites`], or waits on a
//! [`ReceiveNotifier`].
//!
//! Every method takes `&self`, so a `Gnss` can live in a `static` shared by the
//! interrupt handler and the tasks. Each piece of mutable state sits behind its own
//! critical-section mutex and no lock is held across a call into another piece, so an
//! engine callback can always reach the transport, power line and slots.
//!
//! ```ignore
//! static GNSS: Gnss<'static, MyUart, MyEngine> = Gnss::new(MyEngine::new(), GnssConfig::new());
//!
//! GNSS.start(uart, Protocol::Ubx, Rate::Hz5)?;
//! GNSS.set_constellation(Constellation::GPS | Constellation::GALILEO)?;
//!
//! if GNSS.available() {
//!     let loc = GNSS.location();
//!     if loc.is_valid() { /* loc.latitude(), loc.longitude() */ }
//! }
//! ```

use core::cell::{Cell, RefCell};
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::block_for;

use super::engine::{EngineHooks, ProtocolEngine, SendCompletion};
use super::location::GnssLocation;
use super::notify::ReceiveNotifier;
use super::power::{NoPower, PowerControl};
use super::satellites::GnssSatellites;
use super::slot::PendingSlot;
use super::transport::Transport;
use crate::board::GnssConfig;
use crate::error::{Error, Result};
use crate::state::{
    Antenna, Constellation, EngineSettings, FixRecord, Periodic, Protocol, Rate,
    SatelliteSet,
};

/// Bytes pulled from the transport per engine `feed`.
pub const RX_CHUNK: usize = 16;

type CsMutex<T> = Mutex<CriticalSectionRawMutex, T>;
/// Borrowed notifier installed with [`Gnss::on_receive`].
pub type Notifier<'a> = &'a (dyn ReceiveNotifier + Sync);

struct Link<T> {
    transport: Option<T>,
    baud_rate: u32,
    in_flight: Option<SendCompletion>,
}

/// Everything the engine hooks may touch. The engine itself lives outside.
struct Shared<'a, T, P> {
    config: GnssConfig,
    link: CsMutex<RefCell<Link<T>>>,
    power: CsMutex<RefCell<Option<P>>>,
    location: PendingSlot<FixRecord>,
    satellites: PendingSlot<SatelliteSet>,
    notifier: CsMutex<Cell<Option<Notifier<'a>>>>,
    /// Set by the location hook, consumed once the engine is released.
    notify_due: AtomicBool,
}

pub struct Gnss<'a, T, E, P = NoPower>
where
    T: Transport,
    E: ProtocolEngine,
    P: PowerControl,
{
    engine: CsMutex<RefCell<E>>,
    shared: Shared<'a, T, P>,
}

impl<'a, T, E> Gnss<'a, T, E, NoPower>
where
    T: Transport,
    E: ProtocolEngine,
{
    /// Facade for a board without a receiver enable line.
    pub const fn new(engine: E, config: GnssConfig) -> Self {
        Self::build(engine, None, config)
    }
}

impl<'a, T, E, P> Gnss<'a, T, E, P>
where
    T: Transport,
    E: ProtocolEngine,
    P: PowerControl,
{
    pub const fn with_power(engine: E, power: P, config: GnssConfig) -> Self {
        Self::build(engine, Some(power), config)
    }

    const fn build(engine: E, power: Option<P>, config: GnssConfig) -> Self {
        Self {
            engine: Mutex::new(RefCell::new(engine)),
            shared: Shared {
                link: Mutex::new(RefCell::new(Link {
                    transport: None,
                    baud_rate: config.boot_baud,
                    in_flight: None,
                })),
                config,
                power: Mutex::new(RefCell::new(power)),
                location: PendingSlot::new(FixRecord::new()),
                satellites: PendingSlot::new(SatelliteSet::new()),
                notifier: Mutex::new(Cell::new(None)),
                notify_due: AtomicBool::new(false),
            },
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────────────

    /// Bind `transport` and bring the receiver up.
    ///
    /// Blocks for `config.enable_settle` after raising the enable line, so call this
    /// from boot code, never from an interrupt. Fails with [`Error::InvalidState`] if
    /// already started; the extra transport is dropped.
    pub fn start(&self, transport: T, protocol: Protocol, rate: Rate) -> Result<()> {
        let config = &self.shared.config;

        self.shared.link.lock(|link| {
            let mut link = link.borrow_mut();
            if link.transport.is_some() {
                return Err(Error::InvalidState);
            }
            let mut transport = transport;
            transport.open(config.boot_baud)?;
            link.transport = Some(transport);
            link.in_flight = None;
            Ok(())
        })?;

        let powered = self.shared.power.lock(|power| match power.borrow_mut().as_mut() {
            Some(p) => {
                p.power_on();
                true
            }
            None => false,
        });
        if powered {
            block_for(config.enable_settle);
        }

        let baud_rate = config.baud_rate(protocol, rate);
        self.shared.link.lock(|link| link.borrow_mut().baud_rate = baud_rate);
        info!("gnss: start {} @ {}Hz, {} baud", protocol, rate.hz(), baud_rate);

        let settings = EngineSettings {
            protocol,
            rate,
            baud_rate,
            power_control: powered,
        };
        self.with_engine(|engine, hooks| engine.initialize(settings, hooks));

        self.shared.link.lock(|link| {
            if let Some(t) = link.borrow_mut().transport.as_mut() {
                t.enable_receive_notification();
            }
        });
        Ok(())
    }

    /// Close and hand back the transport. `None` if not started.
    pub fn stop(&self) -> Option<T> {
        let transport = self.shared.link.lock(|link| {
            let mut link = link.borrow_mut();
            link.in_flight = None;
            link.transport.take()
        });
        transport.map(|mut t| {
            t.close();
            debug!("gnss: stopped");
            t
        })
    }

    pub fn is_started(&self) -> bool {
        self.shared.link.lock(|link| link.borrow().transport.is_some())
    }

    /// Operating baud rate chosen by the last `start`.
    pub fn baud_rate(&self) -> u32 {
        self.shared.link.lock(|link| link.borrow().baud_rate)
    }

    // ── Directives ───────────────────────────────────────────────────────────
    //
    // `Ok` means the engine validated and queued the request, not that the receiver
    // has applied it.

    pub fn set_antenna(&self, antenna: Antenna) -> Result<()> {
        self.directive(|engine, hooks| engine.set_antenna(antenna, hooks))
    }

    pub fn set_constellation(&self, constellation: Constellation) -> Result<()> {
        self.directive(|engine, hooks| engine.set_constellation(constellation, hooks))
    }

    pub fn set_sbas(&self, enable: bool) -> Result<()> {
        self.directive(|engine, hooks| engine.set_sbas(enable, hooks))
    }

    pub fn set_qzss(&self, enable: bool) -> Result<()> {
        self.directive(|engine, hooks| engine.set_qzss(enable, hooks))
    }

    pub fn set_periodic(&self, on_time_s: u32, period_s: u32, force: bool) -> Result<()> {
        let periodic = Periodic {
            on_time_s,
            period_s,
            force,
        };
        self.directive(|engine, hooks| engine.set_periodic(periodic, hooks))
    }

    pub fn sleep(&self) -> Result<()> {
        self.directive(|engine, hooks| engine.sleep(hooks))
    }

    pub fn wakeup(&self) -> Result<()> {
        self.directive(|engine, hooks| engine.wakeup(hooks))
    }

    /// Engine has a command in progress. Independent of the transport.
    pub fn busy(&self) -> bool {
        self.engine.lock(|engine| engine.borrow().is_busy())
    }

    // ── Application side ─────────────────────────────────────────────────────

    /// An unread location is waiting.
    pub fn available(&self) -> bool {
        self.shared.location.is_pending()
    }

    /// Latest location, marking it read. Repeats the previous one if nothing new
    /// arrived.
    pub fn location(&self) -> GnssLocation {
        GnssLocation::new(self.shared.location.take())
    }

    pub fn satellites_available(&self) -> bool {
        self.shared.satellites.is_pending()
    }

    pub fn satellites(&self) -> GnssSatellites {
        GnssSatellites::new(self.shared.satellites.take())
    }

    /// Called from interrupt context on every new location. Replaces any previous
    /// notifier. Satellite updates do not notify.
    ///
    /// The notifier runs after the engine call that produced the fix has returned, so
    /// it may call back into the facade.
    pub fn on_receive(&self, notifier: Notifier<'a>) {
        self.shared.notifier.lock(|n| n.set(Some(notifier)));
    }

    // ── Interrupt side ───────────────────────────────────────────────────────

    /// UART has received data. Drains it into the engine until a read comes back
    /// empty.
    pub fn on_receive_ready(&self) {
        let mut chunk = [0u8; RX_CHUNK];
        loop {
            let n = self.shared.link.lock(|link| {
                link.borrow_mut()
                    .transport
                    .as_mut()
                    .map_or(0, |t| t.read(&mut chunk))
            });
            if n == 0 {
                break;
            }
            self.with_engine(|engine, hooks| engine.feed(&chunk[..n], hooks));
        }
    }

    /// UART finished the last write.
    pub fn on_write_complete(&self) {
        let completion = self
            .shared
            .link
            .lock(|link| link.borrow_mut().in_flight.take());

        match completion {
            Some(SendCompletion::NotifyEngine) => {
                self.with_engine(|engine, hooks| engine.send_complete(hooks))
            }
            Some(SendCompletion::RestoreReceive) => self.shared.restore_receive(),
            None => debug!("gnss: write complete with nothing in flight"),
        }
    }

    // ── Internals ────────────────────────────────────────────────────────────

    fn with_engine<R>(&self, f: impl FnOnce(&mut E, &mut dyn EngineHooks) -> R) -> R {
        let result = self.engine.lock(|engine| {
            let mut engine = engine.borrow_mut();
            let mut hooks = Hooks(&self.shared);
            f(&mut *engine, &mut hooks as &mut dyn EngineHooks)
        });
        self.shared.fire_notification();
        result
    }

    fn directive(&self, f: impl FnOnce(&mut E, &mut dyn EngineHooks) -> bool) -> Result<()> {
        if !self.is_started() {
            return Err(Error::NotStarted);
        }
        if self.with_engine(f) {
            Ok(())
        } else {
            Err(Error::Rejected)
        }
    }
}

impl<T: Transport, P> Shared<'_, T, P> {
    fn has_power(&self) -> bool {
        self.power.lock(|power| power.borrow().is_some())
    }

    fn fire_notification(&self) {
        if !self.notify_due.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(notifier) = self.notifier.lock(|n| n.get()) {
            notifier.notify();
        }
    }

    fn restore_receive(&self) {
        let wake_max = self.config.wake_max_baud;
        self.link.lock(|link| {
            let mut link = link.borrow_mut();
            let baud = link.baud_rate;
            if let Some(t) = link.transport.as_mut() {
                if let Err(e) = t.open(baud) {
                    warn!("gnss: reopen at {} failed: {}", baud, e);
                    return;
                }
                t.set_low_power_wake(baud <= wake_max);
            }
        });
    }
}

/// Engine-facing view of the facade.
struct Hooks<'s, 'a, T, P>(&'s Shared<'a, T, P>);

impl<T: Transport, P: PowerControl> EngineHooks for Hooks<'_, '_, T, P> {
    fn enable(&mut self) {
        if !self.0.has_power() {
            debug!("gnss: enable ignored, no power line");
            return;
        }
        self.0.link.lock(|link| {
            let mut link = link.borrow_mut();
            let baud = link.baud_rate;
            if let Some(t) = link.transport.as_mut() {
                if let Err(e) = t.open(baud) {
                    warn!("gnss: enable open at {} failed: {}", baud, e);
                }
            }
        });
        self.0.power.lock(|power| {
            if let Some(p) = power.borrow_mut().as_mut() {
                p.power_on();
            }
        });
    }

    fn disable(&mut self) {
        if !self.0.has_power() {
            debug!("gnss: disable ignored, no power line");
            return;
        }
        self.0.power.lock(|power| {
            if let Some(p) = power.borrow_mut().as_mut() {
                p.power_off();
            }
        });
        self.0.link.lock(|link| {
            if let Some(t) = link.borrow_mut().transport.as_mut() {
                t.close();
            }
        });
    }

    fn location(&mut self, record: &FixRecord) {
        self.0.location.publish(record);
        self.0.notify_due.store(true, Ordering::Release);
    }

    fn satellites(&mut self, set: &SatelliteSet) {
        self.0.satellites.publish(set);
    }

    fn send(&mut self, data: &[u8], completion: SendCompletion) {
        self.0.link.lock(|link| {
            let mut link = link.borrow_mut();
            let Link {
                transport,
                in_flight,
                ..
            } = &mut *link;
            let Some(t) = transport.as_mut() else {
                debug!("gnss: dropping {} byte send, not started", data.len());
                return;
            };
            match t.write(data) {
                Ok(()) => *in_flight = Some(completion),
                Err(e) => {
                    *in_flight = None;
                    warn!("gnss: write of {} bytes failed: {}", data.len(), e);
                }
            }
        });
    }
}
