// driver.rs - Runs the automaton on a fixed cadence with pause/reset controls

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, info, trace};
use tokio::sync::watch;

use crate::automaton::Automaton;
use crate::presenter::Presenter;

pub const DEFAULT_GENERATIONS: u32 = 1000;
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    pub cadence: Duration,
    pub generations: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            cadence: DEFAULT_CADENCE,
            generations: DEFAULT_GENERATIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Paused,
    Terminated,
}

/// Outcome of a single cadence step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A generation was computed and committed under this label.
    Advanced { generation: u32 },
    Paused,
    Exhausted,
}

const IDLE: u8 = 0;
const RUNNING: u8 = 1;
const TERMINATED: u8 = 2;

struct Session {
    automaton: Automaton,
    remaining: u32,
}

struct Shared {
    session: Mutex<Session>,
    paused: AtomicBool,
    lifecycle: AtomicU8,
    shutdown: watch::Sender<bool>,
    presenter: Box<dyn Presenter>,
    config: DriverConfig,
}

impl Shared {
    // Plain data: a poisoned lock still holds a usable session.
    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn state(&self) -> DriverState {
        match self.lifecycle.load(Ordering::Acquire) {
            IDLE => DriverState::Idle,
            TERMINATED => DriverState::Terminated,
            _ if self.paused.load(Ordering::Acquire) => DriverState::Paused,
            _ => DriverState::Running,
        }
    }

    fn toggle_play_pause(&self) {
        let was_paused = self.paused.fetch_xor(true, Ordering::AcqRel);
        debug!("generation loop {}", if was_paused { "resumed" } else { "paused" });
    }

    // Notifications go out with the session still locked, so a display sees
    // them in the same order the grid changed.
    fn reset(&self) {
        let mut session = self.session();
        session.automaton.reallocate();
        session.remaining = self.config.generations;
        let size = session.automaton.size();
        info!("game reset: {} grid, {} generations", size, self.config.generations);
        self.presenter.grid_rebuilt(size);
    }

    fn tick(&self) -> Tick {
        if self.paused.load(Ordering::Acquire) {
            return Tick::Paused;
        }

        let mut session = self.session();
        let generation = session.remaining;
        if generation == 0 {
            return Tick::Exhausted;
        }
        session.automaton.compute_next_generation();
        let frame = session.automaton.commit_generation(generation);
        session.remaining -= 1;

        trace!("generation #{}: {} alive", generation, frame.alive_total());
        self.presenter.generation_changed(generation);
        self.presenter.cells_committed(frame);
        Tick::Advanced { generation }
    }

    fn remaining(&self) -> u32 {
        self.session().remaining
    }
}

/// Owns the generation loop. Control it from other threads with a
/// [`DriverHandle`].
pub struct Driver {
    shared: Arc<Shared>,
}

/// Cloneable control surface for a [`Driver`]; safe to use from any thread.
#[derive(Clone)]
pub struct DriverHandle {
    shared: Arc<Shared>,
}

impl Driver {
    pub fn new<P>(automaton: Automaton, config: DriverConfig, presenter: P) -> Self
    where
        P: Presenter + 'static,
    {
        let (shutdown, _) = watch::channel(false);
        let shared = Shared {
            session: Mutex::new(Session { automaton, remaining: config.generations }),
            paused: AtomicBool::new(false),
            lifecycle: AtomicU8::new(IDLE),
            shutdown,
            presenter: Box::new(presenter),
            config,
        };
        Self { shared: Arc::new(shared) }
    }

    pub fn handle(&self) -> DriverHandle {
        DriverHandle { shared: Arc::clone(&self.shared) }
    }

    pub fn state(&self) -> DriverState {
        self.shared.state()
    }

    pub fn remaining(&self) -> u32 {
        self.shared.remaining()
    }

    /// One cadence step without the wait.
    pub fn tick(&self) -> Tick {
        self.shared.tick()
    }

    /// Run with read access to the automaton, e.g. to inspect cells.
    pub fn with_automaton<R>(&self, f: impl FnOnce(&Automaton) -> R) -> R {
        f(&self.shared.session().automaton)
    }

    /// Advance one generation per cadence until the budget runs out or
    /// [`DriverHandle::shutdown`] is called. Being shut down is a normal stop.
    pub async fn run(self) {
        let shared = self.shared;
        let mut shutdown = shared.shutdown.subscribe();
        shared.lifecycle.store(RUNNING, Ordering::Release);

        {
            let session = shared.session();
            let size = session.automaton.size();
            info!(
                "generation loop started: {} grid, {} generations every {:?}",
                size, shared.config.generations, shared.config.cadence
            );
            shared.presenter.grid_rebuilt(size);
        }

        while shared.remaining() != 0 {
            if *shutdown.borrow_and_update() {
                debug!("generation loop interrupted");
                break;
            }
            tokio::select! {
                _ = tokio::time::sleep(shared.config.cadence) => {}
                _ = shutdown.changed() => {
                    debug!("generation loop interrupted");
                    break;
                }
            }
            shared.tick();
        }

        shared.lifecycle.store(TERMINATED, Ordering::Release);
        info!("generation loop finished");
    }
}

impl DriverHandle {
    pub fn toggle_play_pause(&self) {
        self.shared.toggle_play_pause();
    }

    /// Fresh random grid and a full budget; leaves play/pause alone.
    pub fn reset(&self) {
        self.shared.reset();
    }

    /// Stop the loop at its next wait.
    pub fn shutdown(&self) {
        self.shared.shutdown.send_replace(true);
    }

    pub fn state(&self) -> DriverState {
        self.shared.state()
    }

    pub fn is_paused(&self) -> bool {
        self.shared.paused.load(Ordering::Acquire)
    }

    pub fn remaining(&self) -> u32 {
        self.shared.remaining()
    }
}
