//! Frame loop owner for the particle network
//!
//! The host delivers frames, pointer moves and resizes on one thread
//! through `&mut Simulator`. The simulator keeps at most one frame
//! request outstanding and stops requesting once disposed.

use rand::rngs::SmallRng;
use rand::Rng;
use tracing::info;

use super::config::NetworkConfig;
use super::error::{check_dimensions, SimError};
use super::monitor::FrameMonitor;
use super::network::{Network, PointerEffect};
use super::render::Quality;
use super::surface::Surface;

/// Handle for a requested display frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// Host capability to run a callback on the next display refresh.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameId;
    /// Drop a request made by [`FrameScheduler::request_frame`].
    fn cancel_frame(&mut self, id: FrameId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Particle network bound to a frame scheduler.
pub struct Simulator<S, R = SmallRng> {
    network: Network<R>,
    scheduler: S,
    state: LoopState,
    pending: Option<FrameId>,
    monitor: FrameMonitor,
    frames: u64,
}

impl<S: FrameScheduler, R: Rng> Simulator<S, R> {
    /// Seed a network for a `width` x `height` surface and request the first frame.
    pub fn new(
        config: NetworkConfig,
        width: f32,
        height: f32,
        rng: R,
        scheduler: S,
    ) -> Result<Self, SimError> {
        config.validate()?;
        check_dimensions(width, height, false)?;

        let monitor = FrameMonitor::from_config(&config);
        let mut network = Network::new(config, rng);
        network.reseed(width, height);

        let mut sim = Self {
            network,
            scheduler,
            state: LoopState::Running,
            pending: None,
            monitor,
            frames: 0,
        };
        sim.pending = Some(sim.scheduler.request_frame());
        info!(width, height, "Simulator started");
        Ok(sim)
    }

    /// Run one scheduled frame: advance, draw, request the next one.
    ///
    /// Returns `false` without touching `surface` once stopped.
    pub fn frame<T: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut T) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }

        self.pending = None;
        self.monitor.record(now_ms);
        self.network.tick();
        self.network.render(surface, self.monitor.quality());
        self.frames += 1;
        self.pending = Some(self.scheduler.request_frame());
        true
    }

    /// Reseed for new surface dimensions. Loop state is unaffected.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), SimError> {
        check_dimensions(width, height, true)?;
        info!(
            from_width = self.network.width(),
            from_height = self.network.height(),
            width,
            height,
            "Surface resized"
        );
        self.network.reseed(width, height);
        Ok(())
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> PointerEffect {
        self.network.pointer_move(x, y)
    }

    /// Cancel the outstanding frame and stop for good. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
        if self.state == LoopState::Running {
            info!(frames = self.frames, "Simulator stopped");
            self.state = LoopState::Stopped;
        }
    }
}

impl<S, R> Simulator<S, R> {
    /// Draw the current state without advancing it.
    pub fn render<T: Surface + ?Sized>(&self, surface: &mut T) {
        self.network.render(surface, self.monitor.quality());
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn pending_frame(&self) -> Option<FrameId> {
        self.pending
    }

    /// Frames run since construction
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps(&self) -> Option<f64> {
        self.monitor.fps()
    }

    pub fn quality(&self) -> Quality {
        self.monitor.quality()
    }

    pub fn network(&self) -> &Network<R> {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network<R> {
        &mut self.network
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
