//! Platform-agnostic core - the particle network and its frame loop
//!
//! Nothing here depends on egui or the browser; hosts plug in through
//! [`Surface`] and [`FrameScheduler`].

pub mod config;
pub mod error;
pub mod monitor;
pub mod network;
pub mod render;
pub mod rng;
pub mod simulator;
pub mod surface;

pub use config::{NetworkConfig, PointerConfig, StyleConfig};
pub use error::SimError;
pub use monitor::FrameMonitor;
pub use network::{Edge, Network, Particle, PointerEffect};
pub use render::Quality;
pub use rng::{entropy_seed, seeded_rng};
pub use simulator::{FrameId, FrameScheduler, LoopState, Simulator};
pub use surface::{DrawCommand, DrawList, GradientStop, RadialGradient, Rgba, Surface};
