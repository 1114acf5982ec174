//! Particle set and proximity graph
//!
//! Particles drift with constant velocity and bounce off the surface
//! edges. Edges are computed once per seed from creation-time distances
//! and keep that topology (and opacity) while the particles move.

use glam::Vec2;
use rand::Rng;
use tracing::{debug, info, trace};

use super::config::NetworkConfig;

/// A drifting node of the network.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Pixels per tick, never damped
    pub velocity: Vec2,
    pub radius: f32,
    /// Always within [0, 1]
    pub opacity: f32,
    /// Radians, grows by the configured pulse step every tick
    pub pulse_phase: f32,
    pub active: bool,
}

/// Connection between two particles that were close at link time.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// Lower particle index
    pub a: usize,
    /// Higher particle index
    pub b: usize,
    /// Distance at link time (not updated as particles move)
    pub distance: f32,
    pub max_distance: f32,
    /// `1 - distance / max_distance`, fixed at link time
    pub opacity: f32,
    /// Signal position along the edge in [0, 1)
    pub data_flow: f32,
    pub flow_speed: f32,
}

impl Edge {
    /// Point the signal marker sits at, given the current endpoint positions.
    pub fn signal_position(&self, a: Vec2, b: Vec2) -> Vec2 {
        a + (b - a) * self.data_flow
    }
}

/// What a pointer event did to the particle set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerEffect {
    /// Particles inside the activation radius
    pub activated: usize,
    /// Particles beyond the release radius
    pub released: usize,
}

/// Particles plus their static proximity graph.
pub struct Network<R> {
    config: NetworkConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    edges: Vec<Edge>,
    rng: R,
}

impl<R: Rng> Network<R> {
    /// Empty network; call [`Network::reseed`] to populate it.
    pub fn new(config: NetworkConfig, rng: R) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            edges: Vec::new(),
            rng,
        }
    }

    /// Replace the particle set for a `width` x `height` surface.
    ///
    /// Dimensions must be finite and non-negative. The edge set is emptied
    /// and stays empty until [`Network::link`] runs.
    pub fn seed(&mut self, width: f32, height: f32) {
        let count = self.config.particle_count(width, height);
        let speed = self.config.max_initial_speed;
        let [radius_min, radius_max] = self.config.radius_range;
        let [opacity_min, opacity_max] = self.config.opacity_range;

        self.width = width;
        self.height = height;
        self.edges.clear();
        self.particles.clear();
        self.particles.reserve(count);

        for _ in 0..count {
            let position = Vec2::new(
                self.rng.gen::<f32>() * width,
                self.rng.gen::<f32>() * height,
            );
            let velocity = Vec2::new(
                self.rng.gen_range(-speed..=speed),
                self.rng.gen_range(-speed..=speed),
            );
            let radius = self.rng.gen_range(radius_min..radius_max);
            let opacity = self.rng.gen_range(opacity_min..opacity_max);
            let pulse_phase = self.rng.gen_range(0.0..std::f32::consts::TAU);
            let active = self.roll_active();
            self.particles.push(Particle {
                position,
                velocity,
                radius,
                opacity,
                pulse_phase,
                active,
            });
        }
    }

    /// Rebuild the edge set from the current particle positions.
    ///
    /// Quadratic in the particle count; the particle count is bounded by
    /// the surface area so this stays cheap for screen-sized surfaces.
    pub fn link(&mut self) {
        let max_distance = self.config.link_distance;
        let [flow_min, flow_max] = self.config.flow_speed_range;

        self.edges.clear();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let distance = self.particles[i].position.distance(self.particles[j].position);
                if distance < max_distance {
                    let data_flow = self.rng.gen::<f32>();
                    let flow_speed = self.rng.gen_range(flow_min..flow_max);
                    self.edges.push(Edge {
                        a: i,
                        b: j,
                        distance,
                        max_distance,
                        opacity: 1.0 - distance / max_distance,
                        data_flow,
                        flow_speed,
                    });
                }
            }
        }

        debug!(
            particles = self.particles.len(),
            edges = self.edges.len(),
            max_distance,
            "Linked particle network"
        );
    }

    /// Seed and link in one step. Invalidates every previously held index.
    pub fn reseed(&mut self, width: f32, height: f32) {
        self.seed(width, height);
        self.link();
        info!(
            width,
            height,
            particles = self.particles.len(),
            edges = self.edges.len(),
            "Seeded particle network"
        );
    }

    /// Advance every signal and particle by one frame.
    pub fn tick(&mut self) {
        for edge in &mut self.edges {
            edge.data_flow += edge.flow_speed;
            if edge.data_flow >= 1.0 {
                edge.data_flow = 0.0;
            }
        }

        let (width, height) = (self.width, self.height);
        let pulse_step = self.config.pulse_step;
        for particle in &mut self.particles {
            particle.position += particle.velocity;

            // Bounds are checked after the move, so a particle may sit one
            // step outside the surface for a frame.
            if particle.position.x < 0.0 || particle.position.x > width {
                particle.velocity.x = -particle.velocity.x;
            }
            if particle.position.y < 0.0 || particle.position.y > height {
                particle.velocity.y = -particle.velocity.y;
            }

            particle.pulse_phase += pulse_step;
        }
    }

    /// Bias activation and opacity by proximity to the pointer at (`x`, `y`).
    ///
    /// Particles between the activation and release radii are left alone.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> PointerEffect {
        let pointer = Vec2::new(x, y);
        let cfg = &self.config.pointer;
        let threshold = 1.0 - self.config.active_probability;
        let mut effect = PointerEffect::default();

        for particle in &mut self.particles {
            let distance = particle.position.distance(pointer);
            if distance < cfg.activate_radius {
                particle.active = true;
                particle.opacity = (particle.opacity + cfg.raise_step).min(1.0);
                effect.activated += 1;
            } else if distance > cfg.release_radius {
                particle.active = self.rng.gen::<f32>() > threshold;
                particle.opacity = (particle.opacity - cfg.decay_step).max(cfg.opacity_floor);
                effect.released += 1;
            }
        }

        trace!(x, y, activated = effect.activated, released = effect.released, "Pointer moved");
        effect
    }

    fn roll_active(&mut self) -> bool {
        self.rng.gen::<f32>() > 1.0 - self.config.active_probability
    }
}

impl<R> Network<R> {
    /// Breathing multiplier for `particle` at its current phase.
    pub fn pulse(&self, particle: &Particle) -> f32 {
        self.config.pulse(particle.pulse_phase)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to particle state. The slice keeps indices stable.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
