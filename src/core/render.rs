//! Per-frame drawing of the network onto a [`Surface`]

use super::network::Network;
use super::surface::{GradientStop, RadialGradient, Rgba, Surface};

const EDGE_ALPHA: f32 = 0.3;
const SIGNAL_ALPHA: f32 = 0.8;
const GLOW_MID_ALPHA: f32 = 0.3;
const FLAT_ALPHA: f32 = 0.6;
const CORE_ALPHA: f32 = 0.8;

/// How much detail each frame draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quality {
    #[default]
    Full,
    /// No signal markers and no radial glow
    Reduced,
}

impl Quality {
    pub fn label(self) -> &'static str {
        match self {
            Quality::Full => "full",
            Quality::Reduced => "reduced",
        }
    }
}

impl<R> Network<R> {
    /// Clear `surface` and draw edges, signals, then particles on top.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, quality: Quality) {
        let style = &self.config().style;
        let line_color = Rgba::new(style.line_color, 1.0);
        let signal_color = Rgba::new(style.signal_color, 1.0);
        let core_color = Rgba::new(style.core_color, 1.0);
        let particles = self.particles();

        surface.clear();

        for edge in self.edges() {
            let a = particles[edge.a].position;
            let b = particles[edge.b].position;
            surface.line(a, b, style.line_width, line_color.with_alpha(edge.opacity * EDGE_ALPHA));

            if quality == Quality::Full {
                surface.fill_circle(
                    edge.signal_position(a, b),
                    style.signal_radius,
                    signal_color.with_alpha(edge.opacity * SIGNAL_ALPHA),
                );
            }
        }

        // Particles go last so nodes cover the ends of their own edges
        for particle in particles {
            let radius = particle.radius * self.config().pulse(particle.pulse_phase);

            if particle.active && quality == Quality::Full {
                let stop = |offset, alpha| GradientStop {
                    offset,
                    color: line_color.with_alpha(alpha),
                };
                let stops = [
                    stop(0.0, particle.opacity),
                    stop(0.5, particle.opacity * GLOW_MID_ALPHA),
                    stop(1.0, 0.0),
                ];
                let gradient = RadialGradient { radius: radius * style.glow_scale, stops: &stops };
                surface.fill_circle_gradient(particle.position, radius, &gradient);
            } else {
                let color = line_color.with_alpha(particle.opacity * FLAT_ALPHA);
                surface.fill_circle(particle.position, radius, color);
            }

            surface.fill_circle(
                particle.position,
                particle.radius * style.core_scale,
                core_color.with_alpha(particle.opacity * CORE_ALPHA),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::NetworkConfig;
    use crate::core::surface::{DrawCommand, DrawList};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn network(seed: u64) -> Network<SmallRng> {
        let mut net = Network::new(NetworkConfig::default(), SmallRng::seed_from_u64(seed));
        net.reseed(900.0, 600.0);
        net
    }

    fn is_particle_fill(cmd: &DrawCommand) -> bool {
        matches!(cmd, DrawCommand::GradientCircle { .. })
            || matches!(cmd, DrawCommand::Circle { color, .. } if color.r == 82)
    }

    #[test]
    fn test_full_quality_command_layout() {
        let net = network(1);
        let mut list = DrawList::new();
        net.render(&mut list, Quality::Full);

        let edges = net.edges().len();
        let particles = net.particles().len();
        assert!(edges > 0);
        assert_eq!(list.len(), 1 + 2 * edges + 2 * particles);
        assert_eq!(list.commands[0], DrawCommand::Clear);

        // Edge section: alternating line + signal
        for (i, edge) in net.edges().iter().enumerate() {
            match &list.commands[1 + 2 * i] {
                DrawCommand::Line { width, color, .. } => {
                    assert_eq!(*width, 1.0);
                    assert!((color.a - edge.opacity * 0.3).abs() < 1e-6);
                    assert_eq!((color.r, color.g, color.b), (82, 194, 255));
                }
                other => panic!("expected edge line, got {:?}", other),
            }
            match &list.commands[2 + 2 * i] {
                DrawCommand::Circle { radius, color, center } => {
                    assert_eq!(*radius, 2.0);
                    assert!((color.a - edge.opacity * 0.8).abs() < 1e-6);
                    assert_eq!((color.r, color.g, color.b), (0, 254, 207));
                    let a = net.particles()[edge.a].position;
                    let b = net.particles()[edge.b].position;
                    assert!(center.distance(a + (b - a) * edge.data_flow) < 1e-4);
                }
                other => panic!("expected signal dot, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_edges_drawn_before_particles() {
        let net = network(2);
        let mut list = DrawList::new();
        net.render(&mut list, Quality::Full);

        let last_line = list
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Line { .. }))
            .unwrap();
        let first_particle = list.commands.iter().position(is_particle_fill).unwrap();
        assert!(last_line < first_particle);
    }

    #[test]
    fn test_particle_fill_by_activation() {
        let mut net = network(3);
        net.particles_mut()[0].active = true;
        net.particles_mut()[1].active = false;
        let mut list = DrawList::new();
        net.render(&mut list, Quality::Full);

        let base = 1 + 2 * net.edges().len();
        let p0 = &net.particles()[0];
        let pulsed = p0.radius * net.pulse(p0);
        match &list.commands[base] {
            DrawCommand::GradientCircle { radius, gradient_radius, stops, center } => {
                assert_eq!(*center, p0.position);
                assert!((radius - pulsed).abs() < 1e-6);
                assert!((gradient_radius - pulsed * 3.0).abs() < 1e-5);
                assert_eq!(stops.len(), 3);
                assert_eq!(stops[0].color.a, p0.opacity);
                assert_eq!(stops[2].color.a, 0.0);
            }
            other => panic!("expected glow, got {:?}", other),
        }
        match &list.commands[base + 1] {
            DrawCommand::Circle { radius, color, .. } => {
                assert!((radius - p0.radius * 0.3).abs() < 1e-6);
                assert_eq!((color.r, color.g, color.b), (255, 255, 255));
                assert!((color.a - p0.opacity * 0.8).abs() < 1e-6);
            }
            other => panic!("expected core, got {:?}", other),
        }

        let p1 = &net.particles()[1];
        match &list.commands[base + 2] {
            DrawCommand::Circle { color, .. } => {
                assert_eq!((color.r, color.g, color.b), (82, 194, 255));
                assert!((color.a - p1.opacity * 0.6).abs() < 1e-6);
            }
            other => panic!("expected flat fill, got {:?}", other),
        }
    }

    #[test]
    fn test_reduced_quality_skips_effects() {
        let mut net = network(4);
        for p in net.particles_mut() {
            p.active = true;
        }
        let mut list = DrawList::new();
        net.render(&mut list, Quality::Reduced);

        assert_eq!(list.len(), 1 + net.edges().len() + 2 * net.particles().len());
        assert!(!list.commands.iter().any(|c| matches!(c, DrawCommand::GradientCircle { .. })));
        assert!(!list
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Circle { color, .. } if color.g == 254)));
    }

    #[test]
    fn test_render_replaces_previous_frame() {
        let net = network(5);
        let mut list = DrawList::new();
        net.render(&mut list, Quality::Full);
        let first = list.len();
        net.render(&mut list, Quality::Full);
        assert_eq!(list.len(), first);
    }
}
