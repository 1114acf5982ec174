//! Drawing surface abstraction
//!
//! The simulator only needs four primitives from whatever it draws on:
//! clear, line, flat circle and radially-shaded circle. Hosts implement
//! [`Surface`] over their painter; [`DrawList`] records commands instead.

use glam::Vec2;

/// Colour with 8-bit channels and a unit alpha, as canvas `rgba()` takes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in [0, 1]
    pub a: f32,
}

impl Rgba {
    pub const fn new([r, g, b]: [u8; 3], a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient radius in [0, 1]
    pub offset: f32,
    pub color: Rgba,
}

/// Radial gradient centred on the shape it fills.
///
/// `radius` may exceed the filled circle; the fill then only shows the
/// inner part of the ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient<'a> {
    pub radius: f32,
    /// Stops sorted by ascending offset
    pub stops: &'a [GradientStop],
}

impl RadialGradient<'_> {
    /// Colour at `distance` from the centre, clamped to the outer stops.
    pub fn color_at(&self, distance: f32) -> Rgba {
        let t = if self.radius > 0.0 { (distance / self.radius).clamp(0.0, 1.0) } else { 1.0 };
        let Some(first) = self.stops.first() else {
            return Rgba::new([0, 0, 0], 0.0);
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.offset {
                let span = hi.offset - lo.offset;
                let local = if span > 0.0 { (t - lo.offset) / span } else { 1.0 };
                return lo.color.lerp(hi.color, local);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}

/// 2D drawing capability consumed by the renderer.
pub trait Surface {
    /// Erase everything drawn in the previous frame.
    fn clear(&mut self);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Fill a circle of `radius` shaded by `gradient` around `center`.
    fn fill_circle_gradient(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient<'_>);
}

/// A recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
    Circle { center: Vec2, radius: f32, color: Rgba },
    GradientCircle { center: Vec2, radius: f32, gradient_radius: f32, stops: Vec<GradientStop> },
}

/// Surface that records commands in submission order.
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn fill_circle_gradient(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient<'_>) {
        self.commands.push(DrawCommand::GradientCircle {
            center,
            radius,
            gradient_radius: gradient.radius,
            stops: gradient.stops.to_vec(),
        });
    }
}
