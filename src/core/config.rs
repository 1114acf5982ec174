//! Tunable constants for the particle network.
//!
//! Every field has a default matching the stock animation, so a JSON
//! document only needs the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// Pointer interaction thresholds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Particles closer than this become active and brighten
    pub activate_radius: f32,
    /// Particles farther than this re-roll activation and dim
    pub release_radius: f32,
    /// Opacity added per pointer event inside `activate_radius`
    pub raise_step: f32,
    /// Opacity removed per pointer event beyond `release_radius`
    pub decay_step: f32,
    /// Opacity never decays below this
    pub opacity_floor: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            activate_radius: 100.0,
            release_radius: 150.0,
            raise_step: 0.1,
            decay_step: 0.05,
            opacity_floor: 0.2,
        }
    }
}

/// Stroke widths, radii and colours used when drawing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub line_width: f32,
    pub signal_radius: f32,
    /// Gradient radius as a multiple of the pulsed particle radius
    pub glow_scale: f32,
    /// Inner core radius as a multiple of the base particle radius
    pub core_scale: f32,
    pub line_color: [u8; 3],
    pub signal_color: [u8; 3],
    pub core_color: [u8; 3],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            signal_radius: 2.0,
            glow_scale: 3.0,
            core_scale: 0.3,
            line_color: [82, 194, 255],
            signal_color: [0, 254, 207],
            core_color: [255, 255, 255],
        }
    }
}

/// Network seeding, motion and rendering parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Surface pixels per particle (count = floor(w*h / area))
    pub area_per_particle: f32,
    /// Pairs closer than this at link time are connected
    pub link_distance: f32,
    /// Initial velocity components are drawn from [-max, max]
    pub max_initial_speed: f32,
    /// Half-open [min, max) particle radius
    pub radius_range: [f32; 2],
    /// Half-open [min, max) initial particle opacity
    pub opacity_range: [f32; 2],
    /// Chance a particle starts (or re-rolls to) active
    pub active_probability: f32,
    /// Pulse phase increment per tick, in radians
    pub pulse_step: f32,
    pub pulse_amplitude: f32,
    pub pulse_base: f32,
    /// Half-open [min, max) per-edge signal speed
    pub flow_speed_range: [f32; 2],
    pub pointer: PointerConfig,
    pub style: StyleConfig,
    /// Opt in to dropping to reduced quality when the frame rate falls
    /// below `low_fps_threshold`
    pub monitor_performance: bool,
    pub low_fps_threshold: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 15_000.0,
            link_distance: 150.0,
            max_initial_speed: 0.25,
            radius_range: [1.0, 4.0],
            opacity_range: [0.2, 1.0],
            active_probability: 0.3,
            pulse_step: 0.02,
            pulse_amplitude: 0.3,
            pulse_base: 0.7,
            flow_speed_range: [0.01, 0.03],
            pointer: PointerConfig::default(),
            style: StyleConfig::default(),
            monitor_performance: false,
            low_fps_threshold: 30.0,
        }
    }
}

impl NetworkConfig {
    /// Parse a JSON document and validate the result.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check ranges that seeding and rendering rely on.
    pub fn validate(&self) -> Result<(), SimError> {
        fn positive(name: &str, v: f32) -> Result<(), SimError> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidConfig(format!("{} must be positive, got {}", name, v)))
            }
        }

        fn unit(name: &str, v: f32) -> Result<(), SimError> {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(SimError::InvalidConfig(format!("{} must be within [0, 1], got {}", name, v)))
            }
        }

        fn range(name: &str, [lo, hi]: [f32; 2]) -> Result<(), SimError> {
            if lo.is_finite() && hi.is_finite() && lo < hi {
                Ok(())
            } else {
                Err(SimError::InvalidConfig(format!(
                    "{} must satisfy min < max, got [{}, {})",
                    name, lo, hi
                )))
            }
        }

        positive("area_per_particle", self.area_per_particle)?;
        positive("link_distance", self.link_distance)?;
        if !(self.max_initial_speed.is_finite() && self.max_initial_speed >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "max_initial_speed must be non-negative, got {}",
                self.max_initial_speed
            )));
        }

        range("radius_range", self.radius_range)?;
        positive("radius_range min", self.radius_range[0])?;
        range("opacity_range", self.opacity_range)?;
        unit("opacity_range min", self.opacity_range[0])?;
        unit("opacity_range max", self.opacity_range[1])?;
        unit("active_probability", self.active_probability)?;
        range("flow_speed_range", self.flow_speed_range)?;
        positive("flow_speed_range min", self.flow_speed_range[0])?;

        let p = &self.pointer;
        positive("pointer.activate_radius", p.activate_radius)?;
        if p.release_radius < p.activate_radius {
            return Err(SimError::InvalidConfig(format!(
                "pointer.release_radius ({}) must not be below activate_radius ({})",
                p.release_radius, p.activate_radius
            )));
        }
        unit("pointer.raise_step", p.raise_step)?;
        unit("pointer.decay_step", p.decay_step)?;
        unit("pointer.opacity_floor", p.opacity_floor)?;

        if !(self.low_fps_threshold.is_finite() && self.low_fps_threshold >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "low_fps_threshold must be non-negative, got {}",
                self.low_fps_threshold
            )));
        }
        Ok(())
    }

    /// Number of particles seeded on a `width` x `height` surface.
    pub fn particle_count(&self, width: f32, height: f32) -> usize {
        ((width as f64 * height as f64) / self.area_per_particle as f64).floor() as usize
    }

    /// Breathing multiplier applied to a particle radius at `phase`.
    pub fn pulse(&self, phase: f32) -> f32 {
        phase.sin() * self.pulse_amplitude + self.pulse_base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(NetworkConfig::default().validate().is_ok());
    }

    #[test]
    fn test_quality_governor_off_by_default() {
        assert!(!NetworkConfig::default().monitor_performance);
        let config = NetworkConfig::from_json(r#"{ "monitor_performance": true }"#).unwrap();
        assert!(config.monitor_performance);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "link_distance": 90, "pointer": { "raise_step": 0.2 } }"#;
        let config = NetworkConfig::from_json(json).unwrap();
        assert_eq!(config.link_distance, 90.0);
        assert_eq!(config.pointer.raise_step, 0.2);
        assert_eq!(config.pointer.activate_radius, 100.0);
        assert_eq!(config.area_per_particle, 15_000.0);
        assert_eq!(config.style.line_color, [82, 194, 255]);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = NetworkConfig::from_json("{ link_distance: ").unwrap_err();
        assert!(matches!(err, SimError::ConfigParse(_)));
    }

    #[test]
    fn test_from_path() {
        let name = format!("neural-canvas-config-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, r#"{ "area_per_particle": 5000, "monitor_performance": true }"#)
            .unwrap();
        let config = NetworkConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.area_per_particle, 5000.0);
        assert!(config.monitor_performance);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = NetworkConfig::from_path("/nonexistent/neural-canvas.json").unwrap_err();
        assert!(matches!(err, SimError::ConfigRead(_)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = NetworkConfig::from_json(r#"{ "radius_range": [4.0, 1.0] }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }

    #[test]
    fn test_release_inside_activate_rejected() {
        let mut config = NetworkConfig::default();
        config.pointer.release_radius = 50.0;
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_area_rejected() {
        let config = NetworkConfig { area_per_particle: 0.0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_particle_count() {
        let config = NetworkConfig::default();
        assert_eq!(config.particle_count(300.0, 150.0), 3);
        assert_eq!(config.particle_count(1920.0, 1080.0), 138);
        assert_eq!(config.particle_count(0.0, 1080.0), 0);
        assert_eq!(config.particle_count(100.0, 149.0), 0);
    }

    #[test]
    fn test_pulse_range() {
        let config = NetworkConfig::default();
        assert!((config.pulse(std::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-6);
        assert!((config.pulse(-std::f32::consts::FRAC_PI_2) - 0.4).abs() < 1e-6);
        assert!((config.pulse(0.0) - 0.7).abs() < 1e-6);
    }
}
