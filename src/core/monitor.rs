//! Frame-rate monitor that sheds visual effects on slow devices
//!
//! Frames are counted over windows of at least one second. When a window
//! closes below the threshold, quality drops to [`Quality::Reduced`] for
//! the rest of the simulator's life.

use tracing::{debug, warn};

use super::config::NetworkConfig;
use super::render::Quality;

const WINDOW_MS: f64 = 1000.0;

#[derive(Debug)]
pub struct FrameMonitor {
    enabled: bool,
    threshold: f64,
    window_start: Option<f64>,
    frames: u32,
    fps: Option<f64>,
    quality: Quality,
}

impl FrameMonitor {
    pub fn new(enabled: bool, threshold: f64) -> Self {
        Self {
            enabled,
            threshold,
            window_start: None,
            frames: 0,
            fps: None,
            quality: Quality::Full,
        }
    }

    pub fn from_config(config: &NetworkConfig) -> Self {
        Self::new(config.monitor_performance, config.low_fps_threshold)
    }

    /// Count a frame at `now_ms`. Returns the measured rate when a window closes.
    ///
    /// The frame that opens a window only marks its start, so the rate is
    /// frame intervals per second.
    pub fn record(&mut self, now_ms: f64) -> Option<f64> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now_ms);
            return None;
        };
        self.frames += 1;

        let elapsed = now_ms - start;
        if elapsed < WINDOW_MS {
            return None;
        }

        let fps = (self.frames as f64 * 1000.0 / elapsed).round();
        self.frames = 0;
        self.window_start = Some(now_ms);
        self.fps = Some(fps);
        debug!(fps, "Frame rate window closed");

        if self.enabled && self.quality == Quality::Full && fps < self.threshold {
            warn!(fps, threshold = self.threshold, "Frame rate low, reducing effects");
            self.quality = Quality::Reduced;
        }
        Some(fps)
    }

    /// Rate measured by the last closed window.
    pub fn fps(&self) -> Option<f64> {
        self.fps
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }
}
