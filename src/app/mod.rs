//! Canvas host app
//!
//! Binds the particle simulator to an egui painter. Runs unchanged on
//! native (eframe window) and WASM (eframe web runner on a canvas).

mod header;
mod surface;

use eframe::egui;
use tracing::{debug, error, info, warn};

use crate::core::{seeded_rng, FrameId, FrameScheduler, NetworkConfig, Simulator};
use crate::theme::{canvas_visuals, colors};

pub use surface::{to_color32, PainterSurface};

/// Frame scheduler backed by egui repaint requests.
///
/// egui coalesces repaint requests into the next vsync, so a request
/// cannot be revoked; once the simulator stops asking, repaints stop.
pub struct RepaintScheduler {
    ctx: egui::Context,
    next: u64,
}

impl RepaintScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx, next: 0 }
    }
}

impl FrameScheduler for RepaintScheduler {
    fn request_frame(&mut self) -> FrameId {
        self.next += 1;
        self.ctx.request_repaint();
        FrameId(self.next)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        debug!(frame = id.0, "Dropping frame request");
    }
}

/// Particle network canvas - runs on both native and WASM
pub struct NeuralCanvasApp {
    config: NetworkConfig,
    /// Seed for the simulator's random source
    seed: u64,
    /// Created on the first frame, once the canvas size is known
    pub(crate) sim: Option<Simulator<RepaintScheduler>>,
    /// Toggle the stats overlay (F3)
    pub(crate) show_stats: bool,
}

impl NeuralCanvasApp {
    /// `config` must already be validated.
    pub fn new(cc: &eframe::CreationContext<'_>, config: NetworkConfig, seed: u64) -> Self {
        cc.egui_ctx.set_visuals(canvas_visuals());
        info!(seed, "Canvas app created");

        Self {
            config,
            seed,
            sim: None,
            show_stats: false,
        }
    }

    /// Create the simulator on first use, reseed when the canvas size changes.
    fn sync_canvas_size(&mut self, ctx: &egui::Context, rect: egui::Rect) {
        let (width, height) = (rect.width(), rect.height());

        match &mut self.sim {
            Some(sim) => {
                let network = sim.network();
                let changed = (network.width() - width).abs() >= 1.0
                    || (network.height() - height).abs() >= 1.0;
                if changed {
                    if let Err(e) = sim.resize(width, height) {
                        warn!(error = %e, "Ignoring canvas resize");
                    }
                }
            }
            None if width > 0.0 && height > 0.0 => {
                match Simulator::new(
                    self.config.clone(),
                    width,
                    height,
                    seeded_rng(self.seed),
                    RepaintScheduler::new(ctx.clone()),
                ) {
                    Ok(sim) => self.sim = Some(sim),
                    Err(e) => error!(error = %e, "Failed to start simulator"),
                }
            }
            None => {}
        }
    }

    /// Forward pointer moves over the canvas in surface-local coordinates.
    fn forward_pointer(&mut self, ctx: &egui::Context, rect: egui::Rect) {
        let Some(sim) = self.sim.as_mut() else {
            return;
        };

        let moves: Vec<egui::Pos2> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::PointerMoved(pos) => Some(*pos),
                    _ => None,
                })
                .collect()
        });

        for pos in moves.into_iter().filter(|pos| rect.contains(*pos)) {
            let local = pos - rect.min;
            sim.pointer_move(local.x, local.y);
        }
    }

    /// Stop the frame loop. The last frame stays on screen.
    pub fn dispose(&mut self) {
        if let Some(sim) = self.sim.as_mut() {
            sim.dispose();
        }
    }
}

impl eframe::App for NeuralCanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (toggle_stats, stop, now_ms) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::F3),
                i.key_pressed(egui::Key::Escape),
                i.time * 1000.0,
            )
        });
        if toggle_stats {
            self.show_stats = !self.show_stats;
        }
        if stop {
            self.dispose();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;

                self.sync_canvas_size(ctx, rect);
                self.forward_pointer(ctx, rect);

                if let Some(sim) = self.sim.as_mut() {
                    let mut surface = PainterSurface::new(&painter, rect);
                    if !sim.frame(now_ms, &mut surface) {
                        sim.render(&mut surface);
                    }
                }
            });

        if self.show_stats {
            self.render_stats(ctx);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.dispose();
    }
}
