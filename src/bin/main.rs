use anyhow::anyhow;
use cgmath::Vector2;
use eframe::egui;
use log::info;
use particle_life_2d::config::{BACKGROUND, INITIAL_WINDOW_SIZE, LINK_STROKE_WIDTH};
use particle_life_2d::{Config, FrameLoop, Rgb, SharedInputs, Simulation, Surface, SurfaceDimensions};

fn to_color32(color: Rgb) -> egui::Color32 {
    let [r, g, b] = color.to_bytes();
    egui::Color32::from_rgb(r, g, b)
}

/// Paints into the central panel; simulation coordinates are panel-local.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl PainterSurface<'_> {
    fn to_screen(&self, point: Vector2<f32>) -> egui::Pos2 {
        self.rect.min + egui::vec2(point.x, point.y)
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        let [r, g, b] = BACKGROUND;
        self.painter
            .rect_filled(self.rect, 0.0, egui::Color32::from_rgb(r, g, b));
    }

    fn draw_line(&mut self, from: Vector2<f32>, to: Vector2<f32>, color: Rgb) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(LINK_STROKE_WIDTH, to_color32(color)),
        );
    }

    fn draw_filled_circle(&mut self, center: Vector2<f32>, radius: f32, color: Rgb) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }
}

struct ParticleLifeApp {
    frames: FrameLoop,
    last_frame_time: std::time::Instant,
}

impl ParticleLifeApp {
    fn new(_cc: &eframe::CreationContext) -> Self {
        let (width, height) = INITIAL_WINDOW_SIZE;
        let surface = SurfaceDimensions::new(width, height);
        let simulation = Simulation::new(Config::default(), surface);
        info!(
            "force matrix scaling factor {:.3}",
            simulation.matrix().scaling()
        );

        Self {
            frames: FrameLoop::new(simulation, SharedInputs::new(surface)),
            last_frame_time: std::time::Instant::now(),
        }
    }

    /// Publishes the panel size and pointer before the frame snapshots them.
    fn publish_inputs(&self, response: &egui::Response) {
        let inputs = self.frames.inputs();
        let size = response.rect.size();
        let surface = SurfaceDimensions::new(size.x.round(), size.y.round());
        if inputs.surface() != surface {
            inputs.resize(surface);
        }

        let pointer = response
            .hover_pos()
            .map(|pos| pos - response.rect.min)
            .map(|offset| Vector2::new(offset.x, offset.y));
        inputs.set_pointer(pointer);
    }

    fn render_stats(&self, ctx: &egui::Context, frame_time: f32) {
        let simulation = self.frames.simulation();
        egui::Area::new("stats")
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
            .show(ctx, |ui| {
                ui.label(format!("FPS: {:.1}", 1.0 / frame_time.max(f32::EPSILON)));
                ui.label(format!("Frame Time: {:.3}ms", frame_time * 1000.0));
                ui.label(format!("Particles: {}", simulation.particles().len()));
                ui.label(format!("Matrix Scaling: {:.3}", simulation.matrix().scaling()));
            });
    }
}

impl eframe::App for ParticleLifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let current_time = std::time::Instant::now();
        let frame_time = current_time.duration_since(self.last_frame_time);
        self.last_frame_time = current_time;

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                self.publish_inputs(&response);

                let mut surface = PainterSurface {
                    painter: &painter,
                    rect: response.rect,
                };
                self.frames.tick(&mut surface);
            });

        self.render_stats(ctx, frame_time.as_secs_f32());

        ctx.request_repaint();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (width, height) = INITIAL_WINDOW_SIZE;
    info!("starting particle life in a {width}x{height} window");

    eframe::run_native(
        "Particle Life",
        eframe::NativeOptions {
            renderer: eframe::Renderer::Wgpu,
            initial_window_size: Some(egui::vec2(width, height)),
            vsync: true,
            ..Default::default()
        },
        Box::new(|cc| Box::new(ParticleLifeApp::new(cc))),
    )
    .map_err(|e| anyhow!("failed to open the simulation window: {e:?}"))
}
