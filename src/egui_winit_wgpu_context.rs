use anyhow::Result;
use egui::{ClippedPrimitive, Context};
use egui_wgpu::{winit::Painter, WgpuConfiguration};
use egui_winit::State;
use std::time::Duration;
use winit::{event_loop::EventLoopWindowTarget, window::Window};

pub struct EguiWinitWgpuContext {
    context: Context,
    painter: Painter,
    state: State,
}

impl EguiWinitWgpuContext {
    pub fn new<T>(window: &Window, event_loop: &EventLoopWindowTarget<T>) -> Result<Self> {
        let mut painter = Painter::new(WgpuConfiguration::default(), 1, None, false);

        futures::executor::block_on(painter.set_window(Some(window)))?;

        let mut state = State::new(event_loop);
        state.set_pixels_per_point(window.scale_factor() as f32);

        Ok(Self {
            context: Context::default(),
            painter,
            state,
        })
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn handle_window_event(&mut self, event: &winit::event::WindowEvent) -> bool {
        self.state.on_event(&self.context, event).repaint
    }

    pub fn on_resized(&mut self, width: u32, height: u32) {
        self.painter.on_window_resized(width, height);
    }

    pub fn on_scaled(&mut self, scale_factor: f32) {
        self.state.set_pixels_per_point(scale_factor);
    }

    /// Runs one frame and returns how long until egui wants the next one.
    pub fn render(&mut self, window: &Window, run_ui: impl FnOnce(&Context)) -> Duration {
        let raw_input = self.state.take_egui_input(window);

        let full_output = self.context.run(raw_input, |ctx| {
            run_ui(ctx);
        });

        self.state
            .handle_platform_output(window, &self.context, full_output.platform_output);

        let clipped_primitives: &[ClippedPrimitive] = &self.context.tessellate(full_output.shapes);

        let clear_color = self.context.style().visuals.panel_fill;

        self.painter.paint_and_update_textures(
            window.scale_factor() as f32,
            clear_color.to_normalized_gamma_f32(),
            clipped_primitives,
            &full_output.textures_delta,
            false,
        );

        full_output.repaint_after
    }
}
