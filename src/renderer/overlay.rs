use winit::window::Window;

/// Tessellated UI for one frame, ready to paint
pub struct OverlayFrame {
    primitives: Vec<egui::ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
    pixels_per_point: f32,
}

impl OverlayFrame {
    fn new(ctx: &egui::Context, output: egui::FullOutput) -> Self {
        let primitives = ctx.tessellate(output.shapes, output.pixels_per_point);
        Self {
            primitives,
            textures_delta: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        }
    }

    /// Texture uploads not yet applied; empty after the first call
    fn take_uploads(&mut self) -> Vec<(egui::TextureId, egui::epaint::ImageDelta)> {
        std::mem::take(&mut self.textures_delta.set)
    }
}

/// egui context, winit integration and wgpu painter
pub struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl Overlay {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, window: &Window) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, format, egui_wgpu::RendererOptions::default());

        Self {
            ctx,
            state,
            renderer,
        }
    }

    /// Feed a window event to egui; true if egui consumed it
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run one UI frame
    pub fn run(&mut self, window: &Window, run_ui: impl FnMut(&egui::Context)) -> OverlayFrame {
        let raw_input = self.state.take_egui_input(window);
        let mut full_output = self.ctx.run(raw_input, run_ui);

        let platform_output = std::mem::take(&mut full_output.platform_output);
        self.state.handle_platform_output(window, platform_output);

        OverlayFrame::new(&self.ctx, full_output)
    }

    /// Upload new and changed egui textures
    ///
    /// Must run even when the frame is never painted: later deltas patch
    /// textures allocated here.
    pub fn upload_textures(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        frame: &mut OverlayFrame,
    ) {
        for (id, image_delta) in frame.take_uploads() {
            self.renderer.update_texture(device, queue, id, &image_delta);
        }
    }

    /// Release textures egui no longer uses
    pub fn free_textures(&mut self, frame: &mut OverlayFrame) {
        for id in std::mem::take(&mut frame.textures_delta.free) {
            self.renderer.free_texture(&id);
        }
    }

    /// Record the UI on top of `view`; returns extra command buffers to submit first
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size_in_pixels: [u32; 2],
        mut frame: OverlayFrame,
    ) -> Vec<wgpu::CommandBuffer> {
        self.upload_textures(device, queue, &mut frame);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: frame.pixels_per_point,
        };

        let command_buffers = self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &frame.primitives,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.renderer
                .render(&mut render_pass, &frame.primitives, &screen_descriptor);
        }

        self.free_textures(&mut frame);

        command_buffers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_frame() -> OverlayFrame {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label("Scene Viewer");
            });
        });
        OverlayFrame::new(&ctx, output)
    }

    #[test]
    fn test_first_frame_carries_font_atlas() {
        let mut frame = first_frame();
        let uploads = frame.take_uploads();
        assert!(uploads.iter().any(|(_, delta)| delta.pos.is_none()), "full atlas upload");
        assert!(!frame.primitives.is_empty());
    }

    #[test]
    fn test_uploads_are_taken_once() {
        let mut frame = first_frame();
        assert!(!frame.take_uploads().is_empty());
        assert!(frame.take_uploads().is_empty());
    }
}
