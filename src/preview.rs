use std::sync::Arc;

use winit::{dpi, window};

// A window-backed render surface that shows the latest frame from an external
// producer, fitted to the producer's aspect ratio. The area around the fitted
// rectangle is cleared to the letterbox color.
pub struct PreviewSurface {
    window: Arc<window::Window>,
    renderer: crate::Renderer,
    aspect: crate::AspectFitted,
    frame_texture: crate::FrameTexture,
    pipeline: crate::Pipeline,
    clear_color: crate::ClearColor,
    adopt_frame_ratio: bool,
}

impl PreviewSurface {
    pub fn new(window: Arc<window::Window>) -> Result<Self, crate::Error> {
        let renderer = crate::Renderer::new(window.clone())?;

        // Placeholder until the first frame arrives with the native size.
        let frame_texture = crate::FrameTexture::new(&renderer.device, (1, 1), crate::FilterMode::default());
        let pipeline = crate::Pipeline::new(&renderer.device, renderer.format(), &frame_texture);

        Ok(Self {
            window,
            renderer,
            aspect: crate::AspectFitted::new(),
            frame_texture,
            pipeline,
            clear_color: crate::ClearColor::BLACK,
            adopt_frame_ratio: true,
        })
    }

    pub fn set_clear_color(&mut self, clear_color: crate::ClearColor) {
        self.clear_color = clear_color;
    }

    // The sampler is baked into the frame texture, so changing the filter
    // recreates it at the current size and rebinds the pipeline.
    pub fn set_filter_mode(&mut self, filter_mode: crate::FilterMode) {
        self.frame_texture = crate::FrameTexture::new(&self.renderer.device, self.frame_texture.size(), filter_mode);
        self.pipeline.rebind(&self.renderer.device, &self.frame_texture);
    }

    // When enabled, the first frame at a new native size also sets the
    // desired ratio, so producers that never call set_ratio still get a
    // correctly fitted preview.
    pub fn set_adopt_frame_ratio(&mut self, adopt: bool) {
        self.adopt_frame_ratio = adopt;
    }

    pub fn set_ratio(&mut self, width: i32, height: i32) -> Result<(), crate::Error> {
        self.aspect.set_ratio(width, height)?;

        if self.aspect.take_measure_request() {
            self.window.request_redraw();
        }

        Ok(())
    }

    pub fn ratio(&self) -> (u32, u32) {
        self.aspect.ratio()
    }

    // The drawable handle producers write into. Writes do not schedule a
    // redraw by themselves; the host's event loop stays in charge of that.
    pub fn frame_target(&mut self) -> crate::FrameTarget<'_> {
        crate::FrameTarget::new(
            &mut self.frame_texture,
            &mut self.pipeline,
            &self.renderer.device,
            &self.renderer.queue,
        )
    }

    pub fn push_frame(&mut self, frame: &crate::VideoFrame) -> Result<(), crate::Error> {
        let adopt = self.adopt_frame_ratio && frame.size() != self.frame_texture.size();

        self.frame_target().write(frame);

        if adopt {
            self.set_ratio(frame.width as i32, frame.height as i32)?;
        }

        self.window.request_redraw();

        Ok(())
    }

    pub fn resized(&mut self, new_size: &dpi::PhysicalSize<u32>) {
        self.renderer.resize(new_size);
        self.window.request_redraw();
    }

    pub fn redraw(&self) {
        let envelope = (self.renderer.window_size.width, self.renderer.window_size.height);
        let fitted = self.aspect.measure(envelope.0, envelope.1);
        let viewport = crate::Viewport::new(fitted, envelope);

        tracing::debug!(?fitted, ?viewport, "measured");

        self.renderer.render(&self.pipeline, &viewport, self.clear_color);
    }
}
