use std::sync::Arc;

use futures::executor;
use winit::{dpi, window};

pub struct Renderer {
    pub window_size: dpi::PhysicalSize<u32>,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
}

impl Renderer {
    pub fn new(window: Arc<window::Window>) -> Result<Self, crate::Error> {
        let window_size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window)?;
        let adapter = get_adapter(&instance, &surface)?;
        let (device, queue) = get_device(&adapter)?;
        let config = create_config(&window_size, &surface, &adapter);

        surface.configure(&device, &config);

        tracing::info!(
            width = config.width,
            height = config.height,
            format = ?config.format,
            "surface configured"
        );

        Ok(Self { window_size, surface, device, queue, config })
    }

    pub fn resize(&mut self, new_size: &dpi::PhysicalSize<u32>) {
        // A minimized window reports a zero envelope; keep the last
        // configuration until it comes back.
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.window_size = *new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn render(&self, pipeline: &crate::Pipeline, viewport: &crate::Viewport, clear_color: crate::ClearColor) {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            },
            Err(error) => {
                tracing::warn!(%error, "skipping frame");
                return;
            },
        };

        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let commands = crate::RenderPass::render(&self.device, &view, pipeline, viewport, clear_color);

        self.queue.submit([commands]);
        frame.present();
    }
}

fn get_adapter(instance: &wgpu::Instance, surface: &wgpu::Surface) -> Result<wgpu::Adapter, crate::Error> {
    let options = wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::default(),
        compatible_surface: Some(surface),
        force_fallback_adapter: false,
    };

    let future = instance.request_adapter(&options);

    executor::block_on(future).ok_or(crate::Error::NoAdapter)
}

fn get_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue), crate::Error> {
    let descriptor = wgpu::DeviceDescriptor::default();
    let future = adapter.request_device(&descriptor, None);

    Ok(executor::block_on(future)?)
}

fn create_config(window_size: &dpi::PhysicalSize<u32>, surface: &wgpu::Surface, adapter: &wgpu::Adapter) -> wgpu::SurfaceConfiguration {
    let capabilities = surface.get_capabilities(adapter);

    let format = capabilities.formats.iter().copied()
        .find(wgpu::TextureFormat::is_srgb)
        .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb);

    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: window_size.width.max(1),
        height: window_size.height.max(1),
        present_mode: wgpu::PresentMode::Fifo, // Enable vsync
        desired_maximum_frame_latency: 2,
        alpha_mode: wgpu::CompositeAlphaMode::Auto,
        view_formats: vec![],
    }
}
