pub struct FrameTexture {
    inner: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    size: (u32, u32),
}

impl FrameTexture {
    pub fn new(device: &wgpu::Device, size: (u32, u32), filter_mode: crate::FilterMode) -> Self {
        let inner = create_texture(device, size);
        let view = inner.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_sampler(device, filter_mode);

        Self { inner, view, sampler, size }
    }

    pub fn resize(&mut self, device: &wgpu::Device, size: (u32, u32)) {
        self.inner = create_texture(device, size);
        self.view = self.inner.create_view(&wgpu::TextureViewDescriptor::default());
        self.size = size;
    }

    pub fn write(&self, queue: &wgpu::Queue, data: &[u8]) {
        let (width, height) = self.size;

        let layout = wgpu::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(crate::BYTES_PER_PIXEL * width),
            rows_per_image: Some(height),
        };

        queue.write_texture(self.copy_view(), data, layout, extent(self.size));
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    fn copy_view(&self) -> wgpu::ImageCopyTexture {
        wgpu::ImageCopyTexture {
            texture: &self.inner,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        }
    }
}

fn create_texture(device: &wgpu::Device, size: (u32, u32)) -> wgpu::Texture {
    let descriptor = wgpu::TextureDescriptor {
        label: Some("camera frame"),
        size: extent(size),
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    };

    device.create_texture(&descriptor)
}

fn extent((width, height): (u32, u32)) -> wgpu::Extent3d {
    wgpu::Extent3d { width, height, depth_or_array_layers: 1 }
}

fn create_sampler(device: &wgpu::Device, filter_mode: crate::FilterMode) -> wgpu::Sampler {
    let descriptor = wgpu::SamplerDescriptor {
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: filter_mode.to_wgpu(),
        min_filter: filter_mode.to_wgpu(),
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    };

    device.create_sampler(&descriptor)
}
