pub struct Pipeline {
    inner: wgpu::RenderPipeline,
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl Pipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, texture: &crate::FrameTexture) -> Self {
        let layout = create_bind_group_layout(device);
        let bind_group = create_bind_group(device, &layout, texture);
        let inner = create_render_pipeline(device, &layout, format);

        Self { inner, layout, bind_group }
    }

    // The bind group references the frame texture's view, so it must be
    // rebuilt whenever the texture is recreated.
    pub fn rebind(&mut self, device: &wgpu::Device, texture: &crate::FrameTexture) {
        self.bind_group = create_bind_group(device, &self.layout, texture);
    }

    pub fn inner(&self) -> &wgpu::RenderPipeline {
        &self.inner
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let entries = [
        wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        },
        wgpu::BindGroupLayoutEntry {
            binding: 1,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        },
    ];

    let descriptor = wgpu::BindGroupLayoutDescriptor { label: None, entries: &entries };

    device.create_bind_group_layout(&descriptor)
}

fn create_bind_group(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, texture: &crate::FrameTexture) -> wgpu::BindGroup {
    let entries = [
        wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::TextureView(texture.view()),
        },
        wgpu::BindGroupEntry {
            binding: 1,
            resource: wgpu::BindingResource::Sampler(texture.sampler()),
        },
    ];

    let descriptor = wgpu::BindGroupDescriptor { label: None, layout, entries: &entries };

    device.create_bind_group(&descriptor)
}

fn create_render_pipeline(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: None,
        source: wgpu::ShaderSource::Wgsl(include_str!("blit.wgsl").into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: None,
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });

    let targets = [Some(wgpu::ColorTargetState {
        format,
        blend: None,
        write_mask: wgpu::ColorWrites::ALL,
    })];

    let descriptor = wgpu::RenderPipelineDescriptor {
        label: None,
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &module,
            entry_point: "vs_main",
            buffers: &[],
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &module,
            entry_point: "fs_main",
            targets: &targets,
        }),
        multiview: None,
    };

    device.create_render_pipeline(&descriptor)
}
