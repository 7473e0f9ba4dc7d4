pub struct RenderPass;

impl RenderPass {
    pub fn render(device: &wgpu::Device, target: &wgpu::TextureView, pipeline: &crate::Pipeline, viewport: &crate::Viewport, clear_color: crate::ClearColor) -> wgpu::CommandBuffer {
        let color_attachments = color_attachments(target, clear_color);
        let descriptor = render_pass_descriptor(&color_attachments);

        let mut encoder = create_command_encoder(device);
        let mut render_pass = encoder.begin_render_pass(&descriptor);

        if !viewport.is_empty() {
            render_pass.set_pipeline(pipeline.inner());
            render_pass.set_bind_group(0, pipeline.bind_group(), &[]);
            render_pass.set_viewport(viewport.x as f32, viewport.y as f32, viewport.width as f32, viewport.height as f32, 0., 1.);
            render_pass.draw(0..3, 0..1);
        }

        drop(render_pass);
        encoder.finish()
    }
}

fn color_attachments(target: &wgpu::TextureView, clear_color: crate::ClearColor) -> Vec<Option<wgpu::RenderPassColorAttachment>> {
    vec![Some(wgpu::RenderPassColorAttachment {
        view: target,
        resolve_target: None,
        ops: wgpu::Operations {
            load: wgpu::LoadOp::Clear(clear_color.inner),
            store: wgpu::StoreOp::Store,
        },
    })]
}

fn render_pass_descriptor<'a>(color_attachments: &'a [Option<wgpu::RenderPassColorAttachment<'a>>]) -> wgpu::RenderPassDescriptor<'a, 'a> {
    wgpu::RenderPassDescriptor {
        label: None,
        color_attachments,
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    }
}

fn create_command_encoder(device: &wgpu::Device) -> wgpu::CommandEncoder {
    let descriptor = wgpu::CommandEncoderDescriptor { label: None };

    device.create_command_encoder(&descriptor)
}
