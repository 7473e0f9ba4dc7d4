// The drawable handle handed to external frame producers: writes frames into
// the preview's texture, resizing it when the native size changes.
pub struct FrameTarget<'a> {
    texture: &'a mut crate::FrameTexture,
    pipeline: &'a mut crate::Pipeline,
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
}

impl<'a> FrameTarget<'a> {
    pub(crate) fn new(texture: &'a mut crate::FrameTexture, pipeline: &'a mut crate::Pipeline, device: &'a wgpu::Device, queue: &'a wgpu::Queue) -> Self {
        Self { texture, pipeline, device, queue }
    }

    pub fn size(&self) -> (u32, u32) {
        self.texture.size()
    }

    pub fn write(&mut self, frame: &crate::VideoFrame) {
        if frame.size() != self.texture.size() {
            tracing::info!(width = frame.width, height = frame.height, "frame size changed");

            self.texture.resize(self.device, frame.size());
            self.pipeline.rebind(self.device, self.texture);
        }

        self.texture.write(self.queue, &frame.data);
    }
}
