#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(fitted: (u32, u32), envelope: (u32, u32)) -> Self {
        // wgpu rejects viewports that extend past the render target, so the
        // placement is clamped here even when the measured fit overshoots.
        let width = fitted.0.min(envelope.0);
        let height = fitted.1.min(envelope.1);

        let x = (envelope.0 - width) / 2;
        let y = (envelope.1 - height) / 2;

        Self { x, y, width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
