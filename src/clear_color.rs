#[derive(Clone, Copy)]
pub struct ClearColor {
    pub inner: wgpu::Color,
}

impl ClearColor {
    pub const BLACK: Self = Self { inner: wgpu::Color::BLACK };

    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { inner: wgpu::Color { r: red, g: green, b: blue, a: alpha } }
    }
}
