// Frames arrive as tightly packed RGBA8 rows.
pub const BYTES_PER_PIXEL: u32 = 4;

#[derive(Debug)]
pub struct VideoFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub frame_number: u64,
}

impl VideoFrame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, frame_number: u64) -> Result<Self, crate::Error> {
        if width == 0 || height == 0 {
            return Err(crate::Error::InvalidArgument {
                reason: format!("frame {} has a zero dimension: {}x{}", frame_number, width, height),
            });
        }

        let expected = width as usize * height as usize * BYTES_PER_PIXEL as usize;

        if data.len() != expected {
            return Err(crate::Error::InvalidArgument {
                reason: format!(
                    "frame {} has {} bytes, expected {} for {}x{} rgba",
                    frame_number, data.len(), expected, width, height,
                ),
            });
        }

        Ok(Self { data, width, height, frame_number })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
