use std::cell::Cell;

// Both ratio components zero means no ratio is set and the preview fills
// whatever envelope the window offers.
pub struct AspectFitted {
    ratio_width: u32,
    ratio_height: u32,
    measure_requested: Cell<bool>,
}

impl AspectFitted {
    pub fn new() -> Self {
        Self { ratio_width: 0, ratio_height: 0, measure_requested: Cell::new(false) }
    }

    pub fn set_ratio(&mut self, width: i32, height: i32) -> Result<(), crate::Error> {
        if width < 0 || height < 0 {
            return Err(crate::Error::InvalidArgument {
                reason: format!("ratio components cannot be negative: {}:{}", width, height),
            });
        }

        self.ratio_width = width as u32;
        self.ratio_height = height as u32;
        self.measure_requested.set(true);

        Ok(())
    }

    pub fn ratio(&self) -> (u32, u32) {
        (self.ratio_width, self.ratio_height)
    }

    // Returns and clears the flag raised by set_ratio. The host polls this to
    // know a new fit is needed.
    pub fn take_measure_request(&self) -> bool {
        self.measure_requested.replace(false)
    }

    pub fn measure(&self, available_width: u32, available_height: u32) -> (u32, u32) {
        if self.ratio_width == 0 || self.ratio_height == 0 {
            return (available_width, available_height);
        }

        let fitted_width = scale(available_height, self.ratio_width, self.ratio_height);

        if available_width < fitted_width {
            // Width-limited fits are not clamped back to the envelope; the
            // viewport crops the overshoot at draw time.
            (available_width, scale(available_width, self.ratio_width, self.ratio_height))
        } else {
            (fitted_width, available_height)
        }
    }
}

impl Default for AspectFitted {
    fn default() -> Self {
        Self::new()
    }
}

fn scale(base: u32, numerator: u32, denominator: u32) -> u32 {
    (base as u64 * numerator as u64 / denominator as u64) as u32
}
