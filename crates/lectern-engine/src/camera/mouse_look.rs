/// Turns successive pointer positions into look offsets.
///
/// The first sample only seeds the last position, so the camera does not
/// jump toward wherever the pointer happened to be when capture began.
/// The vertical offset is flipped: screen Y grows downward, pitch grows up.
#[derive(Debug, Default, Clone)]
pub struct MouseLook {
    last: Option<(f32, f32)>,
}

impl MouseLook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `(x_offset, y_offset)` since the previous sample.
    pub fn sample(&mut self, pos: (f32, f32)) -> Option<(f32, f32)> {
        let prev = self.last.replace(pos)?;
        Some((pos.0 - prev.0, prev.1 - pos.1))
    }

    /// Forgets the last sample; the next one seeds again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_produces_no_offset() {
        let mut look = MouseLook::new();
        assert_eq!(look.sample((500.0, 400.0)), None);
    }

    #[test]
    fn later_samples_produce_deltas_with_flipped_y() {
        let mut look = MouseLook::new();
        look.sample((500.0, 400.0));
        assert_eq!(look.sample((510.0, 390.0)), Some((10.0, 10.0)));
        assert_eq!(look.sample((505.0, 395.0)), Some((-5.0, -5.0)));
    }

    #[test]
    fn reset_reseeds() {
        let mut look = MouseLook::new();
        look.sample((0.0, 0.0));
        look.reset();
        assert_eq!(look.sample((100.0, 100.0)), None);
    }
}
