/// Viewport size in logical pixels.
///
/// Renderers treat this as the coordinate basis for converting logical px
/// positions to NDC in shaders; the board camera uses it for its aspect ratio.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height. Returns `None` for degenerate (minimized) viewports.
    #[inline]
    pub fn aspect(self) -> Option<f32> {
        self.is_valid().then(|| self.width / self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_hd_window() {
        assert_eq!(Viewport::new(1280.0, 720.0).aspect(), Some(1280.0 / 720.0));
    }

    #[test]
    fn minimized_window_has_no_aspect() {
        assert_eq!(Viewport::new(1280.0, 0.0).aspect(), None);
        assert_eq!(Viewport::new(f32::NAN, 10.0).aspect(), None);
    }
}
