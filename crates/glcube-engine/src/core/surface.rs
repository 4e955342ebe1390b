use winit::dpi::PhysicalSize;

use crate::orientation::Orientation;

/// Integer size in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Size {
    pub width:  i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<PhysicalSize<u32>> for Size {
    fn from(s: PhysicalSize<u32>) -> Self {
        Self {
            width:  i32::try_from(s.width).unwrap_or(i32::MAX),
            height: i32::try_from(s.height).unwrap_or(i32::MAX),
        }
    }
}

/// The platform window hosting the GL context.
///
/// The runtime owns the single instance and lends it to the application.
pub trait Surface {
    /// Current inner size.
    fn size(&self) -> Size;

    /// Orientation the surface is currently presented in.
    fn current_orientation(&self) -> Orientation;

    /// Restricts the orientations the surface may report.
    fn set_available_orientations(&mut self, orientations: &[Orientation]);

    /// Makes the surface visible.
    fn show(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_from_physical() {
        let s: Size = PhysicalSize::new(720u32, 1280u32).into();
        assert_eq!(s, Size::new(720, 1280));
    }

    #[test]
    fn size_from_physical_saturates() {
        let s: Size = PhysicalSize::new(u32::MAX, 10u32).into();
        assert_eq!(s.width, i32::MAX);
    }

    #[test]
    fn empty_sizes() {
        assert!(Size::new(0, 100).is_empty());
        assert!(Size::new(100, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }
}
