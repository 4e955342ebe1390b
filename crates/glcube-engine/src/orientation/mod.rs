//! Display orientation.
//!
//! Orientations are relative to the display's natural orientation:
//! `Portrait` is the unrotated presentation, `Landscape` is a quarter turn,
//! the inverse variants are the opposite turns.

use std::fmt;

/// The default is `Portrait`, the orientation of a window the compositor
/// already presents upright.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
    PortraitInverse,
    LandscapeInverse,
}

impl Orientation {
    /// Every orientation, in registration order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Portrait,
        Orientation::Landscape,
        Orientation::PortraitInverse,
        Orientation::LandscapeInverse,
    ];

    /// Restricts `detected` to `available`.
    ///
    /// An empty set places no restriction. A detected orientation outside the
    /// set falls back to the first available one.
    pub fn resolve(detected: Self, available: &[Orientation]) -> Self {
        if available.is_empty() || available.contains(&detected) {
            return detected;
        }
        available[0]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unrotated() {
        assert_eq!(Orientation::default(), Orientation::Portrait);
    }

    // ── resolve ───────────────────────────────────────────────────────────

    #[test]
    fn resolve_without_restriction() {
        assert_eq!(Orientation::resolve(Orientation::Landscape, &[]), Orientation::Landscape);
    }

    #[test]
    fn resolve_keeps_available() {
        let r = Orientation::resolve(Orientation::Landscape, &Orientation::ALL);
        assert_eq!(r, Orientation::Landscape);
    }

    #[test]
    fn resolve_falls_back_to_first_available() {
        let available = [Orientation::PortraitInverse, Orientation::Portrait];
        let r = Orientation::resolve(Orientation::Landscape, &available);
        assert_eq!(r, Orientation::PortraitInverse);
    }
}
