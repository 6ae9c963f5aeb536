//! Axis selection.
//!
//! A row-major flow packs along [`Axis::Horizontal`] and stacks lines
//! vertically; a column-major flow does the opposite. Every routine in this
//! crate is written once in terms of "primary" and "cross" extents and
//! projects through an [`Axis`] to get concrete coordinates.

use serde::{Deserialize, Serialize};
use wrapflow_core::{Point, Size};

/// The packing direction of a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left to right, wrapping downward.
    #[default]
    Horizontal,
    /// Top to bottom, wrapping rightward.
    Vertical,
}

impl Axis {
    /// The orthogonal axis.
    #[inline]
    #[must_use]
    pub const fn cross_axis(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    #[inline]
    pub const fn primary(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    #[inline]
    pub const fn cross(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Build a size from primary and cross extents.
    #[inline]
    pub const fn size(self, primary: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(primary, cross),
            Self::Vertical => Size::new(cross, primary),
        }
    }

    /// Build a point from primary and cross coordinates.
    #[inline]
    pub const fn point(self, primary: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(primary, cross),
            Self::Vertical => Point::new(cross, primary),
        }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projections_swap_between_axes() {
        let size = Size::new(30.0, 12.0);
        assert_eq!(Axis::Horizontal.primary(size), 30.0);
        assert_eq!(Axis::Horizontal.cross(size), 12.0);
        assert_eq!(Axis::Vertical.primary(size), 12.0);
        assert_eq!(Axis::Vertical.cross(size), 30.0);
    }

    #[test]
    fn size_and_point_round_trip_through_projection() {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let size = axis.size(7.0, 3.0);
            assert_eq!(axis.primary(size), 7.0);
            assert_eq!(axis.cross(size), 3.0);
        }
        assert_eq!(Axis::Vertical.point(5.0, 2.0), Point::new(2.0, 5.0));
    }

    #[test]
    fn cross_axis_is_an_involution() {
        assert_eq!(Axis::Horizontal.cross_axis(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross_axis().cross_axis(), Axis::Vertical);
    }
}
