#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are logical points as `f64`. Nothing here rounds to a pixel or
//! cell grid; hosts that need integral coordinates round at placement time.

use serde::{Deserialize, Serialize};

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Zero-sized.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// A location in the layout coordinate space (origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by a delta.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An axis-aligned rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A size proposal offered by a container to its content.
///
/// Either dimension may be left unspecified, meaning "take as much as you
/// like" along that axis. Fit tests treat an unspecified dimension as
/// infinite; see [`Proposal::resolved`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Proposal {
    /// Proposed width, `None` if unconstrained.
    pub width: Option<f64>,
    /// Proposed height, `None` if unconstrained.
    pub height: Option<f64>,
}

impl Proposal {
    /// Both dimensions unconstrained.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// A zero proposal, used to probe minimum sizes.
    pub const ZERO: Self = Self {
        width: Some(0.0),
        height: Some(0.0),
    };

    /// Infinite proposal on both axes.
    pub const INFINITY: Self = Self {
        width: Some(f64::INFINITY),
        height: Some(f64::INFINITY),
    };

    /// Create a proposal from optional dimensions.
    #[inline]
    pub const fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }

    /// A proposal with both dimensions fixed.
    #[inline]
    pub const fn exact(width: f64, height: f64) -> Self {
        Self::new(Some(width), Some(height))
    }

    /// A proposal constraining only the width.
    #[inline]
    pub const fn width(width: f64) -> Self {
        Self::new(Some(width), None)
    }

    /// A proposal constraining only the height.
    #[inline]
    pub const fn height(height: f64) -> Self {
        Self::new(None, Some(height))
    }

    /// Resolve to a concrete size, mapping unspecified dimensions to infinity.
    #[inline]
    pub fn resolved(&self) -> Size {
        Size::new(
            self.width.unwrap_or(f64::INFINITY),
            self.height.unwrap_or(f64::INFINITY),
        )
    }
}
