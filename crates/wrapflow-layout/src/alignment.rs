//! Alignment to anchor-fraction mapping.
//!
//! An [`Anchor`] says where, inside some slack, a child sits: `0.0` is the
//! leading/top edge, `0.5` is centered, `1.0` is the trailing/bottom edge.
//! Right-to-left mirroring is the host's concern; "leading" is always the
//! low-coordinate side here.

use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// Two-dimensional alignment of a flow's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    #[default]
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

impl Alignment {
    /// All alignments, row by row.
    pub const ALL: [Alignment; 9] = [
        Alignment::TopLeading,
        Alignment::Top,
        Alignment::TopTrailing,
        Alignment::Leading,
        Alignment::Center,
        Alignment::Trailing,
        Alignment::BottomLeading,
        Alignment::Bottom,
        Alignment::BottomTrailing,
    ];

    /// Anchor fractions for this alignment.
    #[must_use]
    pub const fn anchor(self) -> Anchor {
        let (x, y) = match self {
            Alignment::TopLeading => (0.0, 0.0),
            Alignment::Top => (0.5, 0.0),
            Alignment::TopTrailing => (1.0, 0.0),
            Alignment::Leading => (0.0, 0.5),
            Alignment::Center => (0.5, 0.5),
            Alignment::Trailing => (1.0, 0.5),
            Alignment::BottomLeading => (0.0, 1.0),
            Alignment::Bottom => (0.5, 1.0),
            Alignment::BottomTrailing => (1.0, 1.0),
        };
        Anchor { x, y }
    }

    /// Snake-case name, as used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Alignment::TopLeading => "top_leading",
            Alignment::Top => "top",
            Alignment::TopTrailing => "top_trailing",
            Alignment::Leading => "leading",
            Alignment::Center => "center",
            Alignment::Trailing => "trailing",
            Alignment::BottomLeading => "bottom_leading",
            Alignment::Bottom => "bottom",
            Alignment::BottomTrailing => "bottom_trailing",
        }
    }

    /// Look up an alignment by name, falling back to [`Alignment::Center`].
    ///
    /// Accepts snake_case, kebab-case, and camelCase spellings
    /// (`top_leading`, `top-leading`, `topLeading`).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|a| a.name().replace('_', "") == normalized)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Alignment> for Anchor {
    fn from(alignment: Alignment) -> Self {
        alignment.anchor()
    }
}

/// Fractional position within available slack, per axis, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Horizontal fraction (0 = leading, 1 = trailing).
    pub x: f64,
    /// Vertical fraction (0 = top, 1 = bottom).
    pub y: f64,
}

impl Anchor {
    /// Centered on both axes.
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Create an anchor, clamping both fractions into `[0, 1]`.
    ///
    /// Non-finite fractions collapse to center.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: sanitize_fraction(x),
            y: sanitize_fraction(y),
        }
    }

    /// Fraction along `axis` (x for horizontal, y for vertical).
    #[inline]
    pub const fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::CENTER
    }
}

fn sanitize_fraction(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_center() {
        assert_eq!(Alignment::default(), Alignment::Center);
        assert_eq!(Alignment::default().anchor(), Anchor::CENTER);
    }

    #[test]
    fn corner_anchors() {
        assert_eq!(Alignment::TopLeading.anchor(), Anchor { x: 0.0, y: 0.0 });
        assert_eq!(Alignment::BottomTrailing.anchor(), Anchor { x: 1.0, y: 1.0 });
        assert_eq!(Alignment::Top.anchor(), Anchor { x: 0.5, y: 0.0 });
        assert_eq!(Alignment::Trailing.anchor(), Anchor { x: 1.0, y: 0.5 });
    }

    #[test]
    fn every_anchor_is_in_unit_square() {
        for alignment in Alignment::ALL {
            let a = alignment.anchor();
            assert!((0.0..=1.0).contains(&a.x), "{alignment}");
            assert!((0.0..=1.0).contains(&a.y), "{alignment}");
        }
    }

    #[test]
    fn from_name_accepts_spellings_and_defaults_to_center() {
        assert_eq!(Alignment::from_name("top_leading"), Alignment::TopLeading);
        assert_eq!(Alignment::from_name("bottom-trailing"), Alignment::BottomTrailing);
        assert_eq!(Alignment::from_name("bottomLeading"), Alignment::BottomLeading);
        assert_eq!(Alignment::from_name("baseline"), Alignment::Center);
        assert_eq!(Alignment::from_name(""), Alignment::Center);
    }

    #[test]
    fn anchor_new_clamps() {
        assert_eq!(Anchor::new(-1.0, 2.0), Anchor { x: 0.0, y: 1.0 });
        assert_eq!(Anchor::new(f64::NAN, 0.25), Anchor { x: 0.5, y: 0.25 });
    }

    #[test]
    fn anchor_along_axis() {
        let a = Anchor::new(0.25, 0.75);
        assert_eq!(a.along(Axis::Horizontal), 0.25);
        assert_eq!(a.along(Axis::Vertical), 0.75);
    }
}
