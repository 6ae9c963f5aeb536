//! The item protocol a host implements for each flow child.

use serde::{Deserialize, Serialize};
use wrapflow_core::{Proposal, Size};

use crate::axis::Axis;

/// A child of a flow.
///
/// The flow never owns its items; it measures them through this trait and
/// refers to them by index afterwards.
pub trait FlowItem {
    /// Desired size for the given proposal.
    ///
    /// Called once per item per layout query.
    fn measure(&self, proposal: Proposal) -> Size;

    /// Preferred distances to neighbors.
    fn spacing(&self) -> ItemSpacing {
        ItemSpacing::ZERO
    }
}

impl<T: FlowItem + ?Sized> FlowItem for &T {
    fn measure(&self, proposal: Proposal) -> Size {
        (**self).measure(proposal)
    }

    fn spacing(&self) -> ItemSpacing {
        (**self).spacing()
    }
}

impl<T: FlowItem + ?Sized> FlowItem for Box<T> {
    fn measure(&self, proposal: Proposal) -> Size {
        (**self).measure(proposal)
    }

    fn spacing(&self) -> ItemSpacing {
        (**self).spacing()
    }
}

/// Edge spacing preferences of one item.
///
/// Two neighbors negotiate the gap between them by taking the larger of their
/// facing edges: along the horizontal axis that is the first item's
/// `trailing` against the second item's `leading`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemSpacing {
    /// Preferred gap before the item along the horizontal axis.
    pub leading: f64,
    /// Preferred gap after the item along the horizontal axis.
    pub trailing: f64,
    /// Preferred gap above the item.
    pub top: f64,
    /// Preferred gap below the item.
    pub bottom: f64,
}

impl ItemSpacing {
    /// No preferred spacing on any edge.
    pub const ZERO: Self = Self::uniform(0.0);

    /// The same preference on every edge.
    #[inline]
    pub const fn uniform(value: f64) -> Self {
        Self {
            leading: value,
            trailing: value,
            top: value,
            bottom: value,
        }
    }

    /// Separate preferences for horizontal and vertical neighbors.
    #[inline]
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            leading: horizontal,
            trailing: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    /// Gap between `self` and a `next` neighbor that follows it along `axis`.
    #[must_use]
    pub fn distance_to(&self, next: &ItemSpacing, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.trailing.max(next.leading),
            Axis::Vertical => self.bottom.max(next.top),
        }
    }

    /// Edge-wise maximum, used to report a container's own preference.
    #[must_use]
    pub fn union(self, other: ItemSpacing) -> Self {
        Self {
            leading: self.leading.max(other.leading),
            trailing: self.trailing.max(other.trailing),
            top: self.top.max(other.top),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// An item with a constant size, whatever it is proposed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedItem {
    /// Size reported for every proposal.
    pub size: Size,
    /// Spacing preference toward neighbors.
    pub spacing: ItemSpacing,
}

impl FixedItem {
    /// A fixed item with no spacing preference.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            spacing: ItemSpacing::ZERO,
        }
    }

    /// Set the spacing preference.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: ItemSpacing) -> Self {
        self.spacing = spacing;
        self
    }
}

impl FlowItem for FixedItem {
    fn measure(&self, _proposal: Proposal) -> Size {
        self.size
    }

    fn spacing(&self) -> ItemSpacing {
        self.spacing
    }
}

/// One item's measurement for a single layout query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Measured {
    pub size: Size,
    pub spacing: ItemSpacing,
}

/// Measure every item once at `proposal`.
pub(crate) fn measure_all<E: FlowItem>(items: &[E], proposal: Proposal) -> Vec<Measured> {
    items
        .iter()
        .map(|item| Measured {
            size: item.measure(proposal),
            spacing: item.spacing(),
        })
        .collect()
}
