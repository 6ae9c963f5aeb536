//! Packed lines and the translations out of them.
//!
//! An [`Arrangement`] is the product of one packing pass. It is immutable once
//! built and answers two questions: how big is the whole flow
//! ([`Arrangement::fold`]) and where does each item go
//! ([`Arrangement::place`]).

use smallvec::SmallVec;
use wrapflow_core::{Point, Proposal, Rect, Size};

use crate::alignment::Anchor;
use crate::axis::Axis;
use crate::config::FitContent;

/// An item's slot within a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    /// Index into the host's item sequence.
    pub index: usize,
    /// Size measured for this pass.
    pub size: Size,
    /// Offset from the start of the line along the primary axis.
    pub offset: f64,
}

/// One row (horizontal flow) or column (vertical flow).
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub(crate) items: SmallVec<[LineItem; 8]>,
    pub(crate) cross_offset: f64,
    pub(crate) length: f64,
    pub(crate) thickness: f64,
}

impl Line {
    pub(crate) fn new() -> Self {
        Self {
            items: SmallVec::new(),
            cross_offset: 0.0,
            length: 0.0,
            thickness: 0.0,
        }
    }

    /// Items in packing order.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Position of the line along the cross axis.
    #[inline]
    pub fn cross_offset(&self) -> f64 {
        self.cross_offset
    }

    /// Extent along the primary axis, spacing included.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Extent along the cross axis: the largest item's cross size.
    #[inline]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the line holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Result of packing a sequence of items into lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    pub(crate) axis: Axis,
    pub(crate) lines: Vec<Line>,
    pub(crate) fallback: Size,
}

impl Arrangement {
    /// An arrangement with no lines that reports `fallback` as its size.
    pub fn empty(axis: Axis, fallback: Size) -> Self {
        Self {
            axis,
            lines: Vec::new(),
            fallback,
        }
    }

    /// The packing axis.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Lines in stacking order.
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Whether there are no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of placed items.
    pub fn item_count(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }

    /// Size reported when nothing was packed.
    #[inline]
    pub fn fallback(&self) -> Size {
        self.fallback
    }

    /// Bounding size of the content, before any fill adjustment.
    pub fn content_size(&self) -> Size {
        if self.lines.is_empty() {
            return self.fallback;
        }
        let primary = self.lines.iter().map(|l| l.length).fold(0.0, f64::max);
        let cross = self
            .lines
            .iter()
            .map(|l| l.cross_offset + l.thickness)
            .fold(0.0, f64::max);
        self.axis.size(primary, cross)
    }

    /// Reported size for `proposal`.
    ///
    /// Axes not listed in `fit_content` grow to the proposed extent when the
    /// proposal specifies one. An empty arrangement reports its fallback as-is.
    pub fn fold(&self, proposal: Proposal, fit_content: FitContent) -> Size {
        if self.lines.is_empty() {
            return self.fallback;
        }
        let content = self.content_size();
        let mut primary = self.axis.primary(content);
        let mut cross = self.axis.cross(content);

        let (proposed_primary, proposed_cross) = match self.axis {
            Axis::Horizontal => (proposal.width, proposal.height),
            Axis::Vertical => (proposal.height, proposal.width),
        };
        if !fit_content.contains(FitContent::PRIMARY) {
            if let Some(p) = proposed_primary.filter(|p| p.is_finite()) {
                primary = primary.max(p);
            }
        }
        if !fit_content.contains(FitContent::CROSS) {
            if let Some(c) = proposed_cross.filter(|c| c.is_finite()) {
                cross = cross.max(c);
            }
        }
        self.axis.size(primary, cross)
    }

    /// Compute every item's origin within `bounds`, in item order.
    ///
    /// Along the primary axis each line is shifted by the anchor's fraction of
    /// the slack between the bounds and the line's length. Along the cross
    /// axis each item is shifted by the anchor's fraction of the slack between
    /// its line's thickness and its own cross size. Lines are stacked without
    /// extra distribution.
    pub fn place<F>(&self, bounds: Rect, anchor: Anchor, mut place: F)
    where
        F: FnMut(usize, Point),
    {
        let axis = self.axis;
        let bounds_primary = axis.primary(bounds.size());
        let primary_fraction = anchor.along(axis);
        let cross_fraction = anchor.along(axis.cross_axis());
        let origin = bounds.origin();

        for line in &self.lines {
            let line_shift = primary_fraction * (bounds_primary - line.length);
            for item in &line.items {
                let primary = item.offset + line_shift;
                let cross =
                    line.cross_offset + cross_fraction * (line.thickness - axis.cross(item.size));
                let local = axis.point(primary, cross);
                place(item.index, local.offset(origin.x, origin.y));
            }
        }
    }

    /// Collect [`Arrangement::place`] results as `(index, origin)` pairs.
    pub fn placements(&self, bounds: Rect, anchor: Anchor) -> Vec<(usize, Point)> {
        let mut out = Vec::with_capacity(self.item_count());
        self.place(bounds, anchor, |index, point| out.push((index, point)));
        out
    }
}
