//! First-fit line packing.
//!
//! Items are walked once, in order. Each goes into the current line if it fits
//! after its spacing; otherwise the line is closed and the item opens the next
//! one. An item that does not fit even in an empty line is placed there anyway,
//! so every line holds at least one item and the pass always terminates.

use wrapflow_core::{Proposal, Size};

use crate::arrangement::{Arrangement, Line, LineItem};
use crate::axis::Axis;

/// Component-wise maximum of `sizes`, `Size::ZERO` when empty.
pub fn minimum_size(sizes: &[Size]) -> Size {
    sizes.iter().fold(Size::ZERO, |acc, s| acc.max(*s))
}

/// Pack `sizes` into lines along `axis` within `proposal`.
///
/// `spacing(a, b, axis)` returns the gap between item `a` and the item `b`
/// that follows it along `axis`. It is consulted with the primary axis for
/// neighbors within a line and with the cross axis for the representative
/// (thickest) items of consecutive lines.
///
/// A proposal that is non-positive on both axes is a minimum-size probe. If
/// the content cannot fit it on either axis, the result has no lines and
/// reports [`minimum_size`] as its fallback.
pub fn pack<S>(axis: Axis, proposal: Proposal, sizes: &[Size], mut spacing: S) -> Arrangement
where
    S: FnMut(usize, usize, Axis) -> f64,
{
    let _span = tracing::debug_span!("flow.pack", axis = %axis, items = sizes.len()).entered();

    if sizes.is_empty() {
        return Arrangement::empty(axis, Size::ZERO);
    }

    let available = proposal.resolved();
    if available.width <= 0.0 && available.height <= 0.0 {
        let minimum = minimum_size(sizes);
        if minimum.width > available.width && minimum.height > available.height {
            tracing::debug!(
                min_width = minimum.width,
                min_height = minimum.height,
                "proposal below minimum size, falling back"
            );
            return Arrangement::empty(axis, minimum);
        }
    }

    let limit = axis.primary(available);
    let mut lines = break_lines(axis, limit, sizes, &mut spacing);
    stack_lines(axis, &mut lines, &mut spacing);

    let arrangement = Arrangement {
        axis,
        lines,
        fallback: Size::ZERO,
    };
    let content = arrangement.content_size();
    tracing::debug!(
        lines = arrangement.lines().len(),
        width = content.width,
        height = content.height,
        "packed"
    );
    arrangement
}

fn break_lines<S>(axis: Axis, limit: f64, sizes: &[Size], spacing: &mut S) -> Vec<Line>
where
    S: FnMut(usize, usize, Axis) -> f64,
{
    let mut lines = Vec::new();
    let mut current = Line::new();
    let mut cursor = 0.0;

    for (index, &size) in sizes.iter().enumerate() {
        let extent = axis.primary(size);
        let mut gap = match current.items.last() {
            Some(prev) => spacing(prev.index, index, axis),
            None => 0.0,
        };

        if !current.is_empty() && cursor + gap + extent > limit {
            current.length = cursor;
            lines.push(std::mem::replace(&mut current, Line::new()));
            cursor = 0.0;
            gap = 0.0;
        }

        current.items.push(LineItem {
            index,
            size,
            offset: cursor + gap,
        });
        cursor += gap + extent;
    }

    if !current.is_empty() {
        current.length = cursor;
        lines.push(current);
    }
    lines
}

/// Assign cross offsets and thicknesses.
fn stack_lines<S>(axis: Axis, lines: &mut [Line], spacing: &mut S)
where
    S: FnMut(usize, usize, Axis) -> f64,
{
    let cross_axis = axis.cross_axis();
    let mut previous: Option<(usize, f64, f64)> = None;

    for line in lines.iter_mut() {
        let rep = representative(axis, line);
        let thickness = axis.cross(rep.size);
        let offset = match previous {
            Some((prev_index, prev_offset, prev_thickness)) => {
                prev_offset + spacing(prev_index, rep.index, cross_axis) + prev_thickness
            }
            None => 0.0,
        };
        line.cross_offset = offset;
        line.thickness = thickness;
        previous = Some((rep.index, offset, thickness));
    }
}

/// First item with the largest cross size.
fn representative(axis: Axis, line: &Line) -> LineItem {
    let mut best = line.items[0];
    for item in &line.items[1..] {
        if axis.cross(item.size) > axis.cross(best.size) {
            best = *item;
        }
    }
    best
}
