//! The wrapping flow container.
//!
//! [`Flow`] is what a host embeds: it owns the configuration and the
//! arrangement cache, measures items through [`FlowItem`], and answers the
//! size and placement queries of a two-phase (measure, then place) layout.
//!
//! # Example
//!
//! ```
//! use wrapflow_core::{Point, Proposal, Rect, Size};
//! use wrapflow_layout::{Alignment, FixedItem, Flow};
//!
//! let chips = [
//!     FixedItem::new(50.0, 20.0),
//!     FixedItem::new(50.0, 20.0),
//!     FixedItem::new(50.0, 20.0),
//! ];
//! let mut flow = Flow::horizontal()
//!     .alignment(Alignment::TopLeading)
//!     .spacing(10.0)
//!     .line_spacing(4.0);
//!
//! let proposal = Proposal::width(110.0);
//! let size = flow.size_that_fits(proposal, &chips);
//! assert_eq!(size, Size::new(110.0, 44.0));
//!
//! let mut origins = Vec::new();
//! flow.place_items(Rect::from_size(size), proposal, &chips, |index, origin| {
//!     origins.push((index, origin));
//! });
//! assert_eq!(origins[1], (1, Point::new(60.0, 0.0)));
//! assert_eq!(origins[2], (2, Point::new(0.0, 24.0)));
//! ```

use wrapflow_core::{Point, Proposal, Rect, Size};

use crate::alignment::Alignment;
use crate::arrangement::Arrangement;
use crate::axis::Axis;
use crate::cache::{CacheStats, FlowCache};
use crate::config::{FitContent, FlowConfig, FlowConfigError, sanitize_spacing};
use crate::item::{FlowItem, ItemSpacing, Measured, measure_all};
use crate::pack::{minimum_size, pack};

/// A container that packs items into lines and wraps when a line is full.
#[derive(Debug, Default)]
pub struct Flow {
    axis: Axis,
    config: FlowConfig,
    cache: FlowCache,
}

impl Flow {
    /// Create a flow packing along `axis` with default configuration.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Default::default()
        }
    }

    /// Row-major flow: items left to right, lines top to bottom.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Column-major flow: items top to bottom, lines left to right.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Create a flow from a configuration, validating it first.
    pub fn from_config(axis: Axis, config: FlowConfig) -> Result<Self, FlowConfigError> {
        config.validate()?;
        Ok(Self {
            axis,
            cache: FlowCache::with_strict_keys(config.strict_cache_keys),
            config,
        })
    }

    /// Set the alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.config.alignment = alignment;
        self
    }

    /// Fix the gap between neighbors in a line.
    ///
    /// Negative and non-finite values are treated as zero.
    #[must_use]
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.config.spacing = Some(sanitize_spacing(spacing));
        self.cache.clear();
        self
    }

    /// Fix the gap between lines.
    ///
    /// Negative and non-finite values are treated as zero.
    #[must_use]
    pub fn line_spacing(mut self, spacing: f64) -> Self {
        self.config.line_spacing = Some(sanitize_spacing(spacing));
        self.cache.clear();
        self
    }

    /// Choose the axes that hug content instead of filling the proposal.
    #[must_use]
    pub fn fit_content(mut self, fit: FitContent) -> Self {
        self.config.fit_content = fit;
        self
    }

    /// Verify cache hits by exact key equality.
    #[must_use]
    pub fn strict_cache_keys(mut self, strict: bool) -> Self {
        self.config.strict_cache_keys = strict;
        self.cache = FlowCache::with_strict_keys(strict);
        self
    }

    /// Replace the configuration, dropping any cached arrangement.
    pub fn set_config(&mut self, config: FlowConfig) -> Result<(), FlowConfigError> {
        config.validate()?;
        self.config = config;
        self.cache = FlowCache::with_strict_keys(config.strict_cache_keys);
        Ok(())
    }

    /// The packing axis.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The current configuration.
    #[inline]
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Reported size for `proposal`.
    pub fn size_that_fits<E: FlowItem>(&mut self, proposal: Proposal, items: &[E]) -> Size {
        let fit = self.config.fit_content;
        self.arrangement(proposal, items).fold(proposal, fit)
    }

    /// The arrangement for `proposal`, packed or served from the cache.
    ///
    /// Measures every item exactly once.
    pub fn arrangement<E: FlowItem>(&mut self, proposal: Proposal, items: &[E]) -> &Arrangement {
        let proposal = sanitize_proposal(proposal);
        let measured = measure_all(items, proposal);
        let sizes: Vec<Size> = measured.iter().map(|m| m.size).collect();

        let axis = self.axis;
        let config = self.config;
        self.cache.get_or_compute(proposal, &sizes, || {
            pack(axis, proposal, &sizes, |a, b, along| {
                negotiated_spacing(&config, axis, &measured, a, b, along)
            })
        })
    }

    /// Place every item within `bounds`.
    ///
    /// `place` receives each item's index and absolute origin.
    pub fn place_items<E, F>(&mut self, bounds: Rect, proposal: Proposal, items: &[E], place: F)
    where
        E: FlowItem,
        F: FnMut(usize, Point),
    {
        let anchor = self.config.alignment.anchor();
        self.arrangement(proposal, items).place(bounds, anchor, place);
    }

    /// `(index, origin)` for every item, in packing order.
    pub fn placements<E: FlowItem>(
        &mut self,
        bounds: Rect,
        proposal: Proposal,
        items: &[E],
    ) -> Vec<(usize, Point)> {
        let anchor = self.config.alignment.anchor();
        self.arrangement(proposal, items).placements(bounds, anchor)
    }

    /// Component-wise maximum of every item measured at a zero proposal.
    pub fn minimum_size<E: FlowItem>(&self, items: &[E]) -> Size {
        let sizes: Vec<Size> = items.iter().map(|i| i.measure(Proposal::ZERO)).collect();
        minimum_size(&sizes)
    }

    /// Spacing preference of the flow itself, toward its own neighbors.
    pub fn spacing_preference<E: FlowItem>(&self, items: &[E]) -> ItemSpacing {
        items
            .iter()
            .map(FlowItem::spacing)
            .fold(ItemSpacing::ZERO, ItemSpacing::union)
    }

    /// Cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop the cached arrangement and reset statistics.
    pub fn reset_cache(&mut self) {
        self.cache.clear();
        self.cache.reset_stats();
    }
}

/// Gap between items `a` and `b` along `along`.
///
/// The configured override wins; otherwise the items negotiate. A negotiated
/// gap is clamped like an override: negative or non-finite becomes zero.
fn negotiated_spacing(
    config: &FlowConfig,
    axis: Axis,
    measured: &[Measured],
    a: usize,
    b: usize,
    along: Axis,
) -> f64 {
    let fixed = if along == axis {
        config.spacing
    } else {
        config.line_spacing
    };
    fixed.unwrap_or_else(|| {
        sanitize_spacing(measured[a].spacing.distance_to(&measured[b].spacing, along))
    })
}

/// Negative or NaN dimensions become zero; unspecified ones stay unspecified.
fn sanitize_proposal(proposal: Proposal) -> Proposal {
    let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.max(0.0) };
    Proposal::new(proposal.width.map(clamp), proposal.height.map(clamp))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use tracing_test::traced_test;

    use super::*;
    use crate::item::FixedItem;

    /// Fixed-size item that counts how often it is measured.
    struct Counted<'a> {
        size: Size,
        calls: &'a Cell<usize>,
    }

    impl FlowItem for Counted<'_> {
        fn measure(&self, _proposal: Proposal) -> Size {
            self.calls.set(self.calls.get() + 1);
            self.size
        }
    }

    #[test]
    fn each_item_measured_once_per_query() {
        let calls = Cell::new(0);
        let items: Vec<_> = (0..5)
            .map(|_| Counted {
                size: Size::new(10.0, 10.0),
                calls: &calls,
            })
            .collect();
        let mut flow = Flow::horizontal();

        flow.size_that_fits(Proposal::width(25.0), &items);
        assert_eq!(calls.get(), 5);
        flow.size_that_fits(Proposal::width(25.0), &items);
        assert_eq!(calls.get(), 10);
        assert_eq!(flow.cache_stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn negotiated_spacing_from_items() {
        let items = [
            FixedItem::new(20.0, 10.0).with_spacing(ItemSpacing::symmetric(4.0, 2.0)),
            FixedItem::new(20.0, 10.0).with_spacing(ItemSpacing::symmetric(6.0, 3.0)),
            FixedItem::new(20.0, 10.0).with_spacing(ItemSpacing::symmetric(1.0, 1.0)),
        ];
        let mut flow = Flow::horizontal().fit_content(FitContent::all());
        let a = flow.arrangement(Proposal::width(50.0), &items).clone();
        // 20 + max(4, 6) + 20 = 46 fits; third item wraps.
        assert_eq!(a.lines()[0].items()[1].offset, 26.0);
        // Representatives are items 0 and 2: max(bottom 2, top 1) = 2.
        assert_eq!(a.lines()[1].cross_offset(), 12.0);
    }

    #[test]
    fn negative_negotiated_spacing_never_overlaps() {
        let items = [
            FixedItem::new(20.0, 10.0).with_spacing(ItemSpacing::uniform(-15.0)),
            FixedItem::new(20.0, 10.0).with_spacing(ItemSpacing::uniform(-15.0)),
            FixedItem::new(20.0, 10.0).with_spacing(ItemSpacing::uniform(f64::NAN)),
        ];
        let mut flow = Flow::horizontal();
        let a = flow.arrangement(Proposal::width(50.0), &items).clone();

        let first = a.lines()[0].items();
        assert_eq!(first[1].offset, first[0].offset + 20.0);
        assert_eq!(a.lines()[0].length(), 40.0);
        // Third item wraps; the line below starts right after the first one.
        assert_eq!(a.lines()[1].cross_offset(), 10.0);
    }

    #[test]
    fn spacing_override_beats_negotiation() {
        let items = [
            FixedItem::new(20.0, 10.0).with_spacing(ItemSpacing::uniform(30.0)),
            FixedItem::new(20.0, 10.0).with_spacing(ItemSpacing::uniform(30.0)),
        ];
        let mut flow = Flow::horizontal().spacing(2.0).line_spacing(0.0);
        let a = flow.arrangement(Proposal::width(50.0), &items).clone();
        assert_eq!(a.lines().len(), 1);
        assert_eq!(a.lines()[0].items()[1].offset, 22.0);
    }

    #[test]
    fn builder_sanitizes_spacing() {
        let flow = Flow::horizontal().spacing(-5.0).line_spacing(f64::NAN);
        assert_eq!(flow.config().spacing, Some(0.0));
        assert_eq!(flow.config().line_spacing, Some(0.0));
    }

    #[test]
    fn from_config_validates() {
        let bad = FlowConfig {
            spacing: Some(-1.0),
            ..FlowConfig::default()
        };
        assert!(Flow::from_config(Axis::Horizontal, bad).is_err());

        let good = FlowConfig {
            strict_cache_keys: true,
            ..FlowConfig::default()
        };
        let flow = Flow::from_config(Axis::Vertical, good).unwrap();
        assert_eq!(flow.axis(), Axis::Vertical);
    }

    #[test]
    fn set_config_drops_cache() {
        let items = [FixedItem::new(10.0, 10.0); 3];
        let mut flow = Flow::horizontal();
        flow.size_that_fits(Proposal::width(15.0), &items);

        flow.set_config(FlowConfig {
            spacing: Some(5.0),
            ..FlowConfig::default()
        })
        .unwrap();
        flow.size_that_fits(Proposal::width(15.0), &items);
        assert_eq!(flow.cache_stats(), CacheStats { hits: 0, misses: 1 });
    }

    #[test]
    fn negative_proposal_is_treated_as_zero_probe() {
        let items = [FixedItem::new(30.0, 10.0), FixedItem::new(20.0, 25.0)];
        let mut flow = Flow::horizontal();
        let size = flow.size_that_fits(Proposal::exact(-10.0, -10.0), &items);
        assert_eq!(size, Size::new(30.0, 25.0));
        assert_eq!(size, flow.minimum_size(&items));
    }

    #[test]
    fn spacing_preference_unions_children() {
        let items = [
            FixedItem::new(1.0, 1.0).with_spacing(ItemSpacing::symmetric(3.0, 1.0)),
            FixedItem::new(1.0, 1.0).with_spacing(ItemSpacing::symmetric(2.0, 7.0)),
        ];
        let flow = Flow::horizontal();
        assert_eq!(flow.spacing_preference(&items), ItemSpacing::symmetric(3.0, 7.0));
    }

    #[test]
    #[traced_test]
    fn logs_pack_and_cache_events() {
        let items = [FixedItem::new(10.0, 10.0); 4];
        let mut flow = Flow::horizontal();
        flow.size_that_fits(Proposal::width(25.0), &items);
        flow.size_that_fits(Proposal::width(25.0), &items);

        assert!(logs_contain("packed"));
        assert!(logs_contain("flow cache miss"));
        assert!(logs_contain("flow cache hit"));
    }

    #[test]
    fn reset_cache_clears_stats() {
        let items = [FixedItem::new(10.0, 10.0)];
        let mut flow = Flow::vertical();
        flow.size_that_fits(Proposal::UNSPECIFIED, &items);
        flow.reset_cache();
        assert_eq!(flow.cache_stats(), CacheStats::default());
    }
}
