#![forbid(unsafe_code)]

//! Wrapping flow layout.
//!
//! This crate packs an ordered sequence of items into lines, wrapping to a new
//! line when the next item would overflow the proposed extent:
//!
//! - [`Flow`] - the container hosts embed (row-major or column-major)
//! - [`FlowItem`] - the measurement/spacing protocol each child implements
//! - [`pack`] - the first-fit packing pass, usable on its own
//! - [`Arrangement`] - packed lines, with size folding and placement
//! - [`FlowCache`] - single-slot memoization keyed on the measured inputs
//! - [`Alignment`] / [`Anchor`] - where lines and items sit within slack
//! - [`FlowConfig`] - serializable configuration
//!
//! # Two-phase layout
//!
//! A host first asks [`Flow::size_that_fits`] for the flow's size under a
//! [`Proposal`], then calls [`Flow::place_items`] with the bounds it granted.
//! Both phases measure the items; when the measurements and proposal match,
//! the second phase reuses the cached arrangement instead of packing again.
//!
//! ```
//! use wrapflow_core::{Proposal, Size};
//! use wrapflow_layout::{FitContent, FixedItem, Flow};
//!
//! let tags = [FixedItem::new(40.0, 16.0); 5];
//! let mut flow = Flow::horizontal().spacing(8.0).line_spacing(8.0).fit_content(FitContent::all());
//!
//! // 40 + 8 + 40 = 88 fits in 100; the third tag wraps.
//! let size = flow.size_that_fits(Proposal::width(100.0), &tags);
//! assert_eq!(size, Size::new(88.0, 64.0));
//! ```

pub mod alignment;
pub mod arrangement;
pub mod axis;
pub mod cache;
pub mod config;
pub mod flow;
pub mod item;
pub mod pack;

pub use alignment::{Alignment, Anchor};
pub use arrangement::{Arrangement, Line, LineItem};
pub use axis::Axis;
pub use cache::{CacheStats, FlowCache, FlowCacheKey};
pub use config::{FitContent, FlowConfig, FlowConfigError};
pub use flow::Flow;
pub use item::{FixedItem, FlowItem, ItemSpacing};
pub use pack::{minimum_size, pack};
pub use wrapflow_core::{Point, Proposal, Rect, Size};
