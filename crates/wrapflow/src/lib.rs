#![forbid(unsafe_code)]

//! wrapflow public facade crate.
//!
//! Re-exports the geometry and flow types from the internal crates and
//! offers a small prelude for hosts embedding a wrapping flow.

use std::fmt;

// --- Geometry re-exports ---------------------------------------------------

pub use wrapflow_core::{Point, Proposal, Rect, Size};

// --- Layout re-exports -----------------------------------------------------

pub use wrapflow_layout::{
    Alignment, Anchor, Arrangement, Axis, CacheStats, FitContent, FixedItem, Flow, FlowConfig,
    FlowConfigError, FlowItem, ItemSpacing,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for wrapflow hosts.
#[derive(Debug)]
pub enum Error {
    /// Rejected flow configuration.
    Config(FlowConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
        }
    }
}

impl From<FlowConfigError> for Error {
    fn from(err: FlowConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for wrapflow APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Build a flow along `axis` from a JSON configuration document.
///
/// ```
/// use wrapflow::{Axis, Alignment};
///
/// let flow = wrapflow::flow_from_json(Axis::Horizontal, r#"{"alignment":"top_leading","spacing":4.0}"#)?;
/// assert_eq!(flow.config().alignment, Alignment::TopLeading);
/// # Ok::<(), wrapflow::Error>(())
/// ```
pub fn flow_from_json(axis: Axis, json: &str) -> Result<Flow> {
    let config = FlowConfig::from_json(json)?;
    Ok(Flow::from_config(axis, config)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, Axis, Error, FitContent, FixedItem, Flow, FlowConfig, FlowItem, ItemSpacing,
        Point, Proposal, Rect, Result, Size,
    };

    pub use crate::{core, layout};
}

pub use wrapflow_core as core;
pub use wrapflow_layout as layout;
